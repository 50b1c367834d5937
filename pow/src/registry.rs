// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! A read-only, name-keyed lookup of [`NonceProvider`]s, populated once at startup.

use crate::{
    error::Error,
    miner::{Miner, MinerBuilder},
    providers::{NonceProvider, NonceProviderBuilder},
};
use std::{collections::HashMap, sync::Mutex};

/// `"Go"`, wrapped in a process-wide mutex so at most one search executes at a time.
pub struct SyncMiner {
    inner: Mutex<Miner>,
}

impl NonceProvider for SyncMiner {
    fn nonce(&self, trytes: &str, mwm: usize) -> Result<String, Error> {
        self.inner.lock().expect("miner mutex poisoned").nonce(trytes, mwm)
    }
}

/// A read-only mapping from implementation name to [`NonceProvider`], built once via
/// [`RegistryBuilder`] and immutable thereafter.
pub struct Registry {
    providers: HashMap<String, Box<dyn NonceProvider + Send + Sync>>,
}

impl Registry {
    /// Looks up a provider by name.
    pub fn get(&self, name: &str) -> Option<&(dyn NonceProvider + Send + Sync)> {
        self.providers.get(name).map(AsRef::as_ref)
    }

    /// Looks up a provider by name, or [`Error::UnknownProofOfWorkFunc`] if none is registered.
    pub fn must_get(&self, name: &str) -> Result<&(dyn NonceProvider + Send + Sync), Error> {
        self.get(name).ok_or_else(|| Error::UnknownProofOfWorkFunc(name.to_owned()))
    }
}

/// Builds a [`Registry`].
pub struct RegistryBuilder {
    providers: HashMap<String, Box<dyn NonceProvider + Send + Sync>>,
}

impl RegistryBuilder {
    /// Starts a builder with no providers registered.
    pub fn empty() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Registers `provider` under `name`, replacing any existing registration under that name.
    pub fn with_provider(mut self, name: impl Into<String>, provider: Box<dyn NonceProvider + Send + Sync>) -> Self {
        self.providers.insert(name.into(), provider);
        self
    }

    /// Consumes the builder, producing a read-only [`Registry`].
    pub fn finish(self) -> Registry {
        Registry { providers: self.providers }
    }
}

impl Default for RegistryBuilder {
    /// Pre-populates `"Go"` (the portable parallel search) and `"SyncGo"` (the same, behind a
    /// mutex). Hardware-accelerated names (`"SyncAVX"`, `"SyncSSE"`, ...) are never registered
    /// here — only an external crate providing such an implementation would add one.
    fn default() -> Self {
        Self::empty()
            .with_provider("Go", Box::new(MinerBuilder::new().finish()))
            .with_provider(
                "SyncGo",
                Box::new(SyncMiner {
                    inner: Mutex::new(MinerBuilder::new().finish()),
                }),
            )
    }
}

/// Preference order [`fastest`] walks looking for a registered provider, fastest first.
const PREFERENCE_ORDER: [&str; 6] = ["SyncAVX", "SyncSSE", "SyncCARM64", "SyncC128", "SyncC", "SyncGo"];

/// Returns the first implementation in [`PREFERENCE_ORDER`] actually registered in `registry`.
///
/// Over a registry built from [`RegistryBuilder::default`] alone this always resolves to
/// `"SyncGo"`, since only `"Go"` and `"SyncGo"` are ever registered by this crate.
pub fn fastest(registry: &Registry) -> Option<&(dyn NonceProvider + Send + Sync)> {
    PREFERENCE_ORDER.iter().find_map(|name| registry.get(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_resolves_fastest_to_sync_go() {
        let registry = RegistryBuilder::default().finish();
        assert!(registry.get("Go").is_some());
        assert!(registry.get("SyncGo").is_some());
        assert!(fastest(&registry).is_some());
    }

    #[test]
    fn unregistered_name_is_a_typed_error() {
        let registry = RegistryBuilder::empty().finish();
        assert_eq!(
            registry.must_get("Go").err(),
            Some(Error::UnknownProofOfWorkFunc("Go".to_owned()))
        );
    }

    #[test]
    fn empty_registry_has_no_fastest() {
        let registry = RegistryBuilder::empty().finish();
        assert!(fastest(&registry).is_none());
    }
}
