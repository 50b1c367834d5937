// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! The provider abstraction the search engine is exposed through, and a trivial constant
//! provider useful for exercising callers without paying for a real search.

use crate::error::Error;

/// Something that can produce a proof-of-work nonce for a tryte string at a given difficulty.
pub trait NonceProvider {
    /// Searches for a nonce such that hashing `trytes` with its last 81 trits replaced by the
    /// nonce yields a hash with at least `mwm` trailing zero trits.
    fn nonce(&self, trytes: &str, mwm: usize) -> Result<String, Error>;
}

/// Builds a [`NonceProvider`] via a fluent configuration API.
pub trait NonceProviderBuilder {
    /// The provider this builder produces.
    type Provider: NonceProvider;

    /// Starts a new builder with default configuration.
    fn new() -> Self;

    /// Consumes the builder, producing the configured provider.
    fn finish(self) -> Self::Provider;
}

/// A provider that always returns the same, pre-configured nonce, regardless of `mwm`.
///
/// Useful for exercising callers of [`NonceProvider`] — the registry, the batch driver — without
/// paying for a real search.
pub struct Constant {
    value: String,
}

impl NonceProvider for Constant {
    fn nonce(&self, _trytes: &str, _mwm: usize) -> Result<String, Error> {
        Ok(self.value.clone())
    }
}

/// Builds a [`Constant`] provider.
#[derive(Default)]
pub struct ConstantBuilder {
    value: String,
}

impl ConstantBuilder {
    /// Sets the nonce tryte string every call to [`Constant::nonce`] returns.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl NonceProviderBuilder for ConstantBuilder {
    type Provider = Constant;

    fn new() -> Self {
        Self::default()
    }

    fn finish(self) -> Constant {
        Constant { value: self.value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_always_returns_its_configured_value() {
        let constant = ConstantBuilder::new().with_value("N9N9N9").finish();
        assert_eq!(constant.nonce("ABC", 0).unwrap(), "N9N9N9");
        assert_eq!(constant.nonce("ABC", 27).unwrap(), "N9N9N9");
    }
}
