// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! The bit-sliced, multi-worker nonce search: the `Go` [`NonceProvider`].

pub mod constants;

use crate::{
    error::Error,
    providers::{NonceProvider, NonceProviderBuilder},
};
use constants::{HIGH0, HIGH1, HIGH2, HIGH3, LOW0, LOW1, LOW2, LOW3, NONCE_INCREMENT_START, NONCE_INIT_START, NONCE_OFFSET};
use curl::{BitSlicedCurl, Curl, Sponge, HASH_LENGTH, STATE_LENGTH};
use std::{
    cmp::max,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc,
    },
    thread,
};
use ternary::{trits_to_trytes, trytes_to_trits, Trit, NONCE_TRINARY_SIZE};

/// Seeds the first four nonce-region positions with the fixed bit-sliced prefix constants, so
/// the 64 bit positions explore 64 distinct ternary prefixes.
fn seed_nonce_prefix(bct: &mut BitSlicedCurl) {
    bct.lo_mut()[NONCE_OFFSET] = LOW0;
    bct.lo_mut()[NONCE_OFFSET + 1] = LOW1;
    bct.lo_mut()[NONCE_OFFSET + 2] = LOW2;
    bct.lo_mut()[NONCE_OFFSET + 3] = LOW3;
    bct.hi_mut()[NONCE_OFFSET] = HIGH0;
    bct.hi_mut()[NONCE_OFFSET + 1] = HIGH1;
    bct.hi_mut()[NONCE_OFFSET + 2] = HIGH2;
    bct.hi_mut()[NONCE_OFFSET + 3] = HIGH3;
}

/// Adds one to the bit-sliced ternary counter spanning `[start, end)`. Returns `true` if the
/// carry propagated out of the top of the window (the worker's stripe wrapped around).
fn increment(bct: &mut BitSlicedCurl, start: usize, end: usize) -> bool {
    for i in start..end {
        let low = bct.lo()[i];
        let high = bct.hi()[i];
        bct.lo_mut()[i] = high ^ low;
        bct.hi_mut()[i] = low;
        let carry = high & !low;
        if carry == 0 {
            return false;
        }
    }
    true
}

/// Builds the pre-nonce 729-trit sponge state: every block but the final one absorbed normally,
/// the final block spliced in directly (not yet transformed) so its tail becomes the nonce
/// region a worker then varies.
fn seed_state(trits: &[Trit]) -> [Trit; STATE_LENGTH] {
    let split = trits.len().saturating_sub(HASH_LENGTH);
    let (head, tail) = trits.split_at(split);
    let mut curl = Curl::new();
    curl.absorb(head);
    let mut state = *curl.state();
    state[..HASH_LENGTH].copy_from_slice(tail);
    state
}

/// Finds a lane whose trailing `mwm` trits are all zero in the already-transformed candidate
/// hashes, returning its bit position.
fn find_winning_lane(transformed: &BitSlicedCurl, mwm: usize) -> Option<u32> {
    let mut probe = u64::MAX;
    for i in (HASH_LENGTH - mwm)..HASH_LENGTH {
        probe &= !(transformed.lo()[i] ^ transformed.hi()[i]);
    }
    (probe != 0).then(|| probe.trailing_zeros())
}

/// Decodes the 81-trit nonce at bit position `lane` out of `bct`'s untransformed nonce region.
fn decode_nonce(bct: &BitSlicedCurl, lane: u32) -> Result<String, Error> {
    let mut trits = [0i8; NONCE_TRINARY_SIZE];
    for (i, trit) in trits.iter_mut().enumerate() {
        *trit = bct.trit_at(NONCE_OFFSET + i, lane)?;
    }
    Ok(trits_to_trytes(&trits)?)
}

fn worker(seed: [Trit; STATE_LENGTH], mwm: usize, worker_index: usize, cancel: &AtomicBool, result: &mpsc::SyncSender<String>) {
    let mut bct = BitSlicedCurl::from_scalar_state(&seed);
    seed_nonce_prefix(&mut bct);
    for _ in 0..worker_index {
        increment(&mut bct, NONCE_INIT_START, NONCE_INCREMENT_START);
    }

    loop {
        if cancel.load(Ordering::Relaxed) {
            return;
        }
        if increment(&mut bct, NONCE_INIT_START, HASH_LENGTH) {
            log::trace!("worker {worker_index} exhausted its nonce stripe");
            return;
        }

        let mut transformed = bct.clone();
        transformed.transform();

        if let Some(lane) = find_winning_lane(&transformed, mwm) {
            let nonce = match decode_nonce(&bct, lane) {
                Ok(nonce) => nonce,
                // An invalid (0, 0) bit pair should never occur; treat it as a missed candidate
                // rather than aborting the whole search.
                Err(_) => continue,
            };
            cancel.store(true, Ordering::Relaxed);
            let _ = result.try_send(nonce);
            log::debug!("worker {worker_index} published a winning nonce");
            return;
        }
    }
}

/// Resolves an explicit or default worker count: `0` or unset both mean
/// `max(1, logical_cpus - 1)`.
fn resolve_num_workers(explicit: Option<usize>) -> usize {
    match explicit {
        Some(n) if n > 0 => n,
        _ => max(1, num_cpus::get().saturating_sub(1)),
    }
}

/// The portable bit-sliced, multi-worker nonce search.
pub struct Miner {
    num_workers: Option<usize>,
    cancel: Option<Arc<AtomicBool>>,
}

impl NonceProvider for Miner {
    fn nonce(&self, trytes: &str, mwm: usize) -> Result<String, Error> {
        let trits = trytes_to_trits(trytes)?;
        if trits.is_empty() || trits.len() % HASH_LENGTH != 0 {
            return Err(Error::InvalidTrytesForProofOfWork);
        }

        let seed = seed_state(&trits);
        let num_workers = resolve_num_workers(self.num_workers);
        let cancel = self.cancel.clone().unwrap_or_else(|| Arc::new(AtomicBool::new(false)));
        let (sender, receiver) = mpsc::sync_channel(1);

        log::debug!("starting proof of work search: {num_workers} workers, mwm {mwm}");

        thread::scope(|scope| {
            for worker_index in 0..num_workers {
                let cancel = &cancel;
                let sender = sender.clone();
                scope.spawn(move || worker(seed, mwm, worker_index, cancel, &sender));
            }
            drop(sender);
            receiver.recv()
        })
        .map_err(|_| Error::NonceSearchExhausted)
    }
}

/// Builds a [`Miner`].
#[derive(Default)]
pub struct MinerBuilder {
    num_workers: Option<usize>,
    cancel: Option<Arc<AtomicBool>>,
}

impl MinerBuilder {
    /// Sets the number of worker threads. `0` falls back to the default resolution
    /// (`max(1, logical_cpus - 1)`), same as leaving it unset.
    pub fn with_num_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = Some(num_workers);
        self
    }

    /// Shares an externally owned cancellation flag with the search, so a caller can abort an
    /// in-flight [`NonceProvider::nonce`] call from another thread.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl NonceProviderBuilder for MinerBuilder {
    type Provider = Miner;

    fn new() -> Self {
        Self::default()
    }

    fn finish(self) -> Miner {
        Miner {
            num_workers: self.num_workers,
            cancel: self.cancel,
        }
    }
}
