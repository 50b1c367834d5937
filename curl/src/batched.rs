// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! The 64-way bit-sliced Curl transform: one `u64` word holds one bit position for 64
//! independent candidate states, so a single round of scalar S-box evaluations becomes a
//! handful of word-wide bitwise operations evaluating all 64 candidates at once.

use crate::{error::Error, permutation::INDICES, NUM_ROUNDS, STATE_LENGTH};
use ternary::Trit;

const HIGH_BITS: u64 = u64::MAX;

/// Encodes a single trit as the lane-broadcast `(lo, hi)` word pair (`-1 → (HIGH_BITS, 0)`,
/// `0 → (HIGH_BITS, HIGH_BITS)`, `+1 → (0, HIGH_BITS)`), matching the per-lane bit mapping.
#[inline]
pub fn encode_trit(t: Trit) -> (u64, u64) {
    match t {
        -1 => (HIGH_BITS, 0),
        0 => (HIGH_BITS, HIGH_BITS),
        1 => (0, HIGH_BITS),
        _ => unreachable!("invalid trit {t}"),
    }
}

/// Decodes one lane's bit pair back into a trit. `(0, 0)` never arises in a valid state; see the
/// module-level invariant.
#[inline]
fn decode_bit(lo_bit: u64, hi_bit: u64) -> Result<Trit, (u64, u64)> {
    match (lo_bit, hi_bit) {
        (1, 0) => Ok(-1),
        (1, 1) => Ok(0),
        (0, 1) => Ok(1),
        invalid => Err(invalid),
    }
}

/// A pair of 729-lane `u64` arrays representing 64 parallel Curl states.
#[derive(Clone)]
pub struct BitSlicedCurl {
    lo: [u64; STATE_LENGTH],
    hi: [u64; STATE_LENGTH],
    scratch_lo: [u64; STATE_LENGTH],
    scratch_hi: [u64; STATE_LENGTH],
}

impl BitSlicedCurl {
    /// Creates a bit-sliced state where every lane, at every position, holds the zero trit.
    pub fn new() -> Self {
        Self {
            lo: [HIGH_BITS; STATE_LENGTH],
            hi: [HIGH_BITS; STATE_LENGTH],
            scratch_lo: [HIGH_BITS; STATE_LENGTH],
            scratch_hi: [HIGH_BITS; STATE_LENGTH],
        }
    }

    /// Broadcasts a scalar 729-trit state into all 64 lanes.
    pub fn from_scalar_state(state: &[Trit; STATE_LENGTH]) -> Self {
        let mut out = Self::new();
        for (i, &trit) in state.iter().enumerate() {
            let (lo, hi) = encode_trit(trit);
            out.lo[i] = lo;
            out.hi[i] = hi;
        }
        out
    }

    /// The low bit-plane, one word per state position.
    pub fn lo(&self) -> &[u64; STATE_LENGTH] {
        &self.lo
    }

    /// The high bit-plane, one word per state position.
    pub fn hi(&self) -> &[u64; STATE_LENGTH] {
        &self.hi
    }

    /// Mutable access to the low bit-plane, for seeding nonce lanes and running the ternary
    /// counter.
    pub fn lo_mut(&mut self) -> &mut [u64; STATE_LENGTH] {
        &mut self.lo
    }

    /// Mutable access to the high bit-plane.
    pub fn hi_mut(&mut self) -> &mut [u64; STATE_LENGTH] {
        &mut self.hi
    }

    /// Runs the 27-round bit-sliced permutation, evaluating all 64 lanes at once.
    ///
    /// This is the hot loop of the whole search; the `(0, 0)` bit-pair invariant is not checked
    /// here (see `trit_at` for the one-shot decode that does check it).
    pub fn transform(&mut self) {
        for _ in 0..NUM_ROUNDS {
            self.scratch_lo.copy_from_slice(&self.lo);
            self.scratch_hi.copy_from_slice(&self.hi);

            for j in 0..STATE_LENGTH {
                let t1 = INDICES[j];
                let t2 = INDICES[j + 1];

                let alpha = self.scratch_lo[t1];
                let beta = self.scratch_hi[t1];
                let gamma = self.scratch_hi[t2];

                let delta = (alpha | !gamma) & (self.scratch_lo[t2] ^ beta);

                self.lo[j] = !delta;
                self.hi[j] = (alpha ^ gamma) | delta;
            }
        }
    }

    /// Decodes the trit at state position `position` for a single lane (`0..64`).
    ///
    /// Used only to read out the winning candidate once a match is found, not in the hot loop.
    pub fn trit_at(&self, position: usize, lane: u32) -> Result<Trit, Error> {
        let lo_bit = (self.lo[position] >> lane) & 1;
        let hi_bit = (self.hi[position] >> lane) & 1;
        decode_bit(lo_bit, hi_bit).map_err(|_| Error::InvalidBitPair(position, lane))
    }
}

impl Default for BitSlicedCurl {
    fn default() -> Self {
        Self::new()
    }
}
