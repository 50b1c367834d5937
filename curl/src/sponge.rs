// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! The scalar (one candidate per call) Curl sponge.

use crate::{permutation::INDICES, HASH_LENGTH, NUM_ROUNDS, STATE_LENGTH};
use ternary::Trit;

/// The ternary S-box, indexed `[b + 1][a + 1]` for the round function `f(a, b)`.
const TRUTH_TABLE: [[Trit; 3]; 3] = [[1, 0, -1], [1, -1, 0], [-1, 1, 0]];

#[inline]
fn sbox(a: Trit, b: Trit) -> Trit {
    TRUTH_TABLE[(b + 1) as usize][(a + 1) as usize]
}

/// The common interface of the ternary sponge construction: reset, absorb, squeeze.
pub trait Sponge {
    /// Resets the sponge to its initial (all-zero) state.
    fn reset(&mut self);

    /// Absorbs `input` into the sponge, transforming once per full or partial 243-trit block.
    fn absorb(&mut self, input: &[Trit]);

    /// Squeezes `out.len()` trits from the sponge, transforming once per full or partial block.
    fn squeeze_into(&mut self, out: &mut [Trit]);

    /// Absorbs `input`, squeezes one hash's worth of output, and resets.
    fn digest(&mut self, input: &[Trit]) -> [Trit; HASH_LENGTH] {
        self.absorb(input);
        let mut out = [0i8; HASH_LENGTH];
        self.squeeze_into(&mut out);
        self.reset();
        out
    }
}

/// `Curl` with the fixed 27-round schedule used throughout this crate.
pub struct Curl {
    state: [Trit; STATE_LENGTH],
    work: [Trit; STATE_LENGTH],
}

impl Curl {
    /// Creates a new sponge with an all-zero state.
    pub fn new() -> Self {
        Self {
            state: [0; STATE_LENGTH],
            work: [0; STATE_LENGTH],
        }
    }

    /// Wraps an already-computed 729-trit state, without transforming it.
    ///
    /// Used to seed the bit-sliced search: absorb every block but the last through an ordinary
    /// `Curl`, then splice the final block directly into the state this way before bit-slicing.
    pub fn from_state(state: [Trit; STATE_LENGTH]) -> Self {
        Self {
            state,
            work: [0; STATE_LENGTH],
        }
    }

    /// The sponge's internal 729-trit state.
    pub fn state(&self) -> &[Trit; STATE_LENGTH] {
        &self.state
    }

    /// Runs the 27-round permutation over the current state.
    pub fn transform(&mut self) {
        for _ in 0..NUM_ROUNDS {
            for j in 0..STATE_LENGTH {
                let t1 = INDICES[j];
                let t2 = INDICES[j + 1];
                self.work[j] = sbox(self.state[t1], self.state[t2]);
            }
            std::mem::swap(&mut self.state, &mut self.work);
        }
    }
}

impl Default for Curl {
    fn default() -> Self {
        Self::new()
    }
}

impl Sponge for Curl {
    fn reset(&mut self) {
        self.state = [0; STATE_LENGTH];
    }

    fn absorb(&mut self, input: &[Trit]) {
        for chunk in input.chunks(HASH_LENGTH) {
            self.state[..chunk.len()].copy_from_slice(chunk);
            if chunk.len() < HASH_LENGTH {
                self.state[chunk.len()..HASH_LENGTH].fill(0);
            }
            self.transform();
        }
    }

    fn squeeze_into(&mut self, out: &mut [Trit]) {
        for chunk in out.chunks_mut(HASH_LENGTH) {
            chunk.copy_from_slice(&self.state[..chunk.len()]);
            self.transform();
        }
    }
}
