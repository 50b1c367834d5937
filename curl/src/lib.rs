// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! The Curl ternary sponge permutation, in both its scalar form and the 64-way bit-sliced form
//! used by the proof-of-work search.

#![warn(missing_docs)]

mod batched;
mod error;
mod permutation;
mod sponge;

pub use batched::{encode_trit, BitSlicedCurl};
pub use error::Error;
pub use permutation::INDICES;
pub use sponge::{Curl, Sponge};

/// Trit length of one Curl hash / absorb-squeeze block (81 trytes).
pub const HASH_LENGTH: usize = 243;
/// Trit length of the full sponge state (three hash-lengths).
pub const STATE_LENGTH: usize = HASH_LENGTH * 3;
/// Number of S-box rounds per transform.
pub const NUM_ROUNDS: usize = 27;
