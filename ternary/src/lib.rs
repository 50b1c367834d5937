// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Balanced-ternary trit/tryte substrate and the 384-bit big-integer bridge used to move
//! ternary hashes across the binary boundary.

#![warn(missing_docs, clippy::cast_possible_truncate, clippy::cast_sign_loss)]
#![deny(clippy::cast_lossless, clippy::cast_possible_wrap)]

pub mod bigint;
mod error;
mod trit;
mod tryte;

pub use bigint::{bytes_to_trits, trits_to_bytes};
pub use error::Error;
pub use trit::{
    add_trits, int_to_trits, pad_trits, reverse_trits, trailing_zeros, trits_equal, trits_to_int, valid_trit,
    validate, Trit, MAX_TRIT_VALUE, MIN_TRIT_VALUE, TRINARY_RADIX,
};
pub use tryte::{pad_trytes, trits_to_trytes, trytes_to_trits, TRYTE_ALPHABET, TRYTE_TO_TRITS};

/// Trit length of a Curl hash (81 trytes).
pub const HASH_TRINARY_SIZE: usize = 243;
/// Byte length of the binary encoding of a Curl hash.
pub const HASH_BYTES_SIZE: usize = 48;
/// Trit length of a proof-of-work nonce (27 trytes).
pub const NONCE_TRINARY_SIZE: usize = 81;
