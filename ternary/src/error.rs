// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Errors produced by the ternary substrate.

use thiserror::Error;

/// Errors related to trits, trytes, and the bigint bridge.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// A trit outside {-1, 0, 1} was found at the given index.
    #[error("invalid trit at index {0}")]
    InvalidTrit(usize),
    /// A trytes string was empty or contained a character outside `[9A-Z]`.
    #[error("invalid trytes string")]
    InvalidTrytes,
    /// A trit sequence's length was not a positive multiple of 3 (tryte conversion), or not 243 (hash conversion).
    #[error("invalid trits length {0}")]
    InvalidTritsLength(usize),
    /// A byte slice's length was not 48 (hash conversion).
    #[error("invalid bytes length {0}")]
    InvalidBytesLength(usize),
}
