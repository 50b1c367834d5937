// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors produced while operating a Curl sponge.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// A bit-sliced lane decoded to the invalid `(0, 0)` bit pair, which never arises in a
    /// correctly produced state. Returned only by the one-shot lane decode used to read out a
    /// winning candidate; the hot loop itself never checks this (see the bit-slicing invariant).
    #[error("invalid bit-sliced trit encoding (0, 0) at position {0}, lane {1}")]
    InvalidBitPair(usize, u32),
}
