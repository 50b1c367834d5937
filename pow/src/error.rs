// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Errors produced by the search engine and batch driver.

use thiserror::Error;

/// Errors produced while searching for or applying a proof-of-work nonce.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// The input to a PoW search was empty.
    #[error("invalid trytes for proof of work: input was empty")]
    InvalidTrytesForProofOfWork,
    /// A registry lookup found no provider registered under the given name.
    #[error("unknown proof of work function {0:?}")]
    UnknownProofOfWorkFunc(String),
    /// Every worker exhausted its nonce stripe without finding one that meets the requested
    /// minimum weight magnitude. In practice the nonce space is large enough that this should
    /// never happen; it exists so a caller never blocks forever on a channel no worker can
    /// still send on.
    #[error("proof of work search exhausted its nonce space without finding a match")]
    NonceSearchExhausted,
    /// A lower layer (trit/tryte conversion or the Curl sponge) reported an error.
    #[error(transparent)]
    Ternary(#[from] ternary::Error),
    /// The bit-sliced search decoded an invalid `(0, 0)` trit encoding while reading out a
    /// winning nonce. This should never happen; it would indicate a corrupted search state.
    #[error(transparent)]
    Curl(#[from] curl::Error),
}
