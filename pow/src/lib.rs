// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! A parallel, bit-sliced proof-of-work nonce search over the Curl ternary sponge, and the batch
//! driver that chains a sequence of transactions through it.

mod batch;
mod error;
mod miner;
mod providers;
mod registry;

pub use batch::{do_pow, TRANSACTION_TRYTE_SIZE};
pub use error::Error;
pub use miner::{constants, Miner, MinerBuilder};
pub use providers::{Constant, ConstantBuilder, NonceProvider, NonceProviderBuilder};
pub use registry::{fastest, Registry, RegistryBuilder, SyncMiner};
