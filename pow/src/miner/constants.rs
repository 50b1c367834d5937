// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Fixed magic numbers required for bit-exact compatibility with the bit-sliced search.

use curl::HASH_LENGTH;
use ternary::NONCE_TRINARY_SIZE;

/// The first trit position of the 81-trit nonce field within a 243-trit block.
pub const NONCE_OFFSET: usize = HASH_LENGTH - NONCE_TRINARY_SIZE;
/// Start of the window seeded with [`LOW0`]..[`HIGH3`]; four trit positions past [`NONCE_OFFSET`].
pub const NONCE_INIT_START: usize = NONCE_OFFSET + 4;
/// Start of the window incremented per iteration by the search loop; the worker-offset window
/// (used only to stagger each worker's starting stripe) spans `[NONCE_INIT_START, NONCE_INCREMENT_START)`.
pub const NONCE_INCREMENT_START: usize = NONCE_INIT_START + NONCE_TRINARY_SIZE / 3;

/// The four bit-sliced nonce-prefix constants: each of the 64 bit positions gets a distinct
/// 4-trit prefix, guaranteeing the 64 candidates seeded into one bit-sliced state are unique.
pub const LOW0: u64 = 0xDB6DB6DB6DB6DB6D;
pub const HIGH0: u64 = 0xB6DB6DB6DB6DB6DB;
pub const LOW1: u64 = 0xF1F8FC7E3F1F8FC7;
pub const HIGH1: u64 = 0x8FC7E3F1F8FC7E3F;
pub const LOW2: u64 = 0x7FFFE00FFFFC01FF;
pub const HIGH2: u64 = 0xFFC01FFFF803FFFF;
pub const LOW3: u64 = 0xFFC0000007FFFFFF;
pub const HIGH3: u64 = 0x003FFFFFFFFFFFFF;
