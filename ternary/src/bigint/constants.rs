// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Fixed magic numbers required for bit-exact compatibility with the hash/bytes codec.

use super::U384;

/// `(3^242) / 2`, the additive offset that separates the "small" (direct) and "large"
/// (two's-complement) encoding regimes of [`super::codec`].
pub const HALF_THREE: U384 = U384::from_le_u32([
    0xa5ce8964, 0x9f007669, 0x1484504f, 0x3ade00d9, 0x0c24486e, 0x50979d57, 0x79a4c702, 0x48bbae36, 0xa9f6808b,
    0xaa06a805, 0xa87fabdf, 0x5e69ebef,
]);
