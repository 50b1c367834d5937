// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! The 243-trit ↔ 48-byte codec used to move Curl hashes across the binary boundary.

use super::{reverse_bytes, U384, HALF_THREE};
use crate::{error::Error, trit::Trit};

/// Encodes a 243-trit hash as 48 big-endian wire bytes.
///
/// The first 242 trits are read as a signed balanced-ternary integer `x` (the 243rd trit is
/// ignored; it is an invariant that it is zero on valid hashes). `x` is first accumulated in the
/// non-negative "shifted" domain (`y = x + HALF_THREE`, by adding 1 to every trit before the
/// Horner sum) so that the accumulation itself never needs a sign. The wire value is then: `x`
/// directly when `x` is non-negative, or its 384-bit two's-complement negation when `x` is
/// negative — which is why the all-(-1)-trits input, where `x == -HALF_THREE` exactly, encodes to
/// the two's complement of `HALF_THREE` rather than to zero.
pub fn trits_to_bytes(t: &[Trit]) -> Result<[u8; 48], Error> {
    if t.len() != 243 {
        return Err(Error::InvalidTritsLength(t.len()));
    }

    let mut shifted = U384::ZERO;
    for &trit in t[..242].iter().rev() {
        shifted.mul3_add_digit((trit + 1) as u32);
    }

    let value = if shifted.cmp(&HALF_THREE) != std::cmp::Ordering::Less {
        shifted.sub(&HALF_THREE)
    } else {
        HALF_THREE.sub(&shifted).negate()
    };

    let mut bytes = value.to_le_bytes();
    reverse_bytes(&mut bytes);
    Ok(bytes)
}

/// Decodes 48 wire bytes back into a 243-trit hash, the last trit always forced to 0.
///
/// Returns [`Error::InvalidBytesLength`] if `bytes` is not exactly 48 bytes long.
pub fn bytes_to_trits(bytes: &[u8]) -> Result<[Trit; 243], Error> {
    if bytes.len() != 48 {
        return Err(Error::InvalidBytesLength(bytes.len()));
    }
    let mut le = [0u8; 48];
    le.copy_from_slice(bytes);
    reverse_bytes(&mut le);
    let value = U384::from_le_bytes(&le);

    let mut out = [0i8; 243];
    if value.is_null() {
        return Ok(out);
    }

    let (mut shifted, flip) = if !value.msb_set() {
        (value.add(&HALF_THREE), false)
    } else {
        let complement = value.not();
        if complement.cmp(&HALF_THREE) == std::cmp::Ordering::Greater {
            (complement.sub(&HALF_THREE), true)
        } else {
            let mut c_plus_one = complement;
            c_plus_one.add_small(1);
            (HALF_THREE.sub(&c_plus_one), false)
        }
    };

    for trit in out[..242].iter_mut() {
        let remainder = shifted.divmod3();
        *trit = remainder as i8 - 1;
    }
    out[242] = 0;

    if flip {
        for trit in out.iter_mut() {
            *trit = -*trit;
        }
    }

    Ok(out)
}
