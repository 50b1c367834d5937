// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! The 384-bit little-endian big-integer bridge and the hash/bytes codec built on top of it.
//!
//! The real-world `U384` this is modelled on aliases a byte buffer as twelve `u32` limbs through
//! a generic, endianness-parameterized representation. That flexibility isn't needed here: only
//! one direction (little-endian limbs) and one representation (`u32`) is ever used, so this is a
//! concrete struct with explicit little-endian reads/writes instead, per the redesign called for
//! in the design notes.

mod codec;
mod constants;

pub use codec::{bytes_to_trits, trits_to_bytes};
pub use constants::HALF_THREE;

use std::cmp::Ordering;

/// Number of 32-bit limbs in a [`U384`].
pub const INT_LENGTH: usize = 12;

/// An unsigned 384-bit integer, stored as twelve `u32` limbs, little-endian (`limbs[0]` is least
/// significant).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct U384 {
    limbs: [u32; INT_LENGTH],
}

impl Ord for U384 {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..INT_LENGTH).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U384 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl U384 {
    /// The additive identity.
    pub const ZERO: Self = Self::from_le_u32([0; INT_LENGTH]);

    /// Builds a `U384` directly from its little-endian limbs.
    pub const fn from_le_u32(limbs: [u32; INT_LENGTH]) -> Self {
        Self { limbs }
    }

    /// Returns whether every limb is zero.
    pub fn is_null(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// Returns whether the most significant bit (bit 383) is set.
    pub fn msb_set(&self) -> bool {
        self.limbs[INT_LENGTH - 1] & 0x8000_0000 != 0
    }

    /// Bitwise complement of every limb.
    pub fn not(&self) -> Self {
        let mut limbs = self.limbs;
        for limb in limbs.iter_mut() {
            *limb = !*limb;
        }
        Self { limbs }
    }

    /// Adds `other` to `self`, returning the sum.
    ///
    /// Panics if the addition carries out of the most significant limb: per the bridge's
    /// contract, the domain arguments here are always bounded so that this cannot legitimately
    /// happen.
    pub fn add(&self, other: &Self) -> Self {
        let mut limbs = [0u32; INT_LENGTH];
        let mut carry = 0u64;
        for i in 0..INT_LENGTH {
            let sum = u64::from(self.limbs[i]) + u64::from(other.limbs[i]) + carry;
            limbs[i] = sum as u32;
            carry = sum >> 32;
        }
        assert_eq!(carry, 0, "U384 add overflowed 384 bits");
        Self { limbs }
    }

    /// Adds a single `u32` onto the least-significant limb, propagating carry upward.
    ///
    /// Returns the number of limbs touched by carry propagation (at least 1). Panics if the
    /// carry propagates past the most significant limb.
    pub fn add_small(&mut self, value: u32) -> usize {
        let sum = u64::from(self.limbs[0]) + u64::from(value);
        self.limbs[0] = sum as u32;
        let mut carry = sum >> 32;
        let mut touched = 1;
        let mut i = 1;
        while carry != 0 {
            assert!(i < INT_LENGTH, "U384 add_small overflowed 384 bits");
            let sum = u64::from(self.limbs[i]) + carry;
            self.limbs[i] = sum as u32;
            carry = sum >> 32;
            touched += 1;
            i += 1;
        }
        touched
    }

    /// Subtracts `other` from `self`, returning the difference.
    ///
    /// Panics on underflow (`self < other`), for the same reason [`Self::add`] panics on
    /// overflow.
    pub fn sub(&self, other: &Self) -> Self {
        assert!(self.cmp(other) != Ordering::Less, "U384 sub underflowed");
        let mut limbs = [0u32; INT_LENGTH];
        let mut borrow = 0i64;
        for i in 0..INT_LENGTH {
            let diff = i64::from(self.limbs[i]) - i64::from(other.limbs[i]) - borrow;
            if diff < 0 {
                limbs[i] = (diff + (1i64 << 32)) as u32;
                borrow = 1;
            } else {
                limbs[i] = diff as u32;
                borrow = 0;
            }
        }
        Self { limbs }
    }

    /// Two's-complement negation: `!self + 1`.
    pub fn negate(&self) -> Self {
        let mut negated = self.not();
        negated.add_small(1);
        negated
    }

    /// Multiplies `self` by 3 and adds `digit` (which must be in `0..3`), propagating carry.
    ///
    /// Used to accumulate a balanced-ternary integer via Horner's rule, least-significant trit
    /// last.
    fn mul3_add_digit(&mut self, digit: u32) {
        let mut carry = u64::from(digit);
        for limb in self.limbs.iter_mut() {
            let product = u64::from(*limb) * 3 + carry;
            *limb = product as u32;
            carry = product >> 32;
        }
        assert_eq!(carry, 0, "U384 mul3_add_digit overflowed 384 bits");
    }

    /// Divides `self` by 3 in place, returning the remainder (`0..3`).
    fn divmod3(&mut self) -> u32 {
        let mut remainder = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let dividend = (remainder << 32) | u64::from(*limb);
            *limb = (dividend / 3) as u32;
            remainder = dividend % 3;
        }
        remainder as u32
    }

    /// Serializes to 48 little-endian bytes (`bytes[0..4]` is `limbs[0]`, little-endian).
    pub fn to_le_bytes(&self) -> [u8; 48] {
        let mut out = [0u8; 48];
        for (i, limb) in self.limbs.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Deserializes from 48 little-endian bytes.
    pub fn from_le_bytes(bytes: &[u8; 48]) -> Self {
        let mut limbs = [0u32; INT_LENGTH];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(&bytes[i * 4..i * 4 + 4]);
            *limb = u32::from_le_bytes(buf);
        }
        Self { limbs }
    }
}

/// Reverses a 48-byte buffer in place, flipping little-endian limbs into the big-endian wire
/// form (and back).
pub fn reverse_bytes(bytes: &mut [u8; 48]) {
    bytes.reverse();
}
