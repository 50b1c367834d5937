// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! The fixed index permutation shared by the scalar and bit-sliced transforms.
//!
//! Generated once from the canonical recurrence `p = if p < 365 { p + 364 } else { p - 365 }`
//! and then used purely as data, per the design notes: consumers must not depend on how the
//! table was derived, only on its values.

use crate::STATE_LENGTH;

const fn build_indices() -> [usize; STATE_LENGTH + 1] {
    let mut indices = [0usize; STATE_LENGTH + 1];
    let mut p = 0usize;
    let mut j = 0usize;
    while j < STATE_LENGTH {
        indices[j] = p;
        p = if p < 365 { p + 364 } else { p - 365 };
        j += 1;
    }
    indices[STATE_LENGTH] = p;
    indices
}

/// `INDICES[j]` and `INDICES[j + 1]` are the two state positions the round function reads to
/// produce the new value at position `j`.
pub const INDICES: [usize; STATE_LENGTH + 1] = build_indices();
