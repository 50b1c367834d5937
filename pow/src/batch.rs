// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Transaction field offsets for the classic ledger layout, and the batch driver that chains a
//! sequence of transactions, stamping nonces and timestamps as it goes.

use crate::{error::Error, providers::NonceProvider};
use curl::{Curl, Sponge};
use std::time::{SystemTime, UNIX_EPOCH};
use ternary::{int_to_trits, pad_trits, trits_to_trytes, trytes_to_trits};

/// Tryte length of the full classic transaction layout.
pub const TRANSACTION_TRYTE_SIZE: usize = 2673;

struct Field {
    offset: usize,
    length: usize,
}

const TRUNK: Field = Field { offset: 2430, length: 81 };
const BRANCH: Field = Field { offset: 2511, length: 81 };
const ATTACHMENT_TIMESTAMP: Field = Field { offset: 2619, length: 9 };
const ATTACHMENT_TIMESTAMP_LOWER_BOUND: Field = Field { offset: 2628, length: 9 };
const ATTACHMENT_TIMESTAMP_UPPER_BOUND: Field = Field { offset: 2637, length: 9 };
const NONCE: Field = Field { offset: 2646, length: 27 };

/// The classic ledger's fixed lower bound for the attachment-timestamp validity window.
const LOWER_BOUND_ATTACHMENT_TIMESTAMP: i64 = 0;
/// `(3^27 - 1) / 2`, the fixed upper bound: the largest millisecond timestamp the 9-tryte
/// attachment-timestamp field can encode.
const UPPER_BOUND_ATTACHMENT_TIMESTAMP: i64 = 3_812_798_742_493;

fn patch(bytes: &mut [u8], field: &Field, value: &str) {
    debug_assert_eq!(value.len(), field.length, "field value length mismatch");
    bytes[field.offset..field.offset + field.length].copy_from_slice(value.as_bytes());
}

fn timestamp_trytes(millis: i64) -> Result<String, Error> {
    let trits = pad_trits(&int_to_trits(millis), ATTACHMENT_TIMESTAMP.length * 3);
    Ok(trits_to_trytes(&trits)?)
}

fn hash_trytes(trytes: &str) -> Result<String, Error> {
    let trits = trytes_to_trits(trytes)?;
    let mut curl = Curl::new();
    let hash = curl.digest(&trits);
    Ok(trits_to_trytes(&hash)?)
}

/// Processes `txs` (highest-index first) into a fully stamped, nonce-patched chain.
///
/// Transaction `i`'s trunk is transaction `i - 1`'s Curl hash (or `trunk` for `i == 0`); its
/// branch is the original `trunk` argument for every transaction after the first (or `branch`
/// for `i == 0`) — the classic `attachToTangle` chaining rule. Each transaction's attachment
/// timestamp is stamped fresh, right before its own proof-of-work search, not snapshotted once
/// for the whole batch: if two transactions take noticeably different search times, their
/// timestamps will differ by that much too.
pub fn do_pow(trunk: &str, branch: &str, txs: &[String], mwm: usize, provider: &dyn NonceProvider) -> Result<Vec<String>, Error> {
    let mut out = Vec::with_capacity(txs.len());
    let mut previous_hash: Option<String> = None;

    for (i, tx) in txs.iter().enumerate() {
        let trunk_tx = if i == 0 { trunk } else { previous_hash.as_deref().expect("set by every prior iteration") };
        let branch_tx = if i == 0 { branch } else { trunk };

        let mut bytes = tx.clone().into_bytes();
        patch(&mut bytes, &TRUNK, trunk_tx);
        patch(&mut bytes, &BRANCH, branch_tx);

        let now_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is before the Unix epoch")
            .as_millis() as i64;
        patch(&mut bytes, &ATTACHMENT_TIMESTAMP, &timestamp_trytes(now_millis)?);
        patch(&mut bytes, &ATTACHMENT_TIMESTAMP_LOWER_BOUND, &timestamp_trytes(LOWER_BOUND_ATTACHMENT_TIMESTAMP)?);
        patch(&mut bytes, &ATTACHMENT_TIMESTAMP_UPPER_BOUND, &timestamp_trytes(UPPER_BOUND_ATTACHMENT_TIMESTAMP)?);

        let stamped = String::from_utf8(bytes).expect("tryte alphabet is ASCII");
        let nonce = provider.nonce(&stamped, mwm)?;

        let mut bytes = stamped.into_bytes();
        patch(&mut bytes, &NONCE, &nonce);
        let patched = String::from_utf8(bytes).expect("tryte alphabet is ASCII");

        previous_hash = Some(hash_trytes(&patched)?);
        out.push(patched);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ConstantBuilder;

    fn blank_transaction() -> String {
        "9".repeat(TRANSACTION_TRYTE_SIZE)
    }

    #[test]
    fn chains_trunk_to_the_previous_transactions_hash() {
        let provider = ConstantBuilder::new().with_value("9".repeat(NONCE.length)).finish();
        let txs = vec![blank_transaction(), blank_transaction(), blank_transaction()];
        let trunk = "A".repeat(TRUNK.length);
        let branch = "B".repeat(BRANCH.length);

        let out = do_pow(&trunk, &branch, &txs, 0, &provider).unwrap();
        assert_eq!(out.len(), 3);

        assert_eq!(&out[0][TRUNK.offset..TRUNK.offset + TRUNK.length], trunk);
        assert_eq!(&out[0][BRANCH.offset..BRANCH.offset + BRANCH.length], branch);

        let hash_of_0 = hash_trytes(&out[0]).unwrap();
        assert_eq!(&out[1][TRUNK.offset..TRUNK.offset + TRUNK.length], hash_of_0);
        assert_eq!(&out[1][BRANCH.offset..BRANCH.offset + BRANCH.length], trunk);

        let hash_of_1 = hash_trytes(&out[1]).unwrap();
        assert_eq!(&out[2][TRUNK.offset..TRUNK.offset + TRUNK.length], hash_of_1);
        assert_eq!(&out[2][BRANCH.offset..BRANCH.offset + BRANCH.length], trunk);
    }

    #[test]
    fn patches_the_nonce_the_provider_returns() {
        let nonce = "N".repeat(NONCE.length);
        let provider = ConstantBuilder::new().with_value(nonce.clone()).finish();
        let out = do_pow(&"A".repeat(TRUNK.length), &"B".repeat(BRANCH.length), &[blank_transaction()], 0, &provider).unwrap();
        assert_eq!(&out[0][NONCE.offset..NONCE.offset + NONCE.length], nonce);
    }
}
