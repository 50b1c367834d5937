// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use curl::{Curl, Sponge};
use pow::{do_pow, ConstantBuilder, NonceProviderBuilder, TRANSACTION_TRYTE_SIZE};
use ternary::trytes_to_trits;

#[test]
fn each_transactions_trunk_is_the_previous_transactions_curl_hash() {
    let provider = ConstantBuilder::new().with_value("9".repeat(27)).finish();
    let txs = vec!["9".repeat(TRANSACTION_TRYTE_SIZE), "9".repeat(TRANSACTION_TRYTE_SIZE)];
    let trunk = "A".repeat(81);
    let branch = "B".repeat(81);

    let out = do_pow(&trunk, &branch, &txs, 0, &provider).unwrap();

    let mut curl = Curl::new();
    let trits = trytes_to_trits(&out[0]).unwrap();
    let hash = curl.digest(&trits);
    let hash_tx_0 = ternary::trits_to_trytes(&hash).unwrap();

    assert_eq!(&out[1][2430..2511], hash_tx_0);
    assert_eq!(&out[1][2511..2592], trunk);
}
