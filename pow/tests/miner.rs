// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use curl::{Curl, Sponge};
use pow::{Miner, MinerBuilder, NonceProvider, NonceProviderBuilder};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use ternary::trailing_zeros;

fn transaction_trytes() -> String {
    "A".repeat(243 * 3)
}

#[test]
fn miner_finds_a_nonce_satisfying_the_requested_weight() {
    let miner: Miner = MinerBuilder::new().with_num_workers(4).finish();
    let trytes = transaction_trytes();

    let nonce = miner.nonce(&trytes, 5).unwrap();
    let mut patched = trytes;
    let tail_start = patched.len() - nonce.len();
    patched.replace_range(tail_start.., &nonce);

    let trits = ternary::trytes_to_trits(&patched).unwrap();
    let mut curl = Curl::new();
    let hash = curl.digest(&trits);
    assert!(trailing_zeros(&hash) >= 5);
}

#[test]
fn miner_abort_stops_promptly() {
    let cancel = Arc::new(AtomicBool::new(false));
    let miner = MinerBuilder::new().with_num_workers(4).with_cancel(cancel.clone()).finish();
    let trytes = transaction_trytes();

    let now = std::time::Instant::now();

    std::thread::spawn(move || miner.nonce(&trytes, 27).unwrap());

    std::thread::sleep(std::time::Duration::from_millis(300));
    cancel.store(true, Ordering::Relaxed);

    std::thread::sleep(std::time::Duration::from_millis(200));
    assert!(now.elapsed().as_secs() < 2);
}
