// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pow::{Miner, MinerBuilder, NonceProvider, NonceProviderBuilder};

fn low_mwm_search(c: &mut Criterion) {
    let trytes = "A".repeat(243);
    let miner: Miner = MinerBuilder::new().with_num_workers(4).finish();

    c.bench_function("search for a nonce at mwm 6", |b| {
        b.iter(|| black_box(&miner).nonce(black_box(&trytes), 6).unwrap())
    });
}

criterion_group!(benches, low_mwm_search);
criterion_main!(benches);
