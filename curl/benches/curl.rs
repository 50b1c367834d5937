// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curl::{BitSlicedCurl, Curl, Sponge};
use ternary::trytes_to_trits;

const INPUT_243: &str =
    "HHPELNTNJIOKLYDUW9NDULWPHCWFRPTDIUWLYUHQWWJVPAKKGKOAZFJPQJBLNDPALCVXGJLRBFSHATF9C";

fn scalar_digest(c: &mut Criterion) {
    let trits = trytes_to_trits(INPUT_243).unwrap();

    c.bench_function("scalar digest 243", |b| {
        b.iter(|| {
            let mut curl = Curl::new();
            black_box(curl.digest(black_box(&trits)))
        })
    });
}

fn bitsliced_transform(c: &mut Criterion) {
    let trits = trytes_to_trits(INPUT_243).unwrap();
    let mut seed = Curl::new();
    seed.absorb(&trits);
    let state = *seed.state();

    c.bench_function("bit-sliced transform, 64 lanes", |b| {
        b.iter(|| {
            let mut bct = BitSlicedCurl::from_scalar_state(black_box(&state));
            bct.transform();
            black_box(bct)
        })
    });
}

fn scalar_vs_bitsliced_throughput(c: &mut Criterion) {
    let trits = trytes_to_trits(INPUT_243).unwrap();

    let mut group = c.benchmark_group("64 candidates");
    group.bench_function("64 scalar digests", |b| {
        b.iter(|| {
            for _ in 0..64 {
                let mut curl = Curl::new();
                black_box(curl.digest(black_box(&trits)));
            }
        })
    });
    group.bench_function("one bit-sliced transform", |b| {
        let mut seed = Curl::new();
        seed.absorb(&trits);
        let state = *seed.state();
        b.iter(|| {
            let mut bct = BitSlicedCurl::from_scalar_state(black_box(&state));
            bct.transform();
            for lane in 0..64 {
                black_box(bct.trit_at(0, lane).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, scalar_digest, bitsliced_transform, scalar_vs_bitsliced_throughput);
criterion_main!(benches);
