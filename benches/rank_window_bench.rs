// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use value_distribution::*;

fn entries(n: u64) -> Vec<Entry> {
    // Scrambled counts so admissions and evictions both happen.
    (0..n)
        .map(|i| Entry::new(format!("value_{}", i), (i * 7919) % 10_007 + 2))
        .collect()
}

fn bench_register(c: &mut Criterion) {
    let input = entries(10_000);
    let mut group = c.benchmark_group("RankWindow Register");

    for capacity in [5usize, 50, 500].iter() {
        for mode in [RankMode::Top, RankMode::Bottom] {
            group.bench_function(format!("{} (capacity={})", mode, capacity), |bencher| {
                bencher.iter(|| {
                    let mut window = RankWindow::new(mode, *capacity);
                    for entry in &input {
                        window.register(black_box(entry.clone()));
                    }
                    window
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_register);
criterion_main!(benches);
