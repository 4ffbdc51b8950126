// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use boothwalk::query::route::{plan_route, RouteOptions};

mod fixtures;

// Benchmark identity (keep stable):
// - Group name in this file: `route.plan`
// - Case IDs must remain stable across refactors so results stay comparable.
fn bench_plan_route(c: &mut Criterion) {
    let options = RouteOptions::default();
    let mut group = c.benchmark_group("route.plan");

    for (case, counters, products, stride) in [
        ("small", 5u8, 50usize, 3usize),
        ("medium", 12, 2_000, 10),
        ("large_dense", 25, 20_000, 2),
    ] {
        let registry = fixtures::registry(counters);
        let catalog = fixtures::catalog(&registry, products);
        let selection = fixtures::selection(&catalog, stride);

        group.throughput(Throughput::Elements(selection.len() as u64));
        group.bench_function(case, |b| {
            b.iter(|| {
                let route = plan_route(
                    black_box(&selection),
                    black_box(&catalog),
                    black_box(&registry),
                    &options,
                );
                black_box(route.item_count())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plan_route);
criterion_main!(benches);
