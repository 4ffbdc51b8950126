// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use boothwalk::cursor::CatalogCursor;
use boothwalk::query::catalog::SearchMode;

mod fixtures;

// Benchmark identity (keep stable):
// - Group names in this file: `cursor.search`, `cursor.paging`
// - Case IDs must remain stable across refactors so results stay comparable.
fn bench_search(c: &mut Criterion) {
    let registry = fixtures::registry(25);
    let catalog = fixtures::catalog(&registry, 20_000);

    let mut group = c.benchmark_group("cursor.search");
    group.throughput(Throughput::Elements(catalog.len() as u64));

    for (case, mode, query) in [
        ("substring", SearchMode::Substring, "milk"),
        ("regex", SearchMode::Regex, "^milk product 0[0-4]"),
        ("fuzzy", SearchMode::Fuzzy, "milk prodcut"),
    ] {
        let cursor = CatalogCursor::new(10, mode, 0.8).with_products(catalog.clone());
        group.bench_function(case, |b| {
            b.iter_batched(
                || cursor.clone(),
                |mut cursor| {
                    cursor.set_search_query(black_box(query));
                    black_box(cursor.filtered_count())
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_paging(c: &mut Criterion) {
    let registry = fixtures::registry(25);
    let catalog = fixtures::catalog(&registry, 20_000);
    let cursor = CatalogCursor::new(10, SearchMode::Substring, 0.8).with_products(catalog);

    let mut group = c.benchmark_group("cursor.paging");
    group.bench_function("sentinel_to_end", |b| {
        b.iter_batched(
            || cursor.clone(),
            |mut cursor| {
                while cursor.observe_sentinel(true) {
                    cursor.observe_sentinel(false);
                }
                black_box(cursor.visible_products().len())
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_search, bench_paging);
criterion_main!(benches);
