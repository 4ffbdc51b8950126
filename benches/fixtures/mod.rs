// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use boothwalk::model::{
    Booth, BoothCode, BoothRegistry, Price, Product, ProductId, SelectionSet,
};

pub const SLOTS_PER_COUNTER: u32 = 40;

/// `counters` counters starting at `A`, each with `SLOTS_PER_COUNTER` booths.
pub fn registry(counters: u8) -> BoothRegistry {
    let booths = (0..counters.min(25))
        .flat_map(|counter| {
            let letter = char::from(b'A' + counter);
            (1..=SLOTS_PER_COUNTER).map(move |slot| {
                let code = BoothCode::new(letter, slot).expect("booth code");
                Booth::new(code).with_label(format!("Aisle {letter}"))
            })
        })
        .collect::<Vec<_>>();
    BoothRegistry::from_booths(booths).0
}

/// `count` products spread over the registry. Every 97th sits at a booth that is not on the map.
pub fn catalog(registry: &BoothRegistry, count: usize) -> Vec<Product> {
    let codes = registry.iter().map(|booth| booth.code()).collect::<Vec<_>>();
    let unmapped = BoothCode::new('Z', 999).expect("booth code");
    (0..count)
        .map(|idx| {
            let booth = if idx % 97 == 96 {
                unmapped
            } else {
                codes[idx.wrapping_mul(7) % codes.len()]
            };
            let name = if idx % 11 == 0 {
                format!("Milk product {idx:05}")
            } else {
                format!("Product {idx:05}")
            };
            Product::new(
                ProductId::new(format!("p{idx:05}")).expect("product id"),
                name,
                Price::from_cents(100 + (idx as u64 % 900)),
                booth,
            )
        })
        .collect()
}

/// Every `stride`-th product.
pub fn selection(products: &[Product], stride: usize) -> SelectionSet {
    products
        .iter()
        .step_by(stride.max(1))
        .map(|product| product.product_id().clone())
        .collect()
}
