// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in sample store used by `--demo`, the benches and tests.
//!
//! Five counters (A-E) of four booths each. One product sits at `F1`, a booth that is not on the
//! map, so the unmapped tail of a route can be seen without preparing any data.

use crate::error::{Upstream, UpstreamError};
use crate::model::{Booth, BoothCode, IdError, Price, Product, ProductId, StoreId};
use crate::recommend::{
    parse_suggestions, RecommendationPeriod, RecommendationRequest, RecommendationService,
};
use crate::store::{CatalogService, CatalogSnapshot, StoreInfo};

pub const DEMO_STORE_ID: &str = "demo";

const COUNTERS: [(char, &str); 5] = [
    ('A', "Produce"),
    ('B', "Dairy"),
    ('C', "Bakery"),
    ('D', "Pantry"),
    ('E', "Household"),
];

const SLOTS_PER_COUNTER: u32 = 4;

// id, name, cents, booth, description
const PRODUCTS: &[(&str, &str, u64, &str, &str)] = &[
    ("p01", "Bananas", 129, "A1", "Bunch of ripe bananas"),
    ("p02", "Apples", 349, "A1", "Crisp red apples, 1kg"),
    ("p03", "Tomatoes", 279, "A2", ""),
    ("p04", "Spinach", 199, "A3", "Baby spinach leaves"),
    ("p05", "Potatoes", 249, "A4", ""),
    ("p06", "Whole Milk", 119, "B1", "Fresh whole milk, 1l"),
    ("p07", "Oat Milk", 229, "B1", "Barista oat drink"),
    ("p08", "Cheddar", 459, "B2", "Mature cheddar, 200g"),
    ("p09", "Greek Yogurt", 189, "B3", ""),
    ("p10", "Butter", 299, "B4", "Salted butter"),
    ("p11", "Sourdough Loaf", 399, "C1", "Baked this morning"),
    ("p12", "Croissants", 349, "C2", "Pack of four"),
    ("p13", "Bagels", 289, "C3", ""),
    ("p14", "Spaghetti", 159, "D1", "Durum wheat pasta, 500g"),
    ("p15", "Tomato Sauce", 219, "D1", ""),
    ("p16", "Rice", 329, "D2", "Long grain rice, 1kg"),
    ("p17", "Olive Oil", 749, "D3", "Extra virgin, 500ml"),
    ("p18", "Coffee Beans", 899, "D4", "Medium roast"),
    ("p19", "Dish Soap", 249, "E1", ""),
    ("p20", "Paper Towels", 429, "E2", "Six rolls"),
    ("p21", "Laundry Detergent", 1199, "E3", ""),
    ("p22", "Sponges", 179, "E4", "Pack of three"),
    ("p23", "Eggs", 329, "B2", "Free range, dozen"),
    ("p24", "Gift Card", 2500, "F1", "Store gift card"),
];

pub fn demo_booths() -> Vec<Booth> {
    COUNTERS
        .iter()
        .flat_map(|&(counter, label)| {
            (1..=SLOTS_PER_COUNTER).filter_map(move |slot| {
                let code = BoothCode::new(counter, slot).ok()?;
                Some(
                    Booth::new(code)
                        .with_label(label)
                        .with_image_url(format!("https://img.boothwalk.dev/booths/{code}.jpg")),
                )
            })
        })
        .collect()
}

pub fn demo_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .filter_map(|&(id, name, cents, booth, description)| {
            let mut product = Product::new(
                ProductId::new(id).ok()?,
                name,
                Price::from_cents(cents),
                BoothCode::parse(booth).ok()?,
            )
            .with_in_stock(true);
            if !description.is_empty() {
                product = product.with_description(description);
            }
            Some(product)
        })
        .collect()
}

pub fn demo_snapshot() -> Result<CatalogSnapshot, IdError> {
    let store = StoreInfo {
        id: StoreId::new(DEMO_STORE_ID)?,
        name: "Boothwalk Demo Market".to_owned(),
        address: Some("12 Market Square".to_owned()),
    };
    Ok(CatalogSnapshot {
        store,
        booths: demo_booths(),
        products: demo_products(),
    })
}

/// In-memory catalog and recommender serving the demo store.
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    snapshot: CatalogSnapshot,
}

impl DemoCatalog {
    pub fn new() -> Result<Self, IdError> {
        Ok(Self {
            snapshot: demo_snapshot()?,
        })
    }

    pub fn store_id(&self) -> &StoreId {
        &self.snapshot.store.id
    }

    fn check_store(&self, store_id: &StoreId) -> Result<(), UpstreamError> {
        if store_id == self.store_id() {
            Ok(())
        } else {
            Err(UpstreamError::failed(
                Upstream::Catalog,
                format!("unknown store {store_id}"),
            ))
        }
    }
}

impl CatalogService for DemoCatalog {
    fn fetch_store(&self, store_id: &StoreId) -> Result<StoreInfo, UpstreamError> {
        self.check_store(store_id)?;
        Ok(self.snapshot.store.clone())
    }

    fn fetch_booths(&self, store_id: &StoreId) -> Result<Vec<Booth>, UpstreamError> {
        self.check_store(store_id)?;
        Ok(self.snapshot.booths.clone())
    }

    fn fetch_products(&self, store_id: &StoreId) -> Result<Vec<Product>, UpstreamError> {
        self.check_store(store_id)?;
        Ok(self.snapshot.products.clone())
    }
}

impl RecommendationService for DemoCatalog {
    fn recommend(&self, request: &RecommendationRequest) -> Result<Vec<String>, UpstreamError> {
        let text = match request.period {
            RecommendationPeriod::Today => {
                "Bananas, Whole Milk, Sourdough Loaf, Eggs, Coffee Beans"
            }
            RecommendationPeriod::Week => "Spaghetti, Tomato Sauce, Rice, Olive Oil, Dish Soap",
        };
        Ok(parse_suggestions(text)
            .into_iter()
            .take(request.count)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{demo_booths, demo_products, DemoCatalog, PRODUCTS};
    use crate::model::StoreId;
    use crate::store::{fetch_snapshot, CatalogService};

    #[test]
    fn every_literal_converts() {
        assert_eq!(demo_booths().len(), 20);
        assert_eq!(demo_products().len(), PRODUCTS.len());
    }

    #[test]
    fn booth_images_use_display_code() {
        let booths = demo_booths();
        assert_eq!(
            booths[5].image_url(),
            Some("https://img.boothwalk.dev/booths/B2.jpg")
        );
    }

    #[test]
    fn demo_catalog_serves_only_its_store() {
        let catalog = DemoCatalog::new().unwrap();
        let snapshot = fetch_snapshot(&catalog, catalog.store_id()).unwrap();
        assert_eq!(snapshot.products.len(), PRODUCTS.len());

        let other = StoreId::new("elsewhere").unwrap();
        assert!(catalog.fetch_booths(&other).is_err());
    }
}
