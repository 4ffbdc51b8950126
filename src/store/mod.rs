// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catalog collaborators.
//!
//! [`CatalogService`] is the seam to whatever serves booths and products for a store. The only
//! implementation shipped here is [`StoreFolder`], which reads a directory of JSON exports.

pub mod folder;
pub mod intake;

pub use folder::{FolderRecommender, StoreError, StoreFolder};
pub use intake::{intake_booths, intake_products, Intake, IntakeError, Quarantined};

use crate::error::UpstreamError;
use crate::model::{Booth, Product, StoreId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub id: StoreId,
    pub name: String,
    pub address: Option<String>,
}

impl StoreInfo {
    /// Placeholder used when a store publishes no metadata: the id doubles as the name.
    pub fn unnamed(id: StoreId) -> Self {
        Self {
            name: id.to_string(),
            id,
            address: None,
        }
    }
}

/// One consistent read of a store: the booth map and its products.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub store: StoreInfo,
    pub booths: Vec<Booth>,
    pub products: Vec<Product>,
}

/// Source of store metadata, booths and products.
///
/// Implementations validate their records before returning them; a failed call is reported as an
/// [`UpstreamError`] and never as partial data.
pub trait CatalogService {
    fn fetch_store(&self, store_id: &StoreId) -> Result<StoreInfo, UpstreamError>;
    fn fetch_booths(&self, store_id: &StoreId) -> Result<Vec<Booth>, UpstreamError>;
    fn fetch_products(&self, store_id: &StoreId) -> Result<Vec<Product>, UpstreamError>;
}

pub fn fetch_snapshot<S>(service: &S, store_id: &StoreId) -> Result<CatalogSnapshot, UpstreamError>
where
    S: CatalogService + ?Sized,
{
    Ok(CatalogSnapshot {
        store: service.fetch_store(store_id)?,
        booths: service.fetch_booths(store_id)?,
        products: service.fetch_products(store_id)?,
    })
}
