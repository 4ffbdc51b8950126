// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::{Upstream, UpstreamError};
use crate::model::{Booth, Product, StoreId};
use crate::recommend::{
    parse_suggestions, RecommendationPeriod, RecommendationRequest, RecommendationService,
};

use super::intake::{intake_booths, intake_products, Intake};
use super::{CatalogService, StoreInfo};

const STORE_FILENAME: &str = "store.json";
const BOOTHS_FILENAME: &str = "booths.json";
const PRODUCTS_FILENAME: &str = "products.json";
const RECOMMENDATIONS_FILENAME: &str = "recommendations.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl StoreError {
    fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Default, Deserialize)]
struct StoreMeta {
    #[serde(default)]
    id: Option<StoreId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RecommendationFile {
    #[serde(default)]
    today: Option<String>,
    #[serde(default)]
    week: Option<String>,
}

/// A directory of per-store catalog exports.
///
/// ```text
/// <root>/<store_id>/store.json            optional {"id", "name", "address"}
/// <root>/<store_id>/booths.json           array of booth records
/// <root>/<store_id>/products.json         array of product records
/// <root>/<store_id>/recommendations.json  optional {"today": "A, B", "week": "C"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFolder {
    root: PathBuf,
}

impl StoreFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store_dir(&self, store_id: &StoreId) -> PathBuf {
        self.root.join(store_id.as_str())
    }

    /// Stores that have a product export, sorted by id.
    pub fn list_stores(&self) -> Result<Vec<StoreId>, StoreError> {
        let entries = fs::read_dir(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut stores = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.join(PRODUCTS_FILENAME).is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            match StoreId::new(name) {
                Ok(id) => stores.push(id),
                Err(err) => debug!(path = ?path, error = %err, "skipping store directory"),
            }
        }
        stores.sort();
        Ok(stores)
    }

    pub fn load_store_info(&self, store_id: &StoreId) -> Result<StoreInfo, StoreError> {
        let path = self.store_dir(store_id).join(STORE_FILENAME);
        let meta = match read_json::<StoreMeta>(&path) {
            Ok(meta) => meta,
            Err(err) if err.is_not_found() => StoreMeta::default(),
            Err(err) => return Err(err),
        };

        if let Some(id) = meta.id.as_ref().filter(|id| *id != store_id) {
            warn!(expected = %store_id, found = %id, "store metadata id does not match its folder");
        }

        let mut info = StoreInfo::unnamed(store_id.clone());
        if let Some(name) = meta.name.filter(|name| !name.trim().is_empty()) {
            info.name = name;
        }
        info.address = meta.address;
        Ok(info)
    }

    pub fn load_booths(&self, store_id: &StoreId) -> Result<Intake<Booth>, StoreError> {
        let path = self.store_dir(store_id).join(BOOTHS_FILENAME);
        let records = read_json::<Vec<Value>>(&path)?;
        Ok(intake_booths(records))
    }

    pub fn load_products(&self, store_id: &StoreId) -> Result<Intake<Product>, StoreError> {
        let path = self.store_dir(store_id).join(PRODUCTS_FILENAME);
        let records = read_json::<Vec<Value>>(&path)?;
        Ok(intake_products(records))
    }

    /// Canned suggestion text for `period`, if the store ships one.
    pub fn load_recommendation(
        &self,
        store_id: &StoreId,
        period: RecommendationPeriod,
    ) -> Result<Option<String>, StoreError> {
        let path = self.store_dir(store_id).join(RECOMMENDATIONS_FILENAME);
        let file = match read_json::<RecommendationFile>(&path) {
            Ok(file) => file,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };
        Ok(match period {
            RecommendationPeriod::Today => file.today,
            RecommendationPeriod::Week => file.week,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn catalog_failure(err: StoreError) -> UpstreamError {
    UpstreamError::failed(Upstream::Catalog, err.to_string())
}

impl CatalogService for StoreFolder {
    fn fetch_store(&self, store_id: &StoreId) -> Result<StoreInfo, UpstreamError> {
        self.load_store_info(store_id).map_err(catalog_failure)
    }

    fn fetch_booths(&self, store_id: &StoreId) -> Result<Vec<Booth>, UpstreamError> {
        let intake = self.load_booths(store_id).map_err(catalog_failure)?;
        info!(
            store = %store_id,
            accepted = intake.accepted.len(),
            quarantined = intake.quarantined.len(),
            "loaded booths"
        );
        Ok(intake.accepted)
    }

    fn fetch_products(&self, store_id: &StoreId) -> Result<Vec<Product>, UpstreamError> {
        let intake = self.load_products(store_id).map_err(catalog_failure)?;
        info!(
            store = %store_id,
            accepted = intake.accepted.len(),
            quarantined = intake.quarantined.len(),
            "loaded products"
        );
        Ok(intake.accepted)
    }
}

/// Offline [`RecommendationService`] answering from `recommendations.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRecommender {
    folder: StoreFolder,
}

impl FolderRecommender {
    pub fn new(folder: StoreFolder) -> Self {
        Self { folder }
    }
}

impl RecommendationService for FolderRecommender {
    fn recommend(&self, request: &RecommendationRequest) -> Result<Vec<String>, UpstreamError> {
        let text = self
            .folder
            .load_recommendation(&request.store_id, request.period)
            .map_err(|err| UpstreamError::failed(Upstream::Recommendation, err.to_string()))?
            .ok_or(UpstreamError::NoResponse {
                service: Upstream::Recommendation,
            })?;
        Ok(parse_suggestions(&text))
    }
}
