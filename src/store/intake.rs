// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundary validation for catalog records.
//!
//! The backend hands out loosely-shaped JSON: ids may be strings or numbers, prices may be
//! numbers or numeric strings, and field names vary between revisions of the owner tooling.
//! Each record is converted on its own; anything that cannot be made into a valid [`Booth`] or
//! [`Product`] is quarantined with a reason instead of failing the whole load.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::model::{
    Booth, BoothCode, BoothCodeError, IdError, Price, PriceError, Product, ProductId,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntakeError {
    #[error("record is malformed: {0}")]
    Malformed(String),
    #[error("record is missing `{0}`")]
    MissingField(&'static str),
    #[error("`{field}` must be a string or number")]
    WrongType { field: &'static str },
    #[error("invalid id: {0}")]
    InvalidId(#[from] IdError),
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),
    #[error("price {0:?} is not a number")]
    PriceNotNumeric(String),
    #[error("invalid booth: {0}")]
    InvalidBooth(#[from] BoothCodeError),
    #[error("duplicate product id {0:?}")]
    DuplicateProduct(String),
    #[error("duplicate booth {0}")]
    DuplicateBooth(BoothCode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quarantined {
    /// Position of the record in the source array.
    pub index: usize,
    pub reason: IntakeError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Intake<T> {
    pub accepted: Vec<T>,
    pub quarantined: Vec<Quarantined>,
}

impl<T> Default for Intake<T> {
    fn default() -> Self {
        Self {
            accepted: Vec::new(),
            quarantined: Vec::new(),
        }
    }
}

impl<T> Intake<T> {
    fn quarantine(&mut self, kind: &'static str, index: usize, reason: IntakeError) {
        warn!(record = kind, index, reason = %reason, "quarantined catalog record");
        self.quarantined.push(Quarantined { index, reason });
    }
}

#[derive(Debug, Deserialize)]
struct RawBooth {
    #[serde(alias = "name", alias = "code")]
    id: Option<String>,
    #[serde(alias = "description", alias = "title")]
    label: Option<String>,
    #[serde(alias = "boothImage", alias = "image", alias = "imageUrl")]
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    id: Option<Value>,
    name: Option<String>,
    price: Option<Value>,
    #[serde(alias = "location", alias = "booth_id")]
    booth: Option<String>,
    description: Option<String>,
    #[serde(alias = "image", alias = "imageUrl")]
    image_url: Option<String>,
    #[serde(alias = "inStock")]
    in_stock: Option<bool>,
}

pub fn intake_booths(records: Vec<Value>) -> Intake<Booth> {
    let mut intake = Intake::default();
    let mut seen = BTreeSet::new();

    for (index, record) in records.into_iter().enumerate() {
        match booth_from_value(record) {
            Ok(booth) if !seen.insert(booth.code()) => {
                intake.quarantine("booth", index, IntakeError::DuplicateBooth(booth.code()));
            }
            Ok(booth) => intake.accepted.push(booth),
            Err(reason) => intake.quarantine("booth", index, reason),
        }
    }

    intake
}

pub fn intake_products(records: Vec<Value>) -> Intake<Product> {
    let mut intake = Intake::default();
    let mut seen = BTreeSet::new();

    for (index, record) in records.into_iter().enumerate() {
        match product_from_value(record) {
            Ok(product) if seen.contains(product.product_id()) => {
                let id = product.product_id().to_string();
                intake.quarantine("product", index, IntakeError::DuplicateProduct(id));
            }
            Ok(product) => {
                seen.insert(product.product_id().clone());
                intake.accepted.push(product);
            }
            Err(reason) => intake.quarantine("product", index, reason),
        }
    }

    intake
}

fn booth_from_value(value: Value) -> Result<Booth, IntakeError> {
    let raw: RawBooth =
        serde_json::from_value(value).map_err(|err| IntakeError::Malformed(err.to_string()))?;

    let id = raw.id.ok_or(IntakeError::MissingField("id"))?;
    let mut booth = Booth::new(BoothCode::parse(&id)?);
    if let Some(label) = non_blank(raw.label) {
        booth = booth.with_label(label);
    }
    if let Some(image_url) = non_blank(raw.image_url) {
        booth = booth.with_image_url(image_url);
    }
    Ok(booth)
}

fn product_from_value(value: Value) -> Result<Product, IntakeError> {
    let raw: RawProduct =
        serde_json::from_value(value).map_err(|err| IntakeError::Malformed(err.to_string()))?;

    let id = match raw.id {
        Some(Value::String(id)) => id,
        Some(Value::Number(id)) => id.to_string(),
        Some(_) => return Err(IntakeError::WrongType { field: "id" }),
        None => return Err(IntakeError::MissingField("id")),
    };
    let product_id = ProductId::new(id)?;

    let name = non_blank(raw.name).ok_or(IntakeError::MissingField("name"))?;

    let amount = match raw.price {
        Some(Value::Number(n)) => n.as_f64().ok_or(IntakeError::WrongType { field: "price" })?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| IntakeError::PriceNotNumeric(s.clone()))?,
        Some(_) => return Err(IntakeError::WrongType { field: "price" }),
        None => return Err(IntakeError::MissingField("price")),
    };
    let price = Price::from_decimal(amount)?;

    let booth = raw.booth.ok_or(IntakeError::MissingField("booth"))?;
    let booth = BoothCode::parse(&booth)?;

    let mut product = Product::new(product_id, name, price, booth);
    if let Some(description) = non_blank(raw.description) {
        product = product.with_description(description);
    }
    if let Some(image_url) = non_blank(raw.image_url) {
        product = product.with_image_url(image_url);
    }
    if let Some(in_stock) = raw.in_stock {
        product = product.with_in_stock(in_stock);
    }
    Ok(product)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
