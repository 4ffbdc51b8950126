// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Serialize, Serializer};
use thiserror::Error;

use super::booth::BoothCode;
use super::ids::ProductId;

/// Non-negative price kept in integer cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Converts a decimal amount, rounding to the nearest cent.
    pub fn from_decimal(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if amount < 0.0 {
            return Err(PriceError::Negative(amount));
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(PriceError::TooLarge(amount));
        }
        Ok(Self {
            cents: cents as u64,
        })
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    pub fn as_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    #[error("price must be a finite number")]
    NotFinite,
    #[error("price must not be negative, got {0}")]
    Negative(f64),
    #[error("price {0} is out of range")]
    TooLarge(f64),
}

/// A catalog entry pinned to one booth. Owned by the external catalog; the core only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    product_id: ProductId,
    name: String,
    price: Price,
    booth: BoothCode,
    description: Option<String>,
    image_url: Option<String>,
    in_stock: Option<bool>,
}

impl Product {
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        price: Price,
        booth: BoothCode,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            booth,
            description: None,
            image_url: None,
            in_stock: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn booth(&self) -> BoothCode {
        self.booth
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn in_stock(&self) -> Option<bool> {
        self.in_stock
    }
}

#[cfg(test)]
mod tests {
    use super::{Price, PriceError};

    #[test]
    fn price_rounds_to_cents() {
        assert_eq!(Price::from_decimal(2.499).expect("price").cents(), 250);
        assert_eq!(Price::from_decimal(0.0).expect("price"), Price::ZERO);
        assert_eq!(Price::from_decimal(12.5).expect("price").to_string(), "12.50");
    }

    #[test]
    fn price_rejects_negative_and_nan() {
        assert_eq!(Price::from_decimal(-0.01), Err(PriceError::Negative(-0.01)));
        assert_eq!(Price::from_decimal(f64::NAN), Err(PriceError::NotFinite));
    }

    #[test]
    fn prices_sum() {
        let total: Price = [150, 275, 5].into_iter().map(Price::from_cents).sum();
        assert_eq!(total.to_string(), "4.30");
    }
}
