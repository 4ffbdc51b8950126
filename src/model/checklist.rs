// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::error::{EntityKind, NavError};

use super::booth::BoothCode;
use super::ids::{ProductId, StoreId};
use super::product::{Price, Product};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    product_id: ProductId,
    name: String,
    price: Price,
    booth: BoothCode,
    image_url: Option<String>,
    checked: bool,
}

impl ChecklistItem {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.product_id().clone(),
            name: product.name().to_owned(),
            price: product.price(),
            booth: product.booth(),
            image_url: product.image_url().map(str::to_owned),
            checked: false,
        }
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

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

/// The in-store pick list built at checkout: one entry per selected product, checked off as the
/// shopper puts it in the basket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Builds the list in `order`; ids that do not resolve to a product are skipped.
    pub fn build<'a>(
        order: impl IntoIterator<Item = &'a ProductId>,
        products: &[Product],
    ) -> Self {
        let items = order
            .into_iter()
            .filter_map(|id| products.iter().find(|p| p.product_id() == id))
            .map(ChecklistItem::from_product)
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flips the checked flag. Returns the new state.
    pub fn toggle_checked(&mut self, product_id: &ProductId) -> Result<bool, NavError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.product_id == product_id)
            .ok_or_else(|| NavError::not_found(EntityKind::ChecklistItem, product_id.as_str()))?;
        item.checked = !item.checked;
        Ok(item.checked)
    }

    pub fn any_checked(&self) -> bool {
        self.items.iter().any(|item| item.checked)
    }

    pub fn checked_total(&self) -> Price {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.price)
            .sum()
    }

    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|item| !item.checked).count()
    }

    /// Produces the purchase record for the checked items.
    pub fn confirm(&self, store_id: &StoreId) -> Result<OrderDraft, NavError> {
        if !self.any_checked() {
            return Err(NavError::validation(
                "check at least one item before confirming the purchase",
            ));
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.checked)
            .map(|item| OrderLine {
                product_id: item.product_id.clone(),
                name: item.name.clone(),
                price: item.price,
                booth: item.booth,
                image_url: item.image_url.clone().unwrap_or_default(),
            })
            .collect();

        Ok(OrderDraft {
            store_id: store_id.clone(),
            total_money: self.checked_total(),
            items,
        })
    }
}

/// Payload handed to the external order-history/checkout component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    pub store_id: StoreId,
    pub total_money: Price,
    pub items: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub booth: BoothCode,
    pub image_url: String,
}
