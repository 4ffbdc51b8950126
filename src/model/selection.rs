// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::ids::ProductId;

/// Products currently chosen for routing. Order is irrelevant; the route imposes its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    product_ids: BTreeSet<ProductId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the product if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if self.product_ids.remove(&product_id) {
            false
        } else {
            self.product_ids.insert(product_id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.product_ids.clear();
    }

    pub fn is_selected(&self, product_id: &ProductId) -> bool {
        self.product_ids.contains(product_id)
    }

    /// Swaps in a whole new selection; used when recommendations arrive.
    pub fn replace(&mut self, product_ids: impl IntoIterator<Item = ProductId>) {
        self.product_ids = product_ids.into_iter().collect();
    }

    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.product_ids.iter()
    }
}

impl FromIterator<ProductId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            product_ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionSet;
    use crate::model::ids::ProductId;

    fn pid(value: &str) -> ProductId {
        ProductId::new(value).expect("product id")
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(pid("p1")));
        assert!(selection.is_selected(&pid("p1")));
        assert!(!selection.toggle(pid("p1")));
        assert!(!selection.is_selected(&pid("p1")));
        assert!(selection.is_empty());
    }

    #[test]
    fn clear_and_replace() {
        let mut selection: SelectionSet = [pid("p1"), pid("p2")].into_iter().collect();
        assert_eq!(selection.len(), 2);

        selection.replace([pid("p3")]);
        assert!(!selection.is_selected(&pid("p1")));
        assert!(selection.is_selected(&pid("p3")));

        selection.clear();
        assert!(selection.is_empty());
    }
}
