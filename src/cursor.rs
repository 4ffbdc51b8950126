// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Filtered, paginated window over the store catalog.
//!
//! The cursor owns the last known-good product list. The visible window is
//! `page_number * page_size` items of the filtered list; it grows one page per request and
//! snaps back to the first page whenever the search query changes.

use tracing::debug;

use crate::model::Product;
use crate::query::catalog::{filter_products, CatalogFilter, SearchMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// The window already covers every filtered product.
    Idle,
    /// More pages are available.
    Loadable,
}

/// Turns level-triggered "sentinel is visible" observations into one signal per transition
/// into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentinelLatch {
    in_view: bool,
}

impl SentinelLatch {
    pub fn observe(&mut self, visible: bool) -> bool {
        let entered = visible && !self.in_view;
        self.in_view = visible;
        entered
    }

    pub fn reset(&mut self) {
        self.in_view = false;
    }
}

#[derive(Debug, Clone)]
pub struct CatalogCursor {
    products: Vec<Product>,
    query: String,
    mode: SearchMode,
    fuzzy_threshold: f64,
    filter: CatalogFilter,
    filtered: Vec<usize>,
    page_number: usize,
    page_size: usize,
    sentinel: SentinelLatch,
}

impl CatalogCursor {
    /// `page_size` is clamped to at least one item.
    pub fn new(page_size: usize, mode: SearchMode, fuzzy_threshold: f64) -> Self {
        Self {
            products: Vec::new(),
            query: String::new(),
            mode,
            fuzzy_threshold,
            filter: CatalogFilter::all(),
            filtered: Vec::new(),
            page_number: 1,
            page_size: page_size.max(1),
            sentinel: SentinelLatch::default(),
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.replace_products(products);
        self
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Swaps the underlying catalog. The query and page number are kept.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.refilter();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Replaces the active filter and resets the window to the first page.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.filter = CatalogFilter::compile(&self.query, self.mode, self.fuzzy_threshold);
        if let Some(err) = self.filter.error() {
            debug!(query = %self.query, error = %err, "search query matches nothing");
        }
        self.page_number = 1;
        self.sentinel.reset();
        self.refilter();
    }

    pub fn set_search_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
        let query = std::mem::take(&mut self.query);
        self.set_search_query(query);
    }

    /// Validation problem with the current query, if any.
    pub fn filter_error(&self) -> Option<&str> {
        self.filter.error()
    }

    /// Grows the window by one page. Returns `false` (and changes nothing) when idle.
    pub fn request_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page_number += 1;
        debug!(page = self.page_number, "catalog window grew");
        true
    }

    /// Feeds one scroll-proximity observation; at most one page per transition into view.
    pub fn observe_sentinel(&mut self, visible: bool) -> bool {
        if self.sentinel.observe(visible) {
            self.request_more()
        } else {
            false
        }
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.filtered
            .iter()
            .take(self.window_bound())
            .map(|&idx| &self.products[idx])
            .collect()
    }

    pub fn has_more(&self) -> bool {
        self.window_bound() < self.filtered.len()
    }

    pub fn state(&self) -> CursorState {
        if self.has_more() {
            CursorState::Loadable
        } else {
            CursorState::Idle
        }
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn window_bound(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    fn refilter(&mut self) {
        self.filtered = filter_products(&self.products, &self.filter);
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{CatalogCursor, CursorState, SentinelLatch};
    use crate::model::{BoothCode, Price, Product, ProductId};
    use crate::query::catalog::SearchMode;

    fn product(idx: usize, name: &str, booth: &str) -> Product {
        Product::new(
            ProductId::new(format!("p{idx}")).expect("product id"),
            name,
            Price::from_cents(100),
            BoothCode::parse(booth).expect("booth code"),
        )
    }

    /// 25 products; every fifth one is a milk product at booth B2.
    #[fixture]
    fn cursor() -> CatalogCursor {
        let products = (0..25)
            .map(|idx| {
                if idx % 5 == 0 {
                    product(idx, &format!("Milk {idx}"), "B2")
                } else {
                    product(idx, &format!("Snack {idx}"), "A1")
                }
            })
            .collect();
        CatalogCursor::new(10, SearchMode::Substring, 0.8).with_products(products)
    }

    fn visible_ids(cursor: &CatalogCursor) -> Vec<String> {
        cursor
            .visible_products()
            .iter()
            .map(|p| p.product_id().to_string())
            .collect()
    }

    #[rstest]
    fn first_page_is_visible(cursor: CatalogCursor) {
        assert_eq!(cursor.page_number(), 1);
        assert_eq!(cursor.visible_products().len(), 10);
        assert_eq!(cursor.state(), CursorState::Loadable);
        assert_eq!(visible_ids(&cursor)[0], "p0");
    }

    #[rstest]
    fn request_more_grows_until_idle(mut cursor: CatalogCursor) {
        assert!(cursor.request_more());
        assert_eq!(cursor.visible_products().len(), 20);
        assert!(cursor.request_more());
        assert_eq!(cursor.visible_products().len(), 25);
        assert_eq!(cursor.state(), CursorState::Idle);

        let before = visible_ids(&cursor);
        assert!(!cursor.request_more());
        assert!(!cursor.request_more());
        assert_eq!(cursor.page_number(), 3);
        assert_eq!(visible_ids(&cursor), before);
    }

    #[rstest]
    fn search_filters_and_resets_page(mut cursor: CatalogCursor) {
        cursor.request_more();
        assert_eq!(cursor.page_number(), 2);

        cursor.set_search_query("milk");
        assert_eq!(cursor.page_number(), 1);
        assert_eq!(cursor.filtered_count(), 5);
        assert!(cursor
            .visible_products()
            .iter()
            .all(|p| p.name().to_lowercase().contains("milk")));
        assert_eq!(cursor.state(), CursorState::Idle);
    }

    #[rstest]
    fn search_matches_booth_ids(mut cursor: CatalogCursor) {
        cursor.set_search_query("b2");
        assert_eq!(visible_ids(&cursor), vec!["p0", "p5", "p10", "p15", "p20"]);
    }

    #[rstest]
    fn widening_the_query_makes_pages_loadable_again(mut cursor: CatalogCursor) {
        cursor.set_search_query("milk");
        assert_eq!(cursor.state(), CursorState::Idle);

        cursor.set_search_query("");
        assert_eq!(cursor.state(), CursorState::Loadable);
        assert_eq!(cursor.visible_products().len(), 10);
    }

    #[rstest]
    fn sentinel_pages_once_per_transition(mut cursor: CatalogCursor) {
        assert!(cursor.observe_sentinel(true));
        assert!(!cursor.observe_sentinel(true));
        assert!(!cursor.observe_sentinel(true));
        assert_eq!(cursor.page_number(), 2);

        assert!(!cursor.observe_sentinel(false));
        assert!(cursor.observe_sentinel(true));
        assert_eq!(cursor.page_number(), 3);

        cursor.observe_sentinel(false);
        assert!(!cursor.observe_sentinel(true));
        assert_eq!(cursor.page_number(), 3);
    }

    #[rstest]
    fn invalid_query_is_absorbed(mut cursor: CatalogCursor) {
        cursor.set_search_mode(SearchMode::Regex);
        cursor.set_search_query("[unclosed");
        assert!(cursor.filter_error().is_some());
        assert!(cursor.visible_products().is_empty());
        assert_eq!(cursor.state(), CursorState::Idle);
    }

    #[rstest]
    fn replacing_products_keeps_window(mut cursor: CatalogCursor) {
        cursor.request_more();
        let smaller = (0..3).map(|idx| product(idx, "Bread", "C1")).collect();
        cursor.replace_products(smaller);
        assert_eq!(cursor.page_number(), 2);
        assert_eq!(cursor.visible_products().len(), 3);
    }

    #[test]
    fn latch_ignores_repeated_levels() {
        let mut latch = SentinelLatch::default();
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let cursor = CatalogCursor::new(0, SearchMode::Substring, 0.8);
        assert_eq!(cursor.page_size(), 1);
    }
}
