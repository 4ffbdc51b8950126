// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::config::NavigatorConfig;
use crate::cursor::CatalogCursor;
use crate::model::{
    BoothCode, BoothRegistry, Checklist, Product, RequestChannel, RequestToken, RequestTracker,
    SelectionSet, StoreId,
};
use crate::query::route::{plan_route, Route, RouteOptions};
use crate::recommend::{build_corpus, RecommendationPeriod, RecommendationRequest};
use crate::store::{CatalogSnapshot, StoreInfo};

/// Everything the navigator knows about one shopper in one store.
///
/// All mutation goes through [`crate::ops::apply_op`]; the route is never stored and is planned
/// from the current selection on every call to [`StoreVisit::route`].
#[derive(Debug, Clone)]
pub struct StoreVisit {
    store: StoreInfo,
    registry: BoothRegistry,
    cursor: CatalogCursor,
    selection: SelectionSet,
    checklist: Option<Checklist>,
    requests: RequestTracker,
    route_options: RouteOptions,
    recommendation_count: usize,
}

impl StoreVisit {
    /// A visit with no catalog yet; call [`StoreVisit::begin_catalog_fetch`] to load one.
    pub fn new(store_id: StoreId, config: &NavigatorConfig) -> Self {
        Self {
            store: StoreInfo::unnamed(store_id),
            registry: BoothRegistry::default(),
            cursor: CatalogCursor::new(
                config.page_size,
                config.search_mode,
                config.fuzzy_threshold,
            ),
            selection: SelectionSet::new(),
            checklist: None,
            requests: RequestTracker::default(),
            route_options: config.route_options(),
            recommendation_count: config.recommendation_count,
        }
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot, config: &NavigatorConfig) -> Self {
        let mut visit = Self::new(snapshot.store.id.clone(), config);
        visit.install_snapshot(snapshot);
        visit
    }

    pub fn store(&self) -> &StoreInfo {
        &self.store
    }

    pub fn store_id(&self) -> &StoreId {
        &self.store.id
    }

    pub fn registry(&self) -> &BoothRegistry {
        &self.registry
    }

    pub fn cursor(&self) -> &CatalogCursor {
        &self.cursor
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut CatalogCursor {
        &mut self.cursor
    }

    pub fn products(&self) -> &[Product] {
        self.cursor.products()
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.cursor.visible_products()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    pub fn checklist(&self) -> Option<&Checklist> {
        self.checklist.as_ref()
    }

    pub(crate) fn checklist_mut(&mut self) -> Option<&mut Checklist> {
        self.checklist.as_mut()
    }

    pub(crate) fn set_checklist(&mut self, checklist: Option<Checklist>) {
        self.checklist = checklist;
    }

    pub(crate) fn requests_mut(&mut self) -> &mut RequestTracker {
        &mut self.requests
    }

    pub fn is_pending(&self, channel: RequestChannel) -> bool {
        self.requests.is_pending(channel)
    }

    pub fn route_options(&self) -> &RouteOptions {
        &self.route_options
    }

    pub fn route(&self) -> Route {
        plan_route(
            &self.selection,
            self.cursor.products(),
            &self.registry,
            &self.route_options,
        )
    }

    /// Replaces store metadata, booths and products. Returns booth codes dropped as duplicates.
    ///
    /// The selection survives: ids that no longer resolve simply drop out of the route.
    pub(crate) fn install_snapshot(&mut self, snapshot: CatalogSnapshot) -> Vec<BoothCode> {
        let (registry, duplicates) = BoothRegistry::from_booths(snapshot.booths);
        self.store = snapshot.store;
        self.registry = registry;
        self.cursor.replace_products(snapshot.products);
        duplicates
    }

    /// Starts a catalog (re)load. Any earlier load still in flight becomes stale.
    pub fn begin_catalog_fetch(&mut self) -> RequestToken {
        self.requests.issue(RequestChannel::Catalog)
    }

    /// Starts a dictated search. The recognised text must come back with this token.
    pub fn begin_dictation(&mut self) -> RequestToken {
        self.requests.issue(RequestChannel::Search)
    }

    pub fn begin_recommendation(&mut self, period: RecommendationPeriod) -> RecommendationRequest {
        RecommendationRequest {
            token: self.requests.issue(RequestChannel::Recommendation),
            store_id: self.store.id.clone(),
            period,
            count: self.recommendation_count,
            corpus: build_corpus(self.cursor.products()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StoreVisit;
    use crate::config::NavigatorConfig;
    use crate::demo::demo_snapshot;
    use crate::model::{RequestChannel, StoreId};
    use crate::recommend::RecommendationPeriod;

    fn demo_visit() -> StoreVisit {
        StoreVisit::from_snapshot(demo_snapshot().unwrap(), &NavigatorConfig::default())
    }

    #[test]
    fn new_visit_is_empty() {
        let visit = StoreVisit::new(StoreId::new("s1").unwrap(), &NavigatorConfig::default());
        assert_eq!(visit.store().name, "s1");
        assert!(visit.products().is_empty());
        assert!(visit.route().is_empty());
        assert!(visit.checklist().is_none());
    }

    #[test]
    fn snapshot_fills_registry_and_catalog() {
        let visit = demo_visit();
        assert_eq!(visit.registry().len(), 20);
        assert_eq!(visit.visible_products().len(), 10);
    }

    #[test]
    fn recommendation_request_carries_corpus_and_count() {
        let mut visit = demo_visit();
        let request = visit.begin_recommendation(RecommendationPeriod::Today);
        assert_eq!(request.count, 5);
        assert_eq!(request.store_id, *visit.store_id());
        assert_eq!(request.corpus.lines().count(), visit.products().len());
        assert!(visit.is_pending(RequestChannel::Recommendation));
    }

    #[test]
    fn new_fetch_supersedes_older_one() {
        let mut visit = StoreVisit::new(StoreId::new("s1").unwrap(), &NavigatorConfig::default());
        let first = visit.begin_catalog_fetch();
        let second = visit.begin_catalog_fetch();
        assert!(first.seq() < second.seq());
        assert!(visit.requests_mut().accept(first).is_err());
        assert!(visit.requests_mut().accept(second).is_ok());
    }
}
