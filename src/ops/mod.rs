// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Discrete events applied to a [`StoreVisit`].
//!
//! Every user gesture and every collaborator completion is a [`VisitOp`]. Ops are applied one at
//! a time on the thread that owns the visit and report a coarse [`Delta`] the host can use to
//! decide what to redraw.

use tracing::{debug, info, warn};

use crate::error::{EntityKind, NavError, UpstreamError};
use crate::model::{
    Checklist, OrderDraft, ProductId, RequestChannel, RequestToken, SelectionSet,
};
use crate::query::route::Route;
use crate::recommend::match_recommendations;
use crate::session::StoreVisit;
use crate::store::CatalogSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum VisitOp {
    ToggleProduct {
        product_id: ProductId,
    },
    ClearSelection,
    /// Typed input has no token; dictated input carries the one from
    /// [`StoreVisit::begin_dictation`].
    SetSearchQuery {
        text: String,
        token: Option<RequestToken>,
    },
    /// Recognition for the dictation started with `token` timed out or failed.
    DictationFailed {
        token: RequestToken,
        error: UpstreamError,
    },
    RequestMore,
    SentinelVisibility {
        visible: bool,
    },
    CatalogLoaded {
        token: RequestToken,
        result: Result<CatalogSnapshot, UpstreamError>,
    },
    RecommendationReceived {
        token: RequestToken,
        result: Result<Vec<String>, UpstreamError>,
    },
    StartCheckout,
    ToggleChecked {
        product_id: ProductId,
    },
    ConfirmPurchase,
    LeaveStore,
}

/// What an applied op changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub selected: Vec<ProductId>,
    pub deselected: Vec<ProductId>,
    pub query_changed: bool,
    pub window_changed: bool,
    pub catalog_changed: bool,
    pub checklist_changed: bool,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
            && self.deselected.is_empty()
            && !self.query_changed
            && !self.window_changed
            && !self.catalog_changed
            && !self.checklist_changed
    }

    pub fn selection_changed(&self) -> bool {
        !self.selected.is_empty() || !self.deselected.is_empty()
    }

    fn record_selection(&mut self, before: &SelectionSet, after: &SelectionSet) {
        self.selected = after
            .iter()
            .filter(|id| !before.is_selected(id))
            .cloned()
            .collect();
        self.deselected = before
            .iter()
            .filter(|id| !after.is_selected(id))
            .cloned()
            .collect();
    }
}

/// Payload for the checkout component: the selection in walking order plus the route itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutHandoff {
    pub selection: Vec<ProductId>,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Delta),
    /// A completion arrived for a request that was superseded; nothing changed.
    Discarded { token: RequestToken },
    Handoff(CheckoutHandoff),
    Order(OrderDraft),
}

pub fn apply_op(visit: &mut StoreVisit, op: VisitOp) -> Result<Outcome, NavError> {
    let before = visit.selection().clone();
    let mut delta = Delta::default();

    match op {
        VisitOp::ToggleProduct { product_id } => {
            let known = visit
                .products()
                .iter()
                .any(|product| product.product_id() == &product_id);
            if !known && !visit.selection().is_selected(&product_id) {
                return Err(NavError::not_found(EntityKind::Product, product_id.as_str()));
            }
            visit.selection_mut().toggle(product_id);
        }
        VisitOp::ClearSelection => visit.selection_mut().clear(),
        VisitOp::SetSearchQuery { text, token } => {
            match token {
                Some(token) => {
                    if let Err(err) = visit.requests_mut().accept(token) {
                        return Ok(discard(token, &err));
                    }
                }
                None => visit.requests_mut().supersede(RequestChannel::Search),
            }
            delta.query_changed = visit.cursor().query() != text;
            visit.cursor_mut().set_search_query(text);
            delta.window_changed = true;
        }
        VisitOp::DictationFailed { token, error } => {
            if let Err(err) = visit.requests_mut().accept(token) {
                return Ok(discard(token, &err));
            }
            return Err(upstream_failure(error));
        }
        VisitOp::RequestMore => {
            delta.window_changed = visit.cursor_mut().request_more();
        }
        VisitOp::SentinelVisibility { visible } => {
            delta.window_changed = visit.cursor_mut().observe_sentinel(visible);
        }
        VisitOp::CatalogLoaded { token, result } => {
            if let Err(err) = visit.requests_mut().accept(token) {
                return Ok(discard(token, &err));
            }
            let snapshot = result.map_err(upstream_failure)?;
            let booths = snapshot.booths.len();
            let products = snapshot.products.len();
            let duplicates = visit.install_snapshot(snapshot);
            for code in &duplicates {
                warn!(booth = %code, "duplicate booth in catalog; keeping the first");
            }
            info!(store = %visit.store_id(), booths, products, "catalog installed");
            delta.catalog_changed = true;
            delta.window_changed = true;
        }
        VisitOp::RecommendationReceived { token, result } => {
            if let Err(err) = visit.requests_mut().accept(token) {
                return Ok(discard(token, &err));
            }
            let names = result.map_err(upstream_failure)?;
            let ids = match_recommendations(&names, visit.products());
            info!(
                suggested = names.len(),
                matched = ids.len(),
                "applying recommendations"
            );
            visit.selection_mut().replace(ids);
        }
        VisitOp::StartCheckout => {
            let route = visit.route();
            if route.is_empty() {
                return Err(NavError::validation(
                    "select at least one product before checking out",
                ));
            }
            let selection = route.product_ids().cloned().collect::<Vec<_>>();
            let checklist = Checklist::build(selection.iter(), visit.products());
            info!(items = checklist.items().len(), steps = route.len(), "checkout started");
            visit.set_checklist(Some(checklist));
            return Ok(Outcome::Handoff(CheckoutHandoff { selection, route }));
        }
        VisitOp::ToggleChecked { product_id } => {
            let checklist = visit.checklist_mut().ok_or_else(|| {
                NavError::not_found(EntityKind::ChecklistItem, product_id.as_str())
            })?;
            checklist.toggle_checked(&product_id)?;
            delta.checklist_changed = true;
        }
        VisitOp::ConfirmPurchase => {
            let store_id = visit.store_id().clone();
            let checklist = visit
                .checklist()
                .ok_or_else(|| NavError::validation("checkout has not been started"))?;
            let order = checklist.confirm(&store_id)?;
            info!(
                store = %store_id,
                items = order.items.len(),
                total = %order.total_money,
                "purchase confirmed"
            );
            visit.selection_mut().clear();
            visit.set_checklist(None);
            return Ok(Outcome::Order(order));
        }
        VisitOp::LeaveStore => {
            visit.requests_mut().supersede_all();
            delta.checklist_changed = visit.checklist().is_some();
            visit.set_checklist(None);
            visit.selection_mut().clear();
            delta.query_changed = !visit.cursor().query().is_empty();
            visit.cursor_mut().set_search_query("");
            delta.window_changed = true;
        }
    }

    delta.record_selection(&before, visit.selection());
    if delta.selection_changed() && visit.checklist().is_some() {
        info!("selection changed; checkout abandoned");
        visit.set_checklist(None);
        delta.checklist_changed = true;
    }
    Ok(Outcome::Applied(delta))
}

/// Applies `ops` in order and stops at the first error.
pub fn apply_ops(
    visit: &mut StoreVisit,
    ops: impl IntoIterator<Item = VisitOp>,
) -> Result<Vec<Outcome>, NavError> {
    ops.into_iter().map(|op| apply_op(visit, op)).collect()
}

fn discard(token: RequestToken, err: &NavError) -> Outcome {
    debug!(token = %token, reason = %err, "discarding stale response");
    Outcome::Discarded { token }
}

fn upstream_failure(err: UpstreamError) -> NavError {
    warn!(service = %err.service(), error = %err, "upstream call failed; keeping previous state");
    NavError::Upstream(err)
}
