// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boothwalk: in-store navigation core.
//!
//! Resolves booth codes on a counter/slot grid, turns a shopper's product selection into an
//! ordered walking route, and keeps a filtered, paginated window over the store catalog. Host
//! UIs drive a [`session::StoreVisit`] with [`ops::VisitOp`] events; catalog and recommendation
//! backends plug in through [`store::CatalogService`] and [`recommend::RecommendationService`].

pub mod config;
pub mod cursor;
pub mod demo;
pub mod error;
pub mod logging;
pub mod model;
pub mod ops;
pub mod query;
pub mod recommend;
pub mod session;
pub mod store;
