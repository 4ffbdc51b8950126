// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: booths, products, the shopper's selection and checklist.
//!
//! Everything here is plain data with invariants enforced on construction; loosely-typed
//! catalog records are converted by [`crate::store::intake`] before they reach these types.

pub mod booth;
pub mod checklist;
pub mod ids;
pub mod product;
pub mod registry;
pub mod request;
pub mod selection;

pub use booth::{compare_booth_ids, compare_booth_order, Booth, BoothCode, BoothCodeError};
pub use checklist::{Checklist, ChecklistItem, OrderDraft, OrderLine};
pub use ids::{Id, IdError, ProductId, StoreId};
pub use product::{Price, PriceError, Product};
pub use registry::BoothRegistry;
pub use request::{RequestChannel, RequestToken, RequestTracker};
pub use selection::SelectionSet;
