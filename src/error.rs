// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Error taxonomy shared by the navigation core.
//!
//! None of these are fatal: callers degrade to "show nothing new" and keep the last good state.

use std::fmt;

use thiserror::Error;

use crate::model::RequestToken;

/// Which kind of reference failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Booth,
    Product,
    ChecklistItem,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Booth => "booth",
            Self::Product => "product",
            Self::ChecklistItem => "checklist item",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External collaborators the core talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    Catalog,
    Recommendation,
    Voice,
}

impl Upstream {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Recommendation => "recommendation",
            Self::Voice => "voice",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed or silent collaborator. Timeouts and error responses are handled identically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("{service} service did not respond")]
    NoResponse { service: Upstream },
    #[error("{service} service failed: {message}")]
    Failed { service: Upstream, message: String },
}

impl UpstreamError {
    pub fn failed(service: Upstream, message: impl Into<String>) -> Self {
        Self::Failed {
            service,
            message: message.into(),
        }
    }

    pub fn service(&self) -> Upstream {
        match self {
            Self::NoResponse { service } | Self::Failed { service, .. } => *service,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("{kind} {id:?} not found")]
    NotFound { kind: EntityKind, id: String },
    #[error("invalid input: {message}")]
    Validation { message: String },
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("response for request {token} was superseded")]
    StaleResponse { token: RequestToken },
}

impl NavError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
