// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::error::{EntityKind, NavError};

use super::booth::{Booth, BoothCode};

/// The addressable booth space of one store, keyed (and therefore iterated) in walking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoothRegistry {
    booths: BTreeMap<BoothCode, Booth>,
}

impl BoothRegistry {
    /// Builds a registry, keeping the first booth for each code. Returns the codes that were
    /// dropped as duplicates.
    pub fn from_booths(booths: impl IntoIterator<Item = Booth>) -> (Self, Vec<BoothCode>) {
        let mut registry = Self::default();
        let mut duplicates = Vec::new();
        for booth in booths {
            let code = booth.code();
            if registry.booths.contains_key(&code) {
                duplicates.push(code);
                continue;
            }
            registry.booths.insert(code, booth);
        }
        (registry, duplicates)
    }

    pub fn resolve(&self, id: &str) -> Result<&Booth, NavError> {
        BoothCode::parse(id)
            .ok()
            .and_then(|code| self.booths.get(&code))
            .ok_or_else(|| NavError::not_found(EntityKind::Booth, id))
    }

    pub fn resolve_code(&self, code: BoothCode) -> Option<&Booth> {
        self.booths.get(&code)
    }

    pub fn contains(&self, code: BoothCode) -> bool {
        self.booths.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.booths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booth> {
        self.booths.values()
    }

    /// Booths grouped per counter, each row in slot order.
    pub fn counters(&self) -> Vec<(char, Vec<&Booth>)> {
        let mut rows: Vec<(char, Vec<&Booth>)> = Vec::new();
        for booth in self.booths.values() {
            let counter = booth.code().counter();
            match rows.last_mut() {
                Some((current, row)) if *current == counter => row.push(booth),
                _ => rows.push((counter, vec![booth])),
            }
        }
        rows
    }
}
