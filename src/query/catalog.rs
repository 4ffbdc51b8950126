// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::model::Product;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Substring,
    Regex,
    Fuzzy,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Regex => "regex",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "regex" => Ok(Self::Regex),
            "fuzzy" => Ok(Self::Fuzzy),
            other => Err(format!(
                "unknown search mode {other:?} (expected substring|regex|fuzzy)"
            )),
        }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    All,
    Substring(String),
    Regex(Regex),
    Fuzzy { needle: String, threshold: f64 },
    Invalid(String),
}

/// A compiled catalog search. Matches a product on its name or its booth id, ignoring case.
///
/// Malformed input never errors out of the filter: it compiles to a filter that matches nothing
/// and reports the problem through [`CatalogFilter::error`].
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    matcher: Matcher,
}

impl CatalogFilter {
    pub fn all() -> Self {
        Self {
            matcher: Matcher::All,
        }
    }

    pub fn compile(query: &str, mode: SearchMode, fuzzy_threshold: f64) -> Self {
        let query = query.trim();
        if query.is_empty() {
            return Self::all();
        }

        let matcher = match mode {
            SearchMode::Substring => Matcher::Substring(query.to_lowercase()),
            SearchMode::Regex => match RegexBuilder::new(query).case_insensitive(true).build() {
                Ok(regex) => Matcher::Regex(regex),
                Err(err) => Matcher::Invalid(format!("invalid regex: {err}")),
            },
            SearchMode::Fuzzy => Matcher::Fuzzy {
                needle: query.to_lowercase(),
                threshold: fuzzy_threshold,
            },
        };
        Self { matcher }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.matcher {
            Matcher::Invalid(message) => Some(message),
            _ => None,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let booth = product.booth().to_string();
        match &self.matcher {
            Matcher::All => true,
            Matcher::Substring(needle) => {
                product.name().to_lowercase().contains(needle)
                    || booth.to_lowercase().contains(needle)
            }
            Matcher::Regex(regex) => regex.is_match(product.name()) || regex.is_match(&booth),
            Matcher::Fuzzy { needle, threshold } => {
                let name = product.name().to_lowercase();
                if name.contains(needle) || booth.to_lowercase().contains(needle) {
                    return true;
                }
                let ratio = rapidfuzz::fuzz::ratio(needle.chars(), name.chars());
                ratio >= *threshold
            }
            Matcher::Invalid(_) => false,
        }
    }
}

/// Indices of matching products, in catalog order.
pub fn filter_products(products: &[Product], filter: &CatalogFilter) -> Vec<usize> {
    products
        .iter()
        .enumerate()
        .filter(|(_, product)| filter.matches(product))
        .map(|(idx, _)| idx)
        .collect()
}
