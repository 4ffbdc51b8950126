// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shopping suggestions from an external text service.
//!
//! The service only ever sees a plain-text corpus of the catalog and answers with product names.
//! Names are mapped back to catalog ids by exact match; anything it invents is dropped.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::UpstreamError;
use crate::model::{Product, ProductId, RequestToken, StoreId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPeriod {
    Today,
    Week,
}

impl RecommendationPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "this week",
        }
    }
}

impl fmt::Display for RecommendationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecommendationPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            other => Err(format!(
                "unknown recommendation period {other:?} (expected today|week)"
            )),
        }
    }
}

/// Everything a [`RecommendationService`] needs for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub token: RequestToken,
    pub store_id: StoreId,
    pub period: RecommendationPeriod,
    pub count: usize,
    pub corpus: String,
}

impl RecommendationRequest {
    pub fn prompt(&self) -> String {
        format!(
            "Given this list of products:\n{}\n\nSuggest {} products that would make sense to buy \
             together {}. Only return the exact product names from the list, separated by commas.",
            self.corpus,
            self.count,
            self.period.phrase()
        )
    }
}

/// Collaborator that turns a catalog corpus into suggested product names.
pub trait RecommendationService {
    fn recommend(&self, request: &RecommendationRequest) -> Result<Vec<String>, UpstreamError>;
}

/// One line per product: `Name (description)`, or `Name (No description)`.
pub fn build_corpus(products: &[Product]) -> String {
    let mut out = String::new();
    for (idx, product) in products.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let description = product
            .description()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description");
        out.push_str(product.name());
        out.push_str(" (");
        out.push_str(description);
        out.push(')');
    }
    out
}

/// Splits a free-text answer on commas and newlines.
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Exact-name matches, in catalog order, without duplicates.
pub fn match_recommendations(names: &[String], products: &[Product]) -> Vec<ProductId> {
    let wanted = names.iter().map(String::as_str).collect::<BTreeSet<_>>();
    let mut seen = BTreeSet::new();
    products
        .iter()
        .filter(|product| wanted.contains(product.name()))
        .filter(|product| seen.insert(product.product_id().clone()))
        .map(|product| product.product_id().clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{
        build_corpus, match_recommendations, parse_suggestions, RecommendationPeriod,
        RecommendationRequest,
    };
    use crate::model::{
        BoothCode, Price, Product, ProductId, RequestChannel, RequestTracker, StoreId,
    };

    fn product(id: &str, name: &str) -> Product {
        Product::new(
            ProductId::new(id).expect("product id"),
            name,
            Price::from_cents(100),
            BoothCode::parse("A1").expect("booth"),
        )
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("p1", "Milk").with_description("Whole milk, 1l"),
            product("p2", "Bread"),
            product("p3", "Eggs").with_description("   "),
            product("p4", "Milk"),
        ]
    }

    #[test]
    fn corpus_lists_every_product() {
        assert_eq!(
            build_corpus(&catalog()),
            "Milk (Whole milk, 1l)\nBread (No description)\nEggs (No description)\nMilk (No description)"
        );
    }

    #[rstest]
    #[case("Milk, Bread", vec!["Milk", "Bread"])]
    #[case("Milk,\n Eggs ,,", vec!["Milk", "Eggs"])]
    #[case("", vec![])]
    fn suggestions_split_on_commas_and_newlines(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_suggestions(text), expected);
    }

    #[test]
    fn matches_exact_names_in_catalog_order() {
        let names = parse_suggestions("Eggs, milk, Caviar, Bread, Eggs");
        let ids = match_recommendations(&names, &catalog());
        let ids = ids.iter().map(|id| id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["p2", "p3"]);
    }

    #[test]
    fn duplicate_names_match_every_product_with_that_name() {
        let ids = match_recommendations(&["Milk".to_owned()], &catalog());
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn prompt_mentions_period_and_count() {
        let mut tracker = RequestTracker::default();
        let request = RecommendationRequest {
            token: tracker.issue(RequestChannel::Recommendation),
            store_id: StoreId::new("s1").expect("store id"),
            period: RecommendationPeriod::Week,
            count: 5,
            corpus: build_corpus(&catalog()),
        };
        let prompt = request.prompt();
        assert!(prompt.contains("Suggest 5 products"));
        assert!(prompt.contains("together this week."));
        assert!(prompt.contains("Bread (No description)"));
    }

    #[test]
    fn period_parses_from_text() {
        assert_eq!("Today".parse(), Ok(RecommendationPeriod::Today));
        assert!("month".parse::<RecommendationPeriod>().is_err());
    }
}
