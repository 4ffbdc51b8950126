// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Two-part booth address: counter letter plus slot number (`B3` = counter B, slot 3).
///
/// The derived ordering is the canonical walking order used everywhere a route is ordered:
/// counter letter first, then the slot compared numerically, so `A2` precedes `A10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoothCode {
    counter: char,
    slot: u32,
}

impl BoothCode {
    pub fn new(counter: char, slot: u32) -> Result<Self, BoothCodeError> {
        if !counter.is_ascii_alphabetic() {
            return Err(BoothCodeError::InvalidCounter(counter));
        }
        if slot == 0 {
            return Err(BoothCodeError::ZeroSlot);
        }
        Ok(Self {
            counter: counter.to_ascii_uppercase(),
            slot,
        })
    }

    pub fn parse(input: &str) -> Result<Self, BoothCodeError> {
        let input = input.trim();
        let mut chars = input.chars();
        let counter = chars.next().ok_or(BoothCodeError::Empty)?;
        if !counter.is_ascii_alphabetic() {
            return Err(BoothCodeError::InvalidCounter(counter));
        }
        let digits = chars.as_str();

        if digits.is_empty() {
            return Err(BoothCodeError::MissingSlot);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoothCodeError::InvalidSlot(digits.to_owned()));
        }
        let slot = digits
            .parse::<u32>()
            .map_err(|_| BoothCodeError::InvalidSlot(digits.to_owned()))?;

        Self::new(counter, slot)
    }

    pub fn counter(self) -> char {
        self.counter
    }

    pub fn slot(self) -> u32 {
        self.slot
    }

    /// 1-based counter number (`A` = 1).
    pub fn counter_index(self) -> u32 {
        u32::from(self.counter) - u32::from('A') + 1
    }

    /// Zero-based `(column, row)` cell on the store map; counters run left to right and slots
    /// top to bottom.
    pub fn grid_position(self) -> (u32, u32) {
        (self.counter_index() - 1, self.slot - 1)
    }

    pub fn same_counter(self, other: BoothCode) -> bool {
        self.counter == other.counter
    }
}

impl fmt::Display for BoothCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.counter, self.slot)
    }
}

impl FromStr for BoothCode {
    type Err = BoothCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for BoothCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoothCodeError {
    #[error("booth id must not be empty")]
    Empty,
    #[error("booth counter must be an ASCII letter, got {0:?}")]
    InvalidCounter(char),
    #[error("booth id is missing its slot number")]
    MissingSlot,
    #[error("booth slot must be a decimal number, got {0:?}")]
    InvalidSlot(String),
    #[error("booth slot numbers start at 1")]
    ZeroSlot,
}

/// Canonical booth ordering comparator.
pub fn compare_booth_order(a: &BoothCode, b: &BoothCode) -> Ordering {
    a.cmp(b)
}

/// Orders raw booth identifiers. Anything that does not parse as a booth code sorts after every
/// valid code, and among themselves by plain string order.
pub fn compare_booth_ids(a: &str, b: &str) -> Ordering {
    match (BoothCode::parse(a), BoothCode::parse(b)) {
        (Ok(a), Ok(b)) => compare_booth_order(&a, &b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// A named physical slot in the store grid. Reference data; loaded once per store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booth {
    code: BoothCode,
    label: Option<String>,
    image_url: Option<String>,
}

impl Booth {
    pub fn new(code: BoothCode) -> Self {
        Self {
            code,
            label: None,
            image_url: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn code(&self) -> BoothCode {
        self.code
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use rstest::rstest;

    use super::{compare_booth_ids, compare_booth_order, BoothCode, BoothCodeError};

    fn code(raw: &str) -> BoothCode {
        BoothCode::parse(raw).expect("booth code")
    }

    #[rstest]
    #[case("A1", 'A', 1)]
    #[case("b3", 'B', 3)]
    #[case(" C10 ", 'C', 10)]
    #[case("E007", 'E', 7)]
    fn parses_counter_and_slot(#[case] raw: &str, #[case] counter: char, #[case] slot: u32) {
        let parsed = code(raw);
        assert_eq!(parsed.counter(), counter);
        assert_eq!(parsed.slot(), slot);
    }

    #[rstest]
    #[case("", BoothCodeError::Empty)]
    #[case("A", BoothCodeError::MissingSlot)]
    #[case("1A", BoothCodeError::InvalidCounter('1'))]
    #[case("A0", BoothCodeError::ZeroSlot)]
    #[case("A-1", BoothCodeError::InvalidSlot("-1".to_owned()))]
    #[case("AB1", BoothCodeError::InvalidSlot("B1".to_owned()))]
    fn rejects_malformed_codes(#[case] raw: &str, #[case] expected: BoothCodeError) {
        assert_eq!(BoothCode::parse(raw), Err(expected));
    }

    #[test]
    fn slot_compares_numerically_not_lexicographically() {
        assert_eq!(compare_booth_order(&code("A2"), &code("A10")), Ordering::Less);
        assert_eq!(compare_booth_ids("A2", "A10"), Ordering::Less);
        assert_eq!(compare_booth_ids("A10", "B1"), Ordering::Less);
    }

    #[test]
    fn unparseable_ids_sort_last() {
        assert_eq!(compare_booth_ids("Z9", "loading dock"), Ordering::Less);
        assert_eq!(compare_booth_ids("dock", "A1"), Ordering::Greater);
        assert_eq!(compare_booth_ids("dock", "bay"), Ordering::Greater);
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(code("c07").to_string(), "C7");
    }

    #[test]
    fn grid_position_is_zero_based() {
        assert_eq!(code("A1").grid_position(), (0, 0));
        assert_eq!(code("C4").grid_position(), (2, 3));
        assert_eq!(code("E2").counter_index(), 5);
    }
}
