// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use tracing::warn;

use crate::model::{
    compare_booth_order, BoothCode, BoothRegistry, Price, Product, ProductId, SelectionSet,
};

/// Wording knobs for generated directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOptions {
    pub entrance_label: String,
    pub unmapped_label: String,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            entrance_label: "Main entrance".to_owned(),
            unmapped_label: "not on the store map".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
}

/// Whether a step's booth resolved against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepPlacement {
    Mapped {
        label: Option<String>,
        image_url: Option<String>,
    },
    Unmapped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStep {
    index: usize,
    booth: BoothCode,
    placement: StepPlacement,
    items: Vec<RouteItem>,
    direction: String,
}

impl RouteStep {
    /// 1-based visit order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn booth(&self) -> BoothCode {
        self.booth
    }

    pub fn placement(&self) -> &StepPlacement {
        &self.placement
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.placement, StepPlacement::Mapped { .. })
    }

    pub fn label(&self) -> Option<&str> {
        match &self.placement {
            StepPlacement::Mapped { label, .. } => label.as_deref(),
            StepPlacement::Unmapped => None,
        }
    }

    pub fn items(&self) -> &[RouteItem] {
        &self.items
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waypoint {
    Entrance,
    Booth(BoothCode),
}

/// One drawable segment of the walk, for map renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteLeg {
    pub from: Waypoint,
    pub to: BoothCode,
    pub same_counter: bool,
}

/// The ordered walking route for the current selection. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    steps: Vec<RouteStep>,
    entrance_label: String,
}

impl Route {
    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn item_count(&self) -> usize {
        self.steps.iter().map(|step| step.items.len()).sum()
    }

    /// Product ids in the order the shopper will pick them up.
    pub fn product_ids(&self) -> impl Iterator<Item = &ProductId> {
        self.steps
            .iter()
            .flat_map(|step| step.items.iter().map(|item| &item.product_id))
    }

    pub fn starting_point(&self) -> String {
        format!(
            "Starting point: {} (near counter 1, slot 1)",
            self.entrance_label
        )
    }

    pub fn closing_direction(&self) -> String {
        format!(
            "Return to the {} with your items.",
            self.entrance_label.to_lowercase()
        )
    }

    /// Consecutive segments between mapped stops, starting at the entrance. Unmapped steps have
    /// no position and are skipped.
    pub fn legs(&self) -> Vec<RouteLeg> {
        let mut legs = Vec::new();
        let mut from = Waypoint::Entrance;
        for step in self.steps.iter().filter(|step| step.is_mapped()) {
            let same_counter = match from {
                Waypoint::Entrance => false,
                Waypoint::Booth(prev) => prev.same_counter(step.booth),
            };
            legs.push(RouteLeg {
                from,
                to: step.booth,
                same_counter,
            });
            from = Waypoint::Booth(step.booth);
        }
        legs
    }
}

/// Turns the selection into an ordered, booth-grouped walk.
///
/// Selected ids missing from `products` are dropped. Groups at booths the registry does not know
/// go last, in the order they first appear in `products`.
pub fn plan_route(
    selection: &SelectionSet,
    products: &[Product],
    registry: &BoothRegistry,
    options: &RouteOptions,
) -> Route {
    let mut groups: Vec<(BoothCode, Vec<&Product>)> = Vec::new();
    let mut group_by_booth: HashMap<BoothCode, usize> = HashMap::new();

    for product in products
        .iter()
        .filter(|product| selection.is_selected(product.product_id()))
    {
        let booth = product.booth();
        match group_by_booth.get(&booth) {
            Some(&idx) => groups[idx].1.push(product),
            None => {
                group_by_booth.insert(booth, groups.len());
                groups.push((booth, vec![product]));
            }
        }
    }

    let (mut mapped, unmapped): (Vec<_>, Vec<_>) = groups
        .into_iter()
        .partition(|(booth, _)| registry.contains(*booth));
    mapped.sort_by(|(a, _), (b, _)| compare_booth_order(a, b));

    for (booth, group) in &unmapped {
        warn!(
            booth = %booth,
            products = group.len(),
            "selected products sit at a booth missing from the store map"
        );
    }

    let mut steps: Vec<RouteStep> = Vec::with_capacity(mapped.len() + unmapped.len());
    for (booth, group) in mapped.into_iter().chain(unmapped) {
        let placement = match registry.resolve_code(booth) {
            Some(found) => StepPlacement::Mapped {
                label: found.label().map(str::to_owned),
                image_url: found.image_url().map(str::to_owned),
            },
            None => StepPlacement::Unmapped,
        };
        let items = group
            .iter()
            .map(|product| RouteItem {
                product_id: product.product_id().clone(),
                name: product.name().to_owned(),
                price: product.price(),
            })
            .collect::<Vec<_>>();

        let previous = steps.last().map(|step| step.booth);
        let direction = describe_step(previous, booth, &placement, &items, options);

        steps.push(RouteStep {
            index: steps.len() + 1,
            booth,
            placement,
            items,
            direction,
        });
    }

    Route {
        steps,
        entrance_label: options.entrance_label.clone(),
    }
}

fn describe_step(
    previous: Option<BoothCode>,
    booth: BoothCode,
    placement: &StepPlacement,
    items: &[RouteItem],
    options: &RouteOptions,
) -> String {
    let names = items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let destination = match placement {
        StepPlacement::Mapped { label: Some(label), .. } => format!(
            "booth {booth} ({label}), slot {} of counter {}",
            booth.slot(),
            booth.counter_index()
        ),
        StepPlacement::Mapped { label: None, .. } => format!(
            "booth {booth}, slot {} of counter {}",
            booth.slot(),
            booth.counter_index()
        ),
        StepPlacement::Unmapped => format!("booth {booth} ({})", options.unmapped_label),
    };

    match previous {
        None => format!("From the entrance, go to {destination}. Here you'll find {names}."),
        Some(prev) => format!("From booth {prev}, move to {destination}. Look for {names}."),
    }
}
