// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indicator and affordance binding: a pure mapping from `(items, active)`
//! to a renderable model.
//!
//! ## Usage
//!
//! Call [`bind`] on every render; it holds no state and has no side
//! effects. Whenever the collection is non-empty, exactly one indicator is
//! flagged active and both step affordances are enabled — wraparound makes
//! previous/next valid from any position.
//!
//! ## Minimal example
//!
//! ```
//! use zoetrope_controller::indicators::bind;
//! use zoetrope_controller::types::CarouselItem;
//!
//! let items = [CarouselItem::new('a', ()), CarouselItem::new('b', ())];
//! let model = bind(&items, Some(1));
//! assert_eq!(model.indicators.len(), 2);
//! assert!(model.indicators[1].is_active);
//! assert!(model.prev_enabled && model.next_enabled);
//! ```

use alloc::vec::Vec;

use crate::types::CarouselItem;

/// One indicator dot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Indicator<K> {
    /// Key of the item this indicator stands for.
    pub key: K,
    /// Whether this indicator marks the active item.
    pub is_active: bool,
}

/// Renderable model for indicators and prev/next affordances.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndicatorModel<K> {
    /// One indicator per item, in item order.
    pub indicators: Vec<Indicator<K>>,
    /// Whether the previous affordance should accept input.
    pub prev_enabled: bool,
    /// Whether the next affordance should accept input.
    pub next_enabled: bool,
}

/// Derive the indicator model for `items` with the given active index.
///
/// Total over all inputs: an absent or out-of-range active index for a
/// non-empty collection is clamped into range, so exactly one indicator is
/// active whenever there are items at all.
pub fn bind<K: Copy + Eq, T>(
    items: &[CarouselItem<K, T>],
    active: Option<usize>,
) -> IndicatorModel<K> {
    if items.is_empty() {
        return IndicatorModel {
            indicators: Vec::new(),
            prev_enabled: false,
            next_enabled: false,
        };
    }
    let active = active.unwrap_or(0).min(items.len() - 1);
    IndicatorModel {
        indicators: items
            .iter()
            .enumerate()
            .map(|(i, item)| Indicator {
                key: item.key,
                is_active: i == active,
            })
            .collect(),
        prev_enabled: true,
        next_enabled: true,
    }
}
