// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the controller: items, canonical state, intents, and
//! outcomes.
//!
//! ## Overview
//!
//! These types describe the controller protocol. [`CarouselState`] is the
//! canonical derived projection of engine scroll position, owned and
//! mutated only by the selection synchronizer; everything else reads it.
//! [`NavigationIntent`] carries the wraparound arithmetic used by the
//! dispatcher, so the modulo rules live in exactly one place.

/// An application item shown by a carousel, plus its stable key.
///
/// The payload is opaque to the controller — it is never read or mutated,
/// only indexed into. The key identifies the item's indicator across
/// re-renders, the same way node keys identify routed targets.
#[derive(Clone, Debug)]
pub struct CarouselItem<K, T> {
    /// Stable unique key for this item.
    pub key: K,
    /// Application payload (testimonial, logo, content block, ...).
    pub payload: T,
}

impl<K, T> CarouselItem<K, T> {
    /// Create an item from a key and payload.
    pub const fn new(key: K, payload: T) -> Self {
        Self { key, payload }
    }
}

/// Canonical selection state for one carousel instance.
///
/// ## Invariant
///
/// `count > 0` implies `active = Some(i)` with `i < count`; `count == 0`
/// implies `active = None`. The constructor and every mutator maintain
/// this, so readers never need to re-validate.
///
/// The active index is a derived, eventually-consistent projection of the
/// engine's scroll position — never the source of truth. A non-empty state
/// starts at `Some(0)` and is overwritten by the first engine sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CarouselState {
    count: usize,
    active: Option<usize>,
    viewport_size: usize,
}

impl CarouselState {
    /// Create state for `count` items with `viewport_size` visible at once
    /// (clamped to at least 1).
    pub fn new(count: usize, viewport_size: usize) -> Self {
        Self {
            count,
            active: (count > 0).then_some(0),
            viewport_size: viewport_size.max(1),
        }
    }

    /// Number of items.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// The active (selected) index, `None` for an empty collection.
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Number of items simultaneously visible.
    pub const fn viewport_size(&self) -> usize {
        self.viewport_size
    }

    /// Replace the item count, re-clamping the active index.
    ///
    /// Shrinking past the active index clamps it to the new last item;
    /// shrinking to zero clears it.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.active = if count == 0 {
            None
        } else {
            Some(self.active.unwrap_or(0).min(count - 1))
        };
    }

    pub(crate) fn set_active(&mut self, index: usize) {
        debug_assert!(
            index < self.count,
            "active index must stay within the collection"
        );
        self.active = Some(index);
    }
}

/// A user or timer navigation request.
///
/// `GoTo` accepts any integer; it is normalized into `[0, count)` with
/// euclidean remainder before dispatch, so negative and overshooting
/// indices wrap the way a circular strip does.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavigationIntent {
    /// Step to the previous item, wrapping from the first to the last.
    Previous,
    /// Step to the next item, wrapping from the last to the first.
    Next,
    /// Jump to an absolute position, wrapped modulo the item count.
    GoTo(i64),
}

impl NavigationIntent {
    /// Resolve this intent to a concrete target index.
    ///
    /// Wraparound is computed here, independent of whatever looping the
    /// engine provides. `count` must be non-zero; empty collections are
    /// rejected before resolution.
    pub fn resolve(self, current: usize, count: usize) -> usize {
        debug_assert!(count > 0, "cannot resolve an intent over zero items");
        match self {
            Self::Previous => (current + count - 1) % count,
            Self::Next => (current + 1) % count,
            Self::GoTo(k) => k.rem_euclid(count as i64) as usize,
        }
    }
}

/// Result of asking the dispatcher to act on an intent.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DispatchOutcome {
    /// The intent was accepted; the engine was commanded (or the move was
    /// trivially satisfied) toward `target`.
    Dispatched {
        /// Resolved target index in `[0, count)`.
        target: usize,
    },
    /// The engine has not finished initializing; the intent was stored in
    /// the single replay slot (last write wins).
    Deferred,
    /// The collection is empty; nothing to do. This is a valid state, not
    /// an error.
    Empty,
}

/// A change of the active index, as observed by the synchronizer.
///
/// Returned so hosts can animate indicator handoffs; `from` and `to` are
/// always distinct and in range.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SelectionChange {
    /// Previously active index.
    pub from: usize,
    /// Newly active index.
    pub to: usize,
}
