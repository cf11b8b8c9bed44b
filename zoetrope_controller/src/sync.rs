// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state synchronizer: mirror the engine's selection into
//! [`CarouselState`].
//!
//! ## Overview
//!
//! The engine owns true scroll position; this module maintains the
//! controller's best-effort projection of it. The host forwards every
//! engine "selection changed" notification, in emission order, to
//! [`SelectionSync::handle_select`]; on engine-ready it calls
//! [`SelectionSync::sample`] once to initialize the projection.
//!
//! ## Centering rule
//!
//! For multi-item viewports the active item is the centered element of the
//! in-view window: `window[window.len() / 2]`. For an even-length window
//! this picks the *second* of the two middle items — `[7, 8]` centers on
//! `8`. One rule, applied everywhere. An empty window is a transient engine
//! state and leaves the previous active index in place.
//!
//! ## Subscription discipline
//!
//! Attach and detach are idempotent. While detached, notifications change
//! nothing — there is no update-after-dispose. The synchronizer never
//! issues commands to the engine; it only reads.

use zoetrope_engine::Engine;

use crate::types::{CarouselState, SelectionChange};

/// Mirrors engine selection into the canonical state.
///
/// Owns the only mutation path into [`CarouselState`]'s active index.
/// Coalescing is "last value wins": if several notifications arrive before
/// a render, each is processed in order and the state simply ends up at
/// the newest value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectionSync {
    attached: bool,
}

impl SelectionSync {
    /// Create a detached synchronizer.
    pub fn new() -> Self {
        Self { attached: false }
    }

    /// Subscribe to engine notifications. Returns `true` if this call
    /// transitioned from detached to attached.
    pub fn attach(&mut self) -> bool {
        let newly = !self.attached;
        self.attached = true;
        newly
    }

    /// Unsubscribe. Returns `true` if this call transitioned from attached
    /// to detached. Safe to call repeatedly; once detached, no
    /// notification can alter state until re-attached.
    pub fn detach(&mut self) -> bool {
        let was = self.attached;
        self.attached = false;
        was
    }

    /// Whether notifications are currently applied.
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Initialize the projection from the engine's current position.
    ///
    /// Called once when the engine reports ready. Returns the resulting
    /// change, if the sampled selection differs from the current state.
    pub fn sample<E: Engine>(
        &self,
        state: &mut CarouselState,
        engine: &E,
    ) -> Option<SelectionChange> {
        self.refresh(state, engine)
    }

    /// Apply one engine "selection changed" notification.
    ///
    /// The notification payload is ignored; the engine is re-read so a
    /// stale event cannot move the projection backwards.
    pub fn handle_select<E: Engine>(
        &self,
        state: &mut CarouselState,
        engine: &E,
    ) -> Option<SelectionChange> {
        self.refresh(state, engine)
    }

    fn refresh<E: Engine>(&self, state: &mut CarouselState, engine: &E) -> Option<SelectionChange> {
        if !self.attached || state.count() == 0 {
            return None;
        }
        let derived = if state.viewport_size() == 1 {
            engine.selected_index()
        } else {
            let window = engine.visible_indices();
            if window.is_empty() {
                // Transient mid-transition state; keep what we have.
                return None;
            }
            window[window.len() / 2]
        };
        // The engine may briefly report indices past a shrunken collection.
        let derived = derived.min(state.count() - 1);
        let current = state.active().unwrap_or(0);
        if derived == current {
            return None;
        }
        state.set_active(derived);
        log::trace!("selection {current} -> {derived}");
        Some(SelectionChange {
            from: current,
            to: derived,
        })
    }
}
