// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine contract: scroll commands, selection reads, and the autoplay
//! plugin handle.
//!
//! ## Overview
//!
//! The engine is the single source of truth for scroll position. Controllers
//! only ever derive state from it (via [`Engine::selected_index`] and
//! [`Engine::visible_indices`]) and issue commands into it (via the scroll
//! methods). The contract is deliberately narrow so a deterministic fake can
//! stand in for a real scroll-snap engine in tests.
//!
//! ## Readiness
//!
//! Engines initialize asynchronously relative to the component that mounts
//! them. [`Engine::is_ready`] makes that window explicit: commands issued
//! before readiness may be ignored by the engine, and callers are expected
//! to hold navigation until ready (or defer it; see the controller crate).

use alloc::vec::Vec;

/// A selection-changed notification.
///
/// Real engines emit these through platform callbacks; the host forwards
/// each one, in emission order, to the controller's selection synchronizer.
/// The payload is advisory — synchronizers re-read the engine rather than
/// trusting the event, since notifications can be stale by the time they
/// are processed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SelectEvent {
    /// The index the engine had selected when the notification was emitted.
    pub index: usize,
}

/// Handle for an engine-native autoplay plugin.
///
/// Exposed through [`Engine::autoplay`] when the underlying engine ships its
/// own autoplay feature. A controller that runs its own timer still forwards
/// `reset` on manual navigation so the two timers cannot disagree about when
/// the next automatic advance is due.
pub trait AutoplayPlugin {
    /// Start (or continue) automatic advancing.
    fn play(&mut self);
    /// Stop automatic advancing.
    fn stop(&mut self);
    /// Restart the advance interval from zero.
    fn reset(&mut self);
}

/// The scroll-snap engine surface a carousel controller consumes.
///
/// Implementations own true scroll position. Index arguments are engine
/// indices in `[0, item count)`; implementations are expected to clamp or
/// ignore out-of-range commands rather than panic.
pub trait Engine {
    /// Whether the engine has finished initializing.
    ///
    /// Commands issued while this returns `false` may be dropped by the
    /// engine; reads are not meaningful until it returns `true`.
    fn is_ready(&self) -> bool;

    /// Scroll so that `index` becomes the selected item.
    fn scroll_to(&mut self, index: usize);

    /// Advance to the next item using the engine's native stepping.
    ///
    /// Edge behavior (clamp or wrap) is an engine-level setting; callers
    /// that need wraparound independent of it should compute a target and
    /// use [`Engine::scroll_to`].
    fn scroll_next(&mut self);

    /// Step back to the previous item using the engine's native stepping.
    ///
    /// Edge behavior mirrors [`Engine::scroll_next`].
    fn scroll_prev(&mut self);

    /// The currently selected index.
    fn selected_index(&self) -> usize;

    /// The ordered in-view window: indices of the items currently visible.
    ///
    /// For single-item-per-view engines this is a one-element window. The
    /// window may be transiently empty mid-transition; callers treat that
    /// as "no information", not as an error.
    fn visible_indices(&self) -> Vec<usize>;

    /// The engine's autoplay plugin handle, when one is installed.
    fn autoplay(&mut self) -> Option<&mut dyn AutoplayPlugin> {
        None
    }
}
