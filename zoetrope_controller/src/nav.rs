// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation command dispatcher: turn intents into engine calls.
//!
//! ## Overview
//!
//! The dispatcher resolves a [`NavigationIntent`] against the canonical
//! state — wraparound computed with its own modulo arithmetic, independent
//! of engine looping settings — and issues the corresponding engine
//! command. It never mutates [`CarouselState`]; the resulting engine
//! notification flows back through the selection synchronizer, keeping the
//! engine the single source of truth.
//!
//! ## Mount races
//!
//! Dispatching against an engine that has not finished initializing does
//! not throw and does not drop the user's input: the intent is held in a
//! single replay slot (last write wins) and replayed once the engine
//! reports ready. Automatic (timer) advances are filtered out upstream and
//! never occupy the slot.
//!
//! ## Degenerate collections
//!
//! With zero items every intent is a no-op. With one item every intent
//! resolves to index 0 and is reported as a success without touching the
//! engine — self-navigation is idempotent.

use zoetrope_engine::Engine;

use crate::types::{CarouselState, DispatchOutcome, NavigationIntent};

/// Translates intents into engine commands.
///
/// With `looping` enabled the engine's native stepping is used for
/// `Previous`/`Next` (the engine must be configured to wrap, so the two
/// agree on the same arithmetic); otherwise every move is an absolute
/// [`Engine::scroll_to`] at the resolved target.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    looping: bool,
    pending: Option<NavigationIntent>,
}

impl Dispatcher {
    /// Create a dispatcher. `looping` selects native stepping for
    /// `Previous`/`Next`.
    pub fn new(looping: bool) -> Self {
        Self {
            looping,
            pending: None,
        }
    }

    /// The intent currently waiting for the engine to become ready.
    pub const fn pending(&self) -> Option<NavigationIntent> {
        self.pending
    }

    /// Drop any deferred intent.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Resolve and dispatch one intent.
    ///
    /// The target index reported in [`DispatchOutcome::Dispatched`] is the
    /// controller's own wraparound arithmetic; the engine notification
    /// that follows confirms it through the synchronizer.
    pub fn dispatch<E: Engine>(
        &mut self,
        state: &CarouselState,
        engine: &mut E,
        intent: NavigationIntent,
    ) -> DispatchOutcome {
        let count = state.count();
        if count == 0 {
            return DispatchOutcome::Empty;
        }
        if !engine.is_ready() {
            // Keep only the newest intent from a mount race.
            self.pending = Some(intent);
            log::trace!("dispatch deferred, engine not ready: {intent:?}");
            return DispatchOutcome::Deferred;
        }
        let current = state.active().unwrap_or(0);
        let target = intent.resolve(current, count);
        if count == 1 {
            return DispatchOutcome::Dispatched { target };
        }
        match intent {
            NavigationIntent::Next if self.looping => engine.scroll_next(),
            NavigationIntent::Previous if self.looping => engine.scroll_prev(),
            _ => engine.scroll_to(target),
        }
        log::trace!("dispatch {intent:?}: {current} -> {target}");
        DispatchOutcome::Dispatched { target }
    }

    /// Replay the deferred intent, if any, now that the engine is ready.
    ///
    /// Returns `None` when the slot is empty. A replay against a still
    /// not-ready engine re-defers the same intent.
    pub fn replay<E: Engine>(
        &mut self,
        state: &CarouselState,
        engine: &mut E,
    ) -> Option<DispatchOutcome> {
        let intent = self.pending.take()?;
        Some(self.dispatch(state, engine, intent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoetrope_engine::{Engine, StepEngine};

    #[test]
    fn next_scrolls_to_wrapped_target() {
        let mut nav = Dispatcher::new(false);
        let mut engine = StepEngine::new(5);
        let mut state = CarouselState::new(5, 1);

        state.set_active(4);
        engine.scroll_to(4);
        engine.drain_events();

        let out = nav.dispatch(&state, &mut engine, NavigationIntent::Next);
        assert_eq!(out, DispatchOutcome::Dispatched { target: 0 });
        assert_eq!(engine.selected_index(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut nav = Dispatcher::new(false);
        let mut engine = StepEngine::new(5);
        let state = CarouselState::new(5, 1);

        let out = nav.dispatch(&state, &mut engine, NavigationIntent::Previous);
        assert_eq!(out, DispatchOutcome::Dispatched { target: 4 });
        assert_eq!(engine.selected_index(), 4);
    }

    #[test]
    fn goto_dispatches_normalized_target() {
        let mut nav = Dispatcher::new(false);
        let mut engine = StepEngine::new(5);
        let state = CarouselState::new(5, 1);

        let out = nav.dispatch(&state, &mut engine, NavigationIntent::GoTo(-2));
        assert_eq!(out, DispatchOutcome::Dispatched { target: 3 });
        assert_eq!(engine.selected_index(), 3);
    }

    #[test]
    fn empty_collection_is_a_noop() {
        let mut nav = Dispatcher::new(false);
        let mut engine = StepEngine::new(0);
        let state = CarouselState::new(0, 1);

        for intent in [
            NavigationIntent::Previous,
            NavigationIntent::Next,
            NavigationIntent::GoTo(3),
        ] {
            assert_eq!(
                nav.dispatch(&state, &mut engine, intent),
                DispatchOutcome::Empty
            );
        }
        assert_eq!(nav.pending(), None);
    }

    // One item: success is reported but the engine is left alone.
    #[test]
    fn singleton_self_navigation_skips_the_engine() {
        let mut nav = Dispatcher::new(false);
        let mut engine = StepEngine::new(1);
        let state = CarouselState::new(1, 1);

        for intent in [
            NavigationIntent::Previous,
            NavigationIntent::Next,
            NavigationIntent::GoTo(0),
        ] {
            assert_eq!(
                nav.dispatch(&state, &mut engine, intent),
                DispatchOutcome::Dispatched { target: 0 }
            );
        }
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn not_ready_defers_with_last_write_wins() {
        let mut nav = Dispatcher::new(false);
        let mut engine = StepEngine::new(5);
        engine.set_ready(false);
        let state = CarouselState::new(5, 1);

        assert_eq!(
            nav.dispatch(&state, &mut engine, NavigationIntent::Next),
            DispatchOutcome::Deferred
        );
        assert_eq!(
            nav.dispatch(&state, &mut engine, NavigationIntent::GoTo(3)),
            DispatchOutcome::Deferred
        );
        // Only the newest intent survives.
        assert_eq!(nav.pending(), Some(NavigationIntent::GoTo(3)));

        engine.set_ready(true);
        let out = nav.replay(&state, &mut engine);
        assert_eq!(out, Some(DispatchOutcome::Dispatched { target: 3 }));
        assert_eq!(engine.selected_index(), 3);
        assert_eq!(nav.pending(), None);
        assert_eq!(nav.replay(&state, &mut engine), None);
    }

    #[test]
    fn replay_against_still_not_ready_engine_redefers() {
        let mut nav = Dispatcher::new(false);
        let mut engine = StepEngine::new(5);
        engine.set_ready(false);
        let state = CarouselState::new(5, 1);

        nav.dispatch(&state, &mut engine, NavigationIntent::Next);
        assert_eq!(
            nav.replay(&state, &mut engine),
            Some(DispatchOutcome::Deferred)
        );
        assert_eq!(nav.pending(), Some(NavigationIntent::Next));
    }

    // Native stepping and the controller's modulo agree when the engine
    // loops at the edges.
    #[test]
    fn looping_native_step_matches_computed_target() {
        let mut nav = Dispatcher::new(true);
        let mut engine = StepEngine::new(5);
        engine.set_looping(true);
        let mut state = CarouselState::new(5, 1);

        state.set_active(4);
        engine.scroll_to(4);
        engine.drain_events();

        let out = nav.dispatch(&state, &mut engine, NavigationIntent::Next);
        assert_eq!(out, DispatchOutcome::Dispatched { target: 0 });
        assert_eq!(engine.selected_index(), 0);

        state.set_active(0);
        let out = nav.dispatch(&state, &mut engine, NavigationIntent::Previous);
        assert_eq!(out, DispatchOutcome::Dispatched { target: 4 });
        assert_eq!(engine.selected_index(), 4);
    }
}
