// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-instance carousel facade.
//!
//! ## Overview
//!
//! [`Carousel`] owns one engine instance plus the four cooperating parts —
//! selection synchronizer, navigation dispatcher, indicator binder, and
//! optional autoplay coordinator — and exposes the surface a host
//! component renders from: the active index, the indicator model, and the
//! imperative `next`/`prev`/`go_to` entry points.
//!
//! ## Data flow
//!
//! User interaction or a timer tick enters through the facade, becomes an
//! engine command via the dispatcher, and the engine's "selection changed"
//! notification — forwarded by the host to
//! [`Carousel::on_engine_select`] — updates the canonical state, from
//! which the indicator model is recomputed. The facade never short-
//! circuits that loop by writing state after a dispatch; the engine stays
//! the single source of truth.
//!
//! ## Minimal example
//!
//! ```
//! use zoetrope_controller::controller::{Carousel, CarouselOptions};
//! use zoetrope_engine::StepEngine;
//!
//! let mut carousel = Carousel::new(StepEngine::new(5), 5, CarouselOptions::default(), 0);
//! carousel.next(0);
//!
//! // The host forwards each engine notification back in, in order.
//! for _event in carousel.engine_mut().drain_events() {
//!     carousel.on_engine_select();
//! }
//! assert_eq!(carousel.active_index(), Some(1));
//! ```

use zoetrope_engine::Engine;

use crate::autoplay::{Autoplay, PauseReasons};
use crate::indicators::{IndicatorModel, bind};
use crate::nav::Dispatcher;
use crate::sync::SelectionSync;
use crate::types::{CarouselItem, CarouselState, DispatchOutcome, NavigationIntent, SelectionChange};

/// Per-instance configuration.
///
/// One controller is instantiated per carousel on a page; everything that
/// varies between carousel instances is a parameter here.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CarouselOptions {
    /// Items simultaneously visible (minimum 1). Multi-item viewports
    /// derive the active item from the centered element of the in-view
    /// window.
    pub viewport_size: usize,
    /// Use the engine's native stepping for `Previous`/`Next`. Requires
    /// the engine itself to wrap at the edges so both agree.
    pub looping: bool,
    /// Advance interval for autoplay; `None` leaves autoplay off.
    pub autoplay_interval_ms: Option<u64>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            viewport_size: 1,
            looping: false,
            autoplay_interval_ms: None,
        }
    }
}

/// A headless carousel controller bound to one engine instance.
///
/// The engine is passed in as a dependency — nothing here reaches for
/// shared or global state — so the same controller drives an image banner,
/// a testimonial slider, or a logo strip, and tests drive it with a fake.
#[derive(Clone, Debug)]
pub struct Carousel<E: Engine> {
    engine: E,
    state: CarouselState,
    sync: SelectionSync,
    nav: Dispatcher,
    autoplay: Option<Autoplay>,
}

impl<E: Engine> Carousel<E> {
    /// Build a controller over `engine` for a collection of `count` items.
    ///
    /// Attaches the synchronizer, starts autoplay when configured, and —
    /// if the engine is already ready — samples it immediately so the
    /// active index starts in agreement with real scroll position.
    pub fn new(engine: E, count: usize, options: CarouselOptions, now_ms: u64) -> Self {
        let mut sync = SelectionSync::new();
        sync.attach();
        let mut this = Self {
            engine,
            state: CarouselState::new(count, options.viewport_size),
            sync,
            nav: Dispatcher::new(options.looping),
            autoplay: options.autoplay_interval_ms.map(Autoplay::new),
        };
        if let Some(ap) = &mut this.autoplay {
            ap.start(now_ms);
            if let Some(plugin) = this.engine.autoplay() {
                plugin.play();
            }
        }
        if this.engine.is_ready() {
            this.sync.sample(&mut this.state, &this.engine);
        }
        this
    }

    /// The underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the underlying engine, for hosts that configure
    /// it after mount.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The active index, `None` for an empty collection.
    pub fn active_index(&self) -> Option<usize> {
        self.state.active()
    }

    /// Number of items the controller navigates over.
    pub fn count(&self) -> usize {
        self.state.count()
    }

    /// Whether the autoplay timer is currently counting down.
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_some_and(|ap| ap.is_running())
    }

    /// Derive the renderable indicator/affordance model.
    ///
    /// `items` is the same collection the controller was sized for; the
    /// caller owns it and the controller only indexes into it.
    pub fn render_model<K: Copy + Eq, T>(
        &self,
        items: &[CarouselItem<K, T>],
    ) -> IndicatorModel<K> {
        debug_assert_eq!(
            items.len(),
            self.state.count(),
            "render collection must match the controller's item count"
        );
        bind(items, self.state.active())
    }

    /// Navigate one item forward (wrapping) as a user action.
    pub fn next(&mut self, now_ms: u64) -> DispatchOutcome {
        self.navigate(NavigationIntent::Next, now_ms)
    }

    /// Navigate one item back (wrapping) as a user action.
    pub fn prev(&mut self, now_ms: u64) -> DispatchOutcome {
        self.navigate(NavigationIntent::Previous, now_ms)
    }

    /// Jump to an absolute position (any integer, wrapped modulo the item
    /// count) as a user action.
    pub fn go_to(&mut self, index: i64, now_ms: u64) -> DispatchOutcome {
        self.navigate(NavigationIntent::GoTo(index), now_ms)
    }

    fn navigate(&mut self, intent: NavigationIntent, now_ms: u64) -> DispatchOutcome {
        let outcome = self.nav.dispatch(&self.state, &mut self.engine, intent);
        // Manual success restarts the autoplay interval so a nearly-due
        // tick cannot double-advance behind the user's action.
        if let DispatchOutcome::Dispatched { .. } = outcome {
            self.reset_autoplay(now_ms);
        }
        outcome
    }

    /// Drive autoplay from the host's event loop.
    ///
    /// When a tick is due, advances exactly as a `Next` intent would —
    /// except that an automatic advance neither resets the timer (it would
    /// never fire again) nor occupies the not-ready replay slot (a stale
    /// automatic advance must not clobber a queued user intent).
    pub fn tick(&mut self, now_ms: u64) -> Option<DispatchOutcome> {
        let ap = self.autoplay.as_mut()?;
        if !ap.poll(now_ms) {
            return None;
        }
        if !self.engine.is_ready() {
            return None;
        }
        Some(
            self.nav
                .dispatch(&self.state, &mut self.engine, NavigationIntent::Next),
        )
    }

    /// Notify the controller that the engine finished initializing.
    ///
    /// Samples the engine's current selection into the state and replays
    /// any deferred manual intent (which, on success, resets autoplay like
    /// any other manual navigation). Returns the sampling change, if any.
    pub fn on_engine_ready(&mut self, now_ms: u64) -> Option<SelectionChange> {
        let change = self.sync.sample(&mut self.state, &self.engine);
        if let Some(DispatchOutcome::Dispatched { .. }) =
            self.nav.replay(&self.state, &mut self.engine)
        {
            self.reset_autoplay(now_ms);
        }
        change
    }

    /// Forward one engine "selection changed" notification.
    pub fn on_engine_select(&mut self) -> Option<SelectionChange> {
        self.sync.handle_select(&mut self.state, &self.engine)
    }

    /// Replace the item count after the collection changes.
    ///
    /// Re-clamps the active index; a deferred intent stays queued and is
    /// re-normalized against the new count at replay time.
    pub fn set_count(&mut self, count: usize) {
        self.state.set_count(count);
    }

    /// Pointer entered the carousel: suspend autoplay.
    pub fn pointer_enter(&mut self) {
        self.suspend(PauseReasons::HOVER);
    }

    /// Pointer left the carousel: lift the hover suspension.
    pub fn pointer_leave(&mut self, now_ms: u64) {
        self.release(PauseReasons::HOVER, now_ms);
    }

    /// Focus moved into the carousel: suspend autoplay.
    pub fn focus_in(&mut self) {
        self.suspend(PauseReasons::FOCUS);
    }

    /// Focus left the carousel: lift the focus suspension.
    pub fn focus_out(&mut self, now_ms: u64) {
        self.release(PauseReasons::FOCUS, now_ms);
    }

    fn suspend(&mut self, reason: PauseReasons) {
        let Some(ap) = self.autoplay.as_mut() else {
            return;
        };
        let was_running = ap.is_running();
        ap.pause(reason);
        if was_running && let Some(plugin) = self.engine.autoplay() {
            plugin.stop();
        }
    }

    fn release(&mut self, reason: PauseReasons, now_ms: u64) {
        let Some(ap) = self.autoplay.as_mut() else {
            return;
        };
        let was_paused = ap.is_paused();
        ap.resume(reason, now_ms);
        if was_paused
            && ap.is_running()
            && let Some(plugin) = self.engine.autoplay()
        {
            plugin.play();
            plugin.reset();
        }
    }

    fn reset_autoplay(&mut self, now_ms: u64) {
        if let Some(ap) = self.autoplay.as_mut() {
            ap.reset(now_ms);
        }
        // Keep an engine-native timer agreeing with ours.
        if let Some(plugin) = self.engine.autoplay() {
            plugin.reset();
        }
    }

    /// Re-subscribe the synchronizer. Returns `true` when newly attached.
    pub fn attach(&mut self) -> bool {
        self.sync.attach()
    }

    /// Unsubscribe the synchronizer; later notifications change nothing.
    /// Returns `true` when this call did the detaching.
    pub fn detach(&mut self) -> bool {
        self.sync.detach()
    }

    /// Tear the controller down: detach the synchronizer and dispose the
    /// autoplay timer. Idempotent; the one mandatory cleanup, since a
    /// leaked timer would keep advancing a detached engine.
    pub fn dispose(&mut self) {
        self.sync.detach();
        if let Some(ap) = self.autoplay.as_mut()
            && !ap.is_disposed()
        {
            ap.dispose();
            log::debug!("autoplay disposed");
            if let Some(plugin) = self.engine.autoplay() {
                plugin.stop();
            }
        }
    }
}
