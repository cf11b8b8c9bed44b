// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay coordinator: a cooperative, deadline-based advance timer.
//!
//! ## Overview
//!
//! No clock is read here. The host supplies `now_ms` to every
//! time-dependent call and polls [`Autoplay::poll`] from its event loop;
//! when a poll reports a due tick, the host dispatches a `Next` intent.
//! This keeps the coordinator deterministic and single-threaded: a tick
//! and a manual navigation can only interleave, never race, and the reset
//! policy decides the interleaving.
//!
//! ## Reset, don't resume
//!
//! Every suspension end and every manual navigation restarts the interval
//! from zero via a fresh deadline. A manual action therefore always buys a
//! full interval of quiet before the next automatic advance — a nearly-due
//! tick queued behind a click can never double-advance.
//!
//! ## Lifecycle
//!
//! `Idle` (constructed) → `Running` (started) ⇄ `Paused` (hover/focus) →
//! `Disposed` (terminal). Dispose is idempotent and final: once disposed,
//! no poll ever fires again, so a leaked timer cannot drive a detached
//! engine.

bitflags::bitflags! {
    /// Why automatic advancing is suspended.
    ///
    /// Reasons accumulate: hovering while focused keeps the timer paused
    /// until both the pointer leaves and focus moves away.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PauseReasons: u8 {
        /// The pointer is over the carousel.
        const HOVER = 0b01;
        /// Keyboard focus is inside the carousel.
        const FOCUS = 0b10;
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Phase {
    Idle,
    Running { deadline_ms: u64 },
    Paused { reasons: PauseReasons },
    Disposed,
}

/// Cooperative autoplay timer for one carousel instance.
///
/// If the host polls late and more than one interval has elapsed, a single
/// tick fires and the deadline re-arms from the poll time — missed
/// intervals coalesce rather than burst.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Autoplay {
    interval_ms: u64,
    phase: Phase,
}

impl Autoplay {
    /// Create an idle coordinator with the given advance interval
    /// (clamped to at least 1 ms).
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            phase: Phase::Idle,
        }
    }

    /// The advance interval.
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Start (or restart) the timer with a full interval from `now_ms`.
    /// No-op once disposed.
    pub fn start(&mut self, now_ms: u64) {
        if matches!(self.phase, Phase::Disposed) {
            return;
        }
        self.phase = Phase::Running {
            deadline_ms: now_ms + self.interval_ms,
        };
    }

    /// Report whether a tick is due, re-arming the deadline if so.
    ///
    /// Only ever fires while running; returns `false` in every other
    /// phase, including after dispose.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.phase {
            Phase::Running { deadline_ms } if now_ms >= deadline_ms => {
                self.phase = Phase::Running {
                    deadline_ms: now_ms + self.interval_ms,
                };
                true
            }
            _ => false,
        }
    }

    /// Restart the interval from zero in response to a manual navigation.
    /// Only meaningful while running; paused timers restart on resume
    /// anyway.
    pub fn reset(&mut self, now_ms: u64) {
        if let Phase::Running { .. } = self.phase {
            self.phase = Phase::Running {
                deadline_ms: now_ms + self.interval_ms,
            };
        }
    }

    /// Suspend for `reason`. Reasons accumulate across calls; no-op while
    /// idle or disposed.
    pub fn pause(&mut self, reason: PauseReasons) {
        match self.phase {
            Phase::Running { .. } => self.phase = Phase::Paused { reasons: reason },
            Phase::Paused { reasons } => {
                self.phase = Phase::Paused {
                    reasons: reasons | reason,
                };
            }
            Phase::Idle | Phase::Disposed => {}
        }
    }

    /// Clear `reason`; when no reasons remain, run again with a full
    /// interval from `now_ms` (reset, not resume).
    pub fn resume(&mut self, reason: PauseReasons, now_ms: u64) {
        if let Phase::Paused { reasons } = self.phase {
            let remaining = reasons - reason;
            self.phase = if remaining.is_empty() {
                Phase::Running {
                    deadline_ms: now_ms + self.interval_ms,
                }
            } else {
                Phase::Paused { reasons: remaining }
            };
        }
    }

    /// Tear down permanently. Idempotent; after this, [`Autoplay::poll`]
    /// never fires.
    pub fn dispose(&mut self) {
        self.phase = Phase::Disposed;
    }

    /// Whether the timer is counting toward a deadline.
    pub const fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Whether the timer is suspended by at least one reason.
    pub const fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused { .. })
    }

    /// Whether the timer has been torn down.
    pub const fn is_disposed(&self) -> bool {
        matches!(self.phase, Phase::Disposed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_never_ticks() {
        let mut ap = Autoplay::new(1000);
        assert!(!ap.poll(10_000));
        assert!(!ap.is_running());
    }

    #[test]
    fn ticks_once_per_interval() {
        let mut ap = Autoplay::new(1000);
        ap.start(0);
        assert!(!ap.poll(999));
        assert!(ap.poll(1000));
        assert!(!ap.poll(1000));
        assert!(ap.poll(2000));
    }

    // Manual navigation pushes the next tick a full interval out.
    #[test]
    fn reset_restarts_interval_from_zero() {
        let mut ap = Autoplay::new(1000);
        ap.start(0);
        ap.reset(600);
        assert!(!ap.poll(1000));
        assert!(!ap.poll(1599));
        assert!(ap.poll(1600));
    }

    #[test]
    fn missed_intervals_coalesce_into_one_tick() {
        let mut ap = Autoplay::new(1000);
        ap.start(0);
        assert!(ap.poll(5500));
        assert!(!ap.poll(5600));
        assert!(ap.poll(6500));
    }

    #[test]
    fn pause_suppresses_ticks() {
        let mut ap = Autoplay::new(1000);
        ap.start(0);
        ap.pause(PauseReasons::HOVER);
        assert!(ap.is_paused());
        assert!(!ap.poll(5000));
    }

    // Resume restarts from zero rather than picking up the old deadline.
    #[test]
    fn resume_restarts_rather_than_resumes() {
        let mut ap = Autoplay::new(1000);
        ap.start(0);
        ap.pause(PauseReasons::HOVER);
        ap.resume(PauseReasons::HOVER, 700);
        assert!(!ap.poll(1000));
        assert!(ap.poll(1700));
    }

    #[test]
    fn pause_reasons_accumulate() {
        let mut ap = Autoplay::new(1000);
        ap.start(0);
        ap.pause(PauseReasons::HOVER);
        ap.pause(PauseReasons::FOCUS);

        // Clearing one reason keeps the timer paused.
        ap.resume(PauseReasons::HOVER, 100);
        assert!(ap.is_paused());
        assert!(!ap.poll(5000));

        ap.resume(PauseReasons::FOCUS, 200);
        assert!(ap.is_running());
        assert!(ap.poll(1200));
    }

    #[test]
    fn redundant_pause_and_resume_are_harmless() {
        let mut ap = Autoplay::new(1000);
        ap.start(0);
        ap.pause(PauseReasons::HOVER);
        ap.pause(PauseReasons::HOVER);
        ap.resume(PauseReasons::HOVER, 300);
        assert!(ap.is_running());
        // Resuming a running timer changes nothing.
        ap.resume(PauseReasons::FOCUS, 400);
        assert!(ap.poll(1300));
    }

    #[test]
    fn dispose_is_terminal_and_idempotent() {
        let mut ap = Autoplay::new(1000);
        ap.start(0);
        ap.dispose();
        ap.dispose();
        assert!(ap.is_disposed());
        assert!(!ap.poll(10_000));

        // No phase escapes disposal.
        ap.start(20_000);
        ap.resume(PauseReasons::HOVER, 20_000);
        assert!(!ap.poll(30_000));
        assert!(ap.is_disposed());
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut ap = Autoplay::new(0);
        assert_eq!(ap.interval_ms(), 1);
        ap.start(0);
        assert!(!ap.poll(0));
        assert!(ap.poll(1));
    }
}
