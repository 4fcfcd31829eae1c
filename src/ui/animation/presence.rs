// SPDX-License-Identifier: MPL-2.0
//! Exit-then-enter sequencing for a single mounted item.
//!
//! `Presence` keeps the currently mounted key on screen while it plays its
//! exit transition, then swaps to the requested key and plays the enter
//! transition. Time is injected through `show` and `tick` so the sequencing
//! is deterministic under test.

use super::{enter_window, Frame, TransitionSpec};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Exiting { started: Instant },
    Entering { started: Instant },
}

#[derive(Debug, Clone)]
pub struct Presence<K> {
    mounted: K,
    pending: Option<K>,
    phase: Phase,
    now: Instant,
    enabled: bool,
    enter: TransitionSpec,
    exit: TransitionSpec,
    enter_window: Duration,
}

impl<K: Copy + PartialEq + std::fmt::Debug> Presence<K> {
    /// Mounts `initial`, playing its enter transition when `enabled`.
    pub fn new(initial: K, enabled: bool, now: Instant) -> Self {
        Self {
            mounted: initial,
            pending: None,
            phase: if enabled {
                Phase::Entering { started: now }
            } else {
                Phase::Idle
            },
            now,
            enabled,
            enter: TransitionSpec::page_enter(),
            exit: TransitionSpec::page_exit(),
            enter_window: enter_window(),
        }
    }

    /// The key currently on screen. Lags behind the last `show` request
    /// while the previous key plays its exit.
    #[must_use]
    pub fn mounted(&self) -> K {
        self.mounted
    }

    /// The key waiting for the exit transition to finish.
    #[must_use]
    pub fn pending(&self) -> Option<K> {
        self.pending
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Requests `target` to be mounted.
    pub fn show(&mut self, target: K, now: Instant) {
        self.now = now;

        if !self.enabled {
            self.mounted = target;
            self.pending = None;
            self.phase = Phase::Idle;
            return;
        }

        if target == self.mounted {
            // Switching back before the exit finished: bring it back in.
            if self.pending.take().is_some() {
                self.phase = Phase::Entering { started: now };
            }
            return;
        }

        self.pending = Some(target);
        if !matches!(self.phase, Phase::Exiting { .. }) {
            self.phase = Phase::Exiting { started: now };
        }
    }

    /// Advances the sequence to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        match self.phase {
            Phase::Idle => {}
            Phase::Exiting { started } => {
                if now.saturating_duration_since(started) >= self.exit.total() {
                    if let Some(next) = self.pending.take() {
                        tracing::trace!(from = ?self.mounted, to = ?next, "presence swap");
                        self.mounted = next;
                    }
                    self.phase = Phase::Entering { started: now };
                }
            }
            Phase::Entering { started } => {
                if now.saturating_duration_since(started) >= self.enter_window {
                    self.phase = Phase::Idle;
                }
            }
        }
    }

    /// Frame of the mounted item as of the last `show` or `tick`.
    #[must_use]
    pub fn frame(&self) -> Frame {
        match self.phase {
            Phase::Idle => Frame::REST,
            Phase::Exiting { started } => self.exit.frame_at(self.since(started)),
            Phase::Entering { started } => self.enter.frame_at(self.since(started)),
        }
    }

    /// Frame of the `index`-th child of the mounted item.
    ///
    /// Children stagger on enter and leave together with their parent.
    #[must_use]
    pub fn child_frame(&self, index: usize) -> Frame {
        match self.phase {
            Phase::Entering { started } => {
                TransitionSpec::child_enter(index).frame_at(self.since(started))
            }
            Phase::Idle | Phase::Exiting { .. } => Frame::REST,
        }
    }

    /// Skill bar fill progress in `0.0..=1.0`.
    #[must_use]
    pub fn fill_progress(&self) -> f32 {
        match self.phase {
            Phase::Entering { started } => {
                TransitionSpec::skill_fill().progress_at(self.since(started))
            }
            Phase::Idle | Phase::Exiting { .. } => 1.0,
        }
    }

    fn since(&self, started: Instant) -> Duration {
        self.now.saturating_duration_since(started)
    }
}
