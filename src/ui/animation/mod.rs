// SPDX-License-Identifier: MPL-2.0
//! Section transitions.
//!
//! This module is pure timing math plus a small presentation adapter:
//!
//! - [`TransitionSpec`] describes one tween between two [`Frame`]s
//! - [`Presence`] sequences exit then enter when the mounted section changes
//! - [`AnimatedMount`] applies a frame to a widget tree
//!
//! Nothing here knows about sections or routing; the shell feeds `Presence`
//! with whatever key it wants mounted.

mod mount;
mod presence;

pub use mount::{AnimatedMount, FadeSlide};
pub use presence::{Phase, Presence};

use std::time::Duration;

/// Delay between consecutive children entering.
pub const STAGGER: Duration = Duration::from_millis(100);

/// Number of children that get their own stagger slot. Later children share
/// the last slot so long lists do not keep the frame loop alive.
pub const MAX_STAGGERED: u32 = 6;

/// Visual state of an animated element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    /// Vertical displacement in logical pixels (positive is down).
    pub offset_y: f32,
    pub scale: f32,
}

impl Frame {
    /// Fully visible, in place.
    pub const REST: Frame = Frame {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    #[must_use]
    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }

    #[must_use]
    pub fn lerp(self, to: Frame, t: f32) -> Frame {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Frame {
            opacity: mix(self.opacity, to.opacity),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale),
        }
    }
}

/// Timing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Material "standard" curve, used for entering content.
    pub const STANDARD: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);
    /// Material "accelerate" curve, used for leaving content.
    pub const ACCELERATE: Easing = Easing::CubicBezier(0.4, 0.0, 1.0, 1.0);
    /// CSS `ease-out`.
    pub const EASE_OUT: Easing = Easing::CubicBezier(0.0, 0.0, 0.58, 1.0);

    /// Eased progress for linear progress `t` (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                let s = solve_bezier_param(x1, x2, t);
                bezier(y1, y2, s)
            }
        }
    }
}

/// One coordinate of a cubic Bézier with endpoints fixed at 0 and 1.
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Finds the curve parameter whose x coordinate is `x`.
///
/// Newton steps first, bisection when the slope flattens out.
fn solve_bezier_param(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return s;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

/// A tween from one frame to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub delay: Duration,
    pub duration: Duration,
    pub from: Frame,
    pub to: Frame,
    pub easing: Easing,
}

impl TransitionSpec {
    /// Section entering: fades in, rises from 20px below, grows from 95%.
    #[must_use]
    pub fn page_enter() -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::from_millis(500),
            from: Frame {
                opacity: 0.0,
                offset_y: 20.0,
                scale: 0.95,
            },
            to: Frame::REST,
            easing: Easing::STANDARD,
        }
    }

    /// Section leaving: fades out upwards.
    #[must_use]
    pub fn page_exit() -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::from_millis(300),
            from: Frame::REST,
            to: Frame {
                opacity: 0.0,
                offset_y: -20.0,
                scale: 0.95,
            },
            easing: Easing::ACCELERATE,
        }
    }

    /// Card entering within a section, delayed by its stagger slot.
    #[must_use]
    pub fn child_enter(index: usize) -> Self {
        let slot = u32::try_from(index).unwrap_or(u32::MAX).min(MAX_STAGGERED);
        Self {
            delay: STAGGER * slot,
            duration: Duration::from_millis(500),
            from: Frame {
                opacity: 0.0,
                offset_y: 20.0,
                scale: 1.0,
            },
            to: Frame::REST,
            easing: Easing::STANDARD,
        }
    }

    /// Skill bar growing from empty to its level. Only `progress_at` is
    /// meaningful for this preset.
    #[must_use]
    pub fn skill_fill() -> Self {
        Self {
            delay: Duration::from_millis(200),
            duration: Duration::from_secs(1),
            from: Frame::REST,
            to: Frame::REST,
            easing: Easing::EASE_OUT,
        }
    }

    /// Delay plus duration.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Eased progress `0.0..=1.0` after `elapsed`.
    #[must_use]
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = active.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(linear)
    }

    #[must_use]
    pub fn frame_at(&self, elapsed: Duration) -> Frame {
        self.from.lerp(self.to, self.progress_at(elapsed))
    }
}

/// How long a section keeps animating after it starts entering.
#[must_use]
pub fn enter_window() -> Duration {
    [
        TransitionSpec::page_enter().total(),
        TransitionSpec::child_enter(MAX_STAGGERED as usize).total(),
        TransitionSpec::skill_fill().total(),
    ]
    .into_iter()
    .max()
    .unwrap_or_default()
}
