// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use std::time::Duration;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Scroll offset (logical pixels) past which the scroll-to-top button shows.
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f32 = 400.0;

/// Largest accepted scroll-to-top threshold.
pub const MAX_SCROLL_TOP_THRESHOLD: f32 = 100_000.0;

/// Section transitions are enabled unless turned off.
pub const DEFAULT_ANIMATIONS: bool = true;

// ==========================================================================
// Frame Loop
// ==========================================================================

/// Interval between animation frames while a transition runs (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Interval between notification expiry checks.
pub const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

// ==========================================================================
// Window
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

const _: () = {
    assert!(DEFAULT_SCROLL_TOP_THRESHOLD > 0.0);
    assert!(DEFAULT_SCROLL_TOP_THRESHOLD < MAX_SCROLL_TOP_THRESHOLD);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
