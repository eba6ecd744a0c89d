//! Engine and layout configuration constants.
//!
//! Everything tunable lives here as compile-time constants, grouped by concern.
//! Runtime choices (target location, whether the solar reference exists) are in
//! [`crate::engine::EngineConfig`].
//!
//! The damping and animation constants are tuned for a filter tick of
//! `FILTER_TICK_MS`. If the host drives the tick at a different rate, retune
//! `DAMPING_GAIN_*` and `ANIMATION_STEP` together.

use crate::angle::{Angle, FULL_TURN, QUARTER_TURN};

// =============================================================================
// Timing Configuration
// =============================================================================

/// Period of the damping/animation tick (~30 FPS).
pub const FILTER_TICK_MS: u32 = 33;

/// Grace period after startup before "not yet synced" is shown.
pub const GRACE_PERIOD_MS: u32 = 1500;

// =============================================================================
// Heading Filter Configuration
// =============================================================================

/// Minimum heading change the sensor should report (4°).
/// Applied by the sensor collaborator, not by the engine.
pub const HEADING_HYSTERESIS: Angle = FULL_TURN / 90;

/// Screen angle of "north" when no trustworthy heading exists.
pub const POINTING_UP: Angle = QUARTER_TURN;

/// Damping gain (out of `1 << DAMPING_SHIFT`) applied when the error is tiny.
/// 24/256 ≈ 9% of the remaining error per tick.
pub const DAMPING_GAIN_MIN: i32 = 24;

/// Damping gain applied when the error is a full half turn (25% per tick).
pub const DAMPING_GAIN_MAX: i32 = 64;

/// Fixed-point shift for the damping gain.
pub const DAMPING_SHIFT: u32 = 8;

// =============================================================================
// Alignment Animation Configuration
// =============================================================================

/// Progress value at which a mode transition is complete.
pub const ANIMATION_MAX_PROGRESS: i32 = 100;

/// Progress added per filter tick. 100 / 4 = 25 ticks ≈ 0.8 s.
pub const ANIMATION_STEP: i32 = 4;

// =============================================================================
// Settings Configuration
// =============================================================================

/// Maximum bytes kept from the companion's place name.
pub const PLACE_NAME_LEN: usize = 32;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (watch-sized panel).
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Height of the bottom status banner ("No Phone Connection").
pub const BANNER_HEIGHT: u32 = 20;

/// Dial centre, above the status banner.
pub const DIAL_CENTER_Y: i32 = ((SCREEN_HEIGHT - BANNER_HEIGHT) / 2) as i32;

/// Dial ring radius in pixels.
pub const DIAL_RADIUS: i32 = 62;
