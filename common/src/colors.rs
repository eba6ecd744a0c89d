//! Color constants for the compass face.
//!
//! Standard colors come from the `RgbColor` trait constants so they map to the
//! exact Rgb565 extremes. Custom colors are constructed directly.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Labels and the centre glyph.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// North chevron, error log entries.
pub const RED: Rgb565 = Rgb565::RED;

/// Target arrow, info log entries.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Solar marker, warnings.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Calibration prompt background.
/// RGB565: (31, 32, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dial ring and dividers. Roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Mode popup background.
/// RGB565: (0, 20, 10), a dark blue-green.
pub const DARK_TEAL: Rgb565 = Rgb565::new(0, 20, 10);
