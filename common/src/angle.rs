//! Fixed-point angle representation.
//!
//! A full turn is `FULL_TURN` (0x10000) units, so one unit is roughly 0.0055°.
//! The same scale is used for display angles and for geographic degrees
//! (latitude/longitude), which keeps every trigonometric lookup on one table.
//!
//! Screen angles follow the usual math convention: 0 points right and values
//! grow counter-clockwise, so "up" on the display is `QUARTER_TURN`.
//! Bearings (target, solar) are measured clockwise from north.
//!
//! # Circular Arithmetic
//!
//! Display angles are kept in `[0, FULL_TURN)`. Differences between angles are
//! always taken with [`shortest_delta`], which picks the short arc so that
//! smoothing and blending never swing "the long way around".

/// Angle in fixed-point units (`FULL_TURN` per revolution).
///
/// Signed so intermediate deltas can go negative or exceed one turn before
/// being normalized.
pub type Angle = i32;

/// One full revolution (360°).
pub const FULL_TURN: Angle = 0x10000;

/// Half a revolution (180°).
pub const HALF_TURN: Angle = FULL_TURN / 2;

/// Quarter revolution (90°). Screen "up".
pub const QUARTER_TURN: Angle = FULL_TURN / 4;

/// Reduce any angle into `[0, FULL_TURN)`.
#[inline]
pub const fn normalize(angle: i32) -> Angle { angle.rem_euclid(FULL_TURN) }

/// Signed difference `to - from` along the shorter arc.
///
/// The result lies in `(-HALF_TURN, HALF_TURN]` and satisfies
/// `normalize(from + delta) == normalize(to)`.
#[inline]
pub const fn shortest_delta(
    from: Angle,
    to: Angle,
) -> Angle {
    // FULL_TURN divides 2^32, so wrapping keeps the residue correct
    let delta = normalize(to.wrapping_sub(from));
    if delta > HALF_TURN { delta - FULL_TURN } else { delta }
}

/// Convert degrees to fixed-point units, rounding to the nearest unit.
///
/// The result is not normalized: -10° stays negative so latitudes keep their sign.
pub fn from_degrees(degrees: f32) -> Angle { micromath::F32(degrees * FULL_TURN as f32 / 360.0).round().0 as Angle }

/// Convert fixed-point units to whole degrees (truncating), for logs and labels.
#[inline]
pub const fn to_degrees(angle: Angle) -> i32 { angle * 360 / FULL_TURN }

// =============================================================================
// Tests
// =============================================================================
