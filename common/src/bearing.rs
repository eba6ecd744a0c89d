//! Great-circle initial bearing from the observer to a fixed target.
//!
//! The spherical formula
//!
//! ```text
//! bearing = atan2(sin Δlon, cos φ · tan φt − sin φ · cos Δlon)
//! ```
//!
//! is evaluated with its denominator rewritten as
//!
//! ```text
//! sin(φt − φ) / cos φt + 2 · sin φ · sin²(Δlon / 2)
//! ```
//!
//! where φ is the observer latitude, φt the target latitude and
//! Δlon = target longitude − observer longitude. Both terms go to zero as the
//! observer approaches the target. Everything runs on [`crate::trig`].

use crate::angle::{Angle, HALF_TURN, normalize};
use crate::settings::GeoCoordinate;
use crate::trig::{atan2_lookup, cos_lookup, div_ratio, mul_ratio, sin_lookup};

/// The Kaaba in Makkah (21.4233° N, 39.8254° E).
pub const KAABA: GeoCoordinate = GeoCoordinate::from_raw(3900, 7250);

/// Bearing from `observer` to `target`, clockwise from true north, in `[0, FULL_TURN)`.
///
/// When the geometry is degenerate (observer at the target or at its
/// antipode) every direction is equally valid and 0 is returned.
pub fn target_bearing(
    observer: GeoCoordinate,
    target: GeoCoordinate,
) -> Angle {
    let delta_lon = target.longitude().wrapping_sub(observer.longitude());
    let lat = observer.latitude();
    let target_lat = target.latitude();

    if observer == target || (lat == -target_lat && normalize(delta_lon) == HALF_TURN) {
        return 0;
    }

    let numerator = sin_lookup(delta_lon);
    let half_sin = sin_lookup(delta_lon / 2);
    let denominator = div_ratio(sin_lookup(target_lat - lat), cos_lookup(target_lat))
        + 2 * mul_ratio(sin_lookup(lat), mul_ratio(half_sin, half_sin));

    atan2_lookup(numerator, denominator)
}

/// Bearing from `observer` to the Kaaba.
#[inline]
pub fn qibla_bearing(observer: GeoCoordinate) -> Angle { target_bearing(observer, KAABA) }

// =============================================================================
// Tests
// =============================================================================
