//! Clock-based solar reference.
//!
//! A visual approximation only: the sun is assumed to sweep half the horizon
//! per twelve hours, east at 06:00 and due south at noon for an observer in the
//! northern hemisphere. The southern hemisphere shifts the whole sweep by half
//! a turn. No ephemeris, equation of time or daylight-saving correction.

use crate::angle::{self, Angle, HALF_TURN};

/// Minutes in half a day; one half turn of the approximated sun.
const MINUTES_PER_HALF_TURN: i32 = 12 * 60;

/// Minutes in a day.
const MINUTES_PER_DAY: i32 = 24 * 60;

/// Local civil time with minute resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CivilTime {
    pub hour: u8,
    pub minute: u8,
}

impl CivilTime {
    pub const fn new(
        hour: u8,
        minute: u8,
    ) -> Self {
        Self { hour, minute }
    }

    /// Minutes since local midnight, wrapped into one day.
    #[inline]
    pub const fn minutes_since_midnight(self) -> i32 {
        (self.hour as i32 * 60 + self.minute as i32).rem_euclid(MINUTES_PER_DAY)
    }
}

/// Coarse hemisphere flag for the solar reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

impl Hemisphere {
    /// Equator counts as northern.
    #[inline]
    pub const fn from_latitude(latitude: Angle) -> Self {
        if latitude < 0 { Self::Southern } else { Self::Northern }
    }
}

/// Approximate solar azimuth, clockwise from north, in `[0, FULL_TURN)`.
pub const fn solar_bearing(
    time: CivilTime,
    hemisphere: Hemisphere,
) -> Angle {
    let sweep = time.minutes_since_midnight() * HALF_TURN / MINUTES_PER_HALF_TURN;
    let shift = match hemisphere {
        Hemisphere::Northern => 0,
        Hemisphere::Southern => HALF_TURN,
    };
    angle::normalize(sweep + shift)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{FULL_TURN, QUARTER_TURN};

    #[test]
    fn test_northern_cardinal_hours() {
        let n = Hemisphere::Northern;
        assert_eq!(solar_bearing(CivilTime::new(0, 0), n), 0);
        assert_eq!(solar_bearing(CivilTime::new(6, 0), n), QUARTER_TURN);
        assert_eq!(solar_bearing(CivilTime::new(12, 0), n), HALF_TURN);
        assert_eq!(solar_bearing(CivilTime::new(18, 0), n), 3 * QUARTER_TURN);
    }

    #[test]
    fn test_southern_shift() {
        let s = Hemisphere::Southern;
        assert_eq!(solar_bearing(CivilTime::new(12, 0), s), 0);
        assert_eq!(solar_bearing(CivilTime::new(0, 0), s), HALF_TURN);
    }

    #[test]
    fn test_minute_resolution() {
        // 45 units per minute, rounded down
        let a = solar_bearing(CivilTime::new(9, 0), Hemisphere::Northern);
        let b = solar_bearing(CivilTime::new(9, 1), Hemisphere::Northern);
        assert_eq!(b - a, 45);
    }

    #[test]
    fn test_always_normalized() {
        for hour in 0..24 {
            for minute in (0..60).step_by(7) {
                for hemisphere in [Hemisphere::Northern, Hemisphere::Southern] {
                    let b = solar_bearing(CivilTime::new(hour, minute), hemisphere);
                    assert!((0..FULL_TURN).contains(&b));
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_hour_wraps() {
        assert_eq!(CivilTime::new(25, 0).minutes_since_midnight(), 60);
    }

    #[test]
    fn test_hemisphere_from_latitude() {
        assert_eq!(Hemisphere::from_latitude(-1), Hemisphere::Southern);
        assert_eq!(Hemisphere::from_latitude(0), Hemisphere::Northern);
        assert_eq!(Hemisphere::from_latitude(1000), Hemisphere::Northern);
    }
}
