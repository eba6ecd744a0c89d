//! Heading fusion and damping.
//!
//! Raw compass samples set a *target* north angle; the *displayed* north angle
//! chases it once per filter tick with a non-linear damping step. Samples may
//! arrive faster than the tick: only the latest target matters, so bursts
//! cannot destabilize the display.
//!
//! # Damping Curve
//!
//! ```text
//! gain(|δ|) = GAIN_MIN + (GAIN_MAX - GAIN_MIN) · |δ| / HALF_TURN     (out of 256)
//! step      = max(1, |δ| · gain / 256) · sign(δ)
//! ```
//!
//! Large errors close at up to 25% per tick, small ones at ~9%, and the final
//! units are closed one at a time. Since the gain never exceeds 256 the step
//! never exceeds `|δ|`, so the error shrinks monotonically without overshoot.

use crate::angle::{self, Angle, HALF_TURN, QUARTER_TURN};
use crate::config::{DAMPING_GAIN_MAX, DAMPING_GAIN_MIN, DAMPING_SHIFT, POINTING_UP};

/// Whether the sensor trusts its own reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeadingValidity {
    #[default]
    Valid,
    /// The magnetometer needs the user to wave the device around.
    NeedsCalibration,
}

/// One reading from the orientation sensor.
///
/// `angle` is the sensor's heading measured counter-clockwise from magnetic
/// north, so facing east reads `3 * QUARTER_TURN`. A clockwise compass heading
/// `h` is delivered as `-h`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeadingSample {
    pub angle: Angle,
    pub validity: HeadingValidity,
}

impl HeadingSample {
    pub const fn valid(angle: Angle) -> Self {
        Self {
            angle,
            validity: HeadingValidity::Valid,
        }
    }

    pub const fn needs_calibration(angle: Angle) -> Self {
        Self {
            angle,
            validity: HeadingValidity::NeedsCalibration,
        }
    }
}

/// One damping step toward a target `delta` away.
///
/// Always within `[-|delta|, |delta|]` and only zero when `delta` is zero.
pub const fn damping_step(delta: Angle) -> Angle {
    if delta == 0 {
        return 0;
    }
    let magnitude = delta.abs();
    let gain = DAMPING_GAIN_MIN + (DAMPING_GAIN_MAX - DAMPING_GAIN_MIN) * magnitude / HALF_TURN;
    let mut step = (magnitude * gain) >> DAMPING_SHIFT;
    if step < 1 {
        step = 1;
    }
    if delta > 0 { step } else { -step }
}

/// Damped screen angle of north.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingFilter {
    displayed_north: Angle,
    target_north: Angle,
    calibration_needed: bool,
}

impl HeadingFilter {
    /// Starts pointing up with no calibration prompt.
    pub const fn new() -> Self {
        Self {
            displayed_north: POINTING_UP,
            target_north: POINTING_UP,
            calibration_needed: false,
        }
    }

    /// Take a new sample as the target. Returns true if the calibration flag changed.
    ///
    /// North lands at `QUARTER_TURN - angle` on screen: straight up when facing
    /// north, on the left when facing east.
    pub fn on_sample(
        &mut self,
        sample: HeadingSample,
    ) -> bool {
        let was_needed = self.calibration_needed;
        match sample.validity {
            HeadingValidity::Valid => {
                self.target_north = angle::normalize(QUARTER_TURN - sample.angle);
                self.calibration_needed = false;
            }
            HeadingValidity::NeedsCalibration => {
                self.target_north = POINTING_UP;
                self.calibration_needed = true;
            }
        }
        was_needed != self.calibration_needed
    }

    /// Advance the damping by one tick. Returns true if the displayed angle moved.
    pub fn tick(&mut self) -> bool {
        let delta = angle::shortest_delta(self.displayed_north, self.target_north);
        if delta == 0 {
            return false;
        }
        self.displayed_north = angle::normalize(self.displayed_north + damping_step(delta));
        true
    }

    /// Jump straight to the target without damping.
    pub fn snap(&mut self) { self.displayed_north = self.target_north; }

    #[inline]
    pub const fn displayed_north(&self) -> Angle { self.displayed_north }

    #[inline]
    pub const fn target_north(&self) -> Angle { self.target_north }

    #[inline]
    pub const fn calibration_needed(&self) -> bool { self.calibration_needed }

    /// Whether the display has caught up with the latest sample.
    #[inline]
    pub const fn is_settled(&self) -> bool { self.displayed_north == self.target_north }
}

impl Default for HeadingFilter {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
