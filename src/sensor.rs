//! Simulated orientation sensor.
//!
//! Stands in for the watch magnetometer: the arrow keys turn the "wrist", `C`
//! toggles the calibration flag and a slow wobble adds sensor noise. Samples
//! pass through the same hysteresis a real compass service applies, so the
//! engine only sees changes of at least `HEADING_HYSTERESIS`.
//!
//! The simulated heading is a plain compass heading (clockwise from north).
//! Samples carry it negated, as the watch compass service reports it.

use qibla_common::angle::{self, Angle, FULL_TURN};
use qibla_common::config::HEADING_HYSTERESIS;
use qibla_common::{HeadingSample, HeadingValidity};

/// Heading change per arrow key press (10°).
pub const TURN_STEP: Angle = FULL_TURN / 36;

/// Peak amplitude of the simulated noise (1.5°). Peak to peak stays below the hysteresis.
const WOBBLE_AMPLITUDE: Angle = FULL_TURN / 240;

/// Polls per wobble period.
const WOBBLE_PERIOD: u32 = 16;

pub struct SimulatedCompass {
    heading: Angle,
    validity: HeadingValidity,
    last_reported: Option<HeadingSample>,
    polls: u32,
}

impl SimulatedCompass {
    pub const fn new(heading: Angle) -> Self {
        Self {
            heading,
            validity: HeadingValidity::Valid,
            last_reported: None,
            polls: 0,
        }
    }

    /// Turn the wrist clockwise (positive) or counter-clockwise.
    pub fn rotate(
        &mut self,
        delta: Angle,
    ) {
        self.heading = angle::normalize(self.heading + delta);
    }

    /// Flip between a trusted reading and "needs calibration".
    pub fn toggle_calibration(&mut self) -> HeadingValidity {
        self.validity = match self.validity {
            HeadingValidity::Valid => HeadingValidity::NeedsCalibration,
            HeadingValidity::NeedsCalibration => HeadingValidity::Valid,
        };
        self.validity
    }

    #[inline]
    pub const fn heading(&self) -> Angle { self.heading }

    /// Next sample to deliver, if it clears the hysteresis threshold.
    pub fn poll(&mut self) -> Option<HeadingSample> {
        self.polls = self.polls.wrapping_add(1);
        let sample = HeadingSample {
            angle: angle::normalize(-(self.heading + self.wobble())),
            validity: self.validity,
        };

        let report = match self.last_reported {
            None => true,
            Some(last) => {
                last.validity != sample.validity
                    || angle::shortest_delta(last.angle, sample.angle).abs() >= HEADING_HYSTERESIS
            }
        };
        if !report {
            return None;
        }
        self.last_reported = Some(sample);
        Some(sample)
    }

    /// Triangle wave in `[-WOBBLE_AMPLITUDE, WOBBLE_AMPLITUDE]`.
    fn wobble(&self) -> Angle {
        let phase = (self.polls % WOBBLE_PERIOD) as i32;
        let half = (WOBBLE_PERIOD / 2) as i32;
        let ramp = if phase < half { phase } else { 2 * half - phase };
        WOBBLE_AMPLITUDE * (2 * ramp - half) / half
    }
}

#[cfg(test)]
mod tests {
    use qibla_common::angle::HALF_TURN;
    use qibla_common::heading::HeadingFilter;

    use super::*;

    #[test]
    fn test_first_poll_reports() {
        let mut compass = SimulatedCompass::new(0);
        let sample = compass.poll().unwrap();
        assert_eq!(sample.validity, HeadingValidity::Valid);
    }

    #[test]
    fn test_noise_is_filtered_by_hysteresis() {
        let mut compass = SimulatedCompass::new(1000);
        compass.poll();
        for _ in 0..100 {
            assert!(compass.poll().is_none());
        }
    }

    #[test]
    fn test_rotation_is_reported() {
        let mut compass = SimulatedCompass::new(0);
        compass.poll();
        compass.rotate(TURN_STEP);
        let sample = compass.poll().unwrap();
        assert!(angle::shortest_delta(-TURN_STEP, sample.angle).abs() <= WOBBLE_AMPLITUDE);
    }

    #[test]
    fn test_turning_right_moves_north_left() {
        let mut compass = SimulatedCompass::new(0);
        compass.poll();
        // Nine steps right: facing east
        for _ in 0..9 {
            compass.rotate(TURN_STEP);
        }
        let sample = compass.poll().unwrap();
        let mut filter = HeadingFilter::new();
        filter.on_sample(sample);
        filter.snap();
        let error = angle::shortest_delta(HALF_TURN, filter.displayed_north());
        assert!(error.abs() <= 2 * WOBBLE_AMPLITUDE);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut compass = SimulatedCompass::new(0);
        compass.rotate(-TURN_STEP);
        assert_eq!(compass.heading(), FULL_TURN - TURN_STEP);
    }

    #[test]
    fn test_calibration_change_is_reported() {
        let mut compass = SimulatedCompass::new(0);
        compass.poll();
        assert_eq!(compass.toggle_calibration(), HeadingValidity::NeedsCalibration);
        let sample = compass.poll().unwrap();
        assert_eq!(sample.validity, HeadingValidity::NeedsCalibration);
    }

    #[test]
    fn test_wobble_bounds() {
        let mut compass = SimulatedCompass::new(0);
        for _ in 0..(WOBBLE_PERIOD * 2) {
            compass.polls += 1;
            assert!(compass.wobble().abs() <= WOBBLE_AMPLITUDE);
        }
    }
}
