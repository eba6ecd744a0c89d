//! Integer trigonometry on the `FULL_TURN` angle scale.
//!
//! Sine and cosine return ratios scaled by `TRIG_MAX_RATIO` (0xFFFF ≈ 1.0).
//! `atan2_lookup` goes the other way and returns an angle in `[0, FULL_TURN)`.
//!
//! # Tables
//!
//! Both tables cover one octant/quadrant with 128 segments and are linearly
//! interpolated. Worst-case error is a few ratio units for sine and a few
//! angle units (< 0.02°) for atan2.
//!
//! # Overflow
//!
//! A ratio is ~2^16, so the product of two ratios does not fit in `i32`.
//! [`mul_ratio`] pre-scales each factor by `2^PRESCALE_SHIFT` before multiplying,
//! keeping 12 significant bits per factor. [`atan2_lookup`] shifts both operands
//! below `2^18` before dividing. Nothing in this module widens to `i64`.

use crate::angle::{Angle, FULL_TURN, HALF_TURN, QUARTER_TURN, normalize};

/// Ratio value representing 1.0.
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

/// log2 of the ratio scale used by products and quotients.
const RATIO_SHIFT: u32 = 16;

/// Shift applied to each factor before multiplying two ratios.
const PRESCALE_SHIFT: u32 = 4;

/// Largest magnitude `mul_ratio` accepts per factor (ratio 8.0).
pub const MUL_RATIO_LIMIT: i32 = 1 << 19;

/// Saturation bound for `div_ratio` and `tan_lookup`, kept inside `MUL_RATIO_LIMIT`.
/// Ratio 8 corresponds to about 82.9°.
pub const TAN_LIMIT: i32 = MUL_RATIO_LIMIT - 1;

/// Operands of `atan2_lookup` are shifted until both are below this.
const ATAN_INPUT_LIMIT: u32 = 1 << 18;

/// Resolution of the atan2 ratio (12 bits).
const ATAN_RATIO_SHIFT: u32 = 12;

/// Quarter-wave sine: `SIN_TABLE[i] = sin(i/128 · 90°) · 0xFFFF`.
const SIN_TABLE: [u16; 129] = [
    0, 804, 1608, 2412, 3216, 4019, 4821, 5623, 6424, 7223, 8022, 8820, 9616, 10411, 11204, 11996, 12785, 13573,
    14359, 15142, 15924, 16703, 17479, 18253, 19024, 19792, 20557, 21319, 22078, 22834, 23586, 24334, 25079, 25820,
    26557, 27291, 28020, 28745, 29465, 30181, 30893, 31600, 32302, 32999, 33692, 34379, 35061, 35738, 36409, 37075,
    37736, 38390, 39039, 39682, 40319, 40950, 41575, 42194, 42806, 43411, 44011, 44603, 45189, 45768, 46340, 46905,
    47464, 48014, 48558, 49095, 49624, 50145, 50659, 51166, 51664, 52155, 52638, 53113, 53580, 54039, 54490, 54933,
    55367, 55794, 56211, 56620, 57021, 57413, 57797, 58171, 58537, 58895, 59243, 59582, 59913, 60234, 60546, 60850,
    61144, 61429, 61704, 61970, 62227, 62475, 62713, 62942, 63161, 63371, 63571, 63762, 63943, 64114, 64276, 64428,
    64570, 64703, 64826, 64939, 65042, 65136, 65219, 65293, 65357, 65412, 65456, 65491, 65515, 65530, 65535,
];

/// First-octant arctangent: `ATAN_TABLE[i] = atan(i/128)` in angle units.
const ATAN_TABLE: [u16; 129] = [
    0, 81, 163, 244, 326, 407, 489, 570, 651, 732, 813, 894, 975, 1056, 1136, 1217, 1297, 1377, 1457, 1537, 1617,
    1696, 1775, 1854, 1933, 2012, 2090, 2168, 2246, 2324, 2401, 2478, 2555, 2632, 2708, 2784, 2860, 2935, 3010, 3085,
    3159, 3233, 3307, 3380, 3453, 3526, 3599, 3670, 3742, 3813, 3884, 3955, 4025, 4095, 4164, 4233, 4302, 4370, 4438,
    4505, 4572, 4639, 4705, 4771, 4836, 4901, 4966, 5030, 5094, 5157, 5220, 5282, 5344, 5406, 5467, 5528, 5589, 5649,
    5708, 5768, 5826, 5885, 5943, 6000, 6058, 6114, 6171, 6227, 6282, 6337, 6392, 6446, 6500, 6554, 6607, 6660, 6712,
    6764, 6815, 6867, 6917, 6968, 7018, 7068, 7117, 7166, 7214, 7262, 7310, 7358, 7405, 7451, 7498, 7544, 7589, 7635,
    7679, 7724, 7768, 7812, 7856, 7899, 7942, 7984, 8026, 8068, 8110, 8151, 8192,
];

/// Interpolate a 129-entry table. `position` is in `[0, 128 << frac_bits]`.
#[inline]
fn interpolate(
    table: &[u16; 129],
    position: u32,
    frac_bits: u32,
) -> i32 {
    let idx = (position >> frac_bits) as usize;
    if idx >= 128 {
        return i32::from(table[128]);
    }
    let frac = (position & ((1 << frac_bits) - 1)) as i32;
    let lo = i32::from(table[idx]);
    let hi = i32::from(table[idx + 1]);
    lo + (((hi - lo) * frac) >> frac_bits)
}

/// Sine over the first quadrant, `offset` in `[0, QUARTER_TURN]`.
#[inline]
fn quarter_sin(offset: Angle) -> i32 { interpolate(&SIN_TABLE, offset as u32, 7) }

/// Sine of `angle`, scaled by `TRIG_MAX_RATIO`.
///
/// Exact at multiples of a quarter turn (0, ±0xFFFF).
pub fn sin_lookup(angle: Angle) -> i32 {
    let a = normalize(angle);
    let offset = a % QUARTER_TURN;
    match a / QUARTER_TURN {
        0 => quarter_sin(offset),
        1 => quarter_sin(QUARTER_TURN - offset),
        2 => -quarter_sin(offset),
        _ => -quarter_sin(QUARTER_TURN - offset),
    }
}

/// Cosine of `angle`, scaled by `TRIG_MAX_RATIO`.
#[inline]
pub fn cos_lookup(angle: Angle) -> i32 { sin_lookup(angle.wrapping_add(QUARTER_TURN)) }

/// Quotient `num / den` of two ratio-scaled values, scaled by 2^16 and
/// saturated at `±TAN_LIMIT`.
///
/// The numerator is widened by 2^14 and the denominator narrowed by 2^2 so the
/// quotient lands on the 2^16 scale without an intermediate above 2^30.
/// Both operands must be within `±TRIG_MAX_RATIO`.
pub fn div_ratio(
    num: i32,
    den: i32,
) -> i32 {
    let den = den >> 2;
    if den == 0 {
        return if num >= 0 { TAN_LIMIT } else { -TAN_LIMIT };
    }
    (num * (1 << 14) / den).clamp(-TAN_LIMIT, TAN_LIMIT)
}

/// Tangent of `angle`, scaled by 2^16 and saturated at `±TAN_LIMIT`.
#[inline]
pub fn tan_lookup(angle: Angle) -> i32 { div_ratio(sin_lookup(angle), cos_lookup(angle)) }

/// Product of two ratio-scaled values, on the same ratio scale.
///
/// Both factors must be within `±MUL_RATIO_LIMIT`.
#[inline]
pub const fn mul_ratio(
    a: i32,
    b: i32,
) -> i32 {
    ((a >> PRESCALE_SHIFT) * (b >> PRESCALE_SHIFT)) >> (RATIO_SHIFT - 2 * PRESCALE_SHIFT)
}

/// Angle of the vector `(x, y)` in `[0, FULL_TURN)`, counter-clockwise from +x.
///
/// Operands may be on any scale. `atan2_lookup(0, 0)` returns 0.
pub fn atan2_lookup(
    y: i32,
    x: i32,
) -> Angle {
    if x == 0 && y == 0 {
        return 0;
    }

    let mut ax = x.unsigned_abs();
    let mut ay = y.unsigned_abs();
    while ax >= ATAN_INPUT_LIMIT || ay >= ATAN_INPUT_LIMIT {
        ax >>= 1;
        ay >>= 1;
    }
    // Reduce to the first octant: ratio = min/max in [0, 1]
    let steep = ay > ax;
    let (num, den) = if steep { (ax, ay) } else { (ay, ax) };
    let ratio = (num << ATAN_RATIO_SHIFT) / den;
    let octant_angle = interpolate(&ATAN_TABLE, ratio, ATAN_RATIO_SHIFT - 7);
    let first_quadrant = if steep { QUARTER_TURN - octant_angle } else { octant_angle };

    let angle = match (x >= 0, y >= 0) {
        (true, true) => first_quadrant,
        (false, true) => HALF_TURN - first_quadrant,
        (false, false) => HALF_TURN + first_quadrant,
        (true, false) => FULL_TURN - first_quadrant,
    };
    normalize(angle)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference sine from std, on the ratio scale.
    fn reference_sin(angle: Angle) -> i32 {
        let radians = f64::from(angle) * core::f64::consts::TAU / f64::from(FULL_TURN);
        (radians.sin() * f64::from(TRIG_MAX_RATIO)).round() as i32
    }

    #[test]
    fn test_sin_exact_at_quadrants() {
        assert_eq!(sin_lookup(0), 0);
        assert_eq!(sin_lookup(QUARTER_TURN), TRIG_MAX_RATIO);
        assert_eq!(sin_lookup(HALF_TURN), 0);
        assert_eq!(sin_lookup(3 * QUARTER_TURN), -TRIG_MAX_RATIO);
        assert_eq!(cos_lookup(0), TRIG_MAX_RATIO);
        assert_eq!(cos_lookup(HALF_TURN), -TRIG_MAX_RATIO);
    }

    #[test]
    fn test_sin_matches_reference() {
        for angle in (-FULL_TURN..FULL_TURN).step_by(173) {
            let diff = (sin_lookup(angle) - reference_sin(angle)).abs();
            assert!(diff <= 3, "angle {angle}: diff {diff}");
        }
    }

    #[test]
    fn test_sin_is_odd() {
        for angle in (0..FULL_TURN).step_by(311) {
            assert_eq!(sin_lookup(-angle), -sin_lookup(angle));
        }
    }

    #[test]
    fn test_tan_known_values() {
        // tan(45°) = 1.0 on the 2^16 scale
        assert!((tan_lookup(FULL_TURN / 8) - 65536).abs() < 64);
        assert_eq!(tan_lookup(0), 0);
        // 21.42° is the target latitude: tan ≈ 0.3924
        assert!((tan_lookup(3900) - 25714).abs() < 32);
    }

    #[test]
    fn test_tan_saturates_near_vertical() {
        assert_eq!(tan_lookup(QUARTER_TURN), TAN_LIMIT);
        assert_eq!(tan_lookup(-QUARTER_TURN), -TAN_LIMIT);
        assert_eq!(tan_lookup(QUARTER_TURN - 1), TAN_LIMIT);
    }

    #[test]
    fn test_div_ratio() {
        assert_eq!(div_ratio(0, TRIG_MAX_RATIO), 0);
        assert!((div_ratio(TRIG_MAX_RATIO / 2, TRIG_MAX_RATIO) - 32768).abs() < 8);
        // Small numerators keep their relative precision
        assert!((div_ratio(50, 61000) - 53).abs() <= 1);
        assert_eq!(div_ratio(-10, 0), -TAN_LIMIT);
        assert_eq!(div_ratio(TRIG_MAX_RATIO, 100), TAN_LIMIT);
    }

    #[test]
    fn test_mul_ratio() {
        assert!((mul_ratio(TRIG_MAX_RATIO, TRIG_MAX_RATIO) - 65536).abs() < 64);
        assert!((mul_ratio(TRIG_MAX_RATIO / 2, TRIG_MAX_RATIO / 2) - 16384).abs() < 32);
        assert!(mul_ratio(-TRIG_MAX_RATIO, TRIG_MAX_RATIO) < -65000);
        // Largest operands stay inside i32
        assert!(mul_ratio(TAN_LIMIT, TRIG_MAX_RATIO) > 0);
    }

    #[test]
    fn test_atan2_axes() {
        assert_eq!(atan2_lookup(0, 0), 0);
        assert_eq!(atan2_lookup(0, 5), 0);
        assert_eq!(atan2_lookup(5, 0), QUARTER_TURN);
        assert_eq!(atan2_lookup(0, -5), HALF_TURN);
        assert_eq!(atan2_lookup(-5, 0), 3 * QUARTER_TURN);
    }

    #[test]
    fn test_atan2_diagonals() {
        assert_eq!(atan2_lookup(1, 1), FULL_TURN / 8);
        assert_eq!(atan2_lookup(1, -1), 3 * FULL_TURN / 8);
        assert_eq!(atan2_lookup(-1, -1), 5 * FULL_TURN / 8);
        assert_eq!(atan2_lookup(-1, 1), 7 * FULL_TURN / 8);
    }

    #[test]
    fn test_atan2_inverts_sin_cos() {
        for angle in (0..FULL_TURN).step_by(257) {
            let back = atan2_lookup(sin_lookup(angle), cos_lookup(angle));
            let diff = crate::angle::shortest_delta(angle, back).abs();
            assert!(diff <= 8, "angle {angle}: got {back}");
        }
    }

    #[test]
    fn test_atan2_large_operands() {
        let big = i32::MAX / 2;
        assert_eq!(atan2_lookup(big, big), FULL_TURN / 8);
        assert_eq!(atan2_lookup(0, i32::MIN), HALF_TURN);
    }
}
