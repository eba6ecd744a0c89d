//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};

use crate::angle::Angle;
use crate::trig::{TRIG_MAX_RATIO, cos_lookup, sin_lookup};

/// Point `radius` pixels from `center` along a screen angle.
///
/// Screen angles run counter-clockwise from +x while pixel rows grow
/// downward, hence the negated sine. A negative radius points the other way.
pub fn polar_point(
    center: Point,
    angle: Angle,
    radius: i32,
) -> Point {
    let dx = cos_lookup(angle) * radius / TRIG_MAX_RATIO;
    let dy = sin_lookup(angle) * radius / TRIG_MAX_RATIO;
    Point::new(center.x + dx, center.y - dy)
}

/// Filled isosceles triangle pointing along `angle`.
///
/// The tip sits at `tip_radius`, the base at `base_radius` with the given
/// half-width (in angle units on either side).
pub fn draw_pointer<D>(
    display: &mut D,
    center: Point,
    angle: Angle,
    tip_radius: i32,
    base_radius: i32,
    half_width: Angle,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let tip = polar_point(center, angle, tip_radius);
    let left = polar_point(center, angle + half_width, base_radius);
    let right = polar_point(center, angle - half_width, base_radius);
    Triangle::new(tip, left, right).into_styled(style).draw(display).ok();
}
