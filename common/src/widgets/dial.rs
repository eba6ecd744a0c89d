//! Compass face: ring, north chevron, target arrow, solar marker and centre glyph.
//!
//! Every function takes a screen angle straight from
//! [`DisplayState`](crate::engine::DisplayState); positions are derived with
//! the fixed-point [`polar_point`].

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line};
use embedded_graphics::text::Text;

use super::primitives::{draw_pointer, polar_point};
use crate::angle::{Angle, FULL_TURN};
use crate::config::{CENTER_X, DIAL_CENTER_Y, DIAL_RADIUS};
use crate::engine::DisplayState;
use crate::styles::{
    CENTER_FILL,
    CENTERED,
    DIAL_STROKE,
    NORTH_FILL,
    NORTH_LABEL_STYLE,
    SOLAR_FILL,
    TARGET_FILL,
    TARGET_STROKE,
};

/// Dial centre.
pub const DIAL_CENTER: Point = Point::new(CENTER_X, DIAL_CENTER_Y);

const RING_TOP_LEFT: Point = Point::new(CENTER_X - DIAL_RADIUS, DIAL_CENTER_Y - DIAL_RADIUS);
const RING_DIAMETER: u32 = (DIAL_RADIUS * 2 + 1) as u32;

const NORTH_TIP: i32 = DIAL_RADIUS - 2;
const NORTH_BASE: i32 = DIAL_RADIUS - 14;
const NORTH_HALF_WIDTH: Angle = FULL_TURN / 48;
/// "N" sits just inside the chevron, baseline shifted to the glyph centre.
const NORTH_LABEL_RADIUS: i32 = DIAL_RADIUS - 24;
const NORTH_LABEL_BASELINE: i32 = 4;

const TARGET_TAIL: i32 = -18;
const TARGET_TIP: i32 = DIAL_RADIUS - 10;
const TARGET_HEAD_BASE: i32 = DIAL_RADIUS - 24;
const TARGET_HEAD_HALF_WIDTH: Angle = FULL_TURN / 32;

const SOLAR_RADIUS: i32 = DIAL_RADIUS - 6;
const SOLAR_DIAMETER: u32 = 9;
const CENTER_DIAMETER: u32 = 7;

/// Outer ring.
pub fn draw_ring<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::new(RING_TOP_LEFT, RING_DIAMETER).into_styled(DIAL_STROKE).draw(display).ok();
}

/// Red chevron at the rim with an "N" just inside it.
pub fn draw_north_chevron<D>(
    display: &mut D,
    north: Angle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_pointer(display, DIAL_CENTER, north, NORTH_TIP, NORTH_BASE, NORTH_HALF_WIDTH, NORTH_FILL);

    let label = polar_point(DIAL_CENTER, north, NORTH_LABEL_RADIUS) + Point::new(0, NORTH_LABEL_BASELINE);
    Text::with_text_style("N", label, NORTH_LABEL_STYLE, CENTERED).draw(display).ok();
}

/// Arrow through the centre pointing at the target.
pub fn draw_target_arrow<D>(
    display: &mut D,
    target: Angle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let tail = polar_point(DIAL_CENTER, target, TARGET_TAIL);
    let neck = polar_point(DIAL_CENTER, target, TARGET_HEAD_BASE);
    Line::new(tail, neck).into_styled(TARGET_STROKE).draw(display).ok();
    draw_pointer(
        display,
        DIAL_CENTER,
        target,
        TARGET_TIP,
        TARGET_HEAD_BASE,
        TARGET_HEAD_HALF_WIDTH,
        TARGET_FILL,
    );
}

/// Sun dot on the rim.
pub fn draw_solar_marker<D>(
    display: &mut D,
    solar: Angle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let at = polar_point(DIAL_CENTER, solar, SOLAR_RADIUS);
    Circle::with_center(at, SOLAR_DIAMETER).into_styled(SOLAR_FILL).draw(display).ok();
}

/// Hub over the arrow tail.
pub fn draw_center_glyph<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(DIAL_CENTER, CENTER_DIAMETER).into_styled(CENTER_FILL).draw(display).ok();
}

/// Whole dial for one snapshot. The target arrow needs a fix.
pub fn draw_dial<D>(
    display: &mut D,
    state: &DisplayState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_ring(display);
    if let Some(solar) = state.solar {
        draw_solar_marker(display, solar);
    }
    draw_north_chevron(display, state.north);
    if state.has_fix {
        draw_target_arrow(display, state.target);
    }
    draw_center_glyph(display);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::AlignmentMode;
    use crate::angle::{HALF_TURN, QUARTER_TURN};
    use crate::colors::{GREEN, RED, YELLOW};
    use crate::widgets::canvas::Canvas;

    fn display() -> Canvas { Canvas::new() }

    fn state(has_fix: bool) -> DisplayState {
        DisplayState {
            north: QUARTER_TURN,
            target: 0,
            solar: Some(HALF_TURN),
            mode: AlignmentMode::TrueNorth,
            calibration_needed: false,
            show_sync_warning: false,
            has_fix,
        }
    }

    #[test]
    fn test_north_chevron_tip_color() {
        let mut display = display();
        draw_north_chevron(&mut display, QUARTER_TURN);
        let tip = polar_point(DIAL_CENTER, QUARTER_TURN, NORTH_TIP - 2);
        assert_eq!(display.pixel(tip), Some(RED));
    }

    #[test]
    fn test_target_arrow_hidden_without_fix() {
        let mut display = display();
        draw_dial(&mut display, &state(false));
        let head = polar_point(DIAL_CENTER, 0, TARGET_TIP - 4);
        assert_ne!(display.pixel(head), Some(GREEN));

        let mut display = self::display();
        draw_dial(&mut display, &state(true));
        assert_eq!(display.pixel(head), Some(GREEN));
    }

    #[test]
    fn test_solar_marker_position() {
        let mut display = display();
        draw_solar_marker(&mut display, HALF_TURN);
        let at = polar_point(DIAL_CENTER, HALF_TURN, SOLAR_RADIUS);
        assert_eq!(display.pixel(at), Some(YELLOW));
    }

    #[test]
    fn test_ring_stays_on_screen() {
        let mut display = display();
        draw_ring(&mut display);
        assert_eq!(display.clipped(), 0);
        assert!(display.count(crate::colors::GRAY) > 300);
    }
}
