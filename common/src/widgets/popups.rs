//! Overlays: sync banner, calibration prompt, popups and place label.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{DARK_TEAL, GRAY, ORANGE};
use crate::config::{BANNER_HEIGHT, CENTER_X, DIAL_CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, LABEL_STYLE_BLACK, LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, TITLE_STYLE_WHITE, WHITE_FILL};

const BANNER_POS: Point = Point::new(0, (SCREEN_HEIGHT - BANNER_HEIGHT) as i32);
const BANNER_SIZE: Size = Size::new(SCREEN_WIDTH, BANNER_HEIGHT);
const BANNER_TEXT_POS: Point = Point::new(CENTER_X, (SCREEN_HEIGHT - BANNER_HEIGHT / 2) as i32 + 3);

const CALIBRATION_WIDTH: u32 = 110;
const CALIBRATION_HEIGHT: u32 = 36;
const CALIBRATION_POS: Point = Point::new(
    (SCREEN_WIDTH - CALIBRATION_WIDTH) as i32 / 2,
    DIAL_CENTER_Y - CALIBRATION_HEIGHT as i32 / 2,
);
const CALIBRATION_SIZE: Size = Size::new(CALIBRATION_WIDTH, CALIBRATION_HEIGHT);
const CALIBRATION_TEXT1_POS: Point = Point::new(CENTER_X, DIAL_CENTER_Y - 3);
const CALIBRATION_TEXT2_POS: Point = Point::new(CENTER_X, DIAL_CENTER_Y + 10);

const POPUP_WIDTH: u32 = 100;
const POPUP_HEIGHT: u32 = 40;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = DIAL_CENTER_Y - POPUP_HEIGHT as i32 / 2;
const POPUP_BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const POPUP_BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);
const POPUP_BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const POPUP_BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);
const POPUP_TEXT_POS: Point = Point::new(CENTER_X, DIAL_CENTER_Y + 6);

const PLACE_LABEL_POS: Point = Point::new(CENTER_X, (SCREEN_HEIGHT - BANNER_HEIGHT) as i32 - 4);

const ORANGE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ORANGE);
const GRAY_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY);
const TEAL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DARK_TEAL);

/// Bottom banner shown while no fix has arrived after the grace period.
pub fn draw_sync_banner<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BANNER_POS, BANNER_SIZE).into_styled(GRAY_FILL).draw(display).ok();
    Text::with_text_style("No Phone Connection", BANNER_TEXT_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// "Please calibrate" prompt over the dial.
pub fn draw_calibration_prompt<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(CALIBRATION_POS, CALIBRATION_SIZE)
        .into_styled(ORANGE_FILL)
        .draw(display)
        .ok();
    Text::with_text_style("CALIBRATE", CALIBRATION_TEXT1_POS, LABEL_STYLE_BLACK, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("wave your wrist", CALIBRATION_TEXT2_POS, LABEL_STYLE_BLACK, CENTERED)
        .draw(display)
        .ok();
}

/// Short centered popup, e.g. the name of the mode just selected.
pub fn draw_popup<D>(
    display: &mut D,
    label: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(POPUP_BORDER_POS, POPUP_BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    Rectangle::new(POPUP_BG_POS, POPUP_BG_SIZE).into_styled(TEAL_FILL).draw(display).ok();

    Text::with_text_style(label, POPUP_TEXT_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Companion-supplied place name under the dial. Nothing for an empty name.
pub fn draw_place_label<D>(
    display: &mut D,
    place: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if place.is_empty() {
        return;
    }
    Text::with_text_style(place, PLACE_LABEL_POS, LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::AlignmentMode;
    use crate::colors::WHITE;
    use crate::widgets::canvas::Canvas;

    #[test]
    fn test_sync_banner_at_bottom() {
        let mut display = Canvas::new();
        draw_sync_banner(&mut display);
        assert_eq!(display.pixel(Point::new(1, SCREEN_HEIGHT as i32 - 1)), Some(GRAY));
        assert_eq!(display.pixel(Point::new(1, 1)), None);
        assert!(display.count(WHITE) > 0);
        assert_eq!(display.clipped(), 0);
    }

    #[test]
    fn test_popup_fits_every_mode_label() {
        for mode in [AlignmentMode::Solar, AlignmentMode::TrueNorth, AlignmentMode::Target] {
            let mut display = Canvas::new();
            draw_popup(&mut display, mode.label());
            assert_eq!(display.clipped(), 0);
            assert_eq!(display.pixel(POPUP_BORDER_POS), Some(WHITE));
        }
    }

    #[test]
    fn test_calibration_prompt_fill() {
        let mut display = Canvas::new();
        draw_calibration_prompt(&mut display);
        assert_eq!(display.pixel(CALIBRATION_POS), Some(ORANGE));
    }

    #[test]
    fn test_empty_place_draws_nothing() {
        let mut display = Canvas::new();
        draw_place_label(&mut display, "");
        assert_eq!(display.count(GRAY), 0);
        draw_place_label(&mut display, "London");
        assert!(display.count(GRAY) > 0);
    }
}
