//! Pre-computed static text and primitive styles.
//!
//! Styles are `const` so draw functions never rebuild them per frame.
//! `LABEL_FONT` is exposed for callers that need a color chosen at runtime
//! (log entries colored by level).

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    primitives::PrimitiveStyle,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_12_POINT;

use crate::colors::{BLACK, GRAY, GREEN, RED, WHITE, YELLOW};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text. Dial labels, banners and popups. Debug rows use the default left alignment.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font (6x10 pixels).
/// Usage: `MonoTextStyle::new(LABEL_FONT, dynamic_color)`
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Text Styles
// =============================================================================

/// Small white text on dark backgrounds.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small black text on the orange calibration prompt.
pub const LABEL_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Small gray text for secondary information (place name).
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// "N" next to the north chevron (`ProFont` 12pt).
pub const NORTH_LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, RED);

/// Popup title text (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

// =============================================================================
// Primitive Styles
// =============================================================================

/// Dial ring outline.
pub const DIAL_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

/// North chevron fill.
pub const NORTH_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// Target arrow stroke.
pub const TARGET_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GREEN, 3);

/// Target arrow head fill.
pub const TARGET_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GREEN);

/// Solar marker fill.
pub const SOLAR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(YELLOW);

/// Centre glyph fill.
pub const CENTER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Popup border.
pub const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
