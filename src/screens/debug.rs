//! Debug page: raw engine state and the event log tail.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use qibla_common::CompassEngine;
use qibla_common::angle::to_degrees;
use qibla_common::colors::{BLACK, GRAY, GREEN, WHITE, YELLOW};
use qibla_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use qibla_common::log::EventLog;
use qibla_common::solar::CivilTime;
use qibla_common::styles::LABEL_FONT;

const HEADER_Y: i32 = 10;
const HEADER_DIVIDER_Y: i32 = 14;
const STATS_Y: i32 = 25;
const STAT_LINE_HEIGHT: i32 = 11;
const LOG_DIVIDER_Y: i32 = 92;
const LOG_Y: i32 = 102;
const LOG_LINE_HEIGHT: i32 = 11;
const COL1_X: i32 = 2;

/// Log lines that fit below the divider.
const LOG_LINES: usize = 6;
/// Characters per log line at 6px per glyph, after the level prefix.
const LOG_COLUMNS: usize = 22;

const HEADER_COLOR: Rgb565 = GREEN;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const DIVIDER_COLOR: Rgb565 = GRAY;

pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    engine: &CompassEngine,
    clock: CivilTime,
    heading: i32,
) {
    display.clear(BLACK).ok();

    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();
    let mut s: String<8> = String::new();
    let _ = write!(s, "{:02}:{:02}", clock.hour, clock.minute);
    Text::new(&s, Point::new(SCREEN_WIDTH as i32 - 32, HEADER_Y), header_style)
        .draw(display)
        .ok();

    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_engine_stats(display, engine, heading);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, engine.log());
}

fn draw_engine_stats(
    display: &mut SimulatorDisplay<Rgb565>,
    engine: &CompassEngine,
    heading: i32,
) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);
    let state = engine.state();
    let mut y = STATS_Y;

    let mut s: String<24> = String::new();
    let _ = write!(
        s,
        "Hdg:{:>4} Disp:{:>4}",
        to_degrees(heading),
        to_degrees(engine.heading().displayed_north())
    );
    Text::new(&s, Point::new(COL1_X, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "N:{:>4} T:{:>4}", to_degrees(state.north), to_degrees(state.target));
    if let Some(solar) = state.solar {
        let _ = write!(s, " S:{:>3}", to_degrees(solar));
    }
    Text::new(&s, Point::new(COL1_X, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Mode: {}", state.mode.label());
    if let Some(previous) = engine.alignment().previous_mode() {
        let _ = write!(s, " <{}", previous.label());
    }
    Text::new(&s, Point::new(COL1_X, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    match (engine.settings().position(), engine.target_bearing()) {
        (Some(position), Some(bearing)) => {
            let _ = write!(
                s,
                "{},{} -> {}",
                to_degrees(position.latitude()),
                to_degrees(position.longitude()),
                to_degrees(bearing)
            );
        }
        _ => {
            let _ = s.push_str("No fix");
        }
    }
    Text::new(&s, Point::new(COL1_X, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(
        s,
        "DST:{} Cal:{} Warn:{}",
        engine.settings().dst_offset_minutes(),
        u8::from(state.calibration_needed),
        u8::from(state.show_sync_warning)
    );
    Text::new(&s, Point::new(COL1_X, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<40> = String::new();
    let _ = write!(s, "Place: {}", engine.settings().place_name());
    Text::new(&s, Point::new(COL1_X, y), value_style).draw(display).ok();
}

fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &EventLog,
) {
    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1)))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for entry in log.iter().skip(log.len().saturating_sub(LOG_LINES)) {
        let style = MonoTextStyle::new(LABEL_FONT, entry.level.color());
        let mut line: String<{ LOG_COLUMNS + 2 }> = String::new();
        let _ = line.push(entry.level.prefix());
        let _ = line.push(' ');
        for c in entry.message.chars().take(LOG_COLUMNS) {
            let _ = line.push(c);
        }
        Text::new(&line, Point::new(COL1_X, y), style).draw(display).ok();
        y += LOG_LINE_HEIGHT;
    }
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
