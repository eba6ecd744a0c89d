//! Compass page rendering.
//!
//! Redrawn in full whenever the engine reports a change. The face is small
//! enough that a clear plus redraw costs well under a frame.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use qibla_common::CompassEngine;
use qibla_common::colors::BLACK;
use qibla_common::widgets::{draw_calibration_prompt, draw_dial, draw_place_label, draw_popup, draw_sync_banner};

use crate::popup::Popup;

pub fn draw_compass_page(
    display: &mut SimulatorDisplay<Rgb565>,
    engine: &CompassEngine,
    popup: Option<&Popup>,
) {
    let state = engine.state();
    display.clear(BLACK).ok();

    draw_dial(display, state);
    draw_place_label(display, engine.settings().place_name());

    if state.show_sync_warning {
        draw_sync_banner(display);
    }
    if state.calibration_needed {
        draw_calibration_prompt(display);
    }
    if let Some(popup) = popup {
        draw_popup(display, popup.label());
    }
}
