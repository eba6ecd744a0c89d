//! Qibla compass simulator for desktop.
//!
//! Hosts the compass engine the way a watch would: a single-threaded event loop
//! feeding it sensor samples, companion messages, clock ticks and button presses,
//! redrawing whenever a handler reports a change.
//!
//! # Controls
//!
//! - `Left`/`Right`: turn the simulated wrist
//! - `C`: toggle the compass calibration flag
//! - `Space`: cycle alignment mode
//! - `F`: send the next preset location from the companion
//! - `T`: advance the clock one hour
//! - `Y`: switch between compass and debug pages

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]

mod clock;
mod companion;
mod popup;
mod screens;
mod sensor;
mod store;
mod timing;

use std::env;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use qibla_common::colors::BLACK;
use qibla_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use qibla_common::solar::CivilTime;
use qibla_common::{CompassEngine, EngineConfig, Page};

use crate::clock::SimClock;
use crate::companion::SimulatedCompanion;
use crate::popup::Popup;
use crate::screens::{draw_compass_page, draw_debug_page};
use crate::sensor::{SimulatedCompass, TURN_STEP};
use crate::store::FileStore;
use crate::timing::{COMPANION_RETRY, FRAME_TIME, GRACE_PERIOD, SENSOR_PERIOD, SIM_MINUTE};

/// Settings file used unless `QIBLA_SETTINGS` points elsewhere.
const DEFAULT_SETTINGS_PATH: &str = "qibla-settings.txt";

/// Simulated time of day at startup.
const START_TIME: CivilTime = CivilTime::new(6, 0);

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Qibla Compass Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let settings_path = env::var("QIBLA_SETTINGS").unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_owned());
    let mut store = FileStore::open(&settings_path).unwrap_or_else(|err| {
        println!("[W] settings file {settings_path}: {err}, starting empty");
        FileStore::empty(&settings_path)
    });

    let started = Instant::now();
    let mut engine = CompassEngine::new(EngineConfig::default());
    let mut compass = SimulatedCompass::new(0);
    let mut companion = SimulatedCompanion::new(COMPANION_RETRY);
    let mut clock = SimClock::new(START_TIME, started, SIM_MINUTE);

    engine.restore(&store);
    engine.on_clock_tick(clock.time());

    // UI state
    let mut current_page = Page::default();
    let mut active_popup: Option<Popup> = None;
    let mut redraw = true;
    let mut grace_pending = true;
    let mut last_sensor_poll: Option<Instant> = None;
    let mut mirrored_log = 0u32;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                    Keycode::Left => {
                        compass.rotate(-TURN_STEP);
                        redraw |= current_page == Page::Debug;
                    }
                    Keycode::Right => {
                        compass.rotate(TURN_STEP);
                        redraw |= current_page == Page::Debug;
                    }
                    _ if repeat => {}
                    Keycode::C => {
                        compass.toggle_calibration();
                    }
                    Keycode::Space => {
                        redraw |= engine.on_cycle_mode();
                        active_popup = Some(Popup::Mode(frame_start, engine.state().mode));
                    }
                    Keycode::F => {
                        let preset = companion.queue_next();
                        println!("[I] companion: sending {}", preset.name);
                    }
                    Keycode::T => {
                        redraw |= engine.on_clock_tick(clock.advance_hours(1));
                    }
                    Keycode::Y => {
                        current_page = current_page.toggle();
                        active_popup = None;
                        redraw = true;
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // Orientation sensor
        if last_sensor_poll.is_none_or(|t| frame_start.duration_since(t) >= SENSOR_PERIOD) {
            last_sensor_poll = Some(frame_start);
            if let Some(sample) = compass.poll() {
                redraw |= engine.on_heading(sample);
            }
        }

        // Companion link
        if let Some(msg) = companion.poll(frame_start) {
            match engine.on_settings(&msg, &mut store) {
                Ok(changed) => {
                    redraw |= changed;
                    if let Some(attempts) = companion.acknowledge() {
                        println!("[I] companion: acknowledged after {attempts} send(s)");
                    }
                    active_popup = Some(Popup::Synced(frame_start));
                }
                Err(err) => {
                    companion.nack();
                    println!("[W] companion: {err}");
                    active_popup = Some(Popup::Rejected(frame_start));
                }
            }
        }

        // Timers
        if grace_pending && started.elapsed() >= GRACE_PERIOD {
            grace_pending = false;
            redraw |= engine.on_grace_elapsed();
        }
        if let Some(time) = clock.update(frame_start) {
            redraw |= engine.on_clock_tick(time);
        }
        redraw |= engine.on_filter_tick();

        // Check popup expiration
        if active_popup.as_ref().is_some_and(Popup::is_expired) {
            active_popup = None;
            redraw = true;
        }

        // Mirror new log entries to the console
        for entry in engine.log().since(mirrored_log) {
            println!("[{}] {}", entry.level.prefix(), entry.message);
        }
        mirrored_log = engine.log().next_sequence();

        if redraw {
            match current_page {
                Page::Compass => draw_compass_page(&mut display, &engine, active_popup.as_ref()),
                Page::Debug => draw_debug_page(&mut display, &engine, clock.time(), compass.heading()),
            }
            redraw = false;
        }

        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
