//! The compass engine context object.
//!
//! [`CompassEngine`] owns every piece of mutable state (heading filter,
//! alignment machine, freshness, merged settings, event log) and exposes one
//! handler per external event. The host's event loop calls the handlers and
//! redraws whenever one returns `true`; the engine itself never draws, sleeps
//! or schedules anything.
//!
//! # Event Flow
//!
//! ```text
//! sensor ──► on_heading ──┐
//! companion ► on_settings ┤                       ┌─► north  = displayed + applied offset
//! store ───► restore ─────┼─► refresh() ──────────┼─► target = north − target bearing
//! timers ──► on_*_tick ───┤   (DisplayState)      └─► solar  = north − solar bearing
//! button ──► on_cycle_mode┘
//! ```

use crate::alignment::{Alignment, AlignmentMode, ModeOffsets};
use crate::angle::{self, Angle};
use crate::bearing::{KAABA, target_bearing};
use crate::freshness::Freshness;
use crate::heading::{HeadingFilter, HeadingSample, HeadingValidity};
use crate::log::EventLog;
use crate::settings::{CoordinateError, GeoCoordinate, Settings, SettingsMessage, SettingsStore};
use crate::solar::{CivilTime, Hemisphere, solar_bearing};

// =============================================================================
// Configuration
// =============================================================================

/// Choices fixed for the lifetime of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Point the target arrow aims at.
    pub target: GeoCoordinate,
    /// Whether the clock-based solar reference exists.
    pub solar_reference: bool,
    /// Mode on startup. `Solar` falls back to `TrueNorth` without a solar reference.
    pub initial_mode: AlignmentMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target: KAABA,
            solar_reference: true,
            initial_mode: AlignmentMode::TrueNorth,
        }
    }
}

// =============================================================================
// Display State
// =============================================================================

/// Snapshot for the renderer. Screen angles, counter-clockwise from the +x axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayState {
    pub north: Angle,
    /// Always `north − target bearing`; meaningless until `has_fix`.
    pub target: Angle,
    /// `None` without a solar reference or before the first clock tick.
    pub solar: Option<Angle>,
    pub mode: AlignmentMode,
    pub calibration_needed: bool,
    pub show_sync_warning: bool,
    pub has_fix: bool,
}

// =============================================================================
// Engine
// =============================================================================

pub struct CompassEngine {
    config: EngineConfig,
    heading: HeadingFilter,
    alignment: Alignment,
    freshness: Freshness,
    settings: Settings,
    /// Bearing to the target; `None` until a fix is accepted.
    target_bearing: Option<Angle>,
    clock: Option<CivilTime>,
    seen_heading: bool,
    log: EventLog,
    state: DisplayState,
}

impl CompassEngine {
    pub fn new(config: EngineConfig) -> Self {
        let initial_mode = match config.initial_mode {
            AlignmentMode::Solar if !config.solar_reference => AlignmentMode::TrueNorth,
            mode => mode,
        };
        let mut engine = Self {
            config,
            heading: HeadingFilter::new(),
            alignment: Alignment::new(initial_mode),
            freshness: Freshness::new(),
            settings: Settings::new(),
            target_bearing: None,
            clock: None,
            seen_heading: false,
            log: EventLog::new(),
            state: DisplayState {
                north: 0,
                target: 0,
                solar: None,
                mode: initial_mode,
                calibration_needed: false,
                show_sync_warning: false,
                has_fix: false,
            },
        };
        engine.state = engine.compute_state();
        engine
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    /// Load persisted settings. A stored fix counts exactly like a live one.
    pub fn restore<S: SettingsStore>(
        &mut self,
        store: &S,
    ) -> bool {
        self.settings = Settings::load(store);
        match self.settings.position() {
            Some(position) => self.accept_fix(position, "restored"),
            None => crate::log_debug!(self.log, "no stored fix"),
        }
        self.refresh()
    }

    /// New orientation sample. The first valid one is shown without damping.
    pub fn on_heading(
        &mut self,
        sample: HeadingSample,
    ) -> bool {
        if self.heading.on_sample(sample) {
            if self.heading.calibration_needed() {
                crate::log_warn!(self.log, "compass needs calibration");
            } else {
                crate::log_info!(self.log, "compass calibrated");
            }
        }
        if !self.seen_heading && sample.validity == HeadingValidity::Valid {
            self.seen_heading = true;
            self.heading.snap();
        }
        self.refresh()
    }

    /// Merge a companion message and persist the result.
    ///
    /// `Ok` means the message was accepted and the transport may acknowledge it.
    /// A store failure is logged but does not reject the message.
    pub fn on_settings<S: SettingsStore>(
        &mut self,
        msg: &SettingsMessage,
        store: &mut S,
    ) -> Result<bool, CoordinateError> {
        if let Err(err) = self.settings.apply(msg) {
            crate::log_warn!(self.log, "rejected: {}", err);
            return Err(err);
        }

        if msg.latitude.is_some() || msg.longitude.is_some() {
            match self.settings.position() {
                Some(position) => self.accept_fix(position, "fix"),
                None => crate::log_debug!(self.log, "partial fix, waiting"),
            }
        }

        if let Err(err) = self.settings.save(store) {
            crate::log_error!(self.log, "store: {}", err);
        }
        Ok(self.refresh())
    }

    /// Damping and animation step.
    pub fn on_filter_tick(&mut self) -> bool {
        self.heading.tick();
        self.alignment.advance();
        self.refresh()
    }

    /// Minute tick from the clock.
    pub fn on_clock_tick(
        &mut self,
        time: CivilTime,
    ) -> bool {
        self.clock = Some(time);
        self.refresh()
    }

    /// Startup grace period is over.
    pub fn on_grace_elapsed(&mut self) -> bool {
        if self.freshness.grace_elapsed() && self.freshness.show_sync_warning() {
            crate::log_warn!(self.log, "no fix from companion");
        }
        self.refresh()
    }

    /// User asked for the next alignment mode.
    pub fn on_cycle_mode(&mut self) -> bool {
        let offsets = self.offsets();
        let mode = self.alignment.cycle(&offsets, self.config.solar_reference);
        crate::log_info!(self.log, "mode {}", mode.label());
        self.refresh()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn state(&self) -> &DisplayState { &self.state }

    #[inline]
    pub const fn settings(&self) -> &Settings { &self.settings }

    #[inline]
    pub const fn log(&self) -> &EventLog { &self.log }

    #[inline]
    pub const fn config(&self) -> &EngineConfig { &self.config }

    #[inline]
    pub const fn heading(&self) -> &HeadingFilter { &self.heading }

    #[inline]
    pub const fn alignment(&self) -> &Alignment { &self.alignment }

    /// Bearing to the target, clockwise from north, once a fix exists.
    #[inline]
    pub const fn target_bearing(&self) -> Option<Angle> { self.target_bearing }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn accept_fix(
        &mut self,
        position: GeoCoordinate,
        source: &str,
    ) {
        let bearing = target_bearing(position, self.config.target);
        self.target_bearing = Some(bearing);
        self.freshness.mark_fix();
        crate::log_info!(
            self.log,
            "{} {} {} -> {}",
            source,
            angle::to_degrees(position.latitude()),
            angle::to_degrees(position.longitude()),
            angle::to_degrees(bearing)
        );
    }

    fn solar_offset(&self) -> Option<Angle> {
        if !self.config.solar_reference {
            return None;
        }
        let time = self.clock?;
        let hemisphere = self
            .settings
            .position()
            .map_or(Hemisphere::Northern, |p| Hemisphere::from_latitude(p.latitude()));
        Some(solar_bearing(time, hemisphere))
    }

    fn offsets(&self) -> ModeOffsets {
        ModeOffsets {
            target: self.target_bearing.unwrap_or(0),
            solar: self.solar_offset(),
        }
    }

    fn compute_state(&self) -> DisplayState {
        let offsets = self.offsets();
        let north = angle::normalize(self.heading.displayed_north() + self.alignment.applied_offset(&offsets));
        DisplayState {
            north,
            target: angle::normalize(north - offsets.target),
            solar: offsets.solar.map(|bearing| angle::normalize(north - bearing)),
            mode: self.alignment.mode(),
            calibration_needed: self.heading.calibration_needed(),
            show_sync_warning: self.freshness.show_sync_warning(),
            has_fix: self.freshness.has_fix(),
        }
    }

    /// Recompute the snapshot. Returns true if the renderer should redraw.
    fn refresh(&mut self) -> bool {
        let next = self.compute_state();
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

impl Default for CompassEngine {
    fn default() -> Self { Self::new(EngineConfig::default()) }
}

// =============================================================================
// Tests
// =============================================================================
