//! Directional compass engine for the qibla watch face.
//!
//! This crate contains the platform-agnostic core shared by the simulator and
//! any watch host:
//!
//! - [`angle`]: Fixed-point angle representation and circular arithmetic
//! - [`trig`]: Integer sine/cosine/tangent/atan2 lookups
//! - [`bearing`]: Great-circle initial bearing toward the fixed target
//! - [`solar`]: Clock-based approximation of the sun's azimuth
//! - [`heading`]: Heading damping filter fed by the orientation sensor
//! - [`alignment`]: Reference-frame cycling with eased transitions
//! - [`freshness`]: "Not yet synced" warning state
//! - [`settings`]: Geographic fix, companion payloads and persistence keys
//! - [`engine`]: The context object tying everything together
//! - [`log`]: Leveled event log ring buffer and logging macros
//! - [`config`]: Compile-time tuning and layout constants
//! - [`widgets`], [`styles`], [`colors`], [`pages`]: Drawing helpers for a renderer
//!   (generic over `DrawTarget`)
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Nothing here allocates: strings are
//! `heapless`, and all math is integer fixed-point except the degree conversion
//! helpers, which go through `micromath`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod alignment;
pub mod angle;
pub mod bearing;
pub mod colors;
pub mod config;
pub mod engine;
pub mod freshness;
pub mod heading;
pub mod log;
pub mod pages;
pub mod settings;
pub mod solar;
pub mod styles;
pub mod trig;
pub mod widgets;

// Re-export commonly used items
pub use alignment::AlignmentMode;
pub use angle::{Angle, FULL_TURN, HALF_TURN, QUARTER_TURN};
pub use engine::{CompassEngine, DisplayState, EngineConfig};
pub use heading::{HeadingSample, HeadingValidity};
pub use pages::Page;
pub use settings::{GeoCoordinate, SettingsMessage, SettingsStore};
