//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which is not available in `no_std`, so they
//! live here rather than in the common crate's `config`.

use std::time::Duration;

use qibla_common::config::{FILTER_TICK_MS, GRACE_PERIOD_MS};

/// Frame time, one damping/animation tick per frame.
pub const FRAME_TIME: Duration = Duration::from_millis(FILTER_TICK_MS as u64);

/// Startup grace period before the missing-fix banner may appear.
pub const GRACE_PERIOD: Duration = Duration::from_millis(GRACE_PERIOD_MS as u64);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_millis(1200);

/// Real time per simulated clock minute (one hour passes per minute).
pub const SIM_MINUTE: Duration = Duration::from_secs(1);

/// Delay before the companion retransmits an unacknowledged message.
pub const COMPANION_RETRY: Duration = Duration::from_secs(2);

/// Delay between sensor polls.
pub const SENSOR_PERIOD: Duration = Duration::from_millis(100);
