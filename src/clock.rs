//! Simulated wall clock.
//!
//! Runs at one simulated minute per `SIM_MINUTE` of real time so the solar
//! marker visibly sweeps the dial; `T` jumps ahead an hour.

use std::time::{Duration, Instant};

use qibla_common::solar::CivilTime;

const MINUTES_PER_DAY: u32 = 24 * 60;

pub struct SimClock {
    minutes: u32,
    last_tick: Instant,
    minute_length: Duration,
}

impl SimClock {
    pub fn new(
        start: CivilTime,
        now: Instant,
        minute_length: Duration,
    ) -> Self {
        Self {
            minutes: start.minutes_since_midnight() as u32,
            last_tick: now,
            minute_length,
        }
    }

    /// Current simulated time.
    pub const fn time(&self) -> CivilTime {
        CivilTime::new((self.minutes / 60) as u8, (self.minutes % 60) as u8)
    }

    /// Catch up with real time. Returns the new time if at least one minute passed.
    pub fn update(
        &mut self,
        now: Instant,
    ) -> Option<CivilTime> {
        let mut advanced = false;
        while now.saturating_duration_since(self.last_tick) >= self.minute_length {
            self.last_tick += self.minute_length;
            self.minutes = (self.minutes + 1) % MINUTES_PER_DAY;
            advanced = true;
        }
        advanced.then(|| self.time())
    }

    /// Jump ahead by whole hours.
    pub fn advance_hours(
        &mut self,
        hours: u32,
    ) -> CivilTime {
        self.minutes = (self.minutes + hours * 60) % MINUTES_PER_DAY;
        self.time()
    }
}
