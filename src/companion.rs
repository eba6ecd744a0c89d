//! Simulated companion phone.
//!
//! Cycles through a few preset cities. Each fix is retransmitted every
//! `COMPANION_RETRY` until the watch acknowledges it, like the real
//! app-message link does.

use std::time::{Duration, Instant};

use qibla_common::angle;
use qibla_common::settings::{SettingsMessage, bounded_text};

/// Preset location sent by the companion.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub latitude: f32,
    pub longitude: f32,
    /// Daylight-saving offset in minutes (negative while DST is observed).
    pub dst_offset_minutes: i32,
}

pub const PRESETS: [Preset; 6] = [
    Preset {
        name: "London",
        latitude: 51.5074,
        longitude: -0.1278,
        dst_offset_minutes: -60,
    },
    Preset {
        name: "New York",
        latitude: 40.7128,
        longitude: -74.0060,
        dst_offset_minutes: -60,
    },
    Preset {
        name: "Jakarta",
        latitude: -6.2088,
        longitude: 106.8456,
        dst_offset_minutes: 0,
    },
    Preset {
        name: "Sydney",
        latitude: -33.8688,
        longitude: 151.2093,
        dst_offset_minutes: 0,
    },
    Preset {
        name: "Tokyo",
        latitude: 35.6762,
        longitude: 139.6503,
        dst_offset_minutes: 0,
    },
    // Beyond the pole, exercises the rejection path
    Preset {
        name: "Nowhere",
        latitude: 95.0,
        longitude: 0.0,
        dst_offset_minutes: 0,
    },
];

impl Preset {
    /// Encode as a full settings message.
    ///
    /// Values are sent as-is; validating them is the watch's job.
    pub fn to_message(&self) -> SettingsMessage {
        SettingsMessage {
            dst_offset_minutes: Some(self.dst_offset_minutes),
            latitude: Some(angle::from_degrees(self.latitude)),
            longitude: Some(angle::from_degrees(self.longitude)),
            place_name: Some(bounded_text(self.name)),
        }
    }
}

struct Pending {
    message: SettingsMessage,
    last_sent: Option<Instant>,
    attempts: u32,
}

pub struct SimulatedCompanion {
    next_preset: usize,
    pending: Option<Pending>,
    retry: Duration,
}

impl SimulatedCompanion {
    pub const fn new(retry: Duration) -> Self {
        Self {
            next_preset: 0,
            pending: None,
            retry,
        }
    }

    /// Queue the next preset, replacing anything unacknowledged.
    pub fn queue_next(&mut self) -> &'static Preset {
        let preset = &PRESETS[self.next_preset];
        self.next_preset = (self.next_preset + 1) % PRESETS.len();
        self.pending = Some(Pending {
            message: preset.to_message(),
            last_sent: None,
            attempts: 0,
        });
        preset
    }

    /// Message to (re)transmit now, if one is due.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> Option<SettingsMessage> {
        let pending = self.pending.as_mut()?;
        let due = pending
            .last_sent
            .is_none_or(|sent| now.saturating_duration_since(sent) >= self.retry);
        if !due {
            return None;
        }
        pending.last_sent = Some(now);
        pending.attempts += 1;
        Some(pending.message.clone())
    }

    /// The watch accepted the message. Returns how many sends it took.
    pub fn acknowledge(&mut self) -> Option<u32> { self.pending.take().map(|p| p.attempts) }

    /// The watch rejected the message; stop retransmitting it.
    pub fn nack(&mut self) { self.pending = None; }

    #[inline]
    pub const fn has_pending(&self) -> bool { self.pending.is_some() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_message_is_complete() {
        let msg = PRESETS[0].to_message();
        assert_eq!(msg.latitude, Some(9377));
        assert_eq!(msg.longitude, Some(-23));
        assert_eq!(msg.dst_offset_minutes, Some(-60));
        assert_eq!(msg.place_name.as_deref(), Some("London"));
    }

    #[test]
    fn test_invalid_preset_keeps_raw_latitude() {
        let nowhere = PRESETS.iter().find(|p| p.name == "Nowhere").unwrap();
        let msg = nowhere.to_message();
        assert!(msg.latitude.unwrap() > qibla_common::QUARTER_TURN);
    }

    #[test]
    fn test_retransmits_until_acknowledged() {
        let retry = Duration::from_secs(2);
        let mut companion = SimulatedCompanion::new(retry);
        let start = Instant::now();
        assert!(companion.poll(start).is_none());

        companion.queue_next();
        assert!(companion.poll(start).is_some());
        assert!(companion.poll(start + Duration::from_secs(1)).is_none());
        assert!(companion.poll(start + retry).is_some());

        assert_eq!(companion.acknowledge(), Some(2));
        assert!(!companion.has_pending());
        assert!(companion.poll(start + retry * 3).is_none());
    }

    #[test]
    fn test_presets_cycle() {
        let mut companion = SimulatedCompanion::new(Duration::from_secs(1));
        let names: Vec<&str> = (0..PRESETS.len() + 1).map(|_| companion.queue_next().name).collect();
        assert_eq!(names[0], names[PRESETS.len()]);
    }

    #[test]
    fn test_nack_drops_message() {
        let mut companion = SimulatedCompanion::new(Duration::from_secs(1));
        companion.queue_next();
        companion.nack();
        assert!(!companion.has_pending());
    }
}
