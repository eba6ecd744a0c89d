//! Popup state management with time-based expiration.

use std::time::Instant;

use qibla_common::AlignmentMode;

use crate::timing::POPUP_DURATION;

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// Name of the alignment mode just selected.
    Mode(Instant, AlignmentMode),
    /// Companion fix accepted.
    Synced(Instant),
    /// Companion message rejected.
    Rejected(Instant),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Mode(t, _) | Self::Synced(t) | Self::Rejected(t) => *t,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    /// Text shown in the popup box.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mode(_, mode) => mode.label(),
            Self::Synced(_) => "SYNCED",
            Self::Rejected(_) => "BAD FIX",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_labels() {
        let now = Instant::now();
        assert_eq!(Popup::Mode(now, AlignmentMode::Target).label(), "QIBLA");
        assert_eq!(Popup::Synced(now).label(), "SYNCED");
    }

    #[test]
    fn test_fresh_popup_not_expired() {
        assert!(!Popup::Synced(Instant::now()).is_expired());
    }
}
