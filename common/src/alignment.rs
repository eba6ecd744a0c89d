//! Alignment-mode state machine with eased transitions.
//!
//! Each mode re-centers the face on one reference by rotating everything by
//! that reference's bearing: `TrueNorth` applies no rotation, `Target` the
//! target bearing and `Solar` the solar bearing. The active reference thus
//! lands on the fused heading axis.
//!
//! # Transitions
//!
//! ```text
//! cycle() ──► from = applied_offset(now), progress = 0
//!                │
//! advance() ─────┤ progress += ANIMATION_STEP  (once per filter tick)
//!                │
//!                └─► progress ≥ ANIMATION_MAX_PROGRESS: transition dropped
//! ```
//!
//! The blended offset is a function of the current progress, the recorded
//! starting offset and the *current* offset of the incoming mode, so a new
//! fix or clock tick mid-animation bends the blend toward the fresh value.

use crate::angle::{self, Angle};
use crate::config::{ANIMATION_MAX_PROGRESS, ANIMATION_STEP};

/// Reference frame the face is centered on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignmentMode {
    /// Clock-based sun position.
    Solar,
    /// Plain compass.
    #[default]
    TrueNorth,
    /// Direction to the configured target.
    Target,
}

impl AlignmentMode {
    /// Next mode in the cycle Solar → TrueNorth → Target → Solar.
    /// `Solar` is skipped when no solar reference exists.
    pub const fn next(
        self,
        solar_enabled: bool,
    ) -> Self {
        match self {
            Self::Solar => Self::TrueNorth,
            Self::TrueNorth => Self::Target,
            Self::Target if solar_enabled => Self::Solar,
            Self::Target => Self::TrueNorth,
        }
    }

    /// Short label for the mode popup.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solar => "SUN",
            Self::TrueNorth => "NORTH",
            Self::Target => "QIBLA",
        }
    }
}

/// Current bearing of every reference, clockwise from north.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeOffsets {
    pub target: Angle,
    /// `None` while the solar reference is disabled or the clock is unknown.
    pub solar: Option<Angle>,
}

impl ModeOffsets {
    /// Rotation applied when `mode` is fully active.
    pub fn offset_for(
        &self,
        mode: AlignmentMode,
    ) -> Angle {
        match mode {
            AlignmentMode::TrueNorth => 0,
            AlignmentMode::Target => self.target,
            AlignmentMode::Solar => self.solar.unwrap_or(0),
        }
    }
}

/// An in-flight blend away from a previous mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from_mode: AlignmentMode,
    /// Offset that was on screen when the transition started.
    pub from_offset: Angle,
    /// `0..ANIMATION_MAX_PROGRESS`.
    pub progress: i32,
}

/// Ease-out curve `1 - (1 - p)²` on the `0..=ANIMATION_MAX_PROGRESS` scale.
pub const fn ease_out(progress: i32) -> i32 {
    let p = if progress < 0 {
        0
    } else if progress > ANIMATION_MAX_PROGRESS {
        ANIMATION_MAX_PROGRESS
    } else {
        progress
    };
    let remaining = ANIMATION_MAX_PROGRESS - p;
    ANIMATION_MAX_PROGRESS - remaining * remaining / ANIMATION_MAX_PROGRESS
}

/// Active mode plus the optional transition out of the previous one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    mode: AlignmentMode,
    transition: Option<Transition>,
}

impl Alignment {
    pub const fn new(mode: AlignmentMode) -> Self {
        Self { mode, transition: None }
    }

    /// Switch to the next mode and start blending from whatever is on screen.
    pub fn cycle(
        &mut self,
        offsets: &ModeOffsets,
        solar_enabled: bool,
    ) -> AlignmentMode {
        let from_offset = self.applied_offset(offsets);
        let from_mode = self.mode;
        self.mode = self.mode.next(solar_enabled);
        self.transition = Some(Transition {
            from_mode,
            from_offset,
            progress: 0,
        });
        self.mode
    }

    /// One animation step. Returns true if a transition was in flight.
    pub fn advance(&mut self) -> bool {
        let Some(transition) = &mut self.transition else {
            return false;
        };
        transition.progress += ANIMATION_STEP;
        if transition.progress >= ANIMATION_MAX_PROGRESS {
            self.transition = None;
        }
        true
    }

    /// Rotation to apply right now, in `[0, FULL_TURN)`.
    pub fn applied_offset(
        &self,
        offsets: &ModeOffsets,
    ) -> Angle {
        let to = offsets.offset_for(self.mode);
        match &self.transition {
            None => angle::normalize(to),
            Some(t) => {
                let delta = angle::shortest_delta(t.from_offset, to);
                angle::normalize(t.from_offset + delta * ease_out(t.progress) / ANIMATION_MAX_PROGRESS)
            }
        }
    }

    #[inline]
    pub const fn mode(&self) -> AlignmentMode { self.mode }

    /// Mode being blended away from, until the animation completes.
    #[inline]
    pub fn previous_mode(&self) -> Option<AlignmentMode> { self.transition.map(|t| t.from_mode) }

    #[inline]
    pub const fn transition(&self) -> Option<&Transition> { self.transition.as_ref() }

    #[inline]
    pub const fn is_animating(&self) -> bool { self.transition.is_some() }
}

impl Default for Alignment {
    fn default() -> Self { Self::new(AlignmentMode::default()) }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{FULL_TURN, HALF_TURN, QUARTER_TURN, shortest_delta};

    const OFFSETS: ModeOffsets = ModeOffsets {
        target: 20000,
        solar: Some(40000),
    };

    fn run_to_end(alignment: &mut Alignment) -> usize {
        let mut ticks = 0;
        while alignment.advance() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_cycle_order_with_solar() {
        let mut mode = AlignmentMode::Solar;
        let mut seen = [mode; 3];
        for slot in seen.iter_mut().skip(1) {
            mode = mode.next(true);
            *slot = mode;
        }
        assert_eq!(seen, [AlignmentMode::Solar, AlignmentMode::TrueNorth, AlignmentMode::Target]);
        assert_eq!(mode.next(true), AlignmentMode::Solar);
    }

    #[test]
    fn test_cycle_skips_solar_when_disabled() {
        assert_eq!(AlignmentMode::Target.next(false), AlignmentMode::TrueNorth);
        assert_eq!(AlignmentMode::TrueNorth.next(false), AlignmentMode::Target);
    }

    #[test]
    fn test_ease_out_curve() {
        assert_eq!(ease_out(0), 0);
        assert_eq!(ease_out(50), 75);
        assert_eq!(ease_out(100), 100);
        assert_eq!(ease_out(150), 100);
        let mut previous = 0;
        for p in (0..=100).step_by(ANIMATION_STEP as usize) {
            let e = ease_out(p);
            assert!(e >= previous);
            previous = e;
        }
    }

    #[test]
    fn test_transition_runs_to_target() {
        let mut alignment = Alignment::new(AlignmentMode::TrueNorth);
        assert_eq!(alignment.applied_offset(&OFFSETS), 0);

        assert_eq!(alignment.cycle(&OFFSETS, true), AlignmentMode::Target);
        assert_eq!(alignment.previous_mode(), Some(AlignmentMode::TrueNorth));
        assert_eq!(alignment.applied_offset(&OFFSETS), 0);

        let ticks = run_to_end(&mut alignment);
        assert_eq!(ticks as i32, ANIMATION_MAX_PROGRESS / ANIMATION_STEP);
        assert_eq!(alignment.previous_mode(), None);
        assert_eq!(alignment.applied_offset(&OFFSETS), 20000);
    }

    #[test]
    fn test_blend_takes_short_way() {
        let offsets = ModeOffsets {
            target: FULL_TURN - 1000,
            solar: None,
        };
        let mut alignment = Alignment::new(AlignmentMode::TrueNorth);
        alignment.cycle(&offsets, false);
        alignment.advance();
        let mid = alignment.applied_offset(&offsets);
        // Moving from 0 toward -1000, never through the half turn
        assert!(shortest_delta(0, mid) <= 0 && shortest_delta(0, mid) >= -1000);
    }

    #[test]
    fn test_blend_is_monotone() {
        let mut alignment = Alignment::new(AlignmentMode::TrueNorth);
        alignment.cycle(&OFFSETS, true);
        let mut previous = 0;
        while alignment.advance() {
            let now = alignment.applied_offset(&OFFSETS);
            assert!(now >= previous && now <= OFFSETS.target);
            previous = now;
        }
    }

    #[test]
    fn test_recycle_mid_flight_has_no_jump() {
        let mut alignment = Alignment::new(AlignmentMode::TrueNorth);
        alignment.cycle(&OFFSETS, true);
        for _ in 0..5 {
            alignment.advance();
        }
        let before = alignment.applied_offset(&OFFSETS);
        alignment.cycle(&OFFSETS, true);
        assert_eq!(alignment.mode(), AlignmentMode::Solar);
        assert_eq!(alignment.previous_mode(), Some(AlignmentMode::Target));
        assert_eq!(alignment.applied_offset(&OFFSETS), before);
        run_to_end(&mut alignment);
        assert_eq!(alignment.applied_offset(&OFFSETS), 40000);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut alignment = Alignment::new(AlignmentMode::TrueNorth);
        for _ in 0..3 {
            alignment.cycle(&OFFSETS, true);
            run_to_end(&mut alignment);
        }
        assert_eq!(alignment.mode(), AlignmentMode::TrueNorth);
        assert_eq!(alignment.applied_offset(&OFFSETS), 0);
    }

    #[test]
    fn test_blend_follows_changing_offsets() {
        let mut alignment = Alignment::new(AlignmentMode::TrueNorth);
        alignment.cycle(&OFFSETS, true);
        for _ in 0..10 {
            alignment.advance();
        }
        // A new fix arrives mid-animation
        let moved = ModeOffsets {
            target: QUARTER_TURN,
            solar: None,
        };
        let progress = alignment.transition().map(|t| t.progress).unwrap();
        let expected = QUARTER_TURN * ease_out(progress) / ANIMATION_MAX_PROGRESS;
        assert_eq!(alignment.applied_offset(&moved), expected);
    }

    #[test]
    fn test_solar_offset_missing_is_zero() {
        let offsets = ModeOffsets {
            target: HALF_TURN,
            solar: None,
        };
        assert_eq!(offsets.offset_for(AlignmentMode::Solar), 0);
    }

    #[test]
    fn test_idle_advance() {
        let mut alignment = Alignment::default();
        assert!(!alignment.advance());
        assert!(!alignment.is_animating());
    }
}
