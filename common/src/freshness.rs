//! Fix freshness tracking.
//!
//! The "not yet synced" warning is held back for a short grace period after
//! startup so the companion link has a moment to deliver a fix.
//!
//! ```text
//! show_sync_warning = !has_fix && !suppress_warning
//! ```

/// Whether a fix exists and whether the missing-fix warning may be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Freshness {
    has_fix: bool,
    suppress_warning: bool,
}

impl Freshness {
    /// No fix yet, warning suppressed until the grace period ends.
    pub const fn new() -> Self {
        Self {
            has_fix: false,
            suppress_warning: true,
        }
    }

    /// A fix was accepted (live or restored). Returns true on first fix.
    pub fn mark_fix(&mut self) -> bool {
        let first = !self.has_fix;
        self.has_fix = true;
        first
    }

    /// The startup grace period ran out. Returns true if this changed anything.
    pub fn grace_elapsed(&mut self) -> bool {
        let changed = self.suppress_warning;
        self.suppress_warning = false;
        changed
    }

    #[inline]
    pub const fn has_fix(&self) -> bool { self.has_fix }

    #[inline]
    pub const fn show_sync_warning(&self) -> bool { !self.has_fix && !self.suppress_warning }
}

impl Default for Freshness {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_hidden_during_grace() {
        let freshness = Freshness::new();
        assert!(!freshness.has_fix());
        assert!(!freshness.show_sync_warning());
    }

    #[test]
    fn test_warning_after_grace_without_fix() {
        let mut freshness = Freshness::new();
        assert!(freshness.grace_elapsed());
        assert!(freshness.show_sync_warning());
        assert!(!freshness.grace_elapsed());
    }

    #[test]
    fn test_fix_clears_warning() {
        let mut freshness = Freshness::new();
        freshness.grace_elapsed();
        assert!(freshness.mark_fix());
        assert!(!freshness.show_sync_warning());
        assert!(!freshness.mark_fix());
    }

    #[test]
    fn test_fix_before_grace_never_warns() {
        let mut freshness = Freshness::new();
        freshness.mark_fix();
        freshness.grace_elapsed();
        assert!(!freshness.show_sync_warning());
    }
}
