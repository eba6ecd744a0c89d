//! Page navigation for the compass app.
//!
//! # Pages
//!
//! - [`Page::Compass`]: Dial with north chevron, target arrow and solar marker
//! - [`Page::Debug`]: Raw engine state and the event log tail

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Compass face.
    #[default]
    Compass,

    /// Heading, offsets, fix state and recent log entries.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Compass => Self::Debug,
            Self::Debug => Self::Compass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Compass);
    }

    #[test]
    fn test_page_toggle_cycle() {
        assert_eq!(Page::Compass.toggle(), Page::Debug);
        assert_eq!(Page::Compass.toggle().toggle(), Page::Compass);
    }
}
