use crate::constants::SCROLL_THRESHOLD_PX;
use crate::sections::SectionRegistry;

/// Section considered active before any scroll event arrives.
pub const DEFAULT_SECTION: &str = "home";

/// Snapshot of the viewport scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset_y: f64,
    pub scrolled_past_threshold: bool,
}

/// What changed during one scroll update, so the DOM is only touched on edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub scrolled_changed: bool,
    pub active_changed: bool,
}

/// Owns the scroll-derived state: the raw [`ScrollState`] plus the active
/// section id.
///
/// The active section is sticky: when no section spans the current position
/// the previous value is retained, so it is never unset once initialized.
/// Updates are synchronous and idempotent under redelivery of the same offset.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    state: ScrollState,
    active_section: &'static str,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            state: ScrollState::default(),
            active_section: DEFAULT_SECTION,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn active_section(&self) -> &'static str {
        self.active_section
    }

    /// Feed one scroll sample. Returns which derived values changed.
    pub fn on_scroll(&mut self, offset_y: f64, registry: &SectionRegistry) -> ScrollUpdate {
        let scrolled = offset_y > SCROLL_THRESHOLD_PX;
        let scrolled_changed = scrolled != self.state.scrolled_past_threshold;
        self.state = ScrollState {
            offset_y,
            scrolled_past_threshold: scrolled,
        };

        let mut active_changed = false;
        if let Some(id) = registry.resolve(offset_y) {
            if id != self.active_section {
                self.active_section = id;
                active_changed = true;
            }
        }
        ScrollUpdate {
            scrolled_changed,
            active_changed,
        }
    }
}
