use crate::constants::SCROLL_LOOKAHEAD_PX;
use smallvec::SmallVec;

/// One page section as measured from the rendered layout, in layout pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub top_offset: f64,
    pub height: f64,
}

impl Section {
    #[inline]
    pub fn contains(&self, scroll_position: f64) -> bool {
        scroll_position >= self.top_offset && scroll_position < self.top_offset + self.height
    }
}

/// Ordered set of page sections, in document order.
///
/// Measurements are replaced wholesale on layout changes (resize); between
/// replacements the registry is immutable. Resolution iterates in order, so
/// the first matching section wins when measurements overlap.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    sections: SmallVec<[Section; 8]>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
        }
    }

    /// Swap in fresh measurements after a layout change.
    pub fn replace(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.sections = sections.into_iter().collect();
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Resolve which section the viewport is "in" for the given scroll offset.
    ///
    /// The offset is biased forward by [`SCROLL_LOOKAHEAD_PX`] so a section
    /// counts as active once its top passes under the fixed navbar. Returns
    /// `None` when no section spans the biased position (before the first
    /// section or past the last); callers keep their previous value in that
    /// case.
    pub fn resolve(&self, offset_y: f64) -> Option<&'static str> {
        let scroll_position = offset_y + SCROLL_LOOKAHEAD_PX;
        self.sections
            .iter()
            .find(|s| s.contains(scroll_position))
            .map(|s| s.id)
    }
}
