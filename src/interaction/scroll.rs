use std::fmt;

/// Reported as active when no sections are known at all.
pub const FALLBACK_SECTION: &str = "home";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, cursor: f64) -> bool {
        cursor >= self.top && cursor < self.top + self.height
    }
}

/// Derives the highlighted navigation entry from the scroll offset.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    sections: Vec<SectionId>,
    active: SectionId,
    lookahead_margin: f64,
}

impl ScrollTracker {
    pub fn new(sections: Vec<SectionId>, lookahead_margin: f64) -> Self {
        let active = sections
            .first()
            .cloned()
            .unwrap_or_else(|| SectionId::from(FALLBACK_SECTION));

        Self {
            sections,
            active,
            lookahead_margin,
        }
    }

    pub fn active(&self) -> &SectionId {
        &self.active
    }

    pub fn find(&self, id: &str) -> Option<&SectionId> {
        self.sections.iter().find(|section| section.as_str() == id)
    }

    /// Recomputes the active section for a new scroll offset.
    ///
    /// Sections are tested in document order and the first one whose extent
    /// contains `offset + lookahead_margin` wins. Sections `measure` cannot
    /// resolve are skipped for this tick. When nothing matches the previous
    /// section stays active. Returns whether the active section changed.
    pub fn on_scroll<F>(&mut self, offset: f64, mut measure: F) -> bool
    where
        F: FnMut(&SectionId) -> Option<SectionExtent>,
    {
        let cursor = offset + self.lookahead_margin;

        let Some(hit) = self
            .sections
            .iter()
            .find(|section| measure(section).is_some_and(|extent| extent.contains(cursor)))
        else {
            return false;
        };

        if *hit == self.active {
            return false;
        }

        self.active = hit.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn ids(names: &[&str]) -> Vec<SectionId> {
        names.iter().copied().map(SectionId::from).collect()
    }

    fn layout(extents: &[(&str, f64, f64)]) -> HashMap<String, SectionExtent> {
        extents
            .iter()
            .map(|(id, top, height)| (id.to_string(), SectionExtent::new(*top, *height)))
            .collect()
    }

    #[test]
    fn defaults_to_first_section_before_any_scroll() {
        let tracker = ScrollTracker::new(ids(&["home", "about"]), 100.0);
        assert_eq!(tracker.active().as_str(), "home");
    }

    #[test]
    fn lookahead_margin_moves_cursor_into_next_section() {
        let extents = layout(&[("home", 0.0, 800.0), ("about", 800.0, 800.0)]);
        let mut tracker = ScrollTracker::new(ids(&["home", "about"]), 100.0);

        let changed = tracker.on_scroll(750.0, |id| extents.get(id.as_str()).copied());

        assert!(changed);
        assert_eq!(tracker.active().as_str(), "about");
    }

    #[test]
    fn scrolling_to_each_section_top_activates_it() {
        let names = ["home", "about", "education", "experience", "skills", "projects"];
        let extents: HashMap<String, SectionExtent> = names
            .iter()
            .enumerate()
            .map(|(index, id)| (id.to_string(), SectionExtent::new(index as f64 * 600.0, 600.0)))
            .collect();
        let mut tracker = ScrollTracker::new(ids(&names), 0.0);

        for (index, id) in names.iter().enumerate().rev() {
            tracker.on_scroll(index as f64 * 600.0, |section| {
                extents.get(section.as_str()).copied()
            });
            assert_eq!(tracker.active().as_str(), *id);
        }
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let extents = layout(&[("home", 200.0, 400.0), ("about", 600.0, 400.0)]);
        let mut tracker = ScrollTracker::new(ids(&["home", "about"]), 100.0);

        tracker.on_scroll(600.0, |id| extents.get(id.as_str()).copied());
        assert_eq!(tracker.active().as_str(), "about");

        let changed = tracker.on_scroll(5_000.0, |id| extents.get(id.as_str()).copied());
        assert!(!changed);
        assert_eq!(tracker.active().as_str(), "about");

        tracker.on_scroll(0.0, |id| extents.get(id.as_str()).copied());
        assert_eq!(tracker.active().as_str(), "about");
    }

    #[test]
    fn unmeasurable_sections_are_skipped() {
        let extents = layout(&[("about", 0.0, 1_000.0)]);
        let mut tracker = ScrollTracker::new(ids(&["home", "about"]), 100.0);

        tracker.on_scroll(0.0, |id| extents.get(id.as_str()).copied());

        assert_eq!(tracker.active().as_str(), "about");
    }

    #[test]
    fn overlapping_extents_resolve_to_first_in_order() {
        let extents = layout(&[("home", 0.0, 1_000.0), ("about", 500.0, 1_000.0)]);
        let mut tracker = ScrollTracker::new(ids(&["home", "about"]), 0.0);
        tracker.on_scroll(1_200.0, |id| extents.get(id.as_str()).copied());
        assert_eq!(tracker.active().as_str(), "about");

        tracker.on_scroll(700.0, |id| extents.get(id.as_str()).copied());

        assert_eq!(tracker.active().as_str(), "home");
    }

    #[test]
    fn empty_section_list_reports_fallback_forever() {
        let mut tracker = ScrollTracker::new(Vec::new(), 100.0);

        for offset in [0.0, 250.0, 10_000.0] {
            assert!(!tracker.on_scroll(offset, |_| Some(SectionExtent::new(0.0, 1e9))));
            assert_eq!(tracker.active().as_str(), FALLBACK_SECTION);
        }
    }

    #[test]
    fn active_section_is_always_a_known_section() {
        let names = ["home", "about", "skills"];
        let extents = layout(&[("home", 0.0, 300.0), ("about", 300.0, 500.0), ("skills", 900.0, 100.0)]);
        let mut tracker = ScrollTracker::new(ids(&names), 100.0);

        for step in 0..60 {
            tracker.on_scroll(f64::from(step) * 25.0, |id| extents.get(id.as_str()).copied());
            assert!(tracker.find(tracker.active().as_str()).is_some());
        }
    }

    #[test]
    fn non_finite_offset_does_not_move_highlight() {
        let extents = layout(&[("home", 0.0, 800.0)]);
        let mut tracker = ScrollTracker::new(ids(&["home"]), 100.0);

        assert!(!tracker.on_scroll(f64::NAN, |id| extents.get(id.as_str()).copied()));
        assert_eq!(tracker.active().as_str(), "home");
    }
}
