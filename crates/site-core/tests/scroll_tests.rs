// Host-side tests for the scroll tracker and active-section resolution.

use site_core::{
    Section, SectionRegistry, ScrollTracker, DEFAULT_SECTION, SCROLL_THRESHOLD_PX,
};

fn two_section_registry() -> SectionRegistry {
    SectionRegistry::from_sections([
        Section {
            id: "home",
            top_offset: 0.0,
            height: 800.0,
        },
        Section {
            id: "skills",
            top_offset: 800.0,
            height: 600.0,
        },
    ])
}

#[test]
fn threshold_flag_matches_definition() {
    let registry = two_section_registry();
    let mut tracker = ScrollTracker::new();
    for offset in [0.0, 10.0, 49.5, 50.0, 50.1, 51.0, 100.0, 2000.0] {
        tracker.on_scroll(offset, &registry);
        assert_eq!(
            tracker.state().scrolled_past_threshold,
            offset > SCROLL_THRESHOLD_PX,
            "offset {offset}"
        );
    }
}

#[test]
fn initial_state_is_home_and_not_scrolled() {
    let tracker = ScrollTracker::new();
    assert_eq!(tracker.active_section(), DEFAULT_SECTION);
    assert!(!tracker.state().scrolled_past_threshold);
    assert_eq!(tracker.state().offset_y, 0.0);
}

#[test]
fn offset_zero_resolves_home() {
    let registry = two_section_registry();
    let mut tracker = ScrollTracker::new();
    tracker.on_scroll(0.0, &registry);
    assert_eq!(tracker.active_section(), "home");
    assert!(!tracker.state().scrolled_past_threshold);
}

#[test]
fn lookahead_bias_selects_next_section_early() {
    // offset 750 -> biased position 850, inside skills [800, 1400)
    let registry = two_section_registry();
    let mut tracker = ScrollTracker::new();
    let update = tracker.on_scroll(750.0, &registry);
    assert_eq!(tracker.active_section(), "skills");
    assert!(update.active_changed);
}

#[test]
fn section_upper_bound_is_exclusive() {
    let registry = two_section_registry();
    // biased position 800 is exactly skills' top: home's range is [0, 800)
    assert_eq!(registry.resolve(700.0), Some("skills"));
    assert_eq!(registry.resolve(699.0), Some("home"));
}

#[test]
fn no_match_retains_previous_value() {
    let registry = two_section_registry();
    let mut tracker = ScrollTracker::new();
    tracker.on_scroll(750.0, &registry);
    assert_eq!(tracker.active_section(), "skills");

    // Past the last section: 2000 + 100 is outside every range.
    let update = tracker.on_scroll(2000.0, &registry);
    assert_eq!(tracker.active_section(), "skills");
    assert!(!update.active_changed);
}

#[test]
fn empty_registry_never_unsets_active() {
    let registry = SectionRegistry::new();
    let mut tracker = ScrollTracker::new();
    for offset in [0.0, 500.0, 10_000.0] {
        tracker.on_scroll(offset, &registry);
        assert_eq!(tracker.active_section(), DEFAULT_SECTION);
    }
}

#[test]
fn repeated_identical_offsets_report_no_change() {
    let registry = two_section_registry();
    let mut tracker = ScrollTracker::new();
    tracker.on_scroll(900.0, &registry);
    let update = tracker.on_scroll(900.0, &registry);
    assert!(!update.active_changed);
    assert!(!update.scrolled_changed);
    assert_eq!(tracker.active_section(), "skills");
}

#[test]
fn first_match_wins_on_overlapping_measurements() {
    let registry = SectionRegistry::from_sections([
        Section {
            id: "a",
            top_offset: 0.0,
            height: 1000.0,
        },
        Section {
            id: "b",
            top_offset: 500.0,
            height: 1000.0,
        },
    ]);
    // biased position 700 falls inside both; iteration order breaks the tie
    assert_eq!(registry.resolve(600.0), Some("a"));
}

#[test]
fn replace_swaps_measurements() {
    let mut registry = two_section_registry();
    registry.replace([Section {
        id: "home",
        top_offset: 0.0,
        height: 400.0,
    }]);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.resolve(0.0), Some("home"));
    assert_eq!(registry.resolve(350.0), None);
}
