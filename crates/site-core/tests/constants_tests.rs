// Sanity checks on tuning constants and their relationships.

use site_core::constants::*;
use site_core::content::{NAV_LINKS, SECTION_IDS};

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_constants_are_sane() {
    assert!(SCROLL_THRESHOLD_PX > 0.0);
    // The lookahead compensates a full navbar, so it exceeds the scrolled flag.
    assert!(SCROLL_LOOKAHEAD_PX > SCROLL_THRESHOLD_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_sane() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_HALF_SPAN > 0.0);
    assert!(PARTICLE_SIZE > 0.0);
    for c in PARTICLE_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
    assert!(ROTATION_RATE_X > ROTATION_RATE_Y);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_planes_are_ordered() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_EYE_Z < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_thresholds_are_fractions() {
    for t in [
        REVEAL_THRESHOLD_SECTION,
        REVEAL_THRESHOLD_BLOCK,
        REVEAL_THRESHOLD_CARD,
        REVEAL_THRESHOLD_ROW,
    ] {
        assert!(t > 0.0 && t <= 1.0);
    }
    assert!(REVEAL_DURATION_SEC > 0.0);
    assert!(TOAST_DISMISS_MS > 0);
}

#[test]
fn nav_links_cover_every_section_in_order() {
    assert_eq!(NAV_LINKS.len(), SECTION_IDS.len());
    for (link, id) in NAV_LINKS.iter().zip(SECTION_IDS.iter()) {
        assert_eq!(link.anchor, *id);
    }
}
