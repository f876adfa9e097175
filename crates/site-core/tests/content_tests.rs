// Host-side tests for the static page content and the hero role cycle.

use site_core::constants::HERO_ROLE_INTERVAL_SEC;
use site_core::content::{
    active_role, FOOTER_LINKS, HERO_CTAS, HERO_ROLES, SECTION_IDS, SOCIAL_LINKS,
};

#[test]
fn role_cycle_starts_on_the_first_role() {
    assert_eq!(active_role(0.0), HERO_ROLES[0]);
    assert_eq!(active_role(HERO_ROLE_INTERVAL_SEC - 0.01), HERO_ROLES[0]);
}

#[test]
fn role_cycle_advances_every_interval() {
    for (i, role) in HERO_ROLES.iter().enumerate() {
        let t = i as f64 * HERO_ROLE_INTERVAL_SEC + 0.5;
        assert_eq!(active_role(t), *role);
    }
}

#[test]
fn role_cycle_wraps_around() {
    let full_cycle = HERO_ROLES.len() as f64 * HERO_ROLE_INTERVAL_SEC;
    assert_eq!(active_role(full_cycle), HERO_ROLES[0]);
    assert_eq!(active_role(full_cycle * 10.0 + HERO_ROLE_INTERVAL_SEC), HERO_ROLES[1]);
}

#[test]
fn role_cycle_clamps_negative_elapsed() {
    assert_eq!(active_role(-1.0), HERO_ROLES[0]);
}

#[test]
fn hero_ctas_target_known_sections() {
    for cta in HERO_CTAS {
        assert!(
            SECTION_IDS.contains(&cta.anchor),
            "cta `{}` targets unknown section `{}`",
            cta.title,
            cta.anchor
        );
        assert!(!cta.title.is_empty());
    }
}

#[test]
fn social_links_are_well_formed() {
    assert_eq!(SOCIAL_LINKS.len(), 4);
    for link in SOCIAL_LINKS {
        assert!(!link.label.is_empty());
        assert!(!link.icon.is_empty());
        assert!(
            link.url.starts_with("https://") || link.url.starts_with("mailto:"),
            "unexpected url scheme for {}: {}",
            link.label,
            link.url
        );
    }
    assert!(SOCIAL_LINKS.iter().any(|l| l.url.starts_with("mailto:")));
}

#[test]
fn footer_links_carry_labels() {
    assert_eq!(FOOTER_LINKS.len(), 3);
    for link in FOOTER_LINKS {
        assert!(!link.label.is_empty());
        assert!(!link.href.is_empty());
    }
}
