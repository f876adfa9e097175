//! Renders the static page content into the section containers at startup.

use crate::dom::js_err;
use site_core::content::{
    TimelineEntry, TimelineKind, EDUCATION, FOOTER_LINKS, HERO_CTAS, HERO_ROLES, NAV_LINKS,
    OWNER_AVAILABILITY, OWNER_EMAIL, OWNER_LOCATION, PROJECTS, SECTION_IDS, SITE_OWNER,
    SITE_TAGLINE, SKILL_CATEGORIES, SOCIAL_LINKS, WORK_EXPERIENCE,
};
use site_core::{
    threshold_attr, REVEAL_DURATION_SEC, REVEAL_THRESHOLD_BLOCK, REVEAL_THRESHOLD_CARD,
    REVEAL_THRESHOLD_ROW, REVEAL_THRESHOLD_SECTION,
};
use wasm_bindgen::JsCast;
use web_sys as web;

fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        el.set_attribute("class", class).map_err(js_err)?;
    }
    Ok(el)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent.append_child(child.as_ref()).map_err(js_err)?;
    Ok(())
}

fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn populate(document: &web::Document) -> anyhow::Result<()> {
    publish_reveal_duration(document);
    tag_section_reveals(document)?;
    populate_nav(document)?;
    populate_hero(document)?;
    populate_skills(document)?;
    populate_timeline(document, "timeline-work", &WORK_EXPERIENCE)?;
    populate_timeline(document, "timeline-education", &EDUCATION)?;
    populate_projects(document)?;
    populate_contact_info(document)?;
    populate_footer(document)?;
    Ok(())
}

/// Publish the entrance duration as a CSS custom property so the stylesheet's
/// transition always runs with the shared constant.
fn publish_reveal_duration(document: &web::Document) {
    if let Some(root) = document.document_element() {
        if let Some(el) = root.dyn_ref::<web::HtmlElement>() {
            let _ = el
                .style()
                .set_property("--reveal-duration", &format!("{REVEAL_DURATION_SEC}s"));
        }
    }
}

/// Tag every section below the hero for whole-section reveal. Done here
/// rather than in the markup so the threshold constants stay authoritative.
fn tag_section_reveals(document: &web::Document) -> anyhow::Result<()> {
    for id in SECTION_IDS.iter().skip(1) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_attribute("data-reveal", &threshold_attr(REVEAL_THRESHOLD_SECTION))
                .map_err(js_err)?;
        }
    }
    Ok(())
}

fn populate_nav(document: &web::Document) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id("nav-links") else {
        anyhow::bail!("missing #nav-links");
    };
    for link in NAV_LINKS {
        let a = create(document, "a", "")?;
        a.set_attribute("href", &format!("#{}", link.anchor))
            .map_err(js_err)?;
        a.set_attribute("data-section", link.anchor).map_err(js_err)?;
        if link.anchor == "home" {
            a.set_attribute("class", "active").map_err(js_err)?;
        }
        a.set_text_content(Some(link.title));
        append(&container, &a)?;
    }
    Ok(())
}

fn populate_hero(document: &web::Document) -> anyhow::Result<()> {
    set_text(document, "hero-tagline", SITE_TAGLINE);
    set_text(document, "hero-name", SITE_OWNER);
    set_text(document, "nav-brand", SITE_OWNER);
    // The frame loop cycles this afterwards.
    set_text(document, "hero-role", HERO_ROLES[0]);

    if let Some(container) = document.get_element_by_id("hero-ctas") {
        for (i, cta) in HERO_CTAS.iter().enumerate() {
            let class = if i == 0 { "button-primary" } else { "button-secondary" };
            let a = create(document, "a", class)?;
            a.set_attribute("href", &format!("#{}", cta.anchor))
                .map_err(js_err)?;
            a.set_text_content(Some(cta.title));
            append(&container, &a)?;
        }
    }
    Ok(())
}

fn populate_skills(document: &web::Document) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id("skills-categories") else {
        anyhow::bail!("missing #skills-categories");
    };
    for (ci, category) in SKILL_CATEGORIES.iter().enumerate() {
        let block = create(document, "div", "skill-category")?;
        block.set_id(&format!("skills-cat-{ci}"));
        block
            .set_attribute("data-reveal", &threshold_attr(REVEAL_THRESHOLD_BLOCK))
            .map_err(js_err)?;

        let heading = create(document, "h3", "")?;
        heading.set_text_content(Some(category.title));
        append(&block, &heading)?;

        let grid = create(document, "div", "skill-grid")?;
        for (si, skill) in category.skills.iter().enumerate() {
            let card = create(document, "div", "skill-card")?;
            card.set_id(&format!("skill-{ci}-{si}"));
            card.set_attribute("data-reveal", &threshold_attr(REVEAL_THRESHOLD_CARD))
                .map_err(js_err)?;

            let icon = create(document, "span", "skill-icon")?;
            icon.set_text_content(Some(skill.icon));
            append(&card, &icon)?;

            let title = create(document, "h4", "")?;
            title.set_text_content(Some(skill.title));
            append(&card, &title)?;

            let desc = create(document, "p", "")?;
            desc.set_text_content(Some(skill.description));
            append(&card, &desc)?;

            append(&grid, &card)?;
        }
        append(&block, &grid)?;
        append(&container, &block)?;
    }
    Ok(())
}

fn populate_timeline(
    document: &web::Document,
    container_id: &str,
    entries: &[TimelineEntry],
) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id(container_id) else {
        anyhow::bail!("missing #{container_id}");
    };
    let prefix = match entries.first().map(|e| e.kind) {
        Some(TimelineKind::Education) => "edu",
        _ => "work",
    };
    for (i, entry) in entries.iter().enumerate() {
        let side = if i % 2 == 0 { "left" } else { "right" };
        let row = create(document, "div", &format!("timeline-row {side}"))?;
        row.set_id(&format!("{prefix}-{i}"));
        row.set_attribute("data-reveal", &threshold_attr(REVEAL_THRESHOLD_ROW))
            .map_err(js_err)?;

        let marker = create(document, "span", "timeline-marker")?;
        marker.set_text_content(Some(match entry.kind {
            TimelineKind::Work => "\u{1F4BC}",
            TimelineKind::Education => "\u{1F393}",
        }));
        append(&row, &marker)?;

        let body = create(document, "div", "timeline-body")?;
        let date = create(document, "span", "timeline-date")?;
        date.set_text_content(Some(entry.date));
        append(&body, &date)?;

        let title = create(document, "h4", "")?;
        title.set_text_content(Some(entry.title));
        append(&body, &title)?;

        let subtitle = create(document, "h5", "")?;
        subtitle.set_text_content(Some(entry.subtitle));
        append(&body, &subtitle)?;

        let desc = create(document, "p", "")?;
        desc.set_text_content(Some(entry.description));
        append(&body, &desc)?;

        append(&row, &body)?;
        append(&container, &row)?;
    }
    Ok(())
}

fn populate_projects(document: &web::Document) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id("projects-grid") else {
        anyhow::bail!("missing #projects-grid");
    };
    for (i, project) in PROJECTS.iter().enumerate() {
        let card = create(document, "article", "project-card")?;
        card.set_id(&format!("project-{i}"));
        card.set_attribute("data-reveal", &threshold_attr(REVEAL_THRESHOLD_CARD))
            .map_err(js_err)?;

        let img = create(document, "img", "project-image")?;
        img.set_attribute("src", project.image_url).map_err(js_err)?;
        img.set_attribute("alt", project.title).map_err(js_err)?;
        img.set_attribute("loading", "lazy").map_err(js_err)?;
        append(&card, &img)?;

        let title = create(document, "h3", "")?;
        title.set_text_content(Some(project.title));
        append(&card, &title)?;

        let desc = create(document, "p", "")?;
        desc.set_text_content(Some(project.description));
        append(&card, &desc)?;

        let tags = create(document, "div", "project-tags")?;
        for tag in project.tags {
            let chip = create(document, "span", "tag")?;
            chip.set_text_content(Some(tag));
            append(&tags, &chip)?;
        }
        append(&card, &tags)?;

        let links = create(document, "div", "project-links")?;
        for (label, url) in [("Live Demo", project.demo_url), ("Source", project.repo_url)] {
            let a = create(document, "a", "")?;
            a.set_attribute("href", url).map_err(js_err)?;
            a.set_attribute("target", "_blank").map_err(js_err)?;
            a.set_attribute("rel", "noopener noreferrer").map_err(js_err)?;
            a.set_text_content(Some(label));
            append(&links, &a)?;
        }
        append(&card, &links)?;

        append(&container, &card)?;
    }
    Ok(())
}

fn populate_contact_info(document: &web::Document) -> anyhow::Result<()> {
    set_text(document, "contact-email-value", OWNER_EMAIL);
    set_text(document, "contact-location-value", OWNER_LOCATION);
    set_text(document, "contact-availability-value", OWNER_AVAILABILITY);

    if let Some(container) = document.get_element_by_id("social-links") {
        for link in SOCIAL_LINKS {
            let a = create(document, "a", "social-link")?;
            a.set_attribute("href", link.url).map_err(js_err)?;
            a.set_attribute("aria-label", link.label).map_err(js_err)?;
            a.set_attribute("title", link.label).map_err(js_err)?;
            if !link.url.starts_with("mailto:") {
                a.set_attribute("target", "_blank").map_err(js_err)?;
                a.set_attribute("rel", "noopener noreferrer").map_err(js_err)?;
            }
            a.set_text_content(Some(link.icon));
            append(&container, &a)?;
        }
    }
    Ok(())
}

fn populate_footer(document: &web::Document) -> anyhow::Result<()> {
    let year = js_sys::Date::new_0().get_full_year();
    set_text(document, "footer-year", &year.to_string());
    set_text(document, "footer-owner", SITE_OWNER);

    if let Some(container) = document.get_element_by_id("footer-links") {
        for link in FOOTER_LINKS {
            let a = create(document, "a", "")?;
            a.set_attribute("href", link.href).map_err(js_err)?;
            a.set_text_content(Some(link.label));
            append(&container, &a)?;
        }
    }
    Ok(())
}
