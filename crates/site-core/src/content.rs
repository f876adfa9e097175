//! Static page content. Declarative arrays the web frontend renders into the
//! section containers at startup, plus the time-driven hero role cycle.

use crate::constants::HERO_ROLE_INTERVAL_SEC;

pub const SITE_OWNER: &str = "Sam Carter";
pub const SITE_TAGLINE: &str = "Hello, I'm";
pub const OWNER_EMAIL: &str = "hello@samcarter.dev";
pub const OWNER_LOCATION: &str = "Portland, Oregon";
pub const OWNER_AVAILABILITY: &str = "Open to freelance projects and collaborations";

/// Role strings cycled in the hero, typewriter-style.
pub const HERO_ROLES: [&str; 4] = [
    "Software Engineer",
    "Rust & WebAssembly Developer",
    "WebGPU Enthusiast",
    "Open Source Contributor",
];

/// Role shown in the hero at a given moment. Pure function of elapsed
/// seconds: advances every [`HERO_ROLE_INTERVAL_SEC`] and wraps around, so a
/// skipped frame lands on the same role the continuous cycle would.
pub fn active_role(elapsed_sec: f64) -> &'static str {
    let steps = (elapsed_sec.max(0.0) / HERO_ROLE_INTERVAL_SEC) as usize;
    HERO_ROLES[steps % HERO_ROLES.len()]
}

/// Section ids in document order. Doubles as the measurement order for the
/// section registry, so resolution order matches the page.
pub const SECTION_IDS: [&str; 5] = ["home", "skills", "resume", "projects", "contact"];

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub title: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        title: "Home",
        anchor: "home",
    },
    NavLink {
        title: "Skills",
        anchor: "skills",
    },
    NavLink {
        title: "Resume",
        anchor: "resume",
    },
    NavLink {
        title: "Projects",
        anchor: "projects",
    },
    NavLink {
        title: "Contact",
        anchor: "contact",
    },
];

/// The hero's call-to-action pair, linking into the page itself.
pub const HERO_CTAS: [NavLink; 2] = [
    NavLink {
        title: "View My Work",
        anchor: "projects",
    },
    NavLink {
        title: "Contact Me",
        anchor: "contact",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

/// The "Connect with me" block in the contact section.
pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        icon: "\u{1F419}",
        url: "https://github.com/samcarter-dev",
    },
    SocialLink {
        label: "LinkedIn",
        icon: "\u{1F4BC}",
        url: "https://www.linkedin.com/in/samcarter-dev",
    },
    SocialLink {
        label: "Twitter",
        icon: "\u{1F426}",
        url: "https://x.com/samcarterdev",
    },
    SocialLink {
        label: "Email",
        icon: "\u{2709}",
        url: "mailto:hello@samcarter.dev",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink {
        label: "Privacy Policy",
        href: "#",
    },
    FooterLink {
        label: "Terms of Service",
        href: "#",
    },
    FooterLink {
        label: "Sitemap",
        href: "#",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Systems & Web",
        skills: &[
            Skill {
                title: "Rust",
                icon: "\u{1F980}",
                description: "WASM frontends, async services, and CLI tooling",
            },
            Skill {
                title: "WebGPU",
                icon: "\u{1F5A5}",
                description: "wgpu render pipelines, WGSL shaders, and instancing",
            },
            Skill {
                title: "TypeScript",
                icon: "\u{1F4DC}",
                description: "Interactive UIs and typed API clients",
            },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill {
                title: "Services",
                icon: "\u{2699}",
                description: "REST and gRPC services with axum and tonic",
            },
            Skill {
                title: "Databases",
                icon: "\u{1F5C4}",
                description: "PostgreSQL, SQLite, and Redis",
            },
            Skill {
                title: "Messaging",
                icon: "\u{1F517}",
                description: "Event pipelines with NATS and Kafka",
            },
        ],
    },
    SkillCategory {
        title: "Tools & Workflows",
        skills: &[
            Skill {
                title: "Git",
                icon: "\u{1F504}",
                description: "Version control and collaborative review workflows",
            },
            Skill {
                title: "Testing",
                icon: "\u{1F9EA}",
                description: "Property tests, integration suites, and CI gates",
            },
            Skill {
                title: "DevOps",
                icon: "\u{1F680}",
                description: "Containers, CI/CD, and cloud deployment",
            },
        ],
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    pub repo_url: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Driftwood",
        description: "Collaborative whiteboard with CRDT sync and offline-first storage",
        image_url: "assets/projects/driftwood.jpg",
        tags: &["Rust", "WASM", "CRDT"],
        demo_url: "https://driftwood.samcarter.dev",
        repo_url: "https://github.com/samcarter-dev/driftwood",
    },
    Project {
        title: "Ledgerline",
        description: "Self-hosted budgeting dashboard with bank-feed importers",
        image_url: "assets/projects/ledgerline.jpg",
        tags: &["Rust", "axum", "PostgreSQL"],
        demo_url: "https://ledgerline.samcarter.dev",
        repo_url: "https://github.com/samcarter-dev/ledgerline",
    },
    Project {
        title: "Waveform",
        description: "Browser audio visualizer rendered entirely on the GPU",
        image_url: "assets/projects/waveform.jpg",
        tags: &["WebGPU", "WGSL", "WebAudio"],
        demo_url: "https://waveform.samcarter.dev",
        repo_url: "https://github.com/samcarter-dev/waveform",
    },
    Project {
        title: "Fieldnotes",
        description: "Markdown knowledge base with full-text search and backlinks",
        image_url: "assets/projects/fieldnotes.jpg",
        tags: &["Rust", "tantivy", "SQLite"],
        demo_url: "https://fieldnotes.samcarter.dev",
        repo_url: "https://github.com/samcarter-dev/fieldnotes",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineKind {
    Work,
    Education,
}

#[derive(Clone, Copy, Debug)]
pub struct TimelineEntry {
    pub date: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub kind: TimelineKind,
}

pub const WORK_EXPERIENCE: [TimelineEntry; 2] = [
    TimelineEntry {
        date: "2023 - Present",
        title: "Senior Software Engineer",
        subtitle: "Meridian Labs",
        description: "Building browser tooling in Rust and WebAssembly, with a focus on rendering performance.",
        kind: TimelineKind::Work,
    },
    TimelineEntry {
        date: "2020 - 2023",
        title: "Software Engineer",
        subtitle: "Northbeam Systems",
        description: "Shipped data-pipeline services and the dashboards that sit on top of them.",
        kind: TimelineKind::Work,
    },
];

pub const EDUCATION: [TimelineEntry; 1] = [TimelineEntry {
    date: "2016 - 2020",
    title: "BSc in Computer Science",
    subtitle: "Oregon State University",
    description: "Focused on systems programming, graphics, and distributed computing.",
    kind: TimelineKind::Education,
}];
