//! Page manifest: the one-time description of the page the runtime drives.
//!
//! Everything the interaction layer needs to know about the document is
//! resolved here once at startup and handed to [`crate::app::App`], so no
//! handler ever goes looking for elements on its own.

use crate::format::{format_phone_number, validate_email};
use crate::scrollspy::{NavGroup, NavLink, Section};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageManifest {
    #[serde(default, rename = "section")]
    pub sections: Vec<Section>,
    #[serde(default, rename = "nav_link")]
    pub nav_links: Vec<NavLinkEntry>,
    #[serde(default, rename = "bottom_nav")]
    pub bottom_nav: Vec<BottomNavEntry>,
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryCard>,
    #[serde(default, rename = "resource")]
    pub resources: Vec<ResourceCard>,
    #[serde(default)]
    pub popular_tags: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub cta: bool,
    #[serde(default)]
    pub view_all: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavLinkEntry {
    pub href: String,
    #[serde(default)]
    pub group: NavGroup,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BottomNavEntry {
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryCard {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceCard {
    pub name: String,
    #[serde(default = "default_true")]
    pub more_info: bool,
    #[serde(default = "default_true")]
    pub website: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn default_true() -> bool {
    true
}

impl PageManifest {
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.nav_links
            .iter()
            .map(|entry| NavLink::new(entry.href.clone(), entry.group))
            .collect()
    }
}

pub fn load_page(path: &Path) -> Result<PageManifest> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read page manifest {}", path.display()))?;
    let page = parse_page(&contents)
        .with_context(|| format!("invalid page manifest {}", path.display()))?;
    info!(
        path = %path.display(),
        sections = page.sections.len(),
        nav_links = page.nav_links.len(),
        "Loaded page manifest"
    );
    Ok(page)
}

pub fn parse_page(contents: &str) -> Result<PageManifest> {
    let mut page: PageManifest = toml::from_str(contents).context("failed to parse TOML")?;

    let mut seen = HashSet::new();
    for section in &mut page.sections {
        if !seen.insert(section.id.clone()) {
            bail!("duplicate section id `{}`", section.id);
        }
        if !section.offset.is_finite() || section.offset < 0.0 {
            warn!(id = %section.id, offset = section.offset, "Clamping section offset to 0");
            section.offset = 0.0;
        }
    }
    for card in &mut page.resources {
        if let Some(phone) = card.phone.as_mut() {
            *phone = format_phone_number(phone);
        }
        if card.email.as_deref().is_some_and(|email| !validate_email(email)) {
            warn!(resource = %card.name, email = ?card.email, "Dropping invalid contact email");
            card.email = None;
        }
    }
    for entry in &page.nav_links {
        if !entry.href.starts_with('#') {
            warn!(href = %entry.href, "Nav link does not reference an in-page section");
        }
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
        popular_tags = ["Food Bank", "Housing"]
        locations = ["All Locations", "Oak Harbor"]
        cta = true

        [[section]]
        id = "home"
        offset = 0.0

        [[section]]
        id = "resources"
        offset = 640.0

        [[nav_link]]
        href = "#home"

        [[nav_link]]
        href = "#home"
        group = "mobile"

        [[category]]
        slug = "food"
        title = "Food Assistance"

        [[resource]]
        name = "Island Food Bank"
        website = false
        phone = "360.555.0199"
        email = "not-an-address"

        [[bottom_nav]]
        label = "Home"
    "##;

    #[test]
    fn parses_sample_manifest() {
        let page = parse_page(SAMPLE).expect("manifest parses");
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[1], Section::new("resources", 640.0));
        assert_eq!(page.nav_links[1].group, NavGroup::Mobile);
        assert_eq!(page.nav_links[0].group, NavGroup::Desktop);
        assert!(page.resources[0].more_info);
        assert!(!page.resources[0].website);
        assert_eq!(page.resources[0].phone.as_deref(), Some("(360) 555-0199"));
        assert_eq!(page.resources[0].email, None);
        assert!(page.cta);
        assert!(!page.view_all);
        let links = page.nav_links();
        assert_eq!(links[0].target(), Some("home"));
    }

    #[test]
    fn rejects_duplicate_section_ids() {
        let err = parse_page(
            r#"
            [[section]]
            id = "a"
            offset = 0.0
            [[section]]
            id = "a"
            offset = 10.0
            "#,
        )
        .expect_err("duplicate ids rejected");
        assert!(err.to_string().contains("duplicate section id"));
    }

    #[test]
    fn clamps_negative_offsets() {
        let page = parse_page("[[section]]\nid = \"a\"\noffset = -40.0\n").expect("parses");
        assert_eq!(page.sections[0].offset, 0.0);
    }

    #[test]
    fn empty_manifest_is_valid() {
        let page = parse_page("").expect("parses");
        assert!(page.sections.is_empty());
        assert!(page.nav_links.is_empty());
    }
}
