//! Active-navigation tracking.
//!
//! The navigator owns the "current section" value and keeps every nav link's
//! active flag in step with it. Two inputs drive it: scroll offsets, which
//! select the last section whose top has come within `threshold` pixels of
//! the viewport, and clicks, which set the section directly.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

/// A page region the navigator can point at.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Section {
    pub id: String,
    /// Distance from the document top, in CSS pixels.
    pub offset: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, offset: f64) -> Self {
        Self {
            id: id.into(),
            offset,
        }
    }
}

/// Which menu a link is rendered in. Links in different groups that share a
/// target always agree on their active flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NavGroup {
    #[default]
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub href: String,
    pub group: NavGroup,
    active: bool,
}

impl NavLink {
    pub fn new(href: impl Into<String>, group: NavGroup) -> Self {
        Self {
            href: href.into(),
            group,
            active: false,
        }
    }

    /// Section identifier this link points at (`#about` -> `about`). Links
    /// that are not in-page anchors have no target and are never active.
    pub fn target(&self) -> Option<&str> {
        self.href.strip_prefix('#')
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

pub struct ScrollSpyNavigator {
    sections: Vec<Section>,
    links: Vec<NavLink>,
    active: Option<String>,
    threshold: f64,
    last_scroll: Option<f64>,
    /// The active section was set by a click, not derived from scrolling.
    clicked: bool,
}

impl ScrollSpyNavigator {
    pub fn new(sections: Vec<Section>, links: Vec<NavLink>, threshold: f64) -> Self {
        let mut navigator = Self {
            sections,
            links,
            active: None,
            threshold,
            last_scroll: None,
            clicked: false,
        };
        navigator.sync_links();
        navigator
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|section| section.id == id)
    }

    /// Last section (in caller order) whose threshold line has been scrolled
    /// past, or `None` when the viewport is above all of them.
    pub fn candidate_for(&self, scroll_offset: f64) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .find(|section| scroll_offset >= section.offset - self.threshold)
            .map(|section| section.id.as_str())
    }

    /// Recompute the active section for a scroll offset. Returns `true` when
    /// the active section changed and the links were re-synced.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> bool {
        self.last_scroll = Some(scroll_offset);
        self.clicked = false;
        let candidate = self.candidate_for(scroll_offset).map(str::to_owned);
        trace!(scroll_offset, candidate = ?candidate, "Scroll candidate");
        self.set_active(candidate)
    }

    /// Make `id` active regardless of scroll position.
    pub fn on_click(&mut self, id: &str) -> bool {
        debug!(%id, "Nav link clicked");
        self.clicked = true;
        self.set_active(Some(id.to_owned()))
    }

    /// Replace section offsets after the page reflowed, then re-evaluate the
    /// last seen scroll position against the new layout. A click-set section
    /// is kept until the next scroll event.
    pub fn relayout(&mut self, offsets: &[(String, f64)]) -> bool {
        for (id, offset) in offsets {
            match self.sections.iter_mut().find(|section| &section.id == id) {
                Some(section) => section.offset = *offset,
                None => debug!(%id, "Ignoring layout update for unknown section"),
            }
        }
        match self.last_scroll {
            Some(scroll_offset) if !self.clicked => self.on_scroll(scroll_offset),
            _ => false,
        }
    }

    fn set_active(&mut self, next: Option<String>) -> bool {
        if next == self.active {
            return false;
        }
        debug!(from = ?self.active, to = ?next, "Active section changed");
        self.active = next;
        self.sync_links();
        true
    }

    fn sync_links(&mut self) {
        let active = self.active.as_deref();
        for link in &mut self.links {
            link.active = link.target().is_some_and(|target| active == Some(target));
        }
    }
}
