//! Projection of page state handed to the presentation layer.
//!
//! These types are serialized to JSON for the page and exported as
//! TypeScript declarations so the front end can consume them typed.

use crate::scrollspy::NavGroup;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct NavLinkView {
    pub href: String,
    pub group: NavGroup,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct BottomNavView {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PageView {
    pub active_section: Option<String>,
    pub nav_links: Vec<NavLinkView>,
    pub navbar_scrolled: bool,
    pub mobile_nav_open: bool,
    pub bottom_nav: Vec<BottomNavView>,
    pub search_query: String,
    pub search_location: String,
}

fn export_single_type<T: TS + 'static>(out_dir: &Path) -> Result<()> {
    T::export_all_to(out_dir).with_context(|| format!("failed to export {}", T::name()))
}

/// Write the `.ts` declarations for every view type into `out_dir`, replacing
/// any stale declarations already there.
pub fn export_ts_bindings(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for entry in
        fs::read_dir(out_dir).with_context(|| format!("failed to list {}", out_dir.display()))?
    {
        let path = entry.context("failed to read directory entry")?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("ts") {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        }
    }

    export_single_type::<NavGroup>(out_dir)?;
    export_single_type::<NavLinkView>(out_dir)?;
    export_single_type::<BottomNavView>(out_dir)?;
    export_single_type::<PageView>(out_dir)?;
    Ok(())
}
