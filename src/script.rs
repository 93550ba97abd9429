//! Event scripts: a recorded sequence of page events replayed through the
//! reducer.
//!
//! ```toml
//! [[event]]
//! kind = "scroll"
//! offset = 640.0
//!
//! [[event]]
//! kind = "nav_click"
//! index = 2
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thrive_core::app::Message;
use thrive_core::scrollspy::Section;
use tracing::info;

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default, rename = "event")]
    events: Vec<ScriptEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ScriptEvent {
    Loaded { load_ms: u64 },
    Scroll { offset: f64 },
    Layout { sections: Vec<Section> },
    NavClick { index: usize },
    Anchor { href: String },
    MenuToggle,
    Query { text: String },
    Location { name: String },
    Key { key: String },
    Search,
    Tag { index: usize },
    Category { index: usize },
    MoreInfo { index: usize },
    Website { index: usize },
    Cta,
    ViewAll,
    BottomNav { index: usize },
    Language,
    Error { message: String },
}

impl From<ScriptEvent> for Message {
    fn from(event: ScriptEvent) -> Self {
        match event {
            ScriptEvent::Loaded { load_ms } => Message::PageLoaded { load_ms },
            ScriptEvent::Scroll { offset } => Message::Scrolled { offset },
            ScriptEvent::Layout { sections } => Message::LayoutChanged {
                offsets: sections
                    .into_iter()
                    .map(|section| (section.id, section.offset))
                    .collect(),
            },
            ScriptEvent::NavClick { index } => Message::NavLinkClicked(index),
            ScriptEvent::Anchor { href } => Message::AnchorClicked { href },
            ScriptEvent::MenuToggle => Message::ToggleMobileMenu,
            ScriptEvent::Query { text } => Message::SearchQueryChanged(text),
            ScriptEvent::Location { name } => Message::LocationChanged(name),
            ScriptEvent::Key { key } => Message::SearchKeyPressed { key },
            ScriptEvent::Search => Message::SearchSubmitted,
            ScriptEvent::Tag { index } => Message::PopularTagClicked(index),
            ScriptEvent::Category { index } => Message::CategoryClicked(index),
            ScriptEvent::MoreInfo { index } => Message::ResourceMoreInfoClicked(index),
            ScriptEvent::Website { index } => Message::ResourceWebsiteClicked(index),
            ScriptEvent::Cta => Message::CtaClicked,
            ScriptEvent::ViewAll => Message::ViewAllClicked,
            ScriptEvent::BottomNav { index } => Message::BottomNavClicked(index),
            ScriptEvent::Language => Message::LanguageClicked,
            ScriptEvent::Error { message } => Message::ScriptError { message },
        }
    }
}

pub fn load_script(path: &Path) -> Result<Vec<Message>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read event script {}", path.display()))?;
    let messages = parse_script(&contents)
        .with_context(|| format!("invalid event script {}", path.display()))?;
    info!(path = %path.display(), events = messages.len(), "Loaded event script");
    Ok(messages)
}

pub fn parse_script(contents: &str) -> Result<Vec<Message>> {
    let script: Script = toml::from_str(contents).context("failed to parse TOML")?;
    Ok(script.events.into_iter().map(Message::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_events() {
        let messages = parse_script(
            r##"
            [[event]]
            kind = "scroll"
            offset = 640.0

            [[event]]
            kind = "nav_click"
            index = 2

            [[event]]
            kind = "menu_toggle"

            [[event]]
            kind = "layout"
            sections = [{ id = "resources", offset = 1800.0 }]

            [[event]]
            kind = "anchor"
            href = "#home"
            "##,
        )
        .expect("script parses");
        assert_eq!(
            messages,
            vec![
                Message::Scrolled { offset: 640.0 },
                Message::NavLinkClicked(2),
                Message::ToggleMobileMenu,
                Message::LayoutChanged {
                    offsets: vec![("resources".to_string(), 1800.0)],
                },
                Message::AnchorClicked {
                    href: "#home".to_string()
                },
            ]
        );
    }

    #[test]
    fn rejects_unknown_event_kind() {
        assert!(parse_script("[[event]]\nkind = \"hover\"\n").is_err());
    }

    #[test]
    fn empty_script_has_no_events() {
        assert!(parse_script("").expect("parses").is_empty());
    }
}
