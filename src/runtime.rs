//! Executes reducer effects against the outside world.
//!
//! Output is one JSON object per line on the provided writer so the
//! presentation layer (or a test) can consume the projections in order.

use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;
use thrive_core::app::{App, Effect, Message};
use tracing::{debug, info};

pub struct Runtime<W: Write> {
    app: App,
    out: W,
}

impl<W: Write> Runtime<W> {
    pub fn new(app: App, out: W) -> Self {
        Self { app, out }
    }

    /// Emit the initial projection, then feed every message through the
    /// reducer in order.
    pub fn run(&mut self, messages: Vec<Message>) -> Result<()> {
        self.render()?;
        for message in messages {
            debug!(?message, "Dispatching");
            let effects = self.app.update(message);
            for effect in effects {
                self.run_effect(effect)?;
            }
        }
        self.out.flush().context("failed to flush output")
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn run_effect(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::Notify(message) => {
                info!(%message, "Notify");
                self.emit(json!({ "notify": message }))
            }
            Effect::ScrollIntoView { id, smooth } => {
                self.emit(json!({ "scroll_into_view": id, "smooth": smooth }))
            }
            Effect::RenderNav | Effect::RenderChrome => self.render(),
            Effect::LogPageView(page) => {
                info!(%page, "Page view");
                Ok(())
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        let view = self.app.view();
        self.emit(json!({ "view": view }))
    }

    fn emit(&mut self, value: serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.out, &value).context("failed to write output")?;
        self.out.write_all(b"\n").context("failed to write output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thrive_core::config::AppConfig;
    use thrive_core::page::parse_page;

    fn run_lines(page: &str, messages: Vec<Message>) -> Vec<serde_json::Value> {
        let page = parse_page(page).expect("page parses");
        let app = App::bootstrap(page, AppConfig::default());
        let mut runtime = Runtime::new(app, Vec::new());
        runtime.run(messages).expect("runtime succeeds");
        let out = String::from_utf8(runtime.into_inner()).expect("utf8 output");
        out.lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect()
    }

    const PAGE: &str = r##"
        [[section]]
        id = "home"
        offset = 0.0
        [[section]]
        id = "about"
        offset = 800.0
        [[nav_link]]
        href = "#home"
        [[nav_link]]
        href = "#about"
    "##;

    #[test]
    fn renders_initial_view_and_changes() {
        let lines = run_lines(
            PAGE,
            vec![
                Message::Scrolled { offset: 700.0 },
                Message::Scrolled { offset: 700.0 },
                Message::NavLinkClicked(0),
            ],
        );
        // initial, chrome+nav for the first scroll, nav for the click, scroll
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0]["view"]["active_section"], serde_json::Value::Null);
        assert_eq!(lines[2]["view"]["active_section"], "about");
        assert_eq!(lines[2]["view"]["nav_links"][1]["active"], true);
        assert_eq!(lines[3]["view"]["active_section"], "home");
        assert_eq!(lines[4]["scroll_into_view"], "home");
    }

    #[test]
    fn notifications_are_written_as_lines() {
        let lines = run_lines(PAGE, vec![Message::SearchSubmitted]);
        assert_eq!(lines[1]["notify"], "Please enter a search query");
    }
}
