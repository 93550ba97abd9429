mod cards;
mod chrome;
mod navigation;
mod reducer;
mod search;

use super::messages::Message;
use super::state::App;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show a message to the visitor.
    Notify(String),
    ScrollIntoView { id: String, smooth: bool },
    /// Nav link active flags changed.
    RenderNav,
    /// Navbar, mobile menu or bottom navigation changed.
    RenderChrome,
    LogPageView(String),
}

impl App {
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        self.reduce(message)
    }
}
