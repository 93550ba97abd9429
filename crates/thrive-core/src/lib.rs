//! Interaction core for the Thrive Island County resource directory.
//!
//! - `scrollspy`: keeps the nav menus highlighting the section in view.
//! - `app`: the page reducer that turns page events into effects.
//! - `page`: the manifest describing sections, links and cards.
//! - `view`: serializable projection handed to the presentation layer.

pub mod app;
pub mod config;
pub mod format;
pub mod page;
pub mod scrollspy;
pub mod view;
