use crate::config::AppConfig;
use crate::page::PageManifest;
use crate::scrollspy::ScrollSpyNavigator;
use crate::view::{BottomNavView, NavLinkView, PageView};
use tracing::info;

pub(in crate::app) struct ChromeState {
    pub(in crate::app) navbar_scrolled: bool,
    pub(in crate::app) mobile_nav_open: bool,
    pub(in crate::app) bottom_nav_active: Option<usize>,
}

pub(in crate::app) struct SearchState {
    pub(in crate::app) query: String,
    pub(in crate::app) location: String,
}

/// Page state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) page: PageManifest,
    pub(super) navigator: ScrollSpyNavigator,
    pub(super) chrome: ChromeState,
    pub(super) search: SearchState,
}

impl App {
    /// Build the page state from the manifest resolved at startup.
    pub fn bootstrap(page: PageManifest, config: AppConfig) -> Self {
        let navigator = ScrollSpyNavigator::new(
            page.sections.clone(),
            page.nav_links(),
            config.scroll_threshold_px,
        );
        info!(
            site = %config.site_name,
            sections = navigator.sections().len(),
            nav_links = navigator.links().len(),
            threshold = config.scroll_threshold_px,
            "Navigation initialized"
        );
        let chrome = ChromeState {
            navbar_scrolled: false,
            mobile_nav_open: false,
            bottom_nav_active: if page.bottom_nav.is_empty() {
                None
            } else {
                Some(0)
            },
        };
        let location = if page.locations.is_empty()
            || page.locations.contains(&config.default_location)
        {
            config.default_location.clone()
        } else {
            page.locations[0].clone()
        };
        let search = SearchState {
            query: String::new(),
            location,
        };
        App {
            config,
            page,
            navigator,
            chrome,
            search,
        }
    }

    pub fn active_section(&self) -> Option<&str> {
        self.navigator.active()
    }

    pub fn view(&self) -> PageView {
        PageView {
            active_section: self.navigator.active().map(str::to_owned),
            nav_links: self
                .navigator
                .links()
                .iter()
                .map(|link| NavLinkView {
                    href: link.href.clone(),
                    group: link.group,
                    active: link.is_active(),
                })
                .collect(),
            navbar_scrolled: self.chrome.navbar_scrolled,
            mobile_nav_open: self.chrome.mobile_nav_open,
            bottom_nav: self
                .page
                .bottom_nav
                .iter()
                .enumerate()
                .map(|(idx, entry)| BottomNavView {
                    label: entry.label.clone(),
                    active: self.chrome.bottom_nav_active == Some(idx),
                })
                .collect(),
            search_query: self.search.query.clone(),
            search_location: self.search.location.clone(),
        }
    }
}
