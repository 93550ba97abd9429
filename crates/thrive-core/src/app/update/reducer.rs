use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use tracing::{error, info};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::PageLoaded { load_ms } => self.handle_page_loaded(load_ms, &mut effects),
            Message::Scrolled { offset } => self.handle_scrolled(offset, &mut effects),
            Message::LayoutChanged { offsets } => {
                self.handle_layout_changed(&offsets, &mut effects);
            }
            Message::NavLinkClicked(idx) => self.handle_nav_link_clicked(idx, &mut effects),
            Message::AnchorClicked { href } => self.handle_anchor_clicked(&href, &mut effects),
            Message::ToggleMobileMenu => self.handle_toggle_mobile_menu(&mut effects),
            Message::SearchQueryChanged(query) => self.handle_search_query_changed(query),
            Message::LocationChanged(location) => self.handle_location_changed(location),
            Message::SearchKeyPressed { key } => {
                if key == "Enter" {
                    self.handle_search_submitted(&mut effects);
                }
            }
            Message::SearchSubmitted => self.handle_search_submitted(&mut effects),
            Message::PopularTagClicked(idx) => self.handle_popular_tag_clicked(idx, &mut effects),
            Message::CategoryClicked(idx) => self.handle_category_clicked(idx, &mut effects),
            Message::ResourceMoreInfoClicked(idx) => {
                self.handle_resource_more_info(idx, &mut effects);
            }
            Message::ResourceWebsiteClicked(idx) => {
                self.handle_resource_website(idx, &mut effects);
            }
            Message::CtaClicked => self.handle_cta_clicked(&mut effects),
            Message::ViewAllClicked => self.handle_view_all_clicked(&mut effects),
            Message::BottomNavClicked(idx) => self.handle_bottom_nav_clicked(idx, &mut effects),
            Message::LanguageClicked => {
                effects.push(Effect::Notify(self.config.language_notice()));
            }
            Message::ScriptError { message } => error!(%message, "Global error"),
        }

        effects
    }

    fn handle_page_loaded(&self, load_ms: u64, effects: &mut Vec<Effect>) {
        info!(site = %self.config.site_name, "Platform loaded");
        info!(load_ms, "Page load time");
        effects.push(Effect::LogPageView(self.config.site_name.clone()));
    }
}
