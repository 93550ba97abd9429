use super::super::state::App;
use super::Effect;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_search_query_changed(&mut self, query: String) {
        self.search.query = query;
    }

    /// Only locations offered by the page's selector are accepted; a page
    /// without a location list accepts any value.
    pub(super) fn handle_location_changed(&mut self, location: String) {
        if !self.page.locations.is_empty() && !self.page.locations.contains(&location) {
            debug!(%location, "Ignoring unknown search location");
            return;
        }
        self.search.location = location;
    }

    pub(super) fn handle_search_submitted(&mut self, effects: &mut Vec<Effect>) {
        let query = self.search.query.trim();
        if query.is_empty() {
            effects.push(Effect::Notify(self.config.empty_query_message.clone()));
            return;
        }
        let location = &self.search.location;
        info!(%query, %location, "Searching");
        effects.push(Effect::Notify(format!(
            "Searching for \"{query}\" in {location}..."
        )));
    }

    pub(super) fn handle_popular_tag_clicked(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        let Some(tag) = self.page.popular_tags.get(idx) else {
            debug!(idx, "Ignoring click on unknown popular tag");
            return;
        };
        self.search.query = tag.clone();
        self.handle_search_submitted(effects);
    }
}
