use super::super::state::App;
use super::Effect;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_category_clicked(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        let Some(card) = self.page.categories.get(idx) else {
            debug!(idx, "Ignoring click on unknown category card");
            return;
        };
        info!(category = %card.slug, "Category clicked");
        effects.push(Effect::Notify(format!("Viewing {} resources...", card.title)));
    }

    pub(super) fn handle_resource_more_info(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        match self.page.resources.get(idx) {
            Some(card) if card.more_info => {
                let mut message = format!("More information about {}", card.name);
                if let Some(phone) = &card.phone {
                    message.push_str(&format!(". Phone: {phone}"));
                }
                if let Some(email) = &card.email {
                    message.push_str(&format!(". Email: {email}"));
                }
                effects.push(Effect::Notify(message));
            }
            _ => debug!(idx, "Resource card has no more-info button"),
        }
    }

    pub(super) fn handle_resource_website(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        match self.page.resources.get(idx) {
            Some(card) if card.website => {
                effects.push(Effect::Notify("Visiting website...".to_string()));
            }
            _ => debug!(idx, "Resource card has no website button"),
        }
    }

    pub(super) fn handle_cta_clicked(&mut self, effects: &mut Vec<Effect>) {
        if self.page.cta {
            effects.push(Effect::Notify(format!(
                "Getting started with {}...",
                self.config.site_name
            )));
        }
    }

    pub(super) fn handle_view_all_clicked(&mut self, effects: &mut Vec<Effect>) {
        if self.page.view_all {
            effects.push(Effect::Notify("Viewing all categories...".to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::test_support::build_test_app;
    use super::*;

    #[test]
    fn category_click_names_the_card() {
        let mut app = build_test_app();
        assert_eq!(
            app.update(Message::CategoryClicked(0)),
            vec![Effect::Notify(
                "Viewing Food Assistance resources...".to_string()
            )]
        );
        assert!(app.update(Message::CategoryClicked(3)).is_empty());
    }

    #[test]
    fn resource_buttons_respect_card_layout() {
        let mut app = build_test_app();
        assert_eq!(
            app.update(Message::ResourceMoreInfoClicked(0)),
            vec![Effect::Notify(
                "More information about Island Food Bank".to_string()
            )]
        );
        assert_eq!(
            app.update(Message::ResourceWebsiteClicked(0)),
            vec![Effect::Notify("Visiting website...".to_string())]
        );
        assert!(app.update(Message::ResourceMoreInfoClicked(1)).is_empty());
        assert_eq!(
            app.update(Message::ResourceMoreInfoClicked(2)),
            vec![Effect::Notify(
                "More information about Island Clinic. Phone: (360) 555-0117".to_string()
            )]
        );
        assert!(app.update(Message::ResourceWebsiteClicked(1)).is_empty());
    }

    #[test]
    fn optional_buttons_only_fire_when_present() {
        let mut app = build_test_app();
        assert_eq!(
            app.update(Message::CtaClicked),
            vec![Effect::Notify(
                "Getting started with Thrive Island County...".to_string()
            )]
        );
        assert!(app.update(Message::ViewAllClicked).is_empty());
    }
}
