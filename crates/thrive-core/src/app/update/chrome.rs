use super::super::state::App;
use super::Effect;
use tracing::debug;

impl App {
    pub(super) fn handle_toggle_mobile_menu(&mut self, effects: &mut Vec<Effect>) {
        self.chrome.mobile_nav_open = !self.chrome.mobile_nav_open;
        debug!(open = self.chrome.mobile_nav_open, "Mobile menu toggled");
        effects.push(Effect::RenderChrome);
    }

    pub(super) fn handle_bottom_nav_clicked(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        if idx >= self.page.bottom_nav.len() {
            debug!(idx, "Ignoring click on unknown bottom nav item");
            return;
        }
        if self.chrome.bottom_nav_active != Some(idx) {
            self.chrome.bottom_nav_active = Some(idx);
            effects.push(Effect::RenderChrome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::test_support::build_test_app;
    use super::*;

    fn active_bottom_labels(app: &App) -> Vec<String> {
        app.view()
            .bottom_nav
            .into_iter()
            .filter(|item| item.active)
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn mobile_menu_toggles() {
        let mut app = build_test_app();
        assert!(!app.view().mobile_nav_open);
        assert_eq!(app.update(Message::ToggleMobileMenu), vec![Effect::RenderChrome]);
        assert!(app.view().mobile_nav_open);
        app.update(Message::ToggleMobileMenu);
        assert!(!app.view().mobile_nav_open);
    }

    #[test]
    fn bottom_nav_keeps_a_single_active_item() {
        let mut app = build_test_app();
        assert_eq!(active_bottom_labels(&app), vec!["Home"]);

        assert_eq!(app.update(Message::BottomNavClicked(2)), vec![Effect::RenderChrome]);
        assert_eq!(active_bottom_labels(&app), vec!["Saved"]);

        assert!(app.update(Message::BottomNavClicked(2)).is_empty());
        assert!(app.update(Message::BottomNavClicked(7)).is_empty());
        assert_eq!(active_bottom_labels(&app), vec!["Saved"]);
    }
}
