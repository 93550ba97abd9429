use super::super::state::App;
use super::Effect;
use tracing::debug;

impl App {
    pub(super) fn handle_scrolled(&mut self, offset: f64, effects: &mut Vec<Effect>) {
        let scrolled = offset > self.config.navbar_scrolled_after_px;
        if scrolled != self.chrome.navbar_scrolled {
            self.chrome.navbar_scrolled = scrolled;
            effects.push(Effect::RenderChrome);
        }
        if self.navigator.on_scroll(offset) {
            effects.push(Effect::RenderNav);
        }
    }

    pub(super) fn handle_layout_changed(
        &mut self,
        offsets: &[(String, f64)],
        effects: &mut Vec<Effect>,
    ) {
        debug!(updated = offsets.len(), "Layout changed");
        if self.navigator.relayout(offsets) {
            effects.push(Effect::RenderNav);
        }
    }

    pub(super) fn handle_nav_link_clicked(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        let Some(link) = self.navigator.links().get(idx) else {
            debug!(idx, "Ignoring click on unknown nav link");
            return;
        };
        let href = link.href.clone();
        let target = link.target().map(str::to_owned);

        if self.chrome.mobile_nav_open {
            self.chrome.mobile_nav_open = false;
            effects.push(Effect::RenderChrome);
        }
        match target {
            Some(target) => {
                if self.navigator.on_click(&target) {
                    effects.push(Effect::RenderNav);
                }
            }
            None => debug!(%href, "Nav link is not an in-page anchor"),
        }
        self.handle_anchor_clicked(&href, effects);
    }

    /// Smooth-scroll to an in-page anchor when it names a known section.
    pub(super) fn handle_anchor_clicked(&mut self, href: &str, effects: &mut Vec<Effect>) {
        let Some(id) = href.strip_prefix('#') else {
            debug!(%href, "Anchor is not an in-page reference");
            return;
        };
        if self.navigator.has_section(id) {
            effects.push(Effect::ScrollIntoView {
                id: id.to_owned(),
                smooth: self.config.smooth_scroll,
            });
        } else {
            debug!(%id, "Anchor target not found");
        }
    }
}
