/// Events the page can deliver to the interaction layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PageLoaded { load_ms: u64 },
    Scrolled { offset: f64 },
    LayoutChanged { offsets: Vec<(String, f64)> },
    NavLinkClicked(usize),
    AnchorClicked { href: String },
    ToggleMobileMenu,
    SearchQueryChanged(String),
    LocationChanged(String),
    SearchKeyPressed { key: String },
    SearchSubmitted,
    PopularTagClicked(usize),
    CategoryClicked(usize),
    ResourceMoreInfoClicked(usize),
    ResourceWebsiteClicked(usize),
    CtaClicked,
    ViewAllClicked,
    BottomNavClicked(usize),
    LanguageClicked,
    ScriptError { message: String },
}
