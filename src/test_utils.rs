#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::records::{Frame, Site};
    use crate::suggestions::Aggregator;
    use crate::urlbar::UrlBarSuggestions;
    use crate::window::WindowState;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub const TEST_SEARCH_URL: &str = "https://search.example/?q={searchTerms}";
    pub const TEST_TOP_SITES: &[&str] = &["rustup.rs", "github.com", "example.org"];

    /// Two tabs and a couple of site records; tab 1 is active
    pub fn test_window() -> WindowState {
        WindowState::new(
            vec![
                Frame::new(1, "Home", "https://home.example"),
                Frame::new(2, "Rust Book", "https://doc.rust-lang.org/book/"),
            ],
            Some(1),
            vec![
                Site::bookmark("Rust Language", "https://www.rust-lang.org"),
                Site::history("Rust Blog", "https://blog.rust-lang.org"),
            ],
        )
    }

    /// Controller with remote search off and a small top-sites list
    pub fn test_controller() -> UrlBarSuggestions {
        let mut config = Config::default();
        config.suggestions.search = false;
        config.search.search_url = TEST_SEARCH_URL.to_string();

        let aggregator = Aggregator::new(config.suggestions.clone(), TEST_SEARCH_URL)
            .with_top_sites(TEST_TOP_SITES);
        UrlBarSuggestions::new(&config).with_aggregator(aggregator)
    }

    pub fn test_app() -> App {
        App::new(test_window(), test_controller())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` one key at a time
    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }
}
