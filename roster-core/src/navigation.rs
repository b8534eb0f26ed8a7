//! Transient navigation UI flags

/// Navigation state: mobile menu, active section, scroll progress
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub is_mobile_menu_open: bool,
    pub active_section: Option<String>,
    /// Percentage supplied by the caller. Not clamped here.
    pub scroll_progress: f64,
}

impl NavigationState {
    pub fn toggle_mobile_menu(&mut self) {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.is_mobile_menu_open = false;
    }

    pub fn set_active_section(&mut self, section: Option<String>) {
        self.active_section = section;
    }

    /// Whether `section` is the one currently shown
    pub fn is_active(&self, section: &str) -> bool {
        self.active_section.as_deref() == Some(section)
    }

    /// A page for `section` was entered: mark it active and fold the menu.
    pub fn enter_section(&mut self, section: Option<&str>) {
        self.set_active_section(section.map(str::to_string));
        self.close_mobile_menu();
    }

    pub fn set_scroll_progress(&mut self, progress: f64) {
        self.scroll_progress = progress;
    }
}

/// Scroll position as a 0-100 percentage for the layout's scroll listener.
///
/// Returns 0 when the content does not overflow the viewport.
pub fn scroll_percentage(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut nav = NavigationState::default();
        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open);
        nav.toggle_mobile_menu();
        assert!(!nav.is_mobile_menu_open);

        nav.toggle_mobile_menu();
        nav.close_mobile_menu();
        nav.close_mobile_menu();
        assert!(!nav.is_mobile_menu_open);
    }

    #[test]
    fn test_active_section() {
        let mut nav = NavigationState::default();
        nav.set_active_section(Some("artists".to_string()));
        assert_eq!(nav.active_section.as_deref(), Some("artists"));
        nav.set_active_section(None);
        assert_eq!(nav.active_section, None);
    }

    #[test]
    fn test_enter_section_follows_every_page_change() {
        let mut nav = NavigationState::default();
        nav.toggle_mobile_menu();
        nav.enter_section(Some("artists"));
        assert!(nav.is_active("artists"));
        assert!(!nav.is_mobile_menu_open);

        // Card click into a release page, then the not-found page
        nav.enter_section(Some("releases"));
        assert!(nav.is_active("releases"));
        assert!(!nav.is_active("artists"));
        nav.enter_section(None);
        assert_eq!(nav.active_section, None);
    }

    #[test]
    fn test_scroll_progress_is_verbatim() {
        let mut nav = NavigationState::default();
        nav.set_scroll_progress(150.0);
        assert_eq!(nav.scroll_progress, 150.0);
        nav.set_scroll_progress(-5.0);
        assert_eq!(nav.scroll_progress, -5.0);
    }

    #[test]
    fn test_scroll_percentage() {
        assert_eq!(scroll_percentage(0.0, 500.0, 500.0), 0.0);
        assert_eq!(scroll_percentage(250.0, 1500.0, 1000.0), 50.0);
        assert_eq!(scroll_percentage(900.0, 1500.0, 1000.0), 100.0);
    }
}
