//! Application state definitions

use super::forms::ContactForm;
use super::route::{Route, Section};
use super::scroll::ScrollState;
use super::splash_state::SplashState;
use super::toast::{Toast, Toasts};
use std::collections::{HashMap, VecDeque};

/// Routes remembered for going back
const HISTORY_LIMIT: usize = 50;

/// Which part of the screen receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Normal browsing: scrolling, navigation shortcuts
    #[default]
    Page,
    /// Typing into the contact form
    ContactForm,
    /// Typing a path into the address prompt
    PathPrompt,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current location
    pub route: Route,
    /// Previously visited routes, most recent last
    history: VecDeque<Route>,
    /// Scroll position per page (and per home section)
    scroll: HashMap<String, ScrollState>,
    pub focus: Focus,
    pub contact_form: ContactForm,
    /// Selected entry in the contact channel list
    pub selected_channel: usize,
    /// Selected card or button on the current page
    pub selected_option: usize,
    pub toasts: Toasts,
    /// Text typed into the address prompt
    pub prompt_input: String,
    /// Intro animation, while it is running
    pub splash: Option<SplashState>,
}

impl AppState {
    pub fn new(route: Route, show_splash: bool) -> Self {
        Self {
            route,
            splash: show_splash.then(SplashState::new),
            ..Default::default()
        }
    }

    /// The home section in view. Hero on other routes.
    pub fn current_section(&self) -> Section {
        match self.route {
            Route::Home(Some(section)) => section,
            _ => Section::Hero,
        }
    }

    /// Move to a new route, remembering the current one
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        if let Route::NotFound(path) = &route {
            tracing::warn!(path = %path, "404 Error: User attempted to access non-existent route");
        }
        tracing::debug!(from = %self.route, to = %route, "Navigating");

        let previous = std::mem::replace(&mut self.route, route);
        self.history.push_back(previous);
        if self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.focus = Focus::Page;
        self.selected_option = 0;
    }

    /// Resolve a typed path and navigate to it
    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::parse(path));
    }

    /// Return to the previous route. Falls back to home with no history.
    pub fn go_back(&mut self) {
        self.route = self.history.pop_back().unwrap_or_default();
        self.focus = Focus::Page;
        self.selected_option = 0;
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Show a home section, navigating home first if needed
    pub fn jump_to_section(&mut self, section: Section) {
        let target = Route::Home(Some(section));
        if self.route.is_home() {
            // Moving between sections on the same page is not a new history entry
            self.route = target;
            self.focus = Focus::Page;
        } else {
            self.navigate(target);
        }
    }

    /// Key under which the current scroll position is stored
    fn scroll_key(&self) -> String {
        match &self.route {
            Route::Home(_) => format!("/#{}", self.current_section().anchor()),
            other => other.path(),
        }
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
            .get(&self.scroll_key())
            .copied()
            .unwrap_or_default()
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        let key = self.scroll_key();
        self.scroll.entry(key).or_default()
    }

    /// Advance animations that depend on wall-clock time
    pub fn tick(&mut self) {
        for scroll in self.scroll.values_mut() {
            scroll.tick();
        }
        self.toasts.expire(std::time::Instant::now());
    }

    pub fn is_animating(&self) -> bool {
        self.splash.is_some() || self.scroll.values().any(ScrollState::is_animating)
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn open_prompt(&mut self) {
        self.prompt_input.clear();
        self.focus = Focus::PathPrompt;
    }

    /// Submit the address prompt
    pub fn submit_prompt(&mut self) {
        let path = std::mem::take(&mut self.prompt_input);
        self.focus = Focus::Page;
        if !path.trim().is_empty() {
            self.navigate_path(&path);
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt_input.clear();
        self.focus = Focus::Page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WorksCategory;

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_history_keeps_most_recent_routes() {
            let mut state = AppState::new(Route::default(), false);
            for i in 0..HISTORY_LIMIT + 10 {
                state.navigate_path(&format!("/missing-{i}"));
            }
            assert_eq!(state.history.len(), HISTORY_LIMIT);

            state.go_back();
            assert_eq!(
                state.route,
                Route::NotFound(format!("/missing-{}", HISTORY_LIMIT + 8))
            );
        }

        #[test]
        fn test_new_starts_at_route() {
            let state = AppState::new(Route::Works, false);
            assert_eq!(state.route, Route::Works);
            assert!(state.splash.is_none());
            assert!(!state.can_go_back());
        }

        #[test]
        fn test_navigate_and_go_back() {
            let mut state = AppState::new(Route::default(), false);
            state.navigate(Route::Works);
            state.navigate(Route::WorksList(WorksCategory::Freelance));

            state.go_back();
            assert_eq!(state.route, Route::Works);
            state.go_back();
            assert_eq!(state.route, Route::Home(None));
        }

        #[test]
        fn test_go_back_without_history_goes_home() {
            let mut state = AppState::new(Route::NotFound("/x".to_string()), false);
            state.go_back();
            assert_eq!(state.route, Route::Home(None));
        }

        #[test]
        fn test_navigate_to_same_route_is_ignored() {
            let mut state = AppState::new(Route::Works, false);
            state.navigate(Route::Works);
            assert!(!state.can_go_back());
        }

        #[test]
        fn test_navigate_path_unknown_is_not_found() {
            let mut state = AppState::new(Route::default(), false);
            state.navigate_path("/does-not-exist");
            assert_eq!(
                state.route,
                Route::NotFound("/does-not-exist".to_string())
            );
        }

        #[test]
        fn test_navigate_leaves_form_focus() {
            let mut state = AppState::new(Route::Home(Some(Section::Contact)), false);
            state.focus = Focus::ContactForm;
            state.navigate(Route::Works);
            assert_eq!(state.focus, Focus::Page);
        }
    }

    mod sections {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_jump_on_home_does_not_grow_history() {
            let mut state = AppState::new(Route::default(), false);
            state.jump_to_section(Section::Skills);
            assert_eq!(state.current_section(), Section::Skills);
            assert!(!state.can_go_back());
        }

        #[test]
        fn test_jump_from_other_route_goes_home() {
            let mut state = AppState::new(Route::Works, false);
            state.jump_to_section(Section::Contact);
            assert_eq!(state.route, Route::Home(Some(Section::Contact)));
            state.go_back();
            assert_eq!(state.route, Route::Works);
        }

        #[test]
        fn test_current_section_defaults_to_hero() {
            let state = AppState::new(Route::Works, false);
            assert_eq!(state.current_section(), Section::Hero);
        }
    }

    mod scrolling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_each_section_scrolls_independently() {
            let mut state = AppState::new(Route::default(), false);
            state.jump_to_section(Section::About);
            state.scroll_mut().scroll_by(5, 100);
            state.jump_to_section(Section::Skills);
            assert_eq!(state.scroll().offset, 0);
            state.jump_to_section(Section::About);
            assert_eq!(state.scroll().offset, 5);
        }

        #[test]
        fn test_routes_scroll_independently() {
            let mut state = AppState::new(Route::Works, false);
            state.scroll_mut().scroll_by(3, 10);
            state.navigate(Route::WorksList(WorksCategory::Academic));
            assert_eq!(state.scroll().offset, 0);
        }
    }

    mod prompt {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_prompt_navigates() {
            let mut state = AppState::new(Route::default(), false);
            state.open_prompt();
            assert_eq!(state.focus, Focus::PathPrompt);
            state.prompt_input.push_str("/works/academic");
            state.submit_prompt();
            assert_eq!(state.route, Route::WorksList(WorksCategory::Academic));
            assert_eq!(state.focus, Focus::Page);
            assert!(state.prompt_input.is_empty());
        }

        #[test]
        fn test_empty_prompt_stays_put() {
            let mut state = AppState::new(Route::Works, false);
            state.open_prompt();
            state.submit_prompt();
            assert_eq!(state.route, Route::Works);
        }

        #[test]
        fn test_cancel_prompt() {
            let mut state = AppState::new(Route::default(), false);
            state.open_prompt();
            state.prompt_input.push_str("/works");
            state.cancel_prompt();
            assert_eq!(state.route, Route::Home(None));
            assert_eq!(state.focus, Focus::Page);
        }
    }
}
