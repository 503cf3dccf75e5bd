//! Error boundary around the app
//!
//! Handler errors and panics while handling input or rendering replace the
//! whole UI with a fallback view. Reloading rebuilds the app at the current
//! path with fresh state.

use crate::app::App;
use crate::config::PortfolioConfig;
use crate::state::Route;
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::Frame;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

type AppFactory = Box<dyn Fn(Route) -> App>;

pub struct Supervisor {
    app: App,
    build: AppFactory,
    /// Error text while the fallback view is shown
    failure: Option<String>,
    quit: bool,
}

impl Supervisor {
    pub fn new(build: impl Fn(Route) -> App + 'static, route: Route) -> Self {
        let app = build(route);
        Self {
            app,
            build: Box::new(build),
            failure: None,
            quit: false,
        }
    }

    pub fn from_config(config: PortfolioConfig, route: Route, show_splash: bool) -> Self {
        Self::new(
            move |route| App::new(&config, route, show_splash),
            route,
        )
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit || self.app.should_quit()
    }

    pub fn is_animating(&self) -> bool {
        self.failure.is_none() && self.app.is_animating()
    }

    pub fn set_terminal_size(&mut self, height: u16, width: u16) {
        self.app.terminal_size = Some((height, width));
    }

    /// Switch to the fallback view
    pub fn fail(&mut self, error: impl Into<String>) {
        let error = error.into();
        tracing::error!(error = %error, "Uncaught error");
        self.failure = Some(error);
    }

    /// Run a handler against the app. Errors and panics trip the boundary.
    pub fn guard(&mut self, handler: impl FnOnce(&mut App) -> Result<()>) {
        if self.failure.is_some() {
            return;
        }
        let app = &mut self.app;
        match panic::catch_unwind(AssertUnwindSafe(|| handler(app))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => self.fail(format!("{e:#}")),
            Err(payload) => self.fail(panic_message(payload.as_ref())),
        }
    }

    /// Rebuild the app at the current path with fresh state
    pub fn reload(&mut self) {
        let route = self.app.state.route.clone();
        tracing::info!(path = %route, "Reloading");
        self.app = (self.build)(route);
        self.failure = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.failure.is_some() {
            match key.code {
                KeyCode::Char('r') | KeyCode::Enter => self.reload(),
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                _ => {}
            }
            return;
        }
        self.guard(|app| app.handle_key(key));
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.guard(|app| app.handle_mouse(mouse));
    }

    /// Advance animations and collect delivery results
    pub fn tick(&mut self) {
        self.guard(|app| {
            if app.in_splash() {
                let height = app.terminal_size.map(|(h, _)| h).unwrap_or(24);
                app.update_splash(height);
            }
            app.tick()
        });
    }

    /// Draw the app, or the fallback view once something has gone wrong
    pub fn render(&mut self, frame: &mut Frame) {
        if let Some(error) = &self.failure {
            draw_fallback(frame, error);
            return;
        }

        let app = &self.app;
        let drawn = panic::catch_unwind(AssertUnwindSafe(|| ui::draw(frame, app)));
        if let Err(payload) = drawn {
            self.fail(panic_message(payload.as_ref()));
            if let Some(error) = &self.failure {
                draw_fallback(frame, error);
            }
        }
    }
}

/// The fallback view must not take the process down either
fn draw_fallback(frame: &mut Frame, error: &str) {
    let drawn = panic::catch_unwind(AssertUnwindSafe(|| ui::fallback::draw(frame, error)));
    if let Err(payload) = drawn {
        tracing::error!(error = %panic_message(payload.as_ref()), "Fallback view failed to render");
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with unknown payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::SubmissionPipeline;
    use crate::relay::MockMessageRelay;
    use crate::state::Section;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn supervisor_at(route: Route) -> Supervisor {
        Supervisor::new(
            |route| {
                let pipeline =
                    SubmissionPipeline::new(Arc::new(MockMessageRelay::new()), "Recipient");
                App::with_pipeline(pipeline, route, false)
            },
            route,
        )
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn screen_text(supervisor: &mut Supervisor, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        supervisor.set_terminal_size(height, width);
        terminal.draw(|frame| supervisor.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    mod boundary {
        use super::*;

        #[test]
        fn test_handler_error_shows_fallback() {
            let mut supervisor = supervisor_at(Route::default());
            supervisor.guard(|_| Err(anyhow::anyhow!("state went sideways")));
            assert_eq!(supervisor.failure(), Some("state went sideways"));
        }

        #[test]
        fn test_handler_panic_shows_fallback() {
            let mut supervisor = supervisor_at(Route::default());
            supervisor.guard(|_| panic!("kaboom"));
            assert_eq!(supervisor.failure(), Some("kaboom"));
        }

        #[test]
        fn test_input_is_ignored_while_failed() {
            let mut supervisor = supervisor_at(Route::default());
            supervisor.fail("broken");
            supervisor.handle_key(key('5'));
            assert_eq!(supervisor.app().state.route, Route::Home(None));
        }

        #[test]
        fn test_reload_rebuilds_at_current_path() {
            let mut supervisor = supervisor_at(Route::default());
            supervisor.handle_key(key('6'));
            supervisor.guard(|app| {
                app.state.contact_form.name.set_text("Jane".to_string());
                Err(anyhow::anyhow!("boom"))
            });

            supervisor.handle_key(key('r'));

            assert!(supervisor.failure().is_none());
            assert_eq!(
                supervisor.app().state.route,
                Route::Home(Some(Section::Contact))
            );
            assert_eq!(supervisor.app().state.contact_form.name.as_text(), "");
        }

        #[test]
        fn test_q_quits_from_fallback() {
            let mut supervisor = supervisor_at(Route::default());
            supervisor.fail("broken");
            supervisor.handle_key(key('q'));
            assert!(supervisor.should_quit());
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn test_renders_home() {
            let mut supervisor = supervisor_at(Route::default());
            let text = screen_text(&mut supervisor, 120, 30);
            assert!(text.contains("Sheikh Azwad Abrar"));
            assert!(text.contains("Works"));
            assert!(supervisor.failure().is_none());
        }

        #[test]
        fn test_renders_fallback() {
            let mut supervisor = supervisor_at(Route::default());
            supervisor.fail("render exploded");
            let text = screen_text(&mut supervisor, 100, 30);
            assert!(text.contains("Something went wrong"));
            assert!(text.contains("render exploded"));
        }

        #[test]
        fn test_renders_every_route() {
            let routes = [
                "/",
                "/#about",
                "/#skills",
                "/#projects",
                "/#services",
                "/#drives",
                "/#contact",
                "/works",
                "/works/freelance",
                "/works/academic",
                "/nope",
            ];
            for path in routes {
                let mut supervisor = supervisor_at(Route::parse(path));
                screen_text(&mut supervisor, 100, 32);
                assert!(supervisor.failure().is_none(), "{path}");
            }
        }

        #[test]
        fn test_every_route_survives_tiny_terminals() {
            let sizes = [(80, 1), (5, 10), (1, 1), (2, 1), (5, 1), (23, 9)];
            for path in ["/", "/#contact", "/works", "/works/academic", "/nope"] {
                for (width, height) in sizes {
                    let mut supervisor = supervisor_at(Route::parse(path));
                    screen_text(&mut supervisor, width, height);
                    assert!(
                        supervisor.failure().is_none(),
                        "{path} at {width}x{height}: {:?}",
                        supervisor.failure()
                    );
                }
            }
        }

        #[test]
        fn test_tiny_terminal_shows_size_notice() {
            let mut supervisor = supervisor_at(Route::default());
            let text = screen_text(&mut supervisor, 80, 1);
            assert!(text.starts_with("Terminal too small"));
        }

        #[test]
        fn test_fallback_survives_narrow_terminals() {
            for (width, height) in [(5, 10), (1, 1), (3, 1), (6, 4), (80, 1)] {
                let mut supervisor = supervisor_at(Route::default());
                supervisor.fail("render exploded");
                let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
                terminal
                    .draw(|frame| ui::fallback::draw(frame, "render exploded"))
                    .unwrap();
                screen_text(&mut supervisor, width, height);
            }
        }

        #[test]
        fn test_renders_in_small_terminal() {
            let mut supervisor = supervisor_at(Route::parse("/#contact"));
            screen_text(&mut supervisor, 40, 12);
            assert!(supervisor.failure().is_none());
        }

        #[test]
        fn test_not_found_shows_path() {
            let mut supervisor = supervisor_at(Route::parse("/lost"));
            let text = screen_text(&mut supervisor, 100, 32);
            assert!(text.contains("404"));
            assert!(text.contains("Path: /lost"));
            assert!(text.contains("Return Home"));
        }

        #[test]
        fn test_contact_form_shows_field_errors() {
            let mut supervisor = supervisor_at(Route::parse("/#contact"));
            supervisor.handle_key(key('i'));
            supervisor.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            let text = screen_text(&mut supervisor, 140, 40);
            assert!(text.contains("Name is required"));
            assert!(text.contains("Invalid email address"));
        }
    }
}
