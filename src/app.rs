//! Application state and core logic

use crate::config::PortfolioConfig;
use crate::contact::{validate, SubmissionOutcome, SubmissionPipeline};
use crate::content::{ContactChannel, WorksCategory, CONTACT_CHANNELS};
use crate::relay::EmailJsRelay;
use crate::state::{
    AppState, ContactForm, Focus, Form, NavTarget, Route, Section, Toast, NAV_ITEMS,
};
use crate::ui::{self, HitTarget};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub const SUCCESS_TITLE: &str = "Message sent successfully!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for reaching out. I'll get back to you soon.";
pub const FAILURE_TITLE: &str = "Failed to send message";
pub const FAILURE_DESCRIPTION: &str = "Please try again later or contact me directly via email.";

/// Lines moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Validates and delivers contact messages
    pipeline: SubmissionPipeline,
    /// Delivery tasks report back through this channel
    outcome_tx: UnboundedSender<SubmissionOutcome>,
    outcome_rx: UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create the app from configuration
    pub fn new(config: &PortfolioConfig, route: Route, show_splash: bool) -> Self {
        let relay = EmailJsRelay::new(config.relay.clone());
        let pipeline = SubmissionPipeline::new(Arc::new(relay), config.recipient_name());
        Self::with_pipeline(pipeline, route, show_splash)
    }

    /// Create the app around an existing pipeline
    pub fn with_pipeline(pipeline: SubmissionPipeline, route: Route, show_splash: bool) -> Self {
        if let Route::NotFound(path) = &route {
            tracing::warn!(path = %path, "404 Error: User attempted to access non-existent route");
        }
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::new(route, show_splash),
            pipeline,
            outcome_tx,
            outcome_rx,
            quit: false,
            terminal_size: None,
        }
    }

    /// Update splash animation state.
    /// Returns true once the animation has finished.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.state.splash {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.state.splash = None;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        self.state.splash.is_some()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the next frame should come sooner than usual
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Per-frame housekeeping: animations, toast expiry, delivery results
    pub fn tick(&mut self) -> Result<()> {
        self.state.tick();
        self.poll_submissions();
        Ok(())
    }

    fn screen(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Apply every delivery result that has arrived
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        self.state.contact_form.finish(&outcome);
        match outcome {
            SubmissionOutcome::Success => {
                self.state.push_toast(
                    Toast::success(SUCCESS_TITLE).with_description(SUCCESS_DESCRIPTION),
                );
            }
            SubmissionOutcome::DeliveryFailed { .. } => {
                self.state
                    .push_toast(Toast::destructive(FAILURE_TITLE, FAILURE_DESCRIPTION));
            }
            // Shown inline next to each field
            SubmissionOutcome::ValidationFailed(_) => {}
        }
    }

    /// Validate the contact form and, if valid, start delivery in the background.
    ///
    /// Ignored while an earlier delivery is outstanding.
    pub fn submit_contact(&mut self) {
        let Some(values) = self.state.contact_form.begin_submit() else {
            tracing::debug!("Submission already in flight, ignoring");
            return;
        };

        // Field errors show up immediately; only delivery goes to the background
        if let Err(errors) = validate(&values) {
            tracing::debug!(fields = %errors, "Contact form failed validation");
            self.apply_outcome(SubmissionOutcome::ValidationFailed(errors));
            return;
        }

        let pipeline = self.pipeline.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = pipeline.submit(&values).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("App closed before delivery finished");
            }
        });
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(splash) = self.state.splash.as_mut() {
            splash.skip();
            return Ok(());
        }

        match self.state.focus {
            Focus::PathPrompt => self.handle_prompt_key(key),
            Focus::ContactForm => self.handle_contact_form_key(key),
            Focus::Page => self.handle_page_key(key),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.state.submit_prompt(),
            KeyCode::Esc => self.state.cancel_prompt(),
            KeyCode::Backspace => {
                self.state.prompt_input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.prompt_input.push(c);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_contact_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = &mut self.state.contact_form;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.submit_contact();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.state.focus = Focus::Page,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => match form.active_contact_field() {
                None => self.submit_contact(),
                Some(field) if field.is_multiline() => form.edit_active(|f| f.push_newline()),
                Some(_) => form.next_field(),
            },
            KeyCode::Backspace => form.edit_active(|f| f.pop_char()),
            KeyCode::Char(c) => form.edit_active(|f| f.push_char(c)),
            _ => {}
        }
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char(':') => {
                self.state.open_prompt();
                return Ok(());
            }
            KeyCode::Char('x') if !self.state.toasts.is_empty() => {
                self.state.toasts.dismiss_all();
                return Ok(());
            }
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.activate_nav(idx);
                return Ok(());
            }
            _ => {}
        }

        match self.state.route.clone() {
            Route::Home(_) => self.handle_home_key(key),
            Route::Works => self.handle_works_key(key),
            Route::WorksList(_) => self.handle_works_list_key(key),
            Route::NotFound(_) => self.handle_not_found_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        let section = self.state.current_section();

        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.state.jump_to_section(section.next());
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.state.jump_to_section(section.prev());
            }
            KeyCode::Down | KeyCode::Char('j') if section == Section::Contact => {
                self.state.selected_channel =
                    (self.state.selected_channel + 1) % CONTACT_CHANNELS.len();
            }
            KeyCode::Up | KeyCode::Char('k') if section == Section::Contact => {
                self.state.selected_channel = self
                    .state
                    .selected_channel
                    .checked_sub(1)
                    .unwrap_or(CONTACT_CHANNELS.len() - 1);
            }
            KeyCode::Char('y') if section == Section::Contact => {
                if let Some(channel) = CONTACT_CHANNELS.get(self.state.selected_channel) {
                    self.copy_channel(channel);
                }
            }
            KeyCode::Char('i') | KeyCode::Enter if section == Section::Contact => {
                self.state.focus = Focus::ContactForm;
            }
            KeyCode::Enter if section == Section::Projects => {
                self.state.navigate(Route::Works);
            }
            _ => self.handle_scroll_key(key),
        }
        Ok(())
    }

    fn handle_works_key(&mut self, key: KeyEvent) -> Result<()> {
        let count = WorksCategory::ALL.len();
        match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l' | 'j') => {
                self.state.selected_option = (self.state.selected_option + 1) % count;
            }
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h' | 'k') => {
                self.state.selected_option = (self.state.selected_option + count - 1) % count;
            }
            KeyCode::Enter => self.open_works_card(self.state.selected_option),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.state.navigate(Route::Home(None));
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_works_list_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.state.navigate(Route::Works);
            }
            _ => self.handle_scroll_key(key),
        }
        Ok(())
    }

    fn handle_not_found_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Right | KeyCode::Left | KeyCode::Tab | KeyCode::Char('h' | 'l') => {
                self.state.selected_option = 1 - self.state.selected_option.min(1);
            }
            KeyCode::Enter => self.activate_not_found_action(self.state.selected_option),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.state.go_back(),
            _ => {}
        }
        Ok(())
    }

    /// Scrolling shared by every scrollable page
    fn handle_scroll_key(&mut self, key: KeyEvent) {
        let page = self.screen().height.saturating_sub(8).max(1) as i32;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char('d') => self.scroll_by(page),
            KeyCode::PageUp | KeyCode::Char('u') => self.scroll_by(-page),
            KeyCode::Home | KeyCode::Char('g') => self.state.scroll_mut().scroll_to_top(),
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = ui::scroll_limit(self, self.screen());
        self.state.scroll_mut().scroll_by(delta, max);
    }

    /// Follow a navigation bar item
    pub fn activate_nav(&mut self, idx: usize) {
        let Some(item) = NAV_ITEMS.get(idx) else {
            return;
        };
        match item.target {
            NavTarget::Section(section) => self.state.jump_to_section(section),
            NavTarget::Route(path) => self.state.navigate_path(path),
        }
    }

    fn open_works_card(&mut self, idx: usize) {
        if let Some(category) = WorksCategory::ALL.get(idx) {
            self.state.navigate(Route::WorksList(*category));
        }
    }

    fn activate_not_found_action(&mut self, idx: usize) {
        match idx {
            0 => self.state.navigate(Route::Home(None)),
            _ => self.state.go_back(),
        }
    }

    /// Copy a contact channel's value, reporting the result as a toast
    fn copy_channel(&mut self, channel: &ContactChannel) {
        match self.copy_to_clipboard(channel.value) {
            Ok(()) => {
                self.state
                    .push_toast(Toast::success(format!("Copied {}", channel.label)));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard unavailable");
                self.state
                    .push_toast(Toast::destructive("Copy failed", e.to_string()));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.in_splash() {
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                match ui::hit_test(self, self.screen(), mouse.column, mouse.row) {
                    Some(HitTarget::Nav(idx)) => self.activate_nav(idx),
                    Some(HitTarget::WorksCard(idx)) => self.open_works_card(idx),
                    Some(HitTarget::NotFoundAction(idx)) => self.activate_not_found_action(idx),
                    Some(HitTarget::ContactRow(idx)) => {
                        self.state.focus = Focus::ContactForm;
                        self.state.contact_form.set_active_field(idx);
                        if idx == ContactForm::SUBMIT_ROW {
                            self.submit_contact();
                        }
                    }
                    None => {}
                }
            }
            _ => {}
        }
        Ok(())
    }
}
