//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Name held in the middle of the screen
    Display,
    /// Name animating upward
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Intro animation showing the owner's name
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    /// How long the name is held before it scrolls away
    const DISPLAY_DURATION: Duration = Duration::from_millis(1500);
    /// Duration of the scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(800);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        self.update_at(self.start_time.elapsed(), terminal_height);
    }

    /// Update animation state for an explicit elapsed time
    pub fn update_at(&mut self, elapsed: Duration, terminal_height: u16) {
        if self.phase == SplashPhase::Complete {
            return;
        }

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress =
                animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out: fast start, gentle stop
            self.scroll_offset = simple_easing::cubic_out(progress) * terminal_height as f32;
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = SplashState::new();
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_skip_immediately_completes() {
        let mut state = SplashState::new();
        state.skip();
        assert!(state.is_complete());
    }

    #[test]
    fn test_holds_during_display() {
        let mut state = SplashState::new();
        state.update_at(Duration::from_millis(500), 40);
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_scrolls_up_after_display() {
        let mut state = SplashState::new();
        state.update_at(SplashState::DISPLAY_DURATION + Duration::from_millis(400), 40);
        assert_eq!(state.phase, SplashPhase::ScrollUp);
        assert!(state.scroll_offset > 0.0);
        assert!(state.scroll_offset < 40.0);
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        let mut state = SplashState::new();
        let half = SplashState::ANIMATION_DURATION / 2;
        state.update_at(SplashState::DISPLAY_DURATION + half, 100);
        assert!(state.scroll_offset > 50.0);
    }

    #[test]
    fn test_completes_after_animation() {
        let mut state = SplashState::new();
        state.update_at(
            SplashState::DISPLAY_DURATION + SplashState::ANIMATION_DURATION,
            40,
        );
        assert!(state.is_complete());
    }

    #[test]
    fn test_update_after_skip_stays_complete() {
        let mut state = SplashState::new();
        state.skip();
        state.update_at(Duration::ZERO, 40);
        assert!(state.is_complete());
    }
}
