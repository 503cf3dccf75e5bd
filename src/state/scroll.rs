//! Per-page scroll positions with eased back-to-top

use std::time::{Duration, Instant};

/// Offset past which the back-to-top hint is shown
pub const BACK_TO_TOP_THRESHOLD: u16 = 10;

/// An in-progress smooth scroll between two offsets
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: u16,
    to: u16,
    started: Instant,
}

impl ScrollAnimation {
    const DURATION: Duration = Duration::from_millis(600);

    pub fn new(from: u16, to: u16) -> Self {
        Self {
            from,
            to,
            started: Instant::now(),
        }
    }

    /// Offset after `elapsed`, and whether the animation has finished
    pub fn offset_at(&self, elapsed: Duration) -> (u16, bool) {
        if elapsed >= Self::DURATION {
            return (self.to, true);
        }
        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        let distance = self.to as f32 - self.from as f32;
        let offset = (self.from as f32 + distance * eased).round().max(0.0) as u16;
        (offset, false)
    }
}

/// Scroll position of one page or section
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    pub offset: u16,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    /// Move by `delta` lines, staying within `0..=max`. Cancels any animation.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        self.animation = None;
        let target = (self.offset as i32 + delta).clamp(0, max as i32);
        self.offset = target as u16;
    }

    /// Start a smooth scroll back to the top
    pub fn scroll_to_top(&mut self) {
        if self.offset > 0 {
            self.animation = Some(ScrollAnimation::new(self.offset, 0));
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advance the animation to now
    pub fn tick(&mut self) {
        if let Some(animation) = self.animation {
            self.advance(animation.started.elapsed());
        }
    }

    fn advance(&mut self, elapsed: Duration) {
        if let Some(animation) = self.animation {
            let (offset, done) = animation.offset_at(elapsed);
            self.offset = offset;
            if done {
                self.animation = None;
            }
        }
    }

    pub fn shows_back_to_top(&self) -> bool {
        self.offset > BACK_TO_TOP_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_by_clamps() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(-5, 20);
        assert_eq!(scroll.offset, 0);
        scroll.scroll_by(50, 20);
        assert_eq!(scroll.offset, 20);
    }

    #[test]
    fn test_back_to_top_threshold() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(BACK_TO_TOP_THRESHOLD as i32, 100);
        assert!(!scroll.shows_back_to_top());
        scroll.scroll_by(1, 100);
        assert!(scroll.shows_back_to_top());
    }

    #[test]
    fn test_scroll_to_top_eases_down_to_zero() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(40, 100);
        scroll.scroll_to_top();
        assert!(scroll.is_animating());

        scroll.advance(Duration::from_millis(100));
        assert!(scroll.offset < 40);
        assert!(scroll.offset > 0);

        scroll.advance(Duration::from_secs(1));
        assert_eq!(scroll.offset, 0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_scroll_to_top_at_top_does_nothing() {
        let mut scroll = ScrollState::default();
        scroll.scroll_to_top();
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(30, 100);
        scroll.scroll_to_top();
        scroll.scroll_by(1, 100);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset, 31);
    }
}
