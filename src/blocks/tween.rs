//! Blocks domain: frame-stepped tween clock shared by block effects.

/// Lifecycle of a multi-frame effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenState {
    #[default]
    Running,
    Complete,
}

/// Elapsed-time clock for an effect of fixed duration.
///
/// A tick that starts with time left adds `dt` and stays `Running`, even if
/// that overshoots the duration; the following tick reports `Complete`. The
/// final pose (progress 1) is therefore shown for one frame before cleanup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenClock {
    elapsed: f32,
    duration: f32,
    state: TweenState,
}

impl TweenClock {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration.max(0.0),
            state: TweenState::Running,
        }
    }

    pub fn tick(&mut self, dt: f32) -> TweenState {
        if self.state == TweenState::Running {
            if self.elapsed < self.duration {
                self.elapsed += dt;
            } else {
                self.state = TweenState::Complete;
            }
        }
        self.state
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    /// Normalized progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_completes_one_tick_after_reaching_duration() {
        let mut clock = TweenClock::new(0.35);
        for _ in 0..4 {
            assert_eq!(clock.tick(0.1), TweenState::Running);
        }
        assert_eq!(clock.progress(), 1.0);
        assert_eq!(clock.tick(0.1), TweenState::Complete);
        assert_eq!(clock.tick(0.1), TweenState::Complete);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut clock = TweenClock::new(0.0);
        assert_eq!(clock.progress(), 1.0);
        assert_eq!(clock.tick(0.016), TweenState::Complete);
    }
}
