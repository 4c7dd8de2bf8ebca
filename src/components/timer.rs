// Counts a number of seconds and then triggers a TimerEvent with its signal.
use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    pub signal: String,
}

impl Timer {
    pub fn new(duration: f32, signal: impl Into<String>) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal: signal.into(),
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_not_finished() {
        let t = Timer::new(1.0, "next_level");
        assert!(!t.finished());
        assert_eq!(t.signal, "next_level");
    }

    #[test]
    fn test_finished_at_duration() {
        let mut t = Timer::new(0.5, "x");
        t.elapsed = 0.5;
        assert!(t.finished());
    }

    #[test]
    fn test_reset() {
        let mut t = Timer::new(1.0, "x");
        t.elapsed = 0.9;
        t.reset();
        assert!(!t.finished());
        assert_eq!(t.elapsed, 0.0);
    }
}
