//! Platform-agnostic time utilities
//!
//! Provides elapsed time since app start, in the milliseconds the animation
//! formulas are written against.

#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[allow(dead_code)]
pub fn now_seconds() -> f64 {
    now_millis() / 1000.0
}

/// Frame-rate counter over a sliding window of timestamps.
///
/// Fed explicit timestamps so simulated clocks drive it in tests.
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.frames.push(now_ms);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        if self.frames.len() < 2 {
            return 0.0;
        }
        let elapsed = self.frames.last().unwrap() - self.frames.first().unwrap();
        if elapsed == 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / (elapsed / 1000.0)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_from_fixed_step() {
        let mut counter = FpsCounter::new();
        for i in 0..30 {
            counter.tick(i as f64 * 100.0); // 10 fps
        }
        assert!((counter.fps() - 10.0).abs() < 0.01);
    }

    #[test]
    fn fps_needs_two_frames() {
        let mut counter = FpsCounter::new();
        assert_eq!(counter.fps(), 0.0);
        counter.tick(0.0);
        assert_eq!(counter.fps(), 0.0);
    }

    #[test]
    fn fps_window_is_bounded() {
        let mut counter = FpsCounter::new();
        // Slow frames first, then fast ones; the window must forget the slow era.
        for i in 0..60 {
            counter.tick(i as f64 * 1000.0);
        }
        let t0 = 60_000.0;
        for i in 0..120 {
            counter.tick(t0 + i as f64 * 16.0);
        }
        assert!(counter.fps() > 55.0);
    }

    #[test]
    fn zero_elapsed_is_zero_fps() {
        let mut counter = FpsCounter::new();
        counter.tick(5.0);
        counter.tick(5.0);
        assert_eq!(counter.fps(), 0.0);
    }
}
