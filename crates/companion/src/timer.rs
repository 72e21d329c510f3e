//! Count-up timers advanced by the frame delta.

/// Counts elapsed seconds up towards a threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountupTimer {
    threshold: f32,
    elapsed: f32,
}

impl CountupTimer {
    /// A timer that starts counting from zero.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            elapsed: 0.0,
        }
    }

    /// A timer that has already reached its threshold, for cooldowns that are
    /// available from the start.
    pub fn ready(threshold: f32) -> Self {
        Self {
            threshold,
            elapsed: threshold,
        }
    }

    pub fn update(&mut self, delta: f32) {
        self.elapsed += delta;
    }

    #[inline]
    pub fn reached_threshold(&self) -> bool {
        self.elapsed >= self.threshold
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
