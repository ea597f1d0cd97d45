//! Frame time tracking

/// Simulation clock advanced once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    delta: f32,
    elapsed: f32,
    frame: u64,
}

impl Time {
    /// Create a clock at frame zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame of `delta` seconds
    pub fn advance(&mut self, delta: f32) {
        self.delta = delta;
        self.elapsed += delta;
        self.frame += 1;
    }

    /// Seconds covered by the last frame
    #[must_use]
    pub fn delta_seconds(&self) -> f32 {
        self.delta
    }

    /// Seconds since the clock started
    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed
    }

    /// Number of frames advanced so far
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}
