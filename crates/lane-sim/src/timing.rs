//! Frame timing.
//!
//! Turns frame timestamps into the `dt` handed to the tick engine. The engine
//! never clamps, so long stalls are cut down here.

/// Converts frame timestamps into clamped delta times.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Largest dt ever returned
    max_dt: f32,
    /// Timestamp of the previous frame, in seconds
    last: Option<f64>,
}

impl FrameClock {
    /// Create a clock that never reports more than `max_dt` seconds.
    #[must_use]
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt: max_dt.max(0.0),
            last: None,
        }
    }

    /// Delta since the previous frame. The first frame yields 0, and time
    /// running backwards yields 0 as well.
    pub fn advance(&mut self, timestamp: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (timestamp - last) as f32,
            None => 0.0,
        };
        self.last = Some(timestamp);
        dt.clamp(0.0, self.max_dt)
    }

    /// The clamp bound.
    #[must_use]
    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}
