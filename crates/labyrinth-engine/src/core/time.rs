/// Fixed-period accumulator for the countdown clock.
/// Converts variable frame deltas into whole clock ticks (one per `period`).
/// Every whole period that elapsed while running is released, however long the frame.
#[derive(Debug, Clone)]
pub struct CountdownClock {
    /// Seconds per tick.
    period: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Stopped clocks swallow frame time.
    running: bool,
}

impl CountdownClock {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            accumulator: 0.0,
            running: false,
        }
    }

    /// Add frame time to the accumulator. Returns the number of ticks to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !self.running || self.period <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt.max(0.0);
        let ticks = (self.accumulator / self.period) as u32;
        self.accumulator -= ticks as f32 * self.period;
        ticks
    }

    /// Start (or resume) releasing ticks. Partial progress is kept across a pause.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop releasing ticks without discarding partial progress.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

/// Format whole seconds as `MM:SS`. Negative values clamp to `00:00`.
pub fn format_clock(seconds: i32) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
