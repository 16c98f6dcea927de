use super::clock::{Clock, SystemClock};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Clock reading taken at the tick, in milliseconds.
    pub now_ms: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The baseline is the clock reading at construction (or the last `reset`),
/// so the first tick reports the time since the game was created.
///
/// Delta time is not clamped unless requested with [`with_clamps`](Self::with_clamps):
/// a slow frame yields a proportionally larger `dt`.
#[derive(Debug, Clone)]
pub struct FrameClock<C: Clock = SystemClock> {
    clock: C,
    last_ms: f64,
    frame_index: u64,
    clamps: Option<(f32, f32)>,
}

impl<C: Clock> FrameClock<C> {
    pub fn new(clock: C) -> Self {
        let last_ms = clock.now_ms();
        Self {
            clock,
            last_ms,
            frame_index: 0,
            clamps: None,
        }
    }

    /// Creates a clock whose delta time is clamped to `[dt_min, dt_max]` seconds.
    pub fn with_clamps(clock: C, dt_min: f32, dt_max: f32) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            clamps: Some((dt_min, dt_max)),
            ..Self::new(clock)
        }
    }

    /// Resets the baseline to the current reading.
    ///
    /// Useful when resuming after the host suspended frame delivery.
    pub fn reset(&mut self) {
        self.last_ms = self.clock.now_ms();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now_ms = self.clock.now_ms();
        let mut dt = ((now_ms - self.last_ms) / 1000.0) as f32;

        if let Some((lo, hi)) = self.clamps {
            dt = dt.clamp(lo, hi);
        }

        self.last_ms = now_ms;

        let ft = FrameTime {
            dt,
            now_ms,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl Default for FrameClock<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}
