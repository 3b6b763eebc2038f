/// Clock mode for the last measured frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    /// Normal per-frame ticking
    Running,
    /// The wall-clock gap exceeded `max_delta`; dt was clamped to 0
    Reset,
}

/// Turns host timestamps into a bounded dt and counts frames per window.
///
/// Timestamps are milliseconds; dt and the window are seconds. A gap larger
/// than `max_delta` (e.g. a backgrounded tab) simulates as dt = 0 for that
/// one frame, and the next regular frame returns to `Running`.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last_ms: f64,
    accum: f64,
    frame_count: u32,
    fps: u32,
    state: ClockState,
    max_delta: f64,
    window: f64,
}

impl FrameClock {
    /// The first timestamp is measured against 0
    pub fn new(max_delta: f64, window: f64) -> Self {
        Self {
            last_ms: 0.0,
            accum: 0.0,
            frame_count: 0,
            fps: 0,
            state: ClockState::Running,
            max_delta,
            window,
        }
    }

    /// Consume a timestamp and return the dt to simulate
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let raw = (now_ms - self.last_ms) / 1000.0;
        let dt = if raw > self.max_delta {
            if self.state == ClockState::Running {
                console_log!("frame gap of {:.3}s exceeds {}s, clamping dt to 0", raw, self.max_delta);
            }
            self.state = ClockState::Reset;
            0.0
        } else {
            self.state = ClockState::Running;
            raw
        };

        self.last_ms = now_ms;

        self.accum += dt;
        self.frame_count += 1;
        if self.accum >= self.window {
            self.fps = self.frame_count;
            self.accum = 0.0;
            self.frame_count = 0;
        }

        dt
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Frames counted in the last completed window
    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }
}
