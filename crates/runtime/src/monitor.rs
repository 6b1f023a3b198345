use crate::profile::DeviceProfile;

/// FPS estimation window (milliseconds).
pub const WINDOW_MS: f64 = 1_000.0;

/// Polled frame-rate readout.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameMetrics {
    /// Frames per second over the last closed window.
    pub fps: f64,
    /// Mean time between frames over the last closed window (milliseconds).
    pub frame_time_ms: f64,
    /// Timestamp of the most recent recorded frame (milliseconds).
    pub last_update_ms: f64,
}

/// Windowed frame counter behind the FPS estimate.
///
/// The estimate is recomputed once per window boundary and held constant in
/// between; it is not a continuously smoothed value. Until the first window
/// closes the monitor reports the nominal 60 fps it was seeded with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameMonitor {
    window_start_ms: Option<f64>,
    frame_count: u32,
    fps: f64,
    frame_time_ms: f64,
    last_update_ms: f64,
}

impl FrameMonitor {
    pub fn new() -> Self {
        Self {
            window_start_ms: None,
            frame_count: 0,
            fps: 60.0,
            frame_time_ms: 1000.0 / 60.0,
            last_update_ms: 0.0,
        }
    }

    /// Records an admitted frame at `now_ms`, rolling the window if a full
    /// second has elapsed since it opened.
    pub fn record_frame(&mut self, now_ms: f64) {
        self.frame_count += 1;
        self.last_update_ms = now_ms;

        let start = *self.window_start_ms.get_or_insert(now_ms);
        let elapsed = now_ms - start;
        if elapsed >= WINDOW_MS {
            self.fps = (self.frame_count as f64 * 1000.0 / elapsed).round();
            self.frame_time_ms = elapsed / self.frame_count as f64;
            self.frame_count = 0;
            self.window_start_ms = Some(now_ms);
        }
    }

    pub fn metrics(&self) -> FrameMetrics {
        FrameMetrics {
            fps: self.fps,
            frame_time_ms: self.frame_time_ms,
            last_update_ms: self.last_update_ms,
        }
    }

    pub fn meets_target(&self, profile: DeviceProfile) -> bool {
        self.fps >= profile.target_fps()
    }

    pub fn status_line(&self, profile: DeviceProfile) -> String {
        let mark = if self.meets_target(profile) { "ok" } else { "slow" };
        format!(
            "{mark}: {:.0} fps (target: {:.0}+)",
            self.fps,
            profile.target_fps()
        )
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FrameMonitor {
    fn default() -> Self {
        Self::new()
    }
}
