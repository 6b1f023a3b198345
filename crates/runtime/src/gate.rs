use crate::profile::DeviceProfile;

/// Admission policy for per-frame progress updates.
///
/// Decisions are independent per call: a denied tick's value is discarded,
/// never queued or coalesced. Time is passed in by the caller so admission
/// stays deterministic and replayable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameGate {
    min_interval_ms: f64,
    last_admitted_ms: Option<f64>,
}

impl FrameGate {
    /// Throttling disabled: every tick is admitted.
    pub fn always_admit() -> Self {
        Self::with_min_interval_ms(0.0)
    }

    pub fn with_min_interval_ms(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms: min_interval_ms.max(0.0),
            last_admitted_ms: None,
        }
    }

    pub fn for_profile(profile: DeviceProfile) -> Self {
        Self::with_min_interval_ms(profile.min_update_interval_ms())
    }

    pub fn min_interval_ms(&self) -> f64 {
        self.min_interval_ms
    }

    /// Returns `true` if an update arriving at `now_ms` may be applied.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_admitted_ms {
            if now_ms - last < self.min_interval_ms {
                return false;
            }
        }
        self.last_admitted_ms = Some(now_ms);
        true
    }

    /// Forgets the last admitted tick; the next tick is always admitted.
    pub fn reset(&mut self) {
        self.last_admitted_ms = None;
    }
}
