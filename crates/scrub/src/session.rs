use foundation::math::GeoPoint;
use runtime::event_bus::{Event, EventBus};
use runtime::gate::FrameGate;
use runtime::monitor::{FrameMetrics, FrameMonitor};
use runtime::profile::DeviceProfile;
use trail::geometry::{TrailBounds, TrailError, TrailGeometry};
use trail::marker::MarkerPositioner;
use trail::poi::{TrailPoi, TrailPois};
use trail::reveal::RevealSplit;

use crate::config::ScrubConfig;
use crate::sink::RenderSink;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No geometry loaded; progress ticks are no-ops.
    Idle,
    /// Geometry loaded; progress ticks drive the reveal and marker.
    Ready,
}

/// Tick-handling strategy, chosen once at construction.
///
/// `ForceFullReveal` is the reduced-motion fallback: every tick is rewritten
/// to progress 1.0 before the normal pipeline runs, so the trail appears
/// fully drawn without scrubbing animation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickPolicy {
    Normal,
    ForceFullReveal,
}

impl TickPolicy {
    /// Policy for a caller-detected motion preference, honoring the config's
    /// fallback switch.
    pub fn from_preference(prefers_reduced_motion: bool, config: &ScrubConfig) -> Self {
        if prefers_reduced_motion && config.reduced_motion_fallback {
            TickPolicy::ForceFullReveal
        } else {
            TickPolicy::Normal
        }
    }
}

/// What a call to [`ScrubSession::on_progress`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session is Idle (or the input was unusable); nothing changed.
    Ignored,
    /// The frame gate denied the update; the value was discarded.
    Dropped,
    /// The update was applied and handed to the renderer.
    Applied,
}

/// Scroll-scrub session: owns the loaded trail and drives the render sink.
///
/// Single-writer by construction: ticks arrive as synchronous calls from one
/// external animation loop, and the sink reads results in the same call.
pub struct ScrubSession<S: RenderSink> {
    config: ScrubConfig,
    policy: TickPolicy,
    sink: S,
    gate: FrameGate,
    monitor: FrameMonitor,
    bus: EventBus,
    geometry: Option<TrailGeometry>,
    pois: TrailPois,
    marker: MarkerPositioner,
    progress: f64,
    tick: u64,
}

impl<S: RenderSink> ScrubSession<S> {
    pub fn new(config: ScrubConfig, sink: S) -> Self {
        Self::with_policy(config, sink, TickPolicy::Normal)
    }

    pub fn with_policy(config: ScrubConfig, sink: S, policy: TickPolicy) -> Self {
        let gate = if config.min_update_interval_ms > 0.0 {
            FrameGate::with_min_interval_ms(config.min_update_interval_ms)
        } else {
            FrameGate::always_admit()
        };
        Self {
            config,
            policy,
            sink,
            gate,
            monitor: FrameMonitor::new(),
            bus: EventBus::new(),
            geometry: None,
            pois: TrailPois::default(),
            marker: MarkerPositioner::new(),
            progress: 0.0,
            tick: 0,
        }
    }

    /// Loads a trail, transitioning Idle -> Ready.
    ///
    /// On `InvalidGeometry` the session stays Idle with no partial state; the
    /// caller may retry with valid data. A successful load replaces any
    /// previous trail wholesale and renders the initial (progress 0) state.
    pub fn load_trail(
        &mut self,
        points: Vec<GeoPoint>,
        pois: Vec<TrailPoi>,
    ) -> Result<(), TrailError> {
        let geometry = TrailGeometry::from_points(points)?;
        self.bus.emit(
            self.tick,
            "trail",
            format!(
                "loaded {} points, {:.1} m",
                geometry.points().len(),
                geometry.total_length_m()
            ),
        );

        self.marker = MarkerPositioner::new();
        self.progress = 0.0;
        self.gate.reset();
        self.sink
            .render_reveal(RevealSplit::at(geometry.total_length_m(), 0.0));
        if self.config.enable_marker {
            if let Some(start) = self.marker.update(&geometry, 0.0) {
                self.sink.render_marker(start);
            }
        }

        self.geometry = Some(geometry);
        self.pois = TrailPois::new(pois);
        Ok(())
    }

    /// Progress tick entry point, called once per rendered frame.
    ///
    /// Inputs outside [0, 1] are silently clamped. A denied or unusable tick
    /// leaves progress, reveal, and marker unchanged.
    pub fn on_progress(&mut self, progress: f64, now_ms: f64) -> TickOutcome {
        self.tick += 1;

        let progress = match self.policy {
            TickPolicy::Normal => progress,
            TickPolicy::ForceFullReveal => 1.0,
        };

        let Some(geometry) = &self.geometry else {
            return TickOutcome::Ignored;
        };

        if !progress.is_finite() {
            self.bus
                .emit(self.tick, "tick", "non-finite progress ignored");
            return TickOutcome::Ignored;
        }

        if !self.gate.admit(now_ms) {
            self.bus.emit(self.tick, "gate", "update throttled");
            return TickOutcome::Dropped;
        }

        self.progress = progress.clamp(0.0, 1.0);

        let split = RevealSplit::at(geometry.total_length_m(), self.progress);
        self.sink.render_reveal(split);

        if self.config.enable_marker {
            match self.marker.update(geometry, self.progress) {
                Some(point) => self.sink.render_marker(point),
                None => self
                    .bus
                    .emit(self.tick, "marker", "skipped non-finite position"),
            }
        }

        self.monitor.record_frame(now_ms);
        TickOutcome::Applied
    }

    pub fn state(&self) -> SessionState {
        if self.geometry.is_some() {
            SessionState::Ready
        } else {
            SessionState::Idle
        }
    }

    /// Current (clamped) progress.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn policy(&self) -> TickPolicy {
        self.policy
    }

    pub fn config(&self) -> &ScrubConfig {
        &self.config
    }

    pub fn trail_length_m(&self) -> Option<f64> {
        self.geometry.as_ref().map(|g| g.total_length_m())
    }

    /// Lon/lat extent of the loaded trail for the external camera-fit call.
    pub fn fit_bounds(&self) -> Option<TrailBounds> {
        self.geometry.as_ref().map(|g| g.bounds())
    }

    pub fn marker_position(&self) -> Option<GeoPoint> {
        self.marker.position()
    }

    /// POIs the reveal front has passed at the current progress.
    pub fn pois_revealed(&self) -> usize {
        match &self.geometry {
            Some(geometry) => self
                .pois
                .revealed_count(geometry.total_length_m() * self.progress),
            None => 0,
        }
    }

    pub fn pois(&self) -> &[TrailPoi] {
        self.pois.as_slice()
    }

    /// Polled frame-rate readout.
    pub fn metrics(&self) -> FrameMetrics {
        self.monitor.metrics()
    }

    pub fn meets_target(&self, profile: DeviceProfile) -> bool {
        self.monitor.meets_target(profile)
    }

    pub fn status_line(&self, profile: DeviceProfile) -> String {
        self.monitor.status_line(profile)
    }

    pub fn events(&self) -> &[Event] {
        self.bus.events()
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.bus.drain()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Teardown: stops future ticks by consuming the session and hands the
    /// renderer handle back to the caller.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
