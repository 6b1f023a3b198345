use serde::{Deserialize, Serialize};

/// Session configuration.
///
/// Rendering parameters (colors, widths, sizes) are passed through to the
/// sink untouched; only `enable_marker`, `reduced_motion_fallback`, and the
/// throttle interval affect tick handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    pub trail_color: String,
    pub trail_width: f64,
    pub marker_color: String,
    pub marker_size: f64,
    pub enable_marker: bool,
    /// Whether a caller-detected reduced-motion preference should force the
    /// full-reveal tick policy.
    pub reduced_motion_fallback: bool,
    /// Minimum interval between admitted updates (milliseconds); 0 disables
    /// throttling, which is the shipped default.
    pub min_update_interval_ms: f64,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            trail_color: "#ff6b35".to_string(),
            trail_width: 4.0,
            marker_color: "#ff6b35".to_string(),
            marker_size: 12.0,
            enable_marker: true,
            reduced_motion_fallback: true,
            min_update_interval_ms: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScrubConfig;

    #[test]
    fn defaults_leave_throttling_off() {
        let config = ScrubConfig::default();
        assert_eq!(config.min_update_interval_ms, 0.0);
        assert!(config.enable_marker);
        assert!(config.reduced_motion_fallback);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: ScrubConfig =
            serde_json::from_str(r#"{ "trail_width": 6.0, "enable_marker": false }"#).unwrap();
        assert_eq!(config.trail_width, 6.0);
        assert!(!config.enable_marker);
        assert_eq!(config.trail_color, "#ff6b35");
    }
}
