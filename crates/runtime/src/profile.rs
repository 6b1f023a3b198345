/// Device class the animation is tuned for.
///
/// Carries the per-class frame targets: desktop aims for 55+ fps with a
/// 16 ms update interval, mobile for 30+ fps with a 33 ms interval.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeviceProfile {
    Desktop,
    Mobile,
}

impl DeviceProfile {
    /// Minimum interval between admitted updates (milliseconds).
    pub fn min_update_interval_ms(self) -> f64 {
        match self {
            DeviceProfile::Desktop => 16.0,
            DeviceProfile::Mobile => 33.0,
        }
    }

    /// Frame rate the animation should sustain on this device class.
    pub fn target_fps(self) -> f64 {
        match self {
            DeviceProfile::Desktop => 55.0,
            DeviceProfile::Mobile => 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeviceProfile;

    #[test]
    fn profiles_carry_expected_targets() {
        assert_eq!(DeviceProfile::Desktop.min_update_interval_ms(), 16.0);
        assert_eq!(DeviceProfile::Mobile.min_update_interval_ms(), 33.0);
        assert_eq!(DeviceProfile::Desktop.target_fps(), 55.0);
        assert_eq!(DeviceProfile::Mobile.target_fps(), 30.0);
    }
}
