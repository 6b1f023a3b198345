/// Visible/hidden length pair driving partial trail disclosure.
///
/// The consumer maps this onto a renderer-specific visibility control; for a
/// dash-pattern line renderer that is `[visible, hidden]` directly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RevealSplit {
    pub visible_m: f64,
    pub hidden_m: f64,
}

impl RevealSplit {
    /// Pure mapping from progress to a reveal split.
    ///
    /// `progress` is clamped to [0, 1]; visible + hidden always equals the
    /// trail length.
    pub fn at(total_length_m: f64, progress: f64) -> Self {
        let p = progress.clamp(0.0, 1.0);
        let visible_m = total_length_m * p;
        Self {
            visible_m,
            hidden_m: total_length_m - visible_m,
        }
    }

    pub fn total_m(&self) -> f64 {
        self.visible_m + self.hidden_m
    }

    /// The pair in dash-array order.
    pub fn dash_array(&self) -> [f64; 2] {
        [self.visible_m, self.hidden_m]
    }
}

#[cfg(test)]
mod tests {
    use super::RevealSplit;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn split_partitions_the_trail_length() {
        let total = 8530.0;
        for p in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            let split = RevealSplit::at(total, p);
            assert_close(split.visible_m, total * p, 1e-9);
            assert_close(split.visible_m + split.hidden_m, total, 1e-9);
        }
    }

    #[test]
    fn progress_is_clamped() {
        let total = 100.0;
        assert_eq!(RevealSplit::at(total, -0.5), RevealSplit::at(total, 0.0));
        assert_eq!(RevealSplit::at(total, 1.7), RevealSplit::at(total, 1.0));
    }

    #[test]
    fn endpoints_hide_and_show_everything() {
        let hidden = RevealSplit::at(1000.0, 0.0);
        assert_eq!(hidden.dash_array(), [0.0, 1000.0]);
        let shown = RevealSplit::at(1000.0, 1.0);
        assert_eq!(shown.dash_array(), [1000.0, 0.0]);
    }
}
