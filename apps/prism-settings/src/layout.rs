//! Label column alignment
//!
//! Each control reports the width its label needs; the panel applies the
//! widest one to every label column so the controls line up.

/// Label column width used before anything has been measured
pub const MIN_CONTROL_WIDTH: f64 = 96.0;

/// Running maximum of reported label widths, never below [`MIN_CONTROL_WIDTH`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthAligner {
    width: f64,
}

impl WidthAligner {
    pub fn new() -> Self {
        Self {
            width: MIN_CONTROL_WIDTH,
        }
    }

    /// Record one measured width. Returns `true` if the shared width grew.
    pub fn report(&mut self, measured: f64) -> bool {
        if measured.is_finite() && measured > self.width {
            self.width = measured;
            true
        } else {
            false
        }
    }

    /// Record several widths at once; `true` if any of them grew the width
    pub fn report_all(&mut self, measured: impl IntoIterator<Item = f64>) -> bool {
        measured
            .into_iter()
            .fold(false, |grew, width| self.report(width) || grew)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn reset(&mut self) {
        self.width = MIN_CONTROL_WIDTH;
    }
}

impl Default for WidthAligner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_minimum() {
        assert_eq!(WidthAligner::new().width(), MIN_CONTROL_WIDTH);
    }

    #[test]
    fn test_never_below_minimum() {
        let mut aligner = WidthAligner::new();
        assert!(!aligner.report(12.0));
        assert!(!aligner.report(0.0));
        assert!(!aligner.report(f64::NAN));
        assert_eq!(aligner.width(), 96.0);
    }

    #[test]
    fn test_keeps_maximum() {
        let mut aligner = WidthAligner::new();
        assert!(aligner.report(120.0));
        assert!(!aligner.report(110.0));
        assert!(aligner.report(140.5));
        assert_eq!(aligner.width(), 140.5);
    }

    #[test]
    fn test_report_all_is_order_independent() {
        let mut a = WidthAligner::new();
        let mut b = WidthAligner::new();
        assert!(a.report_all([80.0, 130.0, 101.0]));
        assert!(b.report_all([101.0, 80.0, 130.0]));
        assert_eq!(a.width(), b.width());
        assert_eq!(a.width(), 130.0);
    }

    #[test]
    fn test_report_all_reports_every_width() {
        // Later widths must still be recorded once an earlier one grew
        let mut aligner = WidthAligner::new();
        aligner.report_all([100.0, 150.0]);
        assert_eq!(aligner.width(), 150.0);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut aligner = WidthAligner::new();
        aligner.report(200.0);
        aligner.reset();
        assert_eq!(aligner, WidthAligner::default());
    }
}
