#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,

    /// One or more checks failed.
    ChecksFailed = 10,

    /// One or more thresholds failed.
    ThresholdsFailed = 11,

    /// Checks and thresholds failed.
    ChecksAndThresholdsFailed = 12,

    /// Invalid CLI flags or an unparseable summary document.
    InvalidInput = 30,

    /// IO errors and other unexpected failures.
    RuntimeError = 40,
}

impl ExitCode {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub fn from_quality_gates(checks_failed: bool, thresholds_failed: bool) -> Self {
        match (checks_failed, thresholds_failed) {
            (false, false) => Self::Success,
            (true, false) => Self::ChecksFailed,
            (false, true) => Self::ThresholdsFailed,
            (true, true) => Self::ChecksAndThresholdsFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_gates_map_to_distinct_codes() {
        assert_eq!(ExitCode::from_quality_gates(false, false), ExitCode::Success);
        assert_eq!(
            ExitCode::from_quality_gates(true, false),
            ExitCode::ChecksFailed
        );
        assert_eq!(
            ExitCode::from_quality_gates(false, true),
            ExitCode::ThresholdsFailed
        );
        assert_eq!(
            ExitCode::from_quality_gates(true, true),
            ExitCode::ChecksAndThresholdsFailed
        );
        assert_eq!(ExitCode::ChecksAndThresholdsFailed.as_i32(), 12);
    }
}
