use std::ops::RangeInclusive;

use crate::with_field_fn;

pub const FLANK_SIZE: u64 = 150;
pub const MIN_IR_LEN: usize = 12;
pub const MAX_IR_LEN: usize = 35;
pub const IR_MAX_MISMATCH_RATIO: f64 = 0.15;
pub const TSD_MIN_LEN: usize = 2;
pub const TSD_MAX_LEN: usize = 10;
pub const TSD_MAX_MISMATCHES: usize = 1;
pub const WINDOW_SIZE: u64 = 10_000;

/// Parameters of one scan. Every component receives this value explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Bases added on each side of a feature before repeat detection.
    pub flank_size:            u64,
    pub ir_min_len:            usize,
    pub ir_max_len:            usize,
    /// Allowed ITR mismatches are `max(1, floor(len * ratio))`.
    pub ir_max_mismatch_ratio: f64,
    pub tsd_min_len:           usize,
    pub tsd_max_len:           usize,
    pub tsd_max_mismatches:    usize,
    /// Width of the density windows.
    pub window_size:           u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            flank_size:            FLANK_SIZE,
            ir_min_len:            MIN_IR_LEN,
            ir_max_len:            MAX_IR_LEN,
            ir_max_mismatch_ratio: IR_MAX_MISMATCH_RATIO,
            tsd_min_len:           TSD_MIN_LEN,
            tsd_max_len:           TSD_MAX_LEN,
            tsd_max_mismatches:    TSD_MAX_MISMATCHES,
            window_size:           WINDOW_SIZE,
        }
    }
}

impl ScanConfig {
    with_field_fn!(flank_size, u64);

    with_field_fn!(ir_min_len, usize);

    with_field_fn!(ir_max_len, usize);

    with_field_fn!(ir_max_mismatch_ratio, f64);

    with_field_fn!(tsd_min_len, usize);

    with_field_fn!(tsd_max_len, usize);

    with_field_fn!(tsd_max_mismatches, usize);

    with_field_fn!(window_size, u64);

    pub fn ir_lengths(&self) -> RangeInclusive<usize> {
        self.ir_min_len..=self.ir_max_len
    }

    pub fn tsd_lengths(&self) -> RangeInclusive<usize> {
        self.tsd_min_len..=self.tsd_max_len
    }

    /// Mismatches tolerated for an ITR of `length` bases.
    pub fn ir_allowed_mismatches(
        &self,
        length: usize,
    ) -> usize {
        ((length as f64 * self.ir_max_mismatch_ratio).floor() as usize).max(1)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ir_min_len == 0 || self.ir_min_len > self.ir_max_len {
            anyhow::bail!(
                "Invalid inverted repeat length range {}..={}",
                self.ir_min_len,
                self.ir_max_len
            )
        }
        if self.tsd_min_len == 0 || self.tsd_min_len > self.tsd_max_len {
            anyhow::bail!(
                "Invalid target site duplication length range {}..={}",
                self.tsd_min_len,
                self.tsd_max_len
            )
        }
        if !(0.0..=1.0).contains(&self.ir_max_mismatch_ratio) {
            anyhow::bail!(
                "Inverted repeat mismatch ratio must lie in [0, 1], got {}",
                self.ir_max_mismatch_ratio
            )
        }
        if self.window_size == 0 {
            anyhow::bail!("Window size must be positive")
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(12, 1)]
    #[case(13, 1)]
    #[case(14, 2)]
    #[case(20, 3)]
    #[case(34, 5)]
    #[case(35, 5)]
    fn test_ir_allowed_mismatches(
        #[case] length: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(ScanConfig::default().ir_allowed_mismatches(length), expected);
    }

    #[test]
    fn test_default_validates() {
        let config = ScanConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ir_lengths(), 12..=35);
        assert_eq!(config.tsd_lengths(), 2..=10);
    }

    #[rstest]
    #[case(ScanConfig::default().with_ir_min_len(40))]
    #[case(ScanConfig::default().with_tsd_min_len(0))]
    #[case(ScanConfig::default().with_window_size(0))]
    #[case(ScanConfig::default().with_ir_max_mismatch_ratio(1.5))]
    fn test_invalid_configs(#[case] config: ScanConfig) {
        assert!(config.validate().is_err());
    }
}
