//! Approximate terminal repeat searches on an extracted window.
//!
//! Both searches compare the first `L` bases of the window with its last `L`
//! bases for `L` running from the longest allowed length down to the
//! shortest, and stop at the first length within the mismatch bound. Longer
//! repeats therefore always win. Inverted repeats compare against the
//! reverse complement of the right end; target site duplications are direct
//! repeats and compare the ends as they are.

use std::ops::RangeInclusive;

use crate::config::ScanConfig;
use crate::data_structs::{
    Extract,
    Hit,
    ItrResult,
    RepeatMatch,
    TsdResult,
};
use crate::sequence::reverse_complement;

/// Position-wise mismatches between two equally long slices, ignoring case.
pub fn count_mismatches(
    left: &[u8],
    right: &[u8],
) -> usize {
    left.iter()
        .zip(right.iter())
        .filter(|(a, b)| !a.eq_ignore_ascii_case(b))
        .count()
}

/// Longest `L` in `lengths` whose end comparison passes `accept`.
///
/// Lengths longer than the window are skipped, so a window shorter than every
/// candidate yields `None`. Slicing the ends short instead would compare an
/// empty window with itself and report a perfect repeat at the maximum length;
/// outputs on such windows differ from tools that do that.
fn scan_terminal_repeat<C, A>(
    window: &[u8],
    lengths: RangeInclusive<usize>,
    compare: C,
    accept: A,
) -> Option<RepeatMatch>
where
    C: Fn(&[u8], &[u8]) -> usize,
    A: Fn(usize, usize) -> bool, {
    lengths
        .rev()
        .filter(|&length| length <= window.len())
        .find_map(|length| {
            let left = &window[..length];
            let right = &window[window.len() - length..];
            let mismatches = compare(left, right);
            accept(length, mismatches).then_some(RepeatMatch { length, mismatches })
        })
}

#[derive(Debug, Clone)]
pub struct RepeatDetector {
    config: ScanConfig,
}

impl RepeatDetector {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Searches for an inverted terminal repeat.
    pub fn detect_itr(
        &self,
        window: &[u8],
    ) -> ItrResult {
        scan_terminal_repeat(
            window,
            self.config.ir_lengths(),
            |left, right| count_mismatches(left, &reverse_complement(right)),
            |length, mismatches| mismatches <= self.config.ir_allowed_mismatches(length),
        )
        .map_or(ItrResult::NotFound, ItrResult::Found)
    }

    /// Searches for a target site duplication.
    pub fn detect_tsd(
        &self,
        window: &[u8],
    ) -> TsdResult {
        scan_terminal_repeat(
            window,
            self.config.tsd_lengths(),
            count_mismatches,
            |_, mismatches| mismatches <= self.config.tsd_max_mismatches,
        )
        .map_or(TsdResult::Unclear, TsdResult::Found)
    }

    /// Runs both searches on an extracted window.
    pub fn annotate(
        &self,
        extract: Extract,
    ) -> Hit {
        let itr = self.detect_itr(extract.sequence());
        let tsd = self.detect_tsd(extract.sequence());
        Hit::new(extract, itr, tsd)
    }
}

impl Default for RepeatDetector {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}
