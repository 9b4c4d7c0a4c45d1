use arcstr::ArcStr;
use serde::Serialize;

use crate::utils::{
    float_repr,
    round_to,
};

/// Scale of the per-replicon density figure.
pub const DENSITY_SCALE: f64 = 10_000.0;

/// Hit count for one fixed-size window of a replicon.
///
/// `end` is exclusive for tiling purposes but the overlap test treats it as
/// inclusive, so a hit touching a bin boundary counts in both bins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowBin {
    #[serde(rename = "Replicon")]
    pub replicon: ArcStr,
    #[serde(rename = "Start")]
    pub start:    u64,
    #[serde(rename = "End")]
    pub end:      u64,
    #[serde(rename = "Transposases")]
    pub count:    usize,
}

/// Total hits and hits per 10 kb for one replicon.
#[derive(Debug, Clone, PartialEq)]
pub struct RepliconSummary {
    pub replicon: ArcStr,
    pub total:    usize,
    pub length:   u64,
}

impl RepliconSummary {
    pub fn new(
        replicon: ArcStr,
        total: usize,
        length: u64,
    ) -> Self {
        Self {
            replicon,
            total,
            length,
        }
    }

    /// Hits per 10 kb rounded to three decimals, 0 for empty replicons.
    pub fn density(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        round_to(self.total as f64 / self.length as f64 * DENSITY_SCALE, 3)
    }

    /// Density as it appears in the summary table. Empty replicons print an
    /// integer `0`, everything else prints as a float (`0.0`, `1.25`).
    pub fn density_repr(&self) -> String {
        if self.length == 0 {
            "0".to_string()
        }
        else {
            float_repr(self.density())
        }
    }
}
