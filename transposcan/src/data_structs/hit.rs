use std::fmt::Display;

use crate::data_structs::coords::Contig;
use crate::data_structs::feature::FeatureRecord;
use crate::getter_fn;

/// Prefix of the identifiers given to extracted hits.
pub const HIT_ID_PREFIX: &str = "transposase";

/// A repeat accepted by one of the approximate searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatMatch {
    /// Repeat length in bases.
    pub length:     usize,
    /// Position-wise mismatches between the two repeat copies.
    pub mismatches: usize,
}

impl Display for RepeatMatch {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "Yes ({} bp, {} mismatches)",
            self.length, self.mismatches
        )
    }
}

/// Outcome of the inverted terminal repeat search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItrResult {
    Found(RepeatMatch),
    NotFound,
}

impl ItrResult {
    pub fn repeat(&self) -> Option<RepeatMatch> {
        match self {
            ItrResult::Found(m) => Some(*m),
            ItrResult::NotFound => None,
        }
    }
}

impl Display for ItrResult {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ItrResult::Found(m) => write!(f, "{}", m),
            ItrResult::NotFound => write!(f, "No"),
        }
    }
}

/// Outcome of the target site duplication search.
///
/// Short flanks match by chance often enough that a failed search is
/// reported as unclear rather than negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TsdResult {
    Found(RepeatMatch),
    Unclear,
}

impl TsdResult {
    pub fn repeat(&self) -> Option<RepeatMatch> {
        match self {
            TsdResult::Found(m) => Some(*m),
            TsdResult::Unclear => None,
        }
    }
}

impl Display for TsdResult {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            TsdResult::Found(m) => write!(f, "{}", m),
            TsdResult::Unclear => write!(f, "Unclear"),
        }
    }
}

/// Flank-expanded window cut out for a feature that passed classification,
/// before repeat detection.
#[derive(Debug, Clone, PartialEq)]
pub struct Extract {
    pub(crate) index:    usize,
    pub(crate) record:   FeatureRecord,
    pub(crate) flanked:  Contig,
    pub(crate) sequence: Vec<u8>,
}

impl Extract {
    getter_fn!(index, copy usize);

    getter_fn!(record, FeatureRecord);

    getter_fn!(flanked, Contig);

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }
}

/// A classified feature with its extracted window and repeat calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    index:    usize,
    record:   FeatureRecord,
    flanked:  Contig,
    sequence: Vec<u8>,
    itr:      ItrResult,
    tsd:      TsdResult,
}

impl Hit {
    pub fn new(
        extract: Extract,
        itr: ItrResult,
        tsd: TsdResult,
    ) -> Self {
        Self {
            index: extract.index,
            record: extract.record,
            flanked: extract.flanked,
            sequence: extract.sequence,
            itr,
            tsd,
        }
    }

    getter_fn!(index, copy usize);

    getter_fn!(record, FeatureRecord);

    getter_fn!(flanked, Contig);

    getter_fn!(itr, copy ItrResult);

    getter_fn!(tsd, copy TsdResult);

    /// Strand-corrected window sequence.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Stable identifier, e.g. `transposase_3`.
    pub fn name(&self) -> String {
        format!("{}_{}", HIT_ID_PREFIX, self.index)
    }

    /// `<seqid>:<start>-<end>(<strand>)` using annotated coordinates.
    pub fn description(&self) -> String {
        format!(
            "{}:{}-{}({})",
            self.record.seqid(),
            self.record.start(),
            self.record.end(),
            self.record.strand_symbol()
        )
    }
}
