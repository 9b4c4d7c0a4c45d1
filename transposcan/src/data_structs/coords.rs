//! Genomic coordinates.
//!
//! [`Contig`] represents a region on one replicon, defined by a sequence
//! name, a start position, an end position and a strand. Feature records keep
//! their 1-based inclusive annotation coordinates in a `Contig`; flank
//! expansion produces another `Contig` whose bounds are used directly as
//! slice offsets into the replicon.

use std::fmt::Display;

use arcstr::ArcStr;

use crate::data_structs::enums::Strand;

/// Represents a contig with a sequence name, start position, end position, and
/// strand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contig {
    seqname: ArcStr,
    start:   u64,
    end:     u64,
    strand:  Strand,
}

impl Contig {
    /// Creates a new `Contig`. Fails if `start > end`.
    pub fn try_new(
        seqname: ArcStr,
        start: u64,
        end: u64,
        strand: Strand,
    ) -> anyhow::Result<Self> {
        if start > end {
            anyhow::bail!(
                "Start position {} is greater than end position {}",
                start,
                end
            )
        }
        Ok(Self {
            seqname,
            start,
            end,
            strand,
        })
    }

    /// Returns the start position.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Returns the end position.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Returns the strand of the contig.
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Returns the sequence name of the contig.
    pub fn seqname(&self) -> &ArcStr {
        &self.seqname
    }

    /// Returns the length of the contig.
    pub fn length(&self) -> u64 {
        self.end - self.start
    }

    /// Extends the contig upstream by a given length, stopping at zero.
    pub fn extend_upstream(
        &mut self,
        length: u64,
    ) {
        self.start = self.start.saturating_sub(length);
    }

    /// Extends the contig downstream by a given length.
    pub fn extend_downstream(
        &mut self,
        length: u64,
    ) {
        self.end = self.end.saturating_add(length);
    }

    /// Extends both sides by `length`.
    pub fn flanked(
        &self,
        length: u64,
    ) -> Self {
        let mut new = self.clone();
        new.extend_upstream(length);
        new.extend_downstream(length);
        new
    }

    /// Clamps both bounds to `[0, limit]`.
    pub fn clamp(
        mut self,
        limit: u64,
    ) -> Self {
        self.start = self.start.min(limit);
        self.end = self.end.min(limit);
        self
    }

    /// Inclusive overlap test against `[start, end]`.
    pub fn overlaps(
        &self,
        start: u64,
        end: u64,
    ) -> bool {
        !(self.end < start || self.start > end)
    }
}

impl Display for Contig {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.seqname, self.start, self.end)
    }
}
