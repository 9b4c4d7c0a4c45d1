//! Replicon sequences indexed by identifier.
//!
//! [`SequenceStore`] owns every replicon of a genome for the duration of a
//! run. Replicons keep the order in which they were loaded, which is the
//! order of the per-replicon output tables.

use std::fs::File;
use std::io::{
    BufReader,
    Read,
};
use std::path::Path;

use anyhow::Context as _;
use arcstr::ArcStr;
use bio::io::fasta::Reader as FastaReader;
use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::StoreError;

/// Reverse-complements a nucleotide sequence.
///
/// Case is preserved, IUPAC ambiguity codes are complemented, any other
/// symbol passes through unchanged.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    bio::alphabets::dna::revcomp(seq)
}

#[derive(Debug, Clone, Default)]
pub struct SequenceStore {
    replicons: IndexMap<ArcStr, Vec<u8>>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a replicon. Identifiers must be unique.
    pub fn insert<S: Into<ArcStr>>(
        &mut self,
        id: S,
        sequence: Vec<u8>,
    ) -> anyhow::Result<()> {
        match self.replicons.entry(id.into()) {
            Entry::Occupied(entry) => {
                anyhow::bail!("Duplicate sequence identifier '{}'", entry.key())
            },
            Entry::Vacant(entry) => {
                entry.insert(sequence);
                Ok(())
            },
        }
    }

    /// Builds a store from `(identifier, sequence)` pairs.
    pub fn try_from_records<I, S>(records: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: Into<ArcStr>, {
        let mut store = Self::new();
        for (id, sequence) in records {
            store.insert(id, sequence)?;
        }
        Ok(store)
    }

    /// Reads every record of a FASTA stream. The identifier is the first
    /// whitespace delimited word of the header.
    pub fn from_fasta<R: Read>(reader: R) -> anyhow::Result<Self> {
        let mut store = Self::new();
        for record in FastaReader::new(BufReader::new(reader)).records() {
            let record = record.context("Failed to read FASTA record")?;
            if record.seq().is_empty() {
                log::warn!("Replicon {} has an empty sequence", record.id());
            }
            store.insert(record.id(), record.seq().to_vec())?;
        }
        log::info!("Loaded {} replicons", store.len());
        Ok(store)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Could not open sequence file {}", path.display()))?;
        Self::from_fasta(file)
            .with_context(|| format!("Could not read sequence file {}", path.display()))
    }

    /// Length of a replicon, `None` if it was never loaded.
    pub fn length(
        &self,
        id: &str,
    ) -> Option<usize> {
        self.replicons.get(id).map(Vec::len)
    }

    pub fn get(
        &self,
        id: &str,
    ) -> Option<&[u8]> {
        self.replicons
            .get(id)
            .map(Vec::as_slice)
    }

    /// Sub-range `[start, end)` of a replicon.
    ///
    /// Both bounds are clamped to the replicon length, so requests running
    /// past either end return the part that exists.
    pub fn slice(
        &self,
        id: &str,
        start: usize,
        end: usize,
    ) -> Result<&[u8], StoreError> {
        let sequence = self
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if start > end {
            return Err(StoreError::OutOfRange {
                id: id.to_string(),
                start,
                end,
            });
        }
        let end = end.min(sequence.len());
        let start = start.min(end);
        Ok(&sequence[start..end])
    }

    /// Replicons in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArcStr, &[u8])> {
        self.replicons
            .iter()
            .map(|(id, seq)| (id, seq.as_slice()))
    }

    /// Replicon identifiers and lengths in load order.
    pub fn lengths(&self) -> impl Iterator<Item = (&ArcStr, u64)> {
        self.iter()
            .map(|(id, seq)| (id, seq.len() as u64))
    }

    pub fn len(&self) -> usize {
        self.replicons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replicons.is_empty()
    }
}
