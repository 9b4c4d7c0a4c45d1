//! # transposcan
//!
//! `transposcan` characterizes candidate mobile genetic elements
//! (transposases, insertion sequences) in an annotated genome. Given a GFF
//! feature table and the matching FASTA sequences it
//!
//! 1. keeps features whose annotation names a mobile element,
//! 2. cuts out each feature with 150 bp of flank on both sides,
//! 3. searches the window ends for inverted terminal repeats (ITRs) and
//!    target site duplications (TSDs), tolerating mismatches,
//! 4. counts hits in 10 kb windows and per replicon.
//!
//! Results are written as a FASTA of windows and three tab separated tables.
//!
//! If you do not want to use transposcan as crate, check out the
//! `transposcan` command-line tool in the `transposcan-ci` package.
//!
//! ## Structure
//!
//! * [`data_structs`]: coordinates ([`Contig`]), parsed feature lines
//!   ([`FeatureRecord`]), hits ([`Hit`]) and density records.
//! * [`sequence`]: the [`SequenceStore`] and reverse complement.
//! * [`tools`]: classification, extraction, repeat detection and window
//!   aggregation, driven by [`Scanner`].
//! * [`io`]: the report writers.
//! * [`config`]: [`ScanConfig`], every tunable parameter in one value.
//!
//! ## Usage
//!
//! ```no_run
//! use transposcan::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = SequenceStore::from_path("genome.fna")?;
//!     let scanner = Scanner::try_new(ScanConfig::default().with_flank_size(200))?;
//!     let results = scanner.scan_path("genome.gff", &store)?;
//!
//!     for hit in &results.hits {
//!         println!("{}\t{}\t{}", hit.name(), hit.itr(), hit.tsd());
//!     }
//!     ReportWriter::new(OutputPaths::default().in_dir("report")).write(&results)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod sequence;
pub mod tools;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
