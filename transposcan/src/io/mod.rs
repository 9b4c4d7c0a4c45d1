//! Report output.
//!
//! Input parsing lives with the types it produces:
//! [`SequenceStore::from_path`](crate::sequence::SequenceStore::from_path) for
//! FASTA and [`Scanner::scan_path`](crate::tools::Scanner::scan_path) for
//! annotation files.
pub mod report;

pub use report::{
    write_density,
    write_fasta,
    write_info,
    write_summary,
    OutputPaths,
    ReportWriter,
};
