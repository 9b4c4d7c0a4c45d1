//! This module contains the core data structures used throughout the
//! `transposcan` crate.
//!
//! - [`coords`]: [`Contig`] for genomic regions, used both for annotated
//!   feature coordinates and for flank-expanded windows.
//! - [`FeatureRecord`]: one parsed GFF feature line.
//! - [`Hit`]: a classified feature with its extracted window and the outcome
//!   of inverted repeat ([`ItrResult`]) and target site duplication
//!   ([`TsdResult`]) searches.
//! - [`WindowBin`] and [`RepliconSummary`]: hit density per window and per
//!   replicon.
//! - [`Strand`] for genomic strand.

pub mod coords;
mod density;
mod enums;
mod feature;
mod hit;

pub use coords::Contig;
pub use density::{
    RepliconSummary,
    WindowBin,
    DENSITY_SCALE,
};
pub use enums::Strand;
pub use feature::{
    FeatureRecord,
    COMMENT_PREFIX,
    GFF_COLUMNS,
};
pub use hit::{
    Extract,
    Hit,
    ItrResult,
    RepeatMatch,
    TsdResult,
    HIT_ID_PREFIX,
};
