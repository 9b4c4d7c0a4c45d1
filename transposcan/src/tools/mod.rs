//! The analysis pipeline.
//!
//! - [`classifier`]: keyword and IS family matching on annotation text.
//! - [`extract`]: parses feature lines and cuts out flank-expanded windows
//!   for classified features.
//! - [`repeats`]: inverted terminal repeat and target site duplication
//!   searches on a window.
//! - [`windows`]: fixed-size window counts and per-replicon density.
//! - [`scan`]: ties the stages together.
pub mod classifier;
pub mod extract;
pub mod repeats;
pub mod scan;
pub mod windows;

pub use classifier::KeywordClassifier;
pub use extract::{
    ExtractStats,
    FeatureExtractor,
};
pub use repeats::RepeatDetector;
pub use scan::{
    ScanResults,
    Scanner,
};
pub use windows::{
    Aggregation,
    WindowAggregator,
};
