pub use crate::config::ScanConfig;
pub use crate::data_structs::{
    Contig,
    FeatureRecord,
    Hit,
    ItrResult,
    RepeatMatch,
    RepliconSummary,
    Strand,
    TsdResult,
    WindowBin,
};
pub use crate::error::StoreError;
pub use crate::io::{
    OutputPaths,
    ReportWriter,
};
pub use crate::sequence::{
    reverse_complement,
    SequenceStore,
};
pub use crate::tools::{
    Aggregation,
    ExtractStats,
    FeatureExtractor,
    KeywordClassifier,
    RepeatDetector,
    ScanResults,
    Scanner,
    WindowAggregator,
};
