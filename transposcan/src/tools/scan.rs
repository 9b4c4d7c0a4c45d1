use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
};
use std::path::Path;

use anyhow::Context as _;
use itertools::Itertools;

use crate::config::ScanConfig;
use crate::data_structs::Hit;
use crate::sequence::SequenceStore;
use crate::tools::classifier::KeywordClassifier;
use crate::tools::extract::{
    ExtractStats,
    FeatureExtractor,
};
use crate::tools::windows::{
    Aggregation,
    WindowAggregator,
};

/// Everything one scan produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResults {
    pub hits:        Vec<Hit>,
    pub aggregation: Aggregation,
    pub stats:       ExtractStats,
}

impl ScanResults {
    pub fn n_hits(&self) -> usize {
        self.hits.len()
    }
}

/// Runs classification, extraction, repeat detection and window aggregation
/// over one annotation and one sequence store.
#[derive(Debug, Clone)]
pub struct Scanner {
    extractor:  FeatureExtractor,
    aggregator: WindowAggregator,
}

impl Scanner {
    pub fn try_new(config: ScanConfig) -> anyhow::Result<Self> {
        Self::with_classifier(config, KeywordClassifier::default())
    }

    pub fn with_classifier(
        config: ScanConfig,
        classifier: KeywordClassifier,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            aggregator: WindowAggregator::from_config(&config),
            extractor:  FeatureExtractor::new(config, classifier),
        })
    }

    pub fn config(&self) -> &ScanConfig {
        self.extractor.config()
    }

    pub fn scan_lines<I, S>(
        &self,
        lines: I,
        store: &SequenceStore,
    ) -> ScanResults
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>, {
        let (hits, stats) = self.extractor.extract(lines, store);
        let aggregation = self.aggregator.aggregate(&hits, store);
        log::debug!(
            "Hits per replicon: {}",
            aggregation
                .summaries
                .iter()
                .map(|s| format!("{}={}", s.replicon, s.total))
                .join(", ")
        );
        ScanResults {
            hits,
            aggregation,
            stats,
        }
    }

    pub fn scan_reader<R: BufRead>(
        &self,
        reader: R,
        store: &SequenceStore,
    ) -> anyhow::Result<ScanResults> {
        let lines = reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read annotation lines")?;
        Ok(self.scan_lines(lines, store))
    }

    pub fn scan_path<P: AsRef<Path>>(
        &self,
        path: P,
        store: &SequenceStore,
    ) -> anyhow::Result<ScanResults> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Could not open annotation file {}", path.display()))?;
        self.scan_reader(BufReader::new(file), store)
            .with_context(|| format!("Could not read annotation file {}", path.display()))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            extractor:  FeatureExtractor::default(),
            aggregator: WindowAggregator::default(),
        }
    }
}
