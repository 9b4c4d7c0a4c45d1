use std::str::FromStr;

use rayon::prelude::*;

use crate::config::ScanConfig;
use crate::data_structs::{
    Extract,
    FeatureRecord,
    Hit,
};
use crate::error::StoreError;
use crate::sequence::{
    reverse_complement,
    SequenceStore,
};
use crate::tools::classifier::KeywordClassifier;
use crate::tools::repeats::RepeatDetector;

/// Counts of what happened to the input lines of one extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub lines:            usize,
    pub comments:         usize,
    pub malformed:        usize,
    pub unclassified:     usize,
    pub missing_replicon: usize,
    pub extracted:        usize,
}

/// Turns annotation lines into [`Hit`]s.
///
/// Hits are numbered from 1 in input order among the lines that pass
/// classification and have a replicon; repeat detection runs in parallel but
/// the returned vector keeps that order.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    config:     ScanConfig,
    classifier: KeywordClassifier,
    detector:   RepeatDetector,
}

impl FeatureExtractor {
    pub fn new(
        config: ScanConfig,
        classifier: KeywordClassifier,
    ) -> Self {
        Self {
            detector: RepeatDetector::new(config.clone()),
            config,
            classifier,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn classifier(&self) -> &KeywordClassifier {
        &self.classifier
    }

    /// Classifies one parsed record and cuts out its flank-expanded window.
    ///
    /// Returns `Ok(None)` when the record is not a mobile element.
    pub fn extract_record(
        &self,
        record: FeatureRecord,
        index: usize,
        store: &SequenceStore,
    ) -> Result<Option<Extract>, StoreError> {
        if !self
            .classifier
            .classify(record.attributes())
        {
            return Ok(None);
        }

        let length = store
            .length(record.seqid())
            .ok_or_else(|| StoreError::NotFound(record.seqid().to_string()))?;
        let flanked = record
            .contig()
            .flanked(self.config.flank_size)
            .clamp(length as u64);
        let window = store.slice(
            record.seqid(),
            flanked.start() as usize,
            flanked.end() as usize,
        )?;
        log::trace!(
            "{} {} from {}: window {} ({} bp)",
            record.feature_type(),
            record.contig(),
            record.source(),
            flanked,
            flanked.length()
        );
        let sequence = if record.strand().is_reverse() {
            reverse_complement(window)
        }
        else {
            window.to_vec()
        };

        Ok(Some(Extract {
            index,
            record,
            flanked,
            sequence,
        }))
    }

    /// Parses, classifies and cuts out windows for every qualifying line.
    pub fn extract_windows<I, S>(
        &self,
        lines: I,
        store: &SequenceStore,
    ) -> (Vec<Extract>, ExtractStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>, {
        let mut stats = ExtractStats::default();
        let mut extracts = Vec::new();

        for (line_no, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            stats.lines += 1;
            if FeatureRecord::is_comment(line) {
                stats.comments += 1;
                continue;
            }
            let record = match FeatureRecord::from_str(line) {
                Ok(record) => record,
                Err(e) => {
                    log::debug!("Skipping line {}: {:#}", line_no + 1, e);
                    stats.malformed += 1;
                    continue;
                },
            };

            match self.extract_record(record, extracts.len() + 1, store) {
                Ok(Some(extract)) => extracts.push(extract),
                Ok(None) => stats.unclassified += 1,
                Err(e) => {
                    log::debug!("Skipping line {}: {}", line_no + 1, e);
                    stats.missing_replicon += 1;
                },
            }
        }
        stats.extracted = extracts.len();
        (extracts, stats)
    }

    /// Full extraction: windows plus inverted repeat and target site
    /// duplication calls.
    pub fn extract<I, S>(
        &self,
        lines: I,
        store: &SequenceStore,
    ) -> (Vec<Hit>, ExtractStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>, {
        let (extracts, stats) = self.extract_windows(lines, store);
        let hits = extracts
            .into_par_iter()
            .map(|extract| self.detector.annotate(extract))
            .collect::<Vec<_>>();
        log::info!(
            "Extracted {} hits from {} lines ({} malformed, {} without replicon)",
            stats.extracted,
            stats.lines,
            stats.malformed,
            stats.missing_replicon
        );
        (hits, stats)
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(ScanConfig::default(), KeywordClassifier::default())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{
        fixture,
        rstest,
    };

    use super::*;
    use crate::data_structs::Strand;

    fn pattern(len: usize) -> Vec<u8> {
        b"ACGGTCATGCAATCGGATCCATGACTGGCATTAG"
            .iter()
            .cycle()
            .take(len)
            .cloned()
            .collect()
    }

    #[fixture]
    fn store() -> SequenceStore {
        SequenceStore::try_from_records([
            ("chr1", pattern(1000)),
            ("plasmid", pattern(300)),
        ])
        .unwrap()
    }

    #[rstest]
    fn test_single_record(store: SequenceStore) {
        let lines = ["chr1\tprokka\tCDS\t100\t400\t.\t+\t.\tproduct=transposase"];
        let (hits, stats) = FeatureExtractor::default().extract(lines, &store);
        assert_eq!(hits.len(), 1);
        assert_eq!(stats.extracted, 1);

        let hit = &hits[0];
        assert_eq!(hit.name(), "transposase_1");
        assert_eq!(hit.record().length_bp(), 301);
        assert_eq!(hit.flanked().start(), 0);
        assert_eq!(hit.flanked().end(), 550);
        assert_eq!(hit.sequence().len(), 550);
        assert_eq!(hit.sequence(), &store.get("chr1").unwrap()[0..550]);
    }

    #[rstest]
    fn test_flank_clamped_at_both_ends(store: SequenceStore) {
        let lines = ["plasmid\tprokka\tCDS\t10\t250\t.\t+\t.\tproduct=IS5 family"];
        let (hits, _) = FeatureExtractor::default().extract(lines, &store);
        let hit = &hits[0];
        assert_eq!(hit.flanked().start(), 0);
        assert_eq!(hit.flanked().end(), 300);
        assert_eq!(hit.sequence().len() as u64, hit.flanked().length());
        assert_eq!(hit.flanked().to_string(), "plasmid:0-300");
        assert_eq!(hit.record().feature_type().as_str(), "CDS");
        assert_eq!(hit.record().source().as_str(), "prokka");
    }

    #[rstest]
    fn test_reverse_strand_window(store: SequenceStore) {
        let lines = ["chr1\tprokka\tCDS\t400\t500\t.\t-\t.\tproduct=transposase"];
        let (hits, _) = FeatureExtractor::default().extract(lines, &store);
        let hit = &hits[0];
        assert_eq!(hit.record().strand(), Strand::Reverse);
        let forward = store.slice("chr1", 250, 650).unwrap();
        assert_eq!(hit.sequence(), reverse_complement(forward).as_slice());
    }

    #[rstest]
    fn test_skips_and_numbering(store: SequenceStore) {
        let lines = vec![
            "##gff-version 3",
            "chr1\tprokka\tCDS\t100\t400\t.\t+\t.\tproduct=hypothetical protein",
            "chr1\tprokka\tCDS\t100\t400\t.\t+\t.\tproduct=tnpA",
            "chr1\tprokka\tCDS\t100\t400",
            "chrX\tprokka\tCDS\t100\t400\t.\t+\t.\tproduct=transposase",
            "chr1\tprokka\tCDS\t900\t100\t.\t+\t.\tproduct=transposase",
            "chr1\tprokka\tCDS\tfoo\t100\t.\t+\t.\tproduct=transposase",
            "",
            "plasmid\tprokka\tCDS\t20\t80\t.\t-\t.\tproduct=IS200/IS605 family",
        ];
        let (hits, stats) = FeatureExtractor::default().extract(lines, &store);
        assert_eq!(
            hits.iter()
                .map(|h| (h.name(), h.record().seqid().to_string()))
                .collect::<Vec<_>>(),
            vec![
                ("transposase_1".to_string(), "chr1".to_string()),
                ("transposase_2".to_string(), "plasmid".to_string()),
            ]
        );
        assert_eq!(
            stats,
            ExtractStats {
                lines:            9,
                comments:         1,
                malformed:        4,
                unclassified:     1,
                missing_replicon: 1,
                extracted:        2,
            }
        );
    }

    #[rstest]
    fn test_order_preserved_for_many_hits(store: SequenceStore) {
        let lines = (0..200)
            .map(|i| {
                format!(
                    "chr1\tprokka\tCDS\t{}\t{}\t.\t{}\t.\tproduct=transposase {}",
                    i + 1,
                    i + 50,
                    if i % 2 == 0 { "+" } else { "-" },
                    i
                )
            })
            .collect::<Vec<_>>();
        let (hits, _) = FeatureExtractor::default().extract(&lines, &store);
        assert_eq!(hits.len(), 200);
        for (i, hit) in hits.iter().enumerate() {
            assert_eq!(hit.index(), i + 1);
            assert_eq!(hit.record().start(), i as u64 + 1);
        }
    }

    #[rstest]
    fn test_missing_replicon_error(store: SequenceStore) {
        let record = FeatureRecord::from_str(
            "chr9\tprokka\tCDS\t1\t10\t.\t+\t.\tproduct=transposase",
        )
        .unwrap();
        let result = FeatureExtractor::default().extract_record(record, 1, &store);
        assert_eq!(result, Err(StoreError::NotFound("chr9".to_string())));
    }
}
