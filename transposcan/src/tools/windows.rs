use hashbrown::HashMap;
use rayon::prelude::*;

use crate::config::ScanConfig;
use crate::data_structs::{
    Contig,
    Hit,
    RepliconSummary,
    WindowBin,
};
use crate::sequence::SequenceStore;

/// Window table and per-replicon summary of one scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Bins of every replicon, replicons in store order, bins by start.
    pub bins:      Vec<WindowBin>,
    pub summaries: Vec<RepliconSummary>,
}

/// Bins hit coordinates into fixed-size windows.
///
/// Hits are counted by their annotated range, not the flank-expanded one.
/// A hit counts once toward every bin it overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowAggregator {
    window_size: u64,
}

impl WindowAggregator {
    pub fn new(window_size: u64) -> Self {
        Self { window_size }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.window_size)
    }

    pub fn window_size(&self) -> u64 {
        self.window_size
    }

    /// Number of bins tiling a replicon of `length` bases.
    pub fn n_bins(
        &self,
        length: u64,
    ) -> u64 {
        if self.window_size == 0 {
            return 0;
        }
        length.div_ceil(self.window_size)
    }

    /// `[start, end)` of bin `index`. The last bin is cut at `length`.
    pub fn bin_bounds(
        &self,
        index: u64,
        length: u64,
    ) -> (u64, u64) {
        let start = index * self.window_size;
        (start, (start + self.window_size).min(length))
    }

    /// Indices of the bins a hit overlaps.
    fn overlapping_bins<'a>(
        &'a self,
        contig: &'a Contig,
        length: u64,
    ) -> impl Iterator<Item = usize> + 'a {
        let n_bins = self.n_bins(length);
        let (lo, hi) = if n_bins == 0 {
            (1, 0)
        }
        else {
            (
                (contig.start() / self.window_size).saturating_sub(1),
                (contig.end() / self.window_size).min(n_bins - 1),
            )
        };
        (lo..=hi)
            .filter(move |&index| {
                let (start, end) = self.bin_bounds(index, length);
                contig.overlaps(start, end)
            })
            .map(|index| index as usize)
    }

    /// Per-bin hit counts for one replicon.
    pub fn count_bins(
        &self,
        length: u64,
        contigs: &[&Contig],
    ) -> Vec<usize> {
        let n_bins = self.n_bins(length) as usize;
        contigs
            .par_iter()
            .fold(
                || vec![0usize; n_bins],
                |mut counts, contig| {
                    for index in self.overlapping_bins(contig, length) {
                        counts[index] += 1;
                    }
                    counts
                },
            )
            .reduce(
                || vec![0usize; n_bins],
                |mut left, right| {
                    left.iter_mut()
                        .zip(right)
                        .for_each(|(l, r)| *l += r);
                    left
                },
            )
    }

    /// Builds the window table and summaries for every replicon in `store`,
    /// including replicons without hits.
    pub fn aggregate(
        &self,
        hits: &[Hit],
        store: &SequenceStore,
    ) -> Aggregation {
        let mut by_replicon: HashMap<&str, Vec<&Contig>> = HashMap::new();
        for hit in hits {
            by_replicon
                .entry(hit.record().seqid().as_str())
                .or_default()
                .push(hit.record().contig());
        }

        let mut aggregation = Aggregation::default();
        for (replicon, length) in store.lengths() {
            let contigs = by_replicon
                .remove(replicon.as_str())
                .unwrap_or_default();
            let counts = self.count_bins(length, &contigs);
            aggregation
                .bins
                .extend(counts.into_iter().enumerate().map(|(index, count)| {
                    let (start, end) = self.bin_bounds(index as u64, length);
                    WindowBin {
                        replicon: replicon.clone(),
                        start,
                        end,
                        count,
                    }
                }));
            aggregation.summaries.push(RepliconSummary::new(
                replicon.clone(),
                contigs.len(),
                length,
            ));
        }

        for (replicon, contigs) in by_replicon {
            log::warn!(
                "{} hits on replicon {} are not in the sequence store",
                contigs.len(),
                replicon
            );
        }
        aggregation
    }
}

impl Default for WindowAggregator {
    fn default() -> Self {
        Self::from_config(&ScanConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rstest::{
        fixture,
        rstest,
    };

    use super::*;
    use crate::data_structs::Strand;

    fn contig(
        start: u64,
        end: u64,
    ) -> Contig {
        Contig::try_new("chr1".into(), start, end, Strand::Forward).unwrap()
    }

    #[fixture]
    fn aggregator() -> WindowAggregator {
        WindowAggregator::default()
    }

    #[rstest]
    fn test_tiling(aggregator: WindowAggregator) {
        assert_eq!(aggregator.n_bins(25_000), 3);
        assert_eq!(
            (0..3)
                .map(|i| aggregator.bin_bounds(i, 25_000))
                .collect::<Vec<_>>(),
            vec![(0, 10_000), (10_000, 20_000), (20_000, 25_000)]
        );
        assert_eq!(aggregator.n_bins(20_000), 2);
        assert_eq!(aggregator.n_bins(1), 1);
        assert_eq!(aggregator.n_bins(0), 0);
    }

    #[rstest]
    #[case::inside_first(100, 5_000, vec![1, 0, 0])]
    #[case::straddles(9_990, 10_010, vec![1, 1, 0])]
    #[case::on_boundary(10_000, 10_000, vec![1, 1, 0])]
    #[case::touches_last(20_000, 25_000, vec![0, 1, 1])]
    #[case::spans_all(5, 24_000, vec![1, 1, 1])]
    #[case::past_end(30_000, 31_000, vec![0, 0, 0])]
    fn test_overlap(
        aggregator: WindowAggregator,
        #[case] start: u64,
        #[case] end: u64,
        #[case] expected: Vec<usize>,
    ) {
        let hit = contig(start, end);
        assert_eq!(aggregator.count_bins(25_000, &[&hit]), expected);
    }

    #[rstest]
    fn test_counts_add_up(aggregator: WindowAggregator) {
        let contigs = (0..500)
            .map(|i| contig(i * 97, i * 97 + 300))
            .collect::<Vec<_>>();
        let refs = contigs.iter().collect::<Vec<_>>();
        let counts = aggregator.count_bins(48_800, &refs);
        assert_eq!(counts.len(), 5);

        let naive = (0..5)
            .map(|i| {
                let (start, end) = aggregator.bin_bounds(i, 48_800);
                contigs
                    .iter()
                    .filter(|c| c.overlaps(start, end))
                    .count()
            })
            .collect::<Vec<_>>();
        assert_eq!(counts, naive);
    }

    #[rstest]
    fn test_empty_replicon(aggregator: WindowAggregator) {
        let hit = contig(0, 10);
        assert!(aggregator.count_bins(0, &[&hit]).is_empty());
    }

    #[test]
    fn test_aggregate_reports_every_replicon() {
        use crate::tools::FeatureExtractor;

        let store = SequenceStore::try_from_records([
            ("chr1", vec![b'A'; 25_000]),
            ("plasmid", vec![b'C'; 4_000]),
            ("empty", Vec::new()),
        ])
        .unwrap();
        let lines = [
            "chr1\tprokka\tCDS\t9990\t10010\t.\t+\t.\tproduct=transposase",
            "chr1\tprokka\tCDS\t100\t5000\t.\t-\t.\tproduct=IS3 family",
        ];
        let (hits, _) = FeatureExtractor::default().extract(lines, &store);
        let aggregation = WindowAggregator::default().aggregate(&hits, &store);

        assert_eq!(
            aggregation
                .bins
                .iter()
                .map(|b| (b.replicon.as_str(), b.start, b.end, b.count))
                .collect::<Vec<_>>(),
            vec![
                ("chr1", 0, 10_000, 2),
                ("chr1", 10_000, 20_000, 1),
                ("chr1", 20_000, 25_000, 0),
                ("plasmid", 0, 4_000, 0),
            ]
        );

        let summaries = &aggregation.summaries;
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].total, 2);
        assert_approx_eq!(summaries[0].density(), 0.8);
        assert_eq!(summaries[1].total, 0);
        assert_eq!(summaries[1].density_repr(), "0.0");
        assert_eq!(summaries[2].density_repr(), "0");
    }
}
