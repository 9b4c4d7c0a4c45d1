use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context as _;
use csv::{
    QuoteStyle,
    WriterBuilder,
};
use noodles_fasta::record::{
    Definition,
    Sequence,
};
use noodles_fasta::Record as FastaRecord;
use serde::Serialize;

use crate::data_structs::{
    Hit,
    RepliconSummary,
    WindowBin,
};
use crate::tools::ScanResults;

pub const DEFAULT_FASTA_NAME: &str = "transposases.fna";
pub const DEFAULT_INFO_NAME: &str = "transposase_info.tsv";
pub const DEFAULT_DENSITY_NAME: &str = "transposase_density_10kb.tsv";
pub const DEFAULT_SUMMARY_NAME: &str = "transposase_summary_per_replicon.tsv";

/// Residues per line of the extract FASTA.
pub const FASTA_LINE_WIDTH: usize = 60;

pub const INFO_HEADER: [&str; 9] = [
    "ID",
    "Name",
    "Start",
    "End",
    "Strand",
    "Length (bp)",
    "Inverted Repeats",
    "TSDs",
    "Annotation",
];
pub const DENSITY_HEADER: [&str; 4] = ["Replicon", "Start", "End", "Transposases"];
pub const SUMMARY_HEADER: [&str; 4] = [
    "Replicon",
    "Total_Transposases",
    "Replicon_Length_bp",
    "Proportion_per_10kb",
];

/// Locations of the four report artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub fasta:   PathBuf,
    pub info:    PathBuf,
    pub density: PathBuf,
    pub summary: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            fasta:   DEFAULT_FASTA_NAME.into(),
            info:    DEFAULT_INFO_NAME.into(),
            density: DEFAULT_DENSITY_NAME.into(),
            summary: DEFAULT_SUMMARY_NAME.into(),
        }
    }
}

impl OutputPaths {
    /// Places every relative path under `dir`. Absolute paths are kept.
    pub fn in_dir<P: AsRef<Path>>(
        self,
        dir: P,
    ) -> Self {
        let dir = dir.as_ref();
        Self {
            fasta:   dir.join(self.fasta),
            info:    dir.join(self.info),
            density: dir.join(self.density),
            summary: dir.join(self.summary),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [&self.fasta, &self.info, &self.density, &self.summary]
            .into_iter()
            .map(PathBuf::as_path)
    }
}

#[derive(Serialize)]
struct HitRow<'a> {
    id:         String,
    name:       &'a str,
    start:      u64,
    end:        u64,
    strand:     &'a str,
    length:     u64,
    itr:        String,
    tsd:        String,
    annotation: &'a str,
}

impl<'a> From<&'a Hit> for HitRow<'a> {
    fn from(hit: &'a Hit) -> Self {
        let record = hit.record();
        Self {
            id:         hit.name(),
            name:       record.label(),
            start:      record.start(),
            end:        record.end(),
            strand:     record.strand_symbol(),
            length:     record.length_bp(),
            itr:        hit.itr().to_string(),
            tsd:        hit.tsd().to_string(),
            annotation: record.label(),
        }
    }
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    replicon:   &'a str,
    total:      usize,
    length:     u64,
    proportion: String,
}

impl<'a> From<&'a RepliconSummary> for SummaryRow<'a> {
    fn from(summary: &'a RepliconSummary) -> Self {
        Self {
            replicon:   summary.replicon.as_str(),
            total:      summary.total,
            length:     summary.length,
            proportion: summary.density_repr(),
        }
    }
}

/// Serializes `rows` as a headed, tab separated, unquoted table. The header
/// is written even when there are no rows.
fn write_table<W, T, I>(
    sink: W,
    header: &[&str],
    rows: I,
) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>, {
    let mut writer = WriterBuilder::default()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(sink);
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes hit windows as FASTA, `>transposase_<n> <seqid>:<start>-<end>(<strand>)`.
pub fn write_fasta<W: Write>(
    mut sink: W,
    hits: &[Hit],
) -> anyhow::Result<()> {
    let mut writer = noodles_fasta::io::writer::Builder::default()
        .set_line_base_count(FASTA_LINE_WIDTH)
        .build_from_writer(&mut sink);
    for hit in hits {
        let definition = Definition::new(hit.name(), Some(hit.description().into()));
        let record = FastaRecord::new(definition, Sequence::from(hit.sequence().to_vec()));
        writer.write_record(&record)?;
    }
    drop(writer);
    sink.flush()?;
    Ok(())
}

pub fn write_info<W: Write>(
    sink: W,
    hits: &[Hit],
) -> anyhow::Result<()> {
    write_table(sink, &INFO_HEADER, hits.iter().map(HitRow::from))
}

pub fn write_density<W: Write>(
    sink: W,
    bins: &[WindowBin],
) -> anyhow::Result<()> {
    write_table(sink, &DENSITY_HEADER, bins)
}

pub fn write_summary<W: Write>(
    sink: W,
    summaries: &[RepliconSummary],
) -> anyhow::Result<()> {
    write_table(sink, &SUMMARY_HEADER, summaries.iter().map(SummaryRow::from))
}

/// Writes the four report artifacts of a scan.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    paths: OutputPaths,
}

impl ReportWriter {
    pub fn new(paths: OutputPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    fn create(path: &Path) -> anyhow::Result<BufWriter<File>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create directory {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Could not create {}", path.display()))?;
        Ok(BufWriter::new(file))
    }

    pub fn write(
        &self,
        results: &ScanResults,
    ) -> anyhow::Result<()> {
        write_fasta(Self::create(&self.paths.fasta)?, &results.hits)
            .with_context(|| format!("Failed to write {}", self.paths.fasta.display()))?;
        write_info(Self::create(&self.paths.info)?, &results.hits)
            .with_context(|| format!("Failed to write {}", self.paths.info.display()))?;
        write_density(
            Self::create(&self.paths.density)?,
            &results.aggregation.bins,
        )
        .with_context(|| format!("Failed to write {}", self.paths.density.display()))?;
        write_summary(
            Self::create(&self.paths.summary)?,
            &results.aggregation.summaries,
        )
        .with_context(|| format!("Failed to write {}", self.paths.summary.display()))?;
        log::info!(
            "Report written: {}",
            self.paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(())
    }
}
