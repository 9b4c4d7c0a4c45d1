use std::str::FromStr;

use anyhow::{
    anyhow,
    Context as _,
};
use arcstr::ArcStr;

use crate::data_structs::coords::Contig;
use crate::data_structs::enums::Strand;
use crate::getter_fn;

/// Number of tab separated columns in a GFF feature line.
pub const GFF_COLUMNS: usize = 9;
/// Prefix of GFF comment and directive lines.
pub const COMMENT_PREFIX: char = '#';

/// One feature line of a GFF annotation.
///
/// Coordinates are kept exactly as annotated: 1-based and inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    contig:        Contig,
    source:        ArcStr,
    feature_type:  ArcStr,
    strand_symbol: ArcStr,
    attributes:    String,
}

impl FeatureRecord {
    getter_fn!(contig, Contig);

    getter_fn!(source, ArcStr);

    getter_fn!(feature_type, ArcStr);

    getter_fn!(attributes, String);

    /// Sequence identifier of the replicon the feature lies on.
    pub fn seqid(&self) -> &ArcStr {
        self.contig.seqname()
    }

    pub fn start(&self) -> u64 {
        self.contig.start()
    }

    pub fn end(&self) -> u64 {
        self.contig.end()
    }

    pub fn strand(&self) -> Strand {
        self.contig.strand()
    }

    /// The strand column as written in the file.
    pub fn strand_symbol(&self) -> &str {
        self.strand_symbol.as_str()
    }

    /// Annotated feature length in bases.
    pub fn length_bp(&self) -> u64 {
        self.end().abs_diff(self.start()) + 1
    }

    /// First `;` delimited token of the attribute column.
    pub fn label(&self) -> &str {
        self.attributes
            .split(';')
            .next()
            .unwrap_or_default()
    }

    /// Whether a raw line is a comment or directive.
    pub fn is_comment(line: &str) -> bool {
        line.starts_with(COMMENT_PREFIX)
    }
}

impl FromStr for FeatureRecord {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.trim().split('\t').collect::<Vec<_>>();
        let [seqid, source, feature_type, start, end, _score, strand, _phase, attributes] =
            fields.as_slice()
        else {
            return Err(anyhow!(
                "Expected {} tab separated columns, found {}",
                GFF_COLUMNS,
                fields.len()
            ));
        };

        let start = start
            .parse::<u64>()
            .with_context(|| format!("Invalid start coordinate '{}'", start))?;
        let end = end
            .parse::<u64>()
            .with_context(|| format!("Invalid end coordinate '{}'", end))?;
        let contig = Contig::try_new(
            ArcStr::from(*seqid),
            start,
            end,
            Strand::from_str(strand)?,
        )?;

        Ok(Self {
            contig,
            source: ArcStr::from(*source),
            feature_type: ArcStr::from(*feature_type),
            strand_symbol: ArcStr::from(*strand),
            attributes: attributes.to_string(),
        })
    }
}
