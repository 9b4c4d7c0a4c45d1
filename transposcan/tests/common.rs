#![allow(dead_code)]
use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use bio::io::fasta::Writer as FastaWriter;
use rand::rngs::StdRng;
use rand::{
    Rng,
    SeedableRng,
};
use transposcan::prelude::*;

const BASES: [u8; 4] = *b"ACGT";

/// Random genome with planted elements and a matching GFF.
pub struct DemoGenome {
    rng:       StdRng,
    replicons: Vec<(String, Vec<u8>)>,
    features:  Vec<String>,
}

impl DemoGenome {
    pub fn new(seed: u64) -> Self {
        Self {
            rng:       StdRng::seed_from_u64(seed),
            replicons: Vec::new(),
            features:  vec!["##gff-version 3".to_string()],
        }
    }

    pub fn random_sequence(
        &mut self,
        length: usize,
    ) -> Vec<u8> {
        (0..length)
            .map(|_| BASES[self.rng.gen_range(0..4)])
            .collect()
    }

    pub fn add_replicon(
        &mut self,
        name: &str,
        length: usize,
    ) -> &mut Self {
        let sequence = self.random_sequence(length);
        self.replicons.push((name.to_string(), sequence));
        self
    }

    /// Overwrites bases of `name` starting at `offset`.
    pub fn plant(
        &mut self,
        name: &str,
        offset: usize,
        bases: &[u8],
    ) -> &mut Self {
        let (_, sequence) = self
            .replicons
            .iter_mut()
            .find(|(n, _)| n == name)
            .expect("replicon exists");
        sequence[offset..offset + bases.len()].copy_from_slice(bases);
        self
    }

    pub fn add_feature(
        &mut self,
        name: &str,
        start: u64,
        end: u64,
        strand: &str,
        attributes: &str,
    ) -> &mut Self {
        self.features.push(format!(
            "{}\tprokka\tCDS\t{}\t{}\t.\t{}\t0\t{}",
            name, start, end, strand, attributes
        ));
        self
    }

    pub fn add_line(
        &mut self,
        line: &str,
    ) -> &mut Self {
        self.features.push(line.to_string());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.features
    }

    pub fn store(&self) -> SequenceStore {
        SequenceStore::try_from_records(
            self.replicons
                .iter()
                .map(|(n, s)| (n.as_str(), s.clone())),
        )
        .unwrap()
    }

    /// Writes `genome.gff` and `genome.fna` into `dir`.
    pub fn write(
        &self,
        dir: &Path,
    ) -> anyhow::Result<(PathBuf, PathBuf)> {
        let gff_path = dir.join("genome.gff");
        let mut gff = BufWriter::new(File::create(&gff_path)?);
        for line in &self.features {
            writeln!(gff, "{}", line)?;
        }
        gff.flush()?;

        let fasta_path = dir.join("genome.fna");
        let mut fasta = FastaWriter::to_file(&fasta_path)?;
        for (name, sequence) in &self.replicons {
            fasta.write(name, Some("demo replicon"), sequence)?;
        }
        fasta.flush()?;
        Ok((gff_path, fasta_path))
    }
}

pub fn read_table(path: &Path) -> Vec<Vec<String>> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.split('\t').map(String::from).collect())
        .collect()
}
