use std::path::{
    Path,
    PathBuf,
};

use clap::Args;
use console::style;
use transposcan::config::{
    FLANK_SIZE,
    IR_MAX_MISMATCH_RATIO,
    MAX_IR_LEN,
    MIN_IR_LEN,
    TSD_MAX_LEN,
    TSD_MAX_MISMATCHES,
    TSD_MIN_LEN,
    WINDOW_SIZE,
};
use transposcan::io::report::{
    DEFAULT_DENSITY_NAME,
    DEFAULT_FASTA_NAME,
    DEFAULT_INFO_NAME,
    DEFAULT_SUMMARY_NAME,
};
use transposcan::prelude::*;

use crate::strings::scan as strings;
use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct OutputArgs {
    #[arg(long, default_value = DEFAULT_FASTA_NAME, help_heading = "OUTPUT", help = strings::OUT_FASTA)]
    out_fasta:   PathBuf,
    #[arg(long, default_value = DEFAULT_INFO_NAME, help_heading = "OUTPUT", help = strings::OUT_INFO)]
    out_info:    PathBuf,
    #[arg(long, default_value = DEFAULT_DENSITY_NAME, help_heading = "OUTPUT", help = strings::OUT_DENSITY)]
    out_density: PathBuf,
    #[arg(long, default_value = DEFAULT_SUMMARY_NAME, help_heading = "OUTPUT", help = strings::OUT_SUMMARY)]
    out_summary: PathBuf,
    #[arg(short, long, help_heading = "OUTPUT", help = strings::OUT_DIR)]
    out_dir:     Option<PathBuf>,
}

impl OutputArgs {
    pub fn paths(&self) -> OutputPaths {
        let paths = OutputPaths {
            fasta:   self.out_fasta.clone(),
            info:    self.out_info.clone(),
            density: self.out_density.clone(),
            summary: self.out_summary.clone(),
        };
        match &self.out_dir {
            Some(dir) => paths.in_dir(dir),
            None => paths,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ParamArgs {
    #[arg(long, default_value_t = FLANK_SIZE, help_heading = "DETECTION ARGS", help = strings::FLANK)]
    flank:          u64,
    #[arg(long, default_value_t = MIN_IR_LEN, help_heading = "DETECTION ARGS", help = strings::IR_MIN)]
    ir_min:         usize,
    #[arg(long, default_value_t = MAX_IR_LEN, help_heading = "DETECTION ARGS", help = strings::IR_MAX)]
    ir_max:         usize,
    #[arg(long, default_value_t = IR_MAX_MISMATCH_RATIO, help_heading = "DETECTION ARGS", help = strings::IR_RATIO)]
    ir_ratio:       f64,
    #[arg(long, default_value_t = TSD_MIN_LEN, help_heading = "DETECTION ARGS", help = strings::TSD_MIN)]
    tsd_min:        usize,
    #[arg(long, default_value_t = TSD_MAX_LEN, help_heading = "DETECTION ARGS", help = strings::TSD_MAX)]
    tsd_max:        usize,
    #[arg(long, default_value_t = TSD_MAX_MISMATCHES, help_heading = "DETECTION ARGS", help = strings::TSD_MISMATCHES)]
    tsd_mismatches: usize,
    #[arg(short, long, default_value_t = WINDOW_SIZE, help_heading = "DETECTION ARGS", help = strings::WINDOW)]
    window:         u64,
}

impl ParamArgs {
    pub fn config(&self) -> ScanConfig {
        ScanConfig::default()
            .with_flank_size(self.flank)
            .with_ir_min_len(self.ir_min)
            .with_ir_max_len(self.ir_max)
            .with_ir_max_mismatch_ratio(self.ir_ratio)
            .with_tsd_min_len(self.tsd_min)
            .with_tsd_max_len(self.tsd_max)
            .with_tsd_max_mismatches(self.tsd_mismatches)
            .with_window_size(self.window)
    }
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ScanArgs {
    #[arg(value_parser, required = true, help = strings::GFF)]
    gff:    PathBuf,
    #[arg(value_parser, required = true, help = strings::FASTA)]
    fasta:  PathBuf,
    #[clap(flatten)]
    output: OutputArgs,
    #[clap(flatten)]
    params: ParamArgs,
}

fn check_input(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("Path {} does not exist.", style(path.display()).red())
    }
    if !path.is_file() {
        anyhow::bail!("Path {} is not a file.", style(path.display()).red())
    }
    Ok(())
}

/// Window width as printed in the run summary, `10 kb` or `2500 bp`.
fn window_label(size: u64) -> String {
    if size > 0 && size % 1_000 == 0 {
        format!("{} kb", size / 1_000)
    }
    else {
        format!("{} bp", size)
    }
}

impl ScanArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<ScanResults> {
        check_input(&self.gff)?;
        check_input(&self.fasta)?;
        let scanner = Scanner::try_new(self.params.config())?;
        let paths = self.output.paths();

        let spinner = utils.spinner()?;
        spinner.set_message(format!("Reading {}", self.fasta.display()));
        let store = SequenceStore::from_path(&self.fasta)?;

        spinner.set_message(format!("Scanning {}", self.gff.display()));
        let results = scanner.scan_path(&self.gff, &store)?;

        spinner.set_message("Writing report");
        ReportWriter::new(paths.clone()).write(&results)?;
        spinner.finish_and_clear();

        println!(
            "Transposases detected: {}",
            style(results.n_hits()).green()
        );
        println!("FASTA output: {}", paths.fasta.display());
        println!("Structural details: {}", paths.info.display());
        println!(
            "Density per {}: {}",
            window_label(scanner.config().window_size),
            paths.density.display()
        );
        println!("Summary per replicon: {}", paths.summary.display());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[clap(flatten)]
        args: ScanArgs,
    }

    fn parse(args: &[&str]) -> ScanArgs {
        TestCli::try_parse_from(std::iter::once("transposcan").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["a.gff", "a.fna"]);
        assert_eq!(args.params.config(), ScanConfig::default());
        assert_eq!(args.output.paths(), OutputPaths::default());
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "a.gff",
            "a.fna",
            "--flank",
            "200",
            "--tsd-mismatches",
            "0",
            "--window",
            "5000",
            "--out-dir",
            "report",
            "--out-info",
            "/tmp/info.tsv",
        ]);
        let config = args.params.config();
        assert_eq!(config.flank_size, 200);
        assert_eq!(config.tsd_max_mismatches, 0);
        assert_eq!(config.window_size, 5_000);

        let paths = args.output.paths();
        assert_eq!(paths.fasta, PathBuf::from("report/transposases.fna"));
        assert_eq!(paths.info, PathBuf::from("/tmp/info.tsv"));
    }

    #[test]
    fn test_window_label() {
        assert_eq!(window_label(10_000), "10 kb");
        assert_eq!(window_label(5_000), "5 kb");
        assert_eq!(window_label(2_500), "2500 bp");
    }

    #[test]
    fn test_missing_positional() {
        assert!(TestCli::try_parse_from(["transposcan", "a.gff"]).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let fasta = dir.path().join("genome.fna");
        fs::write(&fasta, ">chr1\nACGT\n").unwrap();
        let gff = dir.path().join("absent.gff");

        let args = parse(&[gff.to_str().unwrap(), fasta.to_str().unwrap()]);
        let error = args.run(&UtilsArgs::default()).unwrap_err();
        assert!(error.to_string().contains("does not exist"));
    }

    #[test]
    fn test_run() {
        let dir = tempfile::tempdir().unwrap();
        let fasta = dir.path().join("genome.fna");
        let gff = dir.path().join("genome.gff");
        fs::write(&fasta, format!(">chr1\n{}\n", "ACGTTGCA".repeat(100))).unwrap();
        fs::write(
            &gff,
            "##gff-version 3\nchr1\tprokka\tCDS\t100\t400\t.\t+\t.\tproduct=transposase\n",
        )
        .unwrap();
        let out_dir = dir.path().join("out");

        let args = parse(&[
            gff.to_str().unwrap(),
            fasta.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
        ]);
        let results = args.run(&UtilsArgs::default()).unwrap();
        assert_eq!(results.n_hits(), 1);
        for path in args.output.paths().iter() {
            assert!(path.is_file(), "{}", path.display());
        }
        let summary = fs::read_to_string(out_dir.join("transposase_summary_per_replicon.tsv")).unwrap();
        assert!(summary.ends_with("chr1\t1\t800\t12.5\n"));
    }
}
