use clap::Args;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::LevelFilter;

use crate::strings::utils as strings;

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct UtilsArgs {
    #[arg(short, long, default_value_t = 0, help_heading = "UTILS", help = strings::THREADS)]
    pub threads:  usize,
    #[arg(short, long, default_value_t = false, help_heading = "UTILS", help = strings::VERBOSE)]
    pub verbose:  bool,
    #[arg(long, default_value_t = false, help_heading = "UTILS", help = strings::PROGRESS)]
    pub progress: bool,
}

impl UtilsArgs {
    /// Initialises logging and the global thread pool.
    pub fn setup(&self) -> anyhow::Result<()> {
        let mut builder = pretty_env_logger::formatted_builder();
        builder
            .filter_level(LevelFilter::Info)
            .parse_default_env();
        if self.verbose {
            builder.filter_level(LevelFilter::Debug);
        }
        builder.try_init()?;

        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build_global()?;
        log::debug!(
            "Using {} threads",
            rayon::current_num_threads()
        );
        Ok(())
    }

    pub fn spinner(&self) -> anyhow::Result<ProgressBar> {
        if self.progress {
            init_spinner()
        }
        else {
            Ok(ProgressBar::hidden())
        }
    }
}

pub fn init_spinner() -> anyhow::Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message("Processing...");
    Ok(spinner)
}
