mod scan;
mod strings;
mod utils;

use clap::Parser;
use scan::ScanArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[clap(flatten)]
    args:  ScanArgs,
    #[clap(flatten)]
    utils: UtilsArgs,
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    cli.utils.setup()?;
    cli.args.run(&cli.utils)?;
    Ok(())
}
