use clap::Parser;

use gridborder::cli::{self, Cli};
use gridborder::{init_logging, init_logging_to_file};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.log_file {
        Some(path) => init_logging_to_file(path)?,
        None => init_logging()?,
    }

    cli::run(cli)
}
