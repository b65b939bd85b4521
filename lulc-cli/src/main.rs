//! LULC CLI - Command line tool for querying land-use survey data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lulc-cli",
    version,
    about = "Land use / land cover survey toolkit"
)]
struct Cli {
    #[command(flatten)]
    source: lulc_cmd::SourceArgs,

    #[command(subcommand)]
    command: lulc_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    lulc_cmd::run(&cli.source, cli.command)
}
