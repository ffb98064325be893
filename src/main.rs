//! CLI entry point for exploring finite probability spaces

use clap::Parser;
use sigmaspace::io::cli::Cli;

fn main() -> sigmaspace::Result<()> {
    let cli = Cli::parse();
    sigmaspace::io::logging::init(cli.verbose);
    cli.run()
}
