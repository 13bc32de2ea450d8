use clap::Parser;
use segy2segy::cli::{run, Cli};
use segy2segy::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
