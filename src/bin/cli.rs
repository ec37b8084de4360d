// src/bin/cli.rs
use study_sheet::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init_cli();
    cli::run_sheet()
}
