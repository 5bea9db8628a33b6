use std::io::Write;

use clap::Parser;
use nxsh_theme_check::{logging, CheckConfig};

/// Validate the theme files under assets/themes.
#[derive(Parser, Debug)]
#[command(author, version, about = "NexusShell theme validator", long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let config = CheckConfig::default();
    let mut out = std::io::stdout().lock();
    let (code, _report) = nxsh_theme_check::run(&config, &mut out)?;
    out.flush()?;

    std::process::exit(code);
}
