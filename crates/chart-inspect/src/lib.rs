//! Command-line front ends for the dental chart inspectors.
//!
//! Two executables share this crate:
//! - `svg-group-inspector [chart.svg]`
//! - `eps-command-scanner [chart.eps]`
//!
//! Both fall back to the path from `.dental-chart-inspect.toml` (or the
//! built-in default) when no argument is given.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use inspect_core::options::InspectOptions;

/// Flags shared by both executables.
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Dump effective merged config as TOML and exit
    #[arg(long)]
    pub dump_config: bool,
}

/// Default log filter for a verbosity count. `RUST_LOG` takes precedence.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init_logging(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(log_filter(verbose));
    env_logger::Builder::from_env(env).init();
}

pub fn dump_config(opts: &InspectOptions) -> Result<String> {
    toml::to_string_pretty(opts).context("Error serializing config")
}

/// Inspect an SVG chart and print its group report to `out`.
pub fn run_svg<W: Write>(path: &Path, out: W) -> Result<()> {
    let inventory = inspect_svg::inspect_svg_file(path)
        .with_context(|| format!("Cannot inspect SVG {}", path.display()))?;
    inspect_svg::write_report(&inventory, out).context("Cannot write report")?;
    Ok(())
}

/// Scan an EPS chart and print its command report to `out`.
pub fn run_eps<W: Write>(path: &Path, out: W) -> Result<()> {
    let scan = inspect_eps::scan_eps_file(path)
        .with_context(|| format!("Cannot scan EPS {}", path.display()))?;
    inspect_eps::write_report(&scan, out).context("Cannot write report")?;
    Ok(())
}
