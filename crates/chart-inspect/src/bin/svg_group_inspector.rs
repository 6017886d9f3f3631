//! svg-group-inspector — lists the groups of an SVG dental chart.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use chart_inspect::CommonArgs;

#[derive(Parser)]
#[command(
    name = "svg-group-inspector",
    version,
    about = "List the <g> groups of an SVG chart with a sample of their paths"
)]
struct Cli {
    /// SVG file (defaults to the configured chart)
    input: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    chart_inspect::init_logging(cli.common.verbose);

    let mut opts = inspect_core::options::load_config();
    if let Some(input) = cli.input {
        opts.svg_path = input;
    }

    if cli.common.dump_config {
        match chart_inspect::dump_config(&opts) {
            Ok(s) => {
                println!("{}", s);
                process::exit(0);
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = chart_inspect::run_svg(&opts.svg_path, io::stdout().lock()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
