// plot_results.rs - Benchmark-results chart utility
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use scene_merge::report::{builtin_results, render_chart, Measurement};

#[derive(Parser, Debug, Clone)]
#[command(name = "plot-results")]
#[command(about = "Chart raytracer benchmark results on a log scale", long_about = None)]
struct Cli {
    /// JSON file of [{"label": ..., "seconds": ...}] records;
    /// uses the built-in measurement history when omitted
    pub results: Option<PathBuf>,

    /// Also write the chart to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Length of the longest bar in characters
    #[arg(long, default_value = "60")]
    pub width: usize,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let results = match &cli.results {
        Some(path) => load_results(path)?,
        None => builtin_results(),
    };

    let chart = render_chart(&results, cli.width);
    println!(
        "Performance results  [{}]",
        chrono::Local::now().format("%H:%M:%S")
    );
    print!("{}", chart);

    if let Some(path) = &cli.output {
        std::fs::write(path, &chart).context(format!("Failed to write chart: {:?}", path))?;
        println!("Chart written to {:?}", path);
    }

    Ok(())
}

fn load_results(path: &Path) -> Result<Vec<Measurement>> {
    let text = std::fs::read_to_string(path)
        .context(format!("Failed to read results file: {:?}", path))?;
    let results: Vec<Measurement> = serde_json::from_str(&text)
        .context(format!("Failed to parse results file: {:?}", path))?;
    Ok(results)
}
