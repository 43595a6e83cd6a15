use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use footmap::analysis::{analyze_feet, analyze_path, FootSide, STATS_FILE_NAME};
use footmap::{load_params, FootStats, FootmapError, HeatmapParams};

#[derive(Parser, Debug)]
#[command(
    name = "footmap",
    version,
    about = "Turn photos of pressure-sensitive foot mats into heatmaps"
)]
struct Cli {
    /// Print per-stage diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON log lines (only with the `tracing` feature).
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single sheet and write its heatmap.
    Analyze {
        /// Input image (png/jpg/...).
        input: PathBuf,
        /// Output heatmap path; the format follows the extension.
        #[arg(short, long)]
        output: PathBuf,
        /// Also write the stats as JSON.
        #[arg(long)]
        stats: Option<PathBuf>,
        #[command(flatten)]
        config: ConfigArg,
    },
    /// Analyze a left and a right sheet into one output directory.
    Feet {
        #[arg(long)]
        left: PathBuf,
        #[arg(long)]
        right: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        #[command(flatten)]
        config: ConfigArg,
    },
    /// Print the default parameters as JSON.
    DefaultConfig,
}

#[derive(Args, Debug)]
struct ConfigArg {
    /// JSON file with pipeline parameters; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArg {
    fn params(&self) -> Result<HeatmapParams, FootmapError> {
        match &self.config {
            Some(path) => load_params(path),
            None => Ok(HeatmapParams::default()),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json_logs);

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), FootmapError> {
    match command {
        Command::Analyze {
            input,
            output,
            stats,
            config,
        } => {
            let params = config.params()?;
            let foot = analyze_path(&input, &params)?;
            foot.save_heatmap(&output)?;
            print_stats(&input.display().to_string(), &foot.stats);
            if let Some(path) = stats {
                std::fs::write(&path, serde_json::to_string_pretty(&foot.stats)?)?;
            }
            println!("wrote {}", output.display());
        }
        Command::Feet {
            left,
            right,
            out_dir,
            config,
        } => {
            let params = config.params()?;
            let left = decode(&left)?;
            let right = decode(&right)?;
            let pair = analyze_feet(&left, &right, &params)?;
            let stats = pair.write_to_dir(&out_dir)?;
            print_stats("left", &stats.left);
            print_stats("right", &stats.right);
            for side in [FootSide::Left, FootSide::Right] {
                println!("wrote {}", out_dir.join(side.file_name()).display());
            }
            println!("wrote {}", out_dir.join(STATS_FILE_NAME).display());
        }
        Command::DefaultConfig => {
            println!(
                "{}",
                serde_json::to_string_pretty(&HeatmapParams::default())?
            );
        }
    }
    Ok(())
}

fn decode(path: &Path) -> Result<image::DynamicImage, FootmapError> {
    Ok(image::ImageReader::open(path)?.decode()?)
}

fn print_stats(label: &str, stats: &FootStats) {
    println!(
        "{label}: average {:.2}, max {}, area {}",
        stats.average_pressure, stats.max_pressure, stats.total_area
    );
}

// `log` records are bridged by the subscriber itself; `RUST_LOG` overrides
// `--verbose`.
#[cfg(feature = "tracing")]
fn init_logging(verbose: bool, json: bool) {
    footmap::core::init_tracing(json, verbose);
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: bool, _json: bool) {
    let _ = footmap::core::init_with_level(footmap::core::verbosity_level(verbose));
}
