//! CLI for livetrace — a live, frame-paced chart of sampled signals in the terminal.

mod demo;
mod tui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use livetrace_core::{LivePlot, PlotConfig, PlotError, RunSummary};

#[derive(Parser)]
#[command(name = "livetrace")]
#[command(about = "livetrace — live sliding-window plot of a voltage/current pair")]
#[command(version = livetrace_core::VERSION)]
struct Cli {
    /// Frames (samples) per second
    #[arg(long, default_value = "16", value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Observation window in seconds
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u32).range(1..))]
    obs_window: u32,

    /// Pin the time axis to the full window instead of growing it with the data
    #[arg(long)]
    no_progress: bool,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Y axis label
    #[arg(long)]
    ylabel: Option<String>,

    /// Write log output (overrun diagnostics) to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("livetrace: cannot open log file: {e}");
        std::process::exit(1);
    }

    match run(&cli) {
        Ok(summary) => println!(
            "{} ticks, {} overruns (worst {:.4}s)",
            summary.ticks,
            summary.overruns,
            summary.worst_overrun.as_secs_f64()
        ),
        Err(e) => {
            eprintln!("livetrace: {e}");
            std::process::exit(1);
        }
    }
}

fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run(cli: &Cli) -> Result<RunSummary, PlotError> {
    let config = PlotConfig::new(!cli.no_progress, cli.fps, cli.obs_window)?;
    let figure = demo::figure(cli.title.as_deref(), cli.ylabel.as_deref());
    let mut plot = LivePlot::new(demo::signals(), figure, config)?;

    let mut surface = tui::TerminalSurface::new()?;
    plot.run(&mut surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_demo_call_site() {
        let cli = Cli::parse_from(["livetrace"]);
        assert_eq!(cli.fps, 16);
        assert_eq!(cli.obs_window, 4);
        assert!(!cli.no_progress);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn zero_fps_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["livetrace", "--fps", "0"]).is_err());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from([
            "livetrace",
            "--fps",
            "30",
            "--obs-window",
            "10",
            "--no-progress",
            "--title",
            "Scope",
        ]);
        assert_eq!(cli.fps, 30);
        assert_eq!(cli.obs_window, 10);
        assert!(cli.no_progress);
        assert_eq!(cli.title.as_deref(), Some("Scope"));
    }
}
