#![warn(clippy::all)]

use anyhow::{bail, Context, Result};
use clap::Parser;
use conway_playback::{
    load_input, simulate_all, App, Config, Grid, SnapshotHistory, MAX_GENERATIONS,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "conway_playback",
    version,
    about = "Precompute Conway's Game of Life generations and play them back"
)]
struct Cli {
    /// Input file: generation count on the first line, then rows of 0/1.
    #[arg(default_value = "in.txt")]
    input: PathBuf,

    /// Start from a random board of the given size instead, e.g. 30x40.
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_size)]
    random: Option<(usize, usize)>,

    /// Number of generations to simulate for a random board.
    #[arg(
        long,
        default_value_t = 100,
        requires = "random",
        value_parser = clap::value_parser!(u64).range(..=MAX_GENERATIONS)
    )]
    generations: u64,

    /// Seed for the random board.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Probability of a cell starting alive on a random board.
    #[arg(long, default_value_t = 0.3, requires = "random")]
    fill_rate: f64,

    /// Write every snapshot as JSON to this file and exit without a window.
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,
}

fn parse_size(s: &str) -> Result<(usize, usize)> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .context("expected ROWSxCOLS")?;
    let rows: usize = rows.trim().parse().context("invalid row count")?;
    let cols: usize = cols.trim().parse().context("invalid column count")?;
    if rows == 0 || cols == 0 {
        bail!("board must have at least one row and one column");
    }
    Ok((rows, cols))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn build_history(cli: &Cli) -> Result<(SnapshotHistory, Option<PathBuf>)> {
    if let Some((rows, cols)) = cli.random {
        if !(0.0..=1.0).contains(&cli.fill_rate) {
            bail!("--fill-rate must be within [0, 1], got {}", cli.fill_rate);
        }
        let grid = Grid::random(rows, cols, cli.seed, cli.fill_rate);
        return Ok((simulate_all(grid, cli.generations), None));
    }
    let input = load_input(&cli.input)
        .with_context(|| format!("cannot start from {}", cli.input.display()))?;
    Ok((
        simulate_all(input.grid, input.generations),
        Some(cli.input.clone()),
    ))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let (history, source) = build_history(&cli)?;

    if let Some(path) = &cli.export {
        let file = std::fs::File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &history)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!(path = %path.display(), snapshots = history.len(), "exported snapshots");
        return Ok(());
    }

    use eframe::egui::ViewportBuilder;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(Config::WINDOW_SIZE)
            .with_min_inner_size(Config::MIN_WINDOW_SIZE),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(history, source)))),
    )
    .map_err(|err| anyhow::anyhow!("GUI failed: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_board_size() {
        assert_eq!(parse_size("30x40").unwrap(), (30, 40));
        assert_eq!(parse_size("5X7").unwrap(), (5, 7));
        assert!(parse_size("30").is_err());
        assert!(parse_size("0x4").is_err());
        assert!(parse_size("ax4").is_err());
    }

    #[test]
    fn random_board_needs_no_input_file() {
        let cli = Cli::try_parse_from(["conway_playback", "--random", "4x5", "--seed", "1"]).unwrap();
        let (history, source) = build_history(&cli).unwrap();
        assert!(source.is_none());
        assert_eq!(history.len(), 101);
        assert_eq!((history.rows(), history.cols()), (4, 5));
    }

    #[test]
    fn random_generations_are_capped() {
        let too_many = (MAX_GENERATIONS + 1).to_string();
        let args = ["conway_playback", "--random", "4x5", "--generations", &too_many];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
