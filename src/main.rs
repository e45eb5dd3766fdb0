use std::path::PathBuf;

use clap::Parser;
use parabolic_target::core::animator::{Outcome, Step};
use parabolic_target::core::config::GameConfig;
use parabolic_target::core::error::Result;
use parabolic_target::core::export::{default_snapshot_path, write_png};
use parabolic_target::core::session::GameSession;
use parabolic_target::core::surface::DrawList;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

/// Launch the bird once without a window and report where it ended up.
#[derive(Parser, Debug)]
#[command(name = "parabolic_target", version)]
struct Args {
    /// Quadratic coefficient
    #[arg(long, allow_negative_numbers = true)]
    a: Option<f64>,

    /// Linear coefficient
    #[arg(long, allow_negative_numbers = true)]
    b: Option<f64>,

    /// Launch height
    #[arg(long, allow_negative_numbers = true)]
    c: Option<f64>,

    /// Seed for target placement after a hit
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with surface, origin and starting values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a PNG of the final scene (timestamped name if no path is given)
    #[arg(long, num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Print every flight step
    #[arg(long)]
    trace: bool,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(a) = args.a {
        config.a = a;
    }
    if let Some(b) = args.b {
        config.b = b;
    }
    if let Some(c) = args.c {
        config.c = c;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Hit => "hit",
        Outcome::Miss => "miss",
        Outcome::Cancelled => "cancelled",
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = GameSession::new(&config, rng);
    let mut surface = DrawList::new(config.surface_width, config.surface_height);

    println!("{}", session.equation_text());
    println!("{}", session.target_text());

    session.launch();
    let mut steps = 0u64;
    let mut outcome = Outcome::Cancelled;
    while let Some(step) = session.advance(&mut surface) {
        steps += 1;
        match step {
            Step::Continue(frame) => {
                if args.trace {
                    println!(
                        "step {:>4}: x = {:>7.1}  y = {:>9.2}",
                        frame.step, frame.math.x, frame.math.y
                    );
                }
            }
            Step::Done(done) => {
                outcome = done;
                break;
            }
        }
    }

    println!("\nSteps: {steps}");
    println!("Outcome: {}", outcome_label(outcome));
    println!("{}", session.status_text());
    if outcome == Outcome::Hit {
        println!("Next {}", session.target_text());
    }

    if let Some(export) = &args.export {
        let path = export.clone().unwrap_or_else(default_snapshot_path);
        write_png(&surface, &path)?;
        println!("Scene written to {}", path.display());
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::EnvFilter;

    use super::{Args, DEFAULT_LOG_FILTER, load_config};

    #[test]
    fn cli_accepts_negative_coefficients() {
        let args = Args::try_parse_from(["parabolic_target", "--a", "0.005", "--b", "-2", "--c", "100"])
            .expect("arguments should parse");
        let config = load_config(&args).expect("defaults should load");

        assert_eq!(config.a, 0.005);
        assert_eq!(config.b, -2.0);
        assert_eq!(config.c, 100.0);
    }

    #[test]
    fn export_path_is_optional() {
        let args = Args::try_parse_from(["parabolic_target", "--export"]).expect("bare --export");
        assert_eq!(args.export, Some(None));

        let args = Args::try_parse_from(["parabolic_target", "--export", "out.png"])
            .expect("--export with path");
        assert_eq!(args.export, Some(Some(PathBuf::from("out.png"))));
    }

    #[test]
    fn launch_events_are_logged_by_default() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
