// SORTTY: Terminal Sorting Visualizer with Paced Move Playback

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use sortty::compiler::Algorithm;
use sortty::config::{Settings, Size, Speed};
use sortty::controller::RunController;
use sortty::error::ConfigError;
use sortty::generator::RandomSequence;
use sortty::pacing::FixedPacer;
use sortty::ui::App;

/// Visualize sorting algorithms in the terminal
#[derive(Debug, Parser)]
#[command(name = "sortty", version, about)]
struct Cli {
    /// Algorithm selected at start-up
    #[arg(long, value_enum, default_value_t = Algorithm::Bubble)]
    algorithm: Algorithm,

    /// Sequence length: 10, 20, ..., 100
    #[arg(long, default_value = "10", value_parser = parse_size)]
    size: Size,

    /// Speed multiplier: 0.5, 0.75, 1, 2 or 4
    #[arg(long, default_value = "1", value_parser = parse_speed)]
    speed: Speed,

    /// Seed for reproducible sequences
    #[arg(long)]
    seed: Option<u64>,

    /// Play one run without the TUI and print the result
    #[arg(long)]
    headless: bool,
}

fn parse_size(arg: &str) -> Result<Size, String> {
    let len: usize = arg.parse().map_err(|e| format!("{}", e))?;
    Size::new(len).map_err(|e: ConfigError| e.to_string())
}

fn parse_speed(arg: &str) -> Result<Speed, String> {
    let multiplier: f64 = arg.parse().map_err(|e| format!("{}", e))?;
    Speed::from_multiplier(multiplier).map_err(|e| e.to_string())
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let settings = Settings {
        algorithm: cli.algorithm,
        size: cli.size,
        speed: cli.speed,
    };
    let source = match cli.seed {
        Some(seed) => RandomSequence::seeded(seed),
        None => RandomSequence::new(),
    };
    let controller = RunController::new(settings, source);

    if cli.headless {
        init_tracing("info");
        return run_headless(controller);
    }

    // Keep the alternate screen clean unless RUST_LOG asks otherwise
    init_tracing("off");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller, FixedPacer::default());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Play a single paced run on a current-thread runtime
fn run_headless(mut controller: RunController) -> Result<(), Box<dyn std::error::Error>> {
    let before = controller.store().keys();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let summary = runtime.block_on(controller.run(&FixedPacer::default()))?;

    println!("{}", summary.algorithm.name());
    println!("before: {:?}", before);
    println!("after:  {:?}", controller.store().keys());
    println!("moves: {}, steps: {}", summary.moves, summary.steps);
    Ok(())
}
