// bubbletrace: step-by-step bubble sort tracer with a terminal replay viewer

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use bubbletrace::snapshot::Playback;
use bubbletrace::trace::{generate_trace, Language, DEMO_SOURCE};
use bubbletrace::ui::theme::LIGHT_THEME;
use bubbletrace::ui::App;

/// Trace a bubble sort program and replay it step by step
#[derive(Debug, Parser)]
#[command(name = "bubbletrace", version, about)]
struct Args {
    /// Program to trace (defaults to the bundled bubble sort demo)
    file: Option<PathBuf>,

    /// Language the program is written in
    #[arg(long, default_value = "javascript")]
    language: Language,

    /// Delay between auto-play steps, in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Source line to break on during auto-play (repeatable)
    #[arg(long = "breakpoint", value_name = "LINE")]
    breakpoints: Vec<usize>,

    /// Print the trace as JSON and exit instead of starting the viewer
    #[arg(long)]
    dump: bool,

    /// Start with the light theme
    #[arg(long)]
    light: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let source = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        None => DEMO_SOURCE.to_string(),
    };

    let steps = generate_trace(&source, args.language)?;
    log::info!("generated {} steps", steps.len());

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    let mut playback = Playback::new(steps)?;
    for line in &args.breakpoints {
        playback.set_breakpoint(*line);
    }

    let mut app = App::new(playback, source, Duration::from_millis(args.interval_ms));
    if args.light {
        app.theme = &LIGHT_THEME;
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal viewer failed")
}
