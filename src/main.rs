use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hexmarble::config::{AppConfig, ConfigSource};
use hexmarble::game::{GameState, Layout};
use hexmarble::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play with marbles on a hex board.
#[derive(Parser)]
#[command(name = "hexmarble", version, about = "Move marbles on a hex board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "hexmarble.toml")]
    config: PathBuf,

    /// Override board radius
    #[arg(long)]
    radius: Option<i32>,

    /// Initial-position file (records like `B 0,0 1,0`)
    #[arg(long)]
    setup: Option<PathBuf>,

    /// Number of sides for the built-in starting position (2, 3 or 4)
    #[arg(long)]
    players: Option<u8>,

    /// Print the starting board to stdout and exit
    #[arg(long)]
    headless: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(radius) = cli.radius {
        config.board.radius = radius;
    }
    if let Some(setup) = cli.setup {
        config.setup.path = Some(setup);
    }
    if let Some(players) = cli.players {
        config.setup.players = players;
    }
    if cli.debug {
        config.log.level = "debug".to_string();
    }
    config.validate().context("invalid configuration")?;

    init_logging(&config)?;
    if source == ConfigSource::Defaults {
        log::warn!(
            "config file '{}' not found, using defaults",
            cli.config.display()
        );
    }

    let layout = match &config.setup.path {
        Some(path) => Layout::load(path)
            .with_context(|| format!("loading setup from {}", path.display()))?,
        None => Layout::for_players(config.setup.players, config.board.radius)
            .context("building starting position")?,
    };
    let game = GameState::new(config.board.radius, &layout).context("placing marbles")?;

    if cli.headless {
        print!("{}", game.board());
        println!("{}", game.cursor());
        print!("{}", game.selection().display(game.board()));
        return Ok(());
    }

    let mut app = App::new(game, Duration::from_millis(config.ui.poll_interval_ms));
    run_tui(&mut app).context("terminal UI")
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, &config.log.level),
    );
    if let Some(path) = &config.log.file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never);
    } else {
        builder.target(env_logger::Target::Stderr);
    }
    builder.init();
    Ok(())
}

fn run_tui(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even when the loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
