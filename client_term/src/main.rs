use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use tracing::{error, info};

use client_term::input::Clock;
use client_term::terminal::{
    self, SkinLoader, SystemClock, TerminalInput, TerminalSession, TerminalSurface,
};
use client_term::widgets::MenuButtons;
use client_term::{App, ShellError};
use game_core::Params;

/// Two-paddle rally in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Seed for ball relaunch directions (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Frame cap
    #[arg(long, default_value_t = Params::TARGET_FPS)]
    fps: u32,

    /// Directory holding the button skin files (`<name>.toml`)
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Log destination; the terminal itself is the display
    #[arg(long, default_value = "paddle-rally.log")]
    log_file: PathBuf,
}

fn init_tracing(log_file: &Path) -> anyhow::Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("failed to create log file {}", log_file.display()))?;
    let writer = Mutex::new(file);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        // Leave the alternate screen first so the message is readable
        let _ = terminal::restore_after_panic();
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
        eprintln!("{info}");
    }));

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let arena = Vec2::new(Params::PLAYFIELD_WIDTH, Params::PLAYFIELD_HEIGHT);

    let (buttons, loader) = match load_buttons(&cli.assets, arena) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!(%err, "asset loading failed");
            return Err(err).context("failed to load button textures");
        }
    };
    info!(seed = ?cli.seed, fps = cli.fps, "starting");

    run(App::new(buttons, cli.seed), loader, arena, cli.fps).context("terminal session failed")?;

    info!("bye");
    Ok(())
}

fn load_buttons(dir: &Path, arena: Vec2) -> Result<(MenuButtons, SkinLoader), ShellError> {
    let mut loader = SkinLoader::new(dir);
    let buttons = MenuButtons::load(&mut loader, arena.x)?;
    Ok((buttons, loader))
}

fn run(mut app: App, loader: SkinLoader, arena: Vec2, fps: u32) -> Result<(), ShellError> {
    let mut out = BufWriter::new(io::stdout());
    let session = TerminalSession::enter(&mut out)?;

    let (cols, rows) = TerminalSession::size()?;
    let mut surface = TerminalSurface::new(cols, rows, arena, loader.into_skins());
    let mut input = TerminalInput::new(cols, rows, arena);
    let clock = SystemClock::new();
    let frame_budget = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
    info!(
        cols,
        rows,
        enhanced_keys = session.enhanced_keys(),
        "terminal ready"
    );

    loop {
        let frame_start = Instant::now();

        input.poll(clock.now())?;
        if let Some((cols, rows)) = input.take_resize() {
            surface.resize(cols, rows);
        }

        if !app.frame(&input, &clock, &mut surface) {
            break;
        }
        surface.present(&mut out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }

    Ok(())
}
