mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::filter::EnvFilter;

use thunder_fighter::config::GameConfig;
use thunder_fighter::engine::{Command, Engine};

#[derive(Parser, Debug)]
#[command(name = "thunder_fighter")]
#[command(about = "Side-scrolling console shooter")]
struct Args {
    /// Play area width in cells (the info panel is added to the right)
    #[arg(long, default_value_t = 70)]
    width: u16,

    /// Play area height in cells
    #[arg(long, default_value_t = 24)]
    height: u16,

    /// Delay between loop iterations, in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Enemy variants to spawn, comma separated (default: all)
    #[arg(long, value_delimiter = ',')]
    enemies: Vec<String>,

    /// Building variants to spawn, comma separated (default: all)
    #[arg(long, value_delimiter = ',')]
    buildings: Vec<String>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig {
            play_width: self.width,
            play_height: self.height,
            tick: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            enemies: if self.enemies.is_empty() { defaults.enemies } else { self.enemies },
            buildings: if self.buildings.is_empty() { defaults.buildings } else { self.buildings },
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so logs only ever go to a file.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Input ─────────────────────────────────────────────────────────────────────

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn command_for(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Right,
        KeyCode::Char(' ') => Command::Fire,
        KeyCode::Char('b') | KeyCode::Char('B') => Command::Bomb,
        KeyCode::Char('p') | KeyCode::Char('P') => Command::Pause,
        KeyCode::Enter => Command::Confirm,
        KeyCode::Char('t') | KeyCode::Char('T') => Command::TopScores,
        _ => return None,
    };
    Some(command)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Poll input, dispatch one phase, present, wait out the rest of the tick.
/// Returns when the player quits.
fn game_loop<W: Write>(
    out: &mut W,
    engine: &mut Engine<StdRng>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let tick = engine.config().tick;

    loop {
        let frame_start = Instant::now();

        // Drain all pending input events (non-blocking)
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            if is_quit(code, modifiers) {
                return Ok(());
            }
            if let Some(command) = command_for(code) {
                engine.handle_input(command);
            }
        }

        engine.step();
        display::present(out, engine.screen())?;

        let elapsed = frame_start.elapsed();
        if elapsed < tick {
            thread::sleep(tick - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.into_config();
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engine = Engine::new(config, rng).context("invalid game configuration")?;

    let (need_w, need_h) = engine.config().screen_size();
    let (term_w, term_h) = terminal::size().context("failed to query terminal size")?;
    if term_w < need_w || term_h < need_h {
        bail!("terminal is {term_w}x{term_h}, the game needs at least {need_w}x{need_h}");
    }

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::Clear(terminal::ClearType::All))?;
    out.execute(cursor::Hide)?;

    // Blocking key reads happen here; the loop only ever drains the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // loop finished
                }
            }
            Err(_) => break,
        }
    });

    tracing::info!("game started");
    let result = game_loop(&mut out, &mut engine, &rx);

    // Restore the terminal before reporting any loop error.
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    tracing::info!(best = engine.state().scores.highest_score, "game closed");
    result.context("terminal I/O failed")
}
