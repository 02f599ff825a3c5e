use std::io::{self, Stdout};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use rwg_pong::app::App;
use rwg_pong::config::{Config, Params};
use rwg_pong::error::AppError;
use rwg_pong::event::{Event, EventHandler};
use rwg_pong::{logging, ui};

/// Pong in the terminal, with an AI opponent and the Red/White/Green color mode.
#[derive(Parser, Debug)]
#[command(name = "rwg-pong", version, about)]
struct Cli {
    /// Points needed to win a match
    #[arg(long, default_value_t = Params::WIN_SCORE, value_parser = clap::value_parser!(u32).range(1..100))]
    win_score: u32,

    /// Simulation ticks (and frames) per second
    #[arg(long, default_value_t = Params::FPS, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Start with the scanline overlay off
    #[arg(long)]
    no_scanlines: bool,

    /// Seed the random number generator for reproducible serves and recolors
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the event log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Ticks a key stays held after a press, for terminals without release events
    #[arg(long, default_value_t = Params::HOLD_FRAMES, value_parser = clap::value_parser!(u32).range(1..))]
    hold_frames: u32,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::new();
        config.win_score = self.win_score;
        config.fps = self.fps;
        config.scanlines = !self.no_scanlines;
        config.seed = self.seed;
        config.hold_frames = self.hold_frames;
        if let Some(path) = self.log_file {
            config.log_file = path;
        }
        config
    }
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<(), AppError> {
    let config = Cli::parse().into_config();
    logging::init(&config.log_file)?;
    info!(
        win_score = config.win_score,
        fps = config.fps,
        seed = ?config.seed,
        "starting"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    } else {
        warn!(
            hold_frames = config.hold_frames,
            "terminal does not report key releases, falling back to timed holds"
        );
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, config, reports_release);

    let restored = restore_terminal(&mut terminal, reports_release);
    let result = first_error(result, restored);
    if let Err(e) = &result {
        tracing::error!("{e}");
    }
    result
}

/// Undo the terminal setup. Every step runs even if an earlier one fails.
fn restore_terminal(terminal: &mut Tui, reports_release: bool) -> io::Result<()> {
    let steps = [
        if reports_release {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
        } else {
            Ok(())
        },
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ];
    steps.into_iter().collect()
}

/// A failure from the game loop wins over one from restoring the terminal.
fn first_error(run: Result<(), AppError>, restored: io::Result<()>) -> Result<(), AppError> {
    run.and(restored.map_err(AppError::from))
}

fn run(terminal: &mut Tui, config: Config, reports_release: bool) -> Result<(), AppError> {
    let mut event_handler = EventHandler::new(config.tick_rate_ms());
    let mut app = App::new(config, reports_release);

    // Main loop: keys update held state as they arrive, each tick steps once and draws
    loop {
        match event_handler.next()? {
            Event::Tick => {
                app.on_tick();
                if let Some(title) = app.take_title() {
                    execute!(terminal.backend_mut(), SetTitle(title))?;
                }
                terminal.draw(|frame| ui::render(frame, &app))?;
            }
            Event::Key(key) => app.on_key(key),
        }

        if app.should_quit {
            info!("User closed the game");
            break;
        }
    }

    Ok(())
}
