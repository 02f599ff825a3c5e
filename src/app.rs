use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::Config;
use crate::game::{GameEvent, Match, Side, Winner};
use crate::input::{KeyLatch, Keyboard};

/// A selectable match type on the menu.
pub struct Mode {
    pub key: char,
    pub name: &'static str,
    pub multiplayer: bool,
    pub color_mode: bool,
}

pub const MODES: [Mode; 4] = [
    Mode { key: '1', name: "Classic vs. AI", multiplayer: false, color_mode: false },
    Mode { key: '2', name: "Classic vs. Human", multiplayer: true, color_mode: false },
    Mode { key: '3', name: "RWG Mode vs. AI", multiplayer: false, color_mode: true },
    Mode { key: '4', name: "RWG Mode vs. Human", multiplayer: true, color_mode: true },
];

pub const CONTROLS: &str = "CONTROLS:
Player 1 uses W/S to move Up/Down
Player 2 uses UP/DOWN arrows to move Up/Down
SPACE = Serve Ball
ESC = Back to Main Menu / Quit

RWG Additional Controls:
Player 1 uses A/D to switch colours.
Player 2 uses LEFT/RIGHT arrows to switch colours.
Your paddle must match the ball's colour to hit it.

F1 = Show Controls
F2 = Toggle Scanlines";

pub struct App {
    pub should_quit: bool,
    pub game: Match,
    pub keyboard: Keyboard,
    pub scanlines: bool,
    pub show_help: bool,
    pub last_winner: Option<Winner>,
    rng: StdRng,
    help_lock: KeyLatch,
    scanlines_lock: KeyLatch,
    // Pending terminal title update
    title: Option<String>,
}

impl App {
    pub fn new(config: Config, reports_release: bool) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let keyboard = Keyboard::new(reports_release, config.hold_frames, config.latch_hold_frames);
        let scanlines = config.scanlines;
        let game = Match::new(config);
        let title = Some(game.title());
        log_menu();
        Self {
            should_quit: false,
            game,
            keyboard,
            scanlines,
            show_help: false,
            last_winner: None,
            rng,
            help_lock: KeyLatch::Idle,
            scanlines_lock: KeyLatch::Idle,
            title,
        }
    }

    /// One frame: sample held keys, run function keys, then one simulation step.
    pub fn on_tick(&mut self) {
        let input = self.keyboard.sample();

        if self.help_lock.fire(input.help) {
            self.show_help = !self.show_help;
            info!("{CONTROLS}");
        }
        if self.scanlines_lock.fire(input.scanlines) {
            self.scanlines = !self.scanlines;
            debug!(scanlines = self.scanlines, "scanlines toggled");
        }

        let events = self.game.step(&input, &mut self.rng);
        for event in events {
            self.on_game_event(event);
        }

        self.keyboard.end_frame();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        self.keyboard.record(&key);
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.game.abort_match() {
                    self.title = Some(self.game.title());
                    info!("match aborted");
                    log_menu();
                } else {
                    info!("quit from menu");
                    self.should_quit = true;
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                if !self.game.is_on() {
                    self.should_quit = true;
                }
            }
            KeyCode::Char(' ') => {
                if self.game.serve(&mut self.rng) {
                    let ball = &self.game.ball;
                    debug!(dir_x = ball.dir_x, speed_y = ball.speed_y, "serve");
                }
            }
            KeyCode::Char(c) => {
                if let Some(mode) = MODES.iter().find(|m| m.key == c) {
                    if self.game.start_match(mode.multiplayer, mode.color_mode) {
                        self.last_winner = None;
                        self.title = Some(self.game.title());
                        info!(mode = mode.name, "match started");
                    }
                }
            }
            _ => {}
        }
    }

    /// Title text to push to the terminal, if the score changed since the last call.
    pub fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }

    fn on_game_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::WallBounce(wall) => debug!(?wall, "COLLISION: wall"),
            GameEvent::PaddleHit(side) => {
                let player = if side == Side::Left { 1 } else { 2 };
                if self.game.color_mode() {
                    debug!(ball = self.game.ball.color.name(), "COLLISION: Player {player}");
                } else {
                    debug!("COLLISION: Player {player}");
                }
            }
            GameEvent::Scored { scorer, left, right } => {
                info!(?scorer, "SCORE: {left}-{right}");
                self.title = Some(self.game.title());
            }
            GameEvent::MatchOver(winner) => {
                info!("{winner} wins!");
                self.last_winner = Some(winner);
                log_menu();
            }
        }
    }
}

fn log_menu() {
    let modes: Vec<String> = MODES.iter().map(|m| format!("[{}] {}", m.key, m.name)).collect();
    info!("Press F1 for controls. {}", modes.join(" "));
}
