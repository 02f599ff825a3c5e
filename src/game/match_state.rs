use rand::Rng;

use crate::config::Config;
use crate::game::{AiController, Ball, ColorSelector, GameEvent, Motion, Paddle, Side, Winner};
use crate::input::FrameInput;
use crate::scores::ScoreBoard;

/// Everything the simulation owns: mode flags, both paddles, the ball and the score.
pub struct Match {
    config: Config,
    game_on: bool,
    multiplayer: bool,
    color_mode: bool,
    ai: AiController,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub scores: ScoreBoard,
}

impl Match {
    pub fn new(config: Config) -> Self {
        Self {
            game_on: false,
            multiplayer: false,
            color_mode: false,
            ai: AiController::new(),
            left: Paddle::new(Side::Left, &config),
            right: Paddle::new(Side::Right, &config),
            ball: Ball::new(&config),
            scores: ScoreBoard::new(config.win_score),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_on(&self) -> bool {
        self.game_on
    }

    pub fn multiplayer(&self) -> bool {
        self.multiplayer
    }

    pub fn color_mode(&self) -> bool {
        self.color_mode
    }

    pub fn ai_motion(&self) -> Motion {
        self.ai.motion()
    }

    pub fn title(&self) -> String {
        self.scores.title()
    }

    /// Begin a new match. Ignored while one is already running.
    pub fn start_match(&mut self, multiplayer: bool, color_mode: bool) -> bool {
        if self.game_on {
            return false;
        }
        self.multiplayer = multiplayer;
        self.color_mode = color_mode;
        self.scores.reset();
        self.left.reset(&self.config);
        self.right.reset(&self.config);
        self.ball.reset(&self.config);
        self.ai.reset();
        self.game_on = true;
        true
    }

    /// Drop back to the menu.
    pub fn abort_match(&mut self) -> bool {
        if !self.game_on {
            return false;
        }
        self.game_on = false;
        self.ball.reset(&self.config);
        self.scores.reset();
        true
    }

    pub fn serve<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.game_on || self.ball.in_play {
            return false;
        }
        self.ball.serve(rng, self.scores.last_scorer(), &self.config);
        true
    }

    /// Advance the simulation by one tick.
    pub fn step<R: Rng + ?Sized>(&mut self, input: &FrameInput, rng: &mut R) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.game_on {
            return events;
        }

        self.move_paddles(input);

        if self.ball.in_play {
            self.ball.advance();
        }
        self.ball.apply_speed_up(&self.config);

        let max_y = self.config.paddle_max_y();
        self.left.clamp(max_y);
        self.right.clamp(max_y);

        if let Some(wall) = self.ball.bounce_walls(&self.config) {
            events.push(GameEvent::WallBounce(wall));
        }

        if let Some(side) = self.resolve_paddle_hit(input, rng) {
            events.push(GameEvent::PaddleHit(side));
        }

        if let Some(scorer) = self.ball.out_of_bounds(&self.config) {
            self.point_scored(scorer, &mut events);
        }

        events
    }

    fn move_paddles(&mut self, input: &FrameInput) {
        let step = self.config.paddle_speed;
        self.left.steer(input.left_up, input.left_down, step);
        if self.multiplayer {
            self.right.steer(input.right_up, input.right_down, step);
        } else {
            self.ai.track(&mut self.right, &self.ball, &self.config);
        }

        if self.color_mode {
            self.left.cycle_color(input.left_color_prev, input.left_color_next);
            if self.multiplayer {
                self.right.cycle_color(input.right_color_prev, input.right_color_next);
            } else {
                self.ai.match_color(&mut self.right, &self.ball, &self.config);
            }
        }
    }

    /// At most one paddle returns the ball per tick; left is checked first.
    fn resolve_paddle_hit<R: Rng + ?Sized>(&mut self, input: &FrameInput, rng: &mut R) -> Option<Side> {
        let ball_bounds = self.ball.bounds();
        let cap_y = self.config.ball_speed_cap_y;

        let side = if self.ball.dir_x == -1
            && self.left.bounds().intersects(&ball_bounds)
            && self.colors_match(&self.left)
        {
            self.ball.bounce(input.left_up, input.left_down, cap_y);
            Side::Left
        } else if self.ball.dir_x == 1
            && self.right.bounds().intersects(&ball_bounds)
            && self.colors_match(&self.right)
        {
            let (up, down) = if self.multiplayer {
                (input.right_up, input.right_down)
            } else {
                let motion = self.ai.motion();
                (motion == Motion::Up, motion == Motion::Down)
            };
            self.ball.bounce(up, down, cap_y);
            Side::Right
        } else {
            return None;
        };

        if self.color_mode {
            self.ball.color = ColorSelector::random(rng);
        }
        Some(side)
    }

    fn colors_match(&self, paddle: &Paddle) -> bool {
        !self.color_mode || paddle.color == self.ball.color
    }

    fn point_scored(&mut self, scorer: Side, events: &mut Vec<GameEvent>) {
        self.scores.award(scorer);
        self.ball.reset(&self.config);
        self.left.color = ColorSelector::White;
        self.right.color = ColorSelector::White;
        events.push(GameEvent::Scored {
            scorer,
            left: self.scores.score(Side::Left),
            right: self.scores.score(Side::Right),
        });

        if let Some(side) = self.scores.winner() {
            self.game_on = false;
            let winner = match side {
                Side::Left => Winner::Player1,
                Side::Right if self.multiplayer => Winner::Player2,
                Side::Right => Winner::Ai,
            };
            events.push(GameEvent::MatchOver(winner));
        }
    }
}
