use rand::Rng;

use crate::config::Config;
use crate::game::{Bounds, ColorSelector, Side, Vec2i, Wall};

pub struct Ball {
    pub pos: Vec2i,
    pub size: i32,
    /// Horizontal speed magnitude; direction lives in `dir_x`.
    pub speed_x: i32,
    pub dir_x: i32,
    pub speed_y: i32,
    pub color: ColorSelector,
    pub hits: u32,
    pub in_play: bool,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Self::home_position(config),
            size: config.ball_size,
            speed_x: 0,
            dir_x: 1,
            speed_y: 0,
            color: ColorSelector::White,
            hits: 0,
            in_play: false,
        }
    }

    pub fn home_position(config: &Config) -> Vec2i {
        Vec2i::new(
            (config.screen_width - config.ball_size) / 2,
            (config.screen_height - config.ball_size) / 2,
        )
    }

    /// Stop at the center of the screen, out of play.
    pub fn reset(&mut self, config: &Config) {
        self.pos = Self::home_position(config);
        self.speed_x = 0;
        self.speed_y = 0;
        self.hits = 0;
        self.color = ColorSelector::White;
        self.in_play = false;
    }

    /// Launch toward the side that was just scored upon, or randomly on a fresh match.
    pub fn serve<R: Rng + ?Sized>(&mut self, rng: &mut R, last_scorer: Option<Side>, config: &Config) {
        self.speed_x = config.serve_speed_x;
        self.speed_y = rng.gen_range(0..=config.serve_max_speed_y);
        if rng.gen_bool(0.5) {
            self.speed_y = -self.speed_y;
        }
        self.dir_x = match last_scorer {
            None => {
                if rng.gen_bool(0.5) {
                    -1
                } else {
                    1
                }
            }
            Some(Side::Left) => 1,
            Some(Side::Right) => -1,
        };
        self.in_play = true;
    }

    pub fn advance(&mut self) {
        self.pos.x += self.speed_x * self.dir_x;
        self.pos.y += self.speed_y;
    }

    /// Trade accumulated hits for one step of horizontal speed, up to the cap.
    pub fn apply_speed_up(&mut self, config: &Config) -> bool {
        if self.hits < config.hits_per_speed_up {
            return false;
        }
        self.hits = 0;
        if self.speed_x < config.ball_speed_cap_x {
            self.speed_x += 1;
            return true;
        }
        false
    }

    pub fn bounce_walls(&mut self, config: &Config) -> Option<Wall> {
        let mut hit = None;
        if self.pos.y < 0 {
            self.pos.y = 0;
            self.speed_y = -self.speed_y;
            hit = Some(Wall::Top);
        }
        let floor = config.screen_height - self.size;
        if self.pos.y > floor {
            self.pos.y = floor;
            self.speed_y = -self.speed_y;
            hit = Some(Wall::Bottom);
        }
        hit
    }

    /// Return off a paddle; `up`/`down` is the paddle's motion at contact.
    pub fn bounce(&mut self, up: bool, down: bool, cap_y: i32) {
        self.dir_x = -self.dir_x;
        self.hits += 1;
        if up && self.speed_y > -cap_y {
            self.speed_y -= 1;
        } else if down && self.speed_y < cap_y {
            self.speed_y += 1;
        }
    }

    /// The side that scores if the ball has fully left the screen.
    pub fn out_of_bounds(&self, config: &Config) -> Option<Side> {
        if self.pos.x > config.screen_width {
            Some(Side::Left)
        } else if self.pos.x < -self.size {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.size, self.size)
    }

    pub fn center(&self) -> Vec2i {
        self.bounds().center()
    }
}
