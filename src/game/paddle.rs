use crate::config::Config;
use crate::game::{Bounds, ColorSelector, Side, Vec2i};
use crate::input::KeyLatch;

pub struct Paddle {
    pub pos: Vec2i,
    pub width: i32,
    pub height: i32,
    pub side: Side,
    pub color: ColorSelector,
    color_prev: KeyLatch,
    color_next: KeyLatch,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            pos: Self::home_position(side, config),
            width: config.paddle_width,
            height: config.paddle_height,
            side,
            color: ColorSelector::White,
            color_prev: KeyLatch::Idle,
            color_next: KeyLatch::Idle,
        }
    }

    /// One paddle width away from its wall, vertically centered.
    pub fn home_position(side: Side, config: &Config) -> Vec2i {
        let x = match side {
            Side::Left => config.paddle_width,
            Side::Right => config.screen_width - config.paddle_width * 2,
        };
        Vec2i::new(x, (config.screen_height - config.paddle_height) / 2)
    }

    pub fn reset(&mut self, config: &Config) {
        self.pos = Self::home_position(self.side, config);
        self.color = ColorSelector::White;
    }

    /// Up and down are applied independently, so holding both cancels out.
    pub fn steer(&mut self, up: bool, down: bool, step: i32) {
        if up {
            self.pos.y -= step;
        }
        if down {
            self.pos.y += step;
        }
    }

    pub fn clamp(&mut self, max_y: i32) {
        if self.pos.y < 0 {
            self.pos.y = 0;
        }
        if self.pos.y > max_y {
            self.pos.y = max_y;
        }
    }

    /// Edge-triggered color cycling. Returns true if the color changed.
    pub fn cycle_color(&mut self, prev: bool, next: bool) -> bool {
        let before = self.color;
        if self.color_prev.fire(prev) {
            self.color = self.color.prev();
        }
        if self.color_next.fire(next) {
            self.color = self.color.next();
        }
        self.color != before
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.width, self.height)
    }

    pub fn center(&self) -> Vec2i {
        self.bounds().center()
    }
}
