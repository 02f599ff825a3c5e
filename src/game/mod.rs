pub mod ai;
pub mod ball;
pub mod color;
pub mod match_state;
pub mod paddle;

use std::fmt;

pub use ai::{AiController, Motion};
pub use ball::Ball;
pub use color::ColorSelector;
pub use match_state::Match;
pub use paddle::Paddle;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in logical pixels, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub fn new(pos: Vec2i, w: i32, h: i32) -> Self {
        Self { x: pos.x, y: pos.y, w, h }
    }

    pub fn center(&self) -> Vec2i {
        Vec2i::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Strict overlap; touching edges do not count and empty rectangles never intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player1,
    Player2,
    Ai,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player1 => write!(f, "Player 1"),
            Winner::Player2 => write!(f, "Player 2"),
            Winner::Ai => write!(f, "AI"),
        }
    }
}

/// Things that happened during one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce(Wall),
    PaddleHit(Side),
    Scored { scorer: Side, left: u32, right: u32 },
    MatchOver(Winner),
}
