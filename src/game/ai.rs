use crate::config::Config;
use crate::game::{Ball, Paddle};

/// Last vertical move of the AI paddle, fed into ball returns like a held key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    #[default]
    Still,
}

/// Reactive right-paddle opponent. No prediction: it chases the ball's
/// current center once the ball is heading its way past the detection line.
#[derive(Debug, Default)]
pub struct AiController {
    motion: Motion,
}

impl AiController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn reset(&mut self) {
        self.motion = Motion::Still;
    }

    pub fn track(&mut self, paddle: &mut Paddle, ball: &Ball, config: &Config) {
        let ball_center = ball.center();
        if ball_center.x <= config.ai_detect_x() || ball.dir_x != 1 {
            self.motion = Motion::Still;
            return;
        }

        let step = config.paddle_speed;
        let paddle_center = paddle.center();
        if ball_center.y > paddle_center.y + step {
            paddle.pos.y += step;
            self.motion = Motion::Down;
        } else if ball_center.y < paddle_center.y - step {
            paddle.pos.y -= step;
            self.motion = Motion::Up;
        }
    }

    /// RWG mode: match the ball's color once it crosses into the AI's half.
    pub fn match_color(&self, paddle: &mut Paddle, ball: &Ball, config: &Config) -> bool {
        if ball.dir_x > 0 && ball.center().x > config.screen_width / 2 && paddle.color != ball.color {
            paddle.color = ball.color;
            return true;
        }
        false
    }
}
