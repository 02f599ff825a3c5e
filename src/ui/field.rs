use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::{Bounds, ColorSelector, Side};
use crate::ui::digits;

const BACKGROUND: Color = Color::Rgb(0, 0, 0);
const HALF_LINE: Color = Color::Rgb(128, 128, 128);
const SCORE: Color = Color::Rgb(255, 255, 255);
const WINNING_SCORE: Color = Color::Rgb(0, 255, 0);

pub fn selector_color(color: ColorSelector) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Terminal-sized framebuffer. Each cell holds two vertically stacked pixels,
/// drawn with an upper half block (fg = top pixel, bg = bottom pixel).
pub struct PixelGrid {
    width: i64,
    height: i64,
    pixels: Vec<Color>,
}

impl PixelGrid {
    pub fn new(cols: u16, rows: u16, background: Color) -> Self {
        let width = cols as i64;
        let height = rows as i64 * 2;
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Fill a rectangle in grid pixels, clipped to the grid.
    pub fn fill(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.pixels[(py * self.width + px) as usize] = color;
            }
        }
    }

    /// Fill a rectangle given in logical screen pixels. Anything that
    /// overlaps a grid pixel lights it, so thin shapes never vanish.
    pub fn fill_logical(&mut self, rect: Bounds, screen: (i32, i32), color: Color) {
        let (sw, sh) = (screen.0.max(1) as i64, screen.1.max(1) as i64);
        let (x0, x1) = scale_span(rect.x as i64, rect.w as i64, sw, self.width);
        let (y0, y1) = scale_span(rect.y as i64, rect.h as i64, sh, self.height);
        self.fill(x0, y0, x1 - x0, y1 - y0, color);
    }

    /// Blank every odd pixel row.
    pub fn scanlines(&mut self, color: Color) {
        for y in (1..self.height).step_by(2) {
            self.fill(0, y, self.width, 1, color);
        }
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity((self.height / 2) as usize);
        for row in 0..self.height / 2 {
            let top = (row * 2 * self.width) as usize;
            let bottom = top + self.width as usize;
            let spans: Vec<Span<'static>> = (0..self.width as usize)
                .map(|col| {
                    Span::styled(
                        "▀",
                        Style::default().fg(self.pixels[top + col]).bg(self.pixels[bottom + col]),
                    )
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines
    }
}

// Map [start, start + len) from a logical axis of `logical` pixels onto `grid` pixels.
fn scale_span(start: i64, len: i64, logical: i64, grid: i64) -> (i64, i64) {
    let lo = (start * grid).div_euclid(logical);
    let hi = ((start + len) * grid + logical - 1).div_euclid(logical);
    (lo, hi.max(lo + 1))
}

/// Rasterize the current match state.
pub fn draw_field(app: &App, cols: u16, rows: u16) -> PixelGrid {
    let game = &app.game;
    let config = game.config();
    let screen = (config.screen_width, config.screen_height);
    let mut grid = PixelGrid::new(cols, rows, BACKGROUND);

    // Half line
    let mid = Bounds { x: config.screen_width / 2, y: 0, w: 1, h: config.screen_height };
    grid.fill_logical(mid, screen, HALF_LINE);

    if game.is_on() {
        grid.fill_logical(game.left.bounds(), screen, selector_color(game.left.color));
        grid.fill_logical(game.right.bounds(), screen, selector_color(game.right.color));
        if game.ball.in_play {
            grid.fill_logical(game.ball.bounds(), screen, selector_color(game.ball.color));
        }
    }

    // Scores sit a quarter of the way in from each side
    let pair = digits::PAIR_WIDTH;
    let left_x = grid.width() / 4 - pair / 2;
    let right_x = grid.width() - pair - left_x;
    for (side, x) in [(Side::Left, left_x), (Side::Right, right_x)] {
        let color = if game.scores.has_won(side) { WINNING_SCORE } else { SCORE };
        digits::draw_score(&mut grid, x, digits::TOP_OFFSET, game.scores.digits(side), color);
    }

    if app.scanlines {
        grid.scanlines(BACKGROUND);
    }
    grid
}

pub fn render_field(frame: &mut Frame, app: &App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let grid = draw_field(app, area.width, area.height);
    frame.render_widget(Paragraph::new(grid.into_lines()), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_rects_scale_and_never_vanish() {
        let mut grid = PixelGrid::new(64, 24, BACKGROUND);
        // 640x480 onto 64x48: 10 logical pixels per grid pixel
        let ball = Bounds { x: 316, y: 236, w: 8, h: 8 };
        grid.fill_logical(ball, (640, 480), Color::White);
        assert_eq!(grid.get(31, 23), Some(Color::White));
        assert_eq!(grid.get(32, 24), Some(Color::White));
        assert_eq!(grid.get(30, 23), Some(BACKGROUND));

        let line = Bounds { x: 320, y: 0, w: 1, h: 480 };
        grid.fill_logical(line, (640, 480), Color::Gray);
        assert_eq!(grid.get(32, 0), Some(Color::Gray));
        assert_eq!(grid.get(32, 47), Some(Color::Gray));
    }

    #[test]
    fn offscreen_rects_are_clipped() {
        let mut grid = PixelGrid::new(10, 5, BACKGROUND);
        grid.fill(-5, -5, 7, 7, Color::Red);
        grid.fill(8, 8, 10, 10, Color::Red);
        assert_eq!(grid.get(1, 1), Some(Color::Red));
        assert_eq!(grid.get(2, 2), Some(BACKGROUND));
        assert_eq!(grid.get(9, 9), Some(Color::Red));
        assert_eq!(grid.get(10, 0), None);
    }

    #[test]
    fn scanlines_blank_odd_rows() {
        let mut grid = PixelGrid::new(4, 2, Color::White);
        grid.scanlines(BACKGROUND);
        assert_eq!(grid.get(0, 0), Some(Color::White));
        assert_eq!(grid.get(0, 1), Some(BACKGROUND));
        assert_eq!(grid.get(3, 2), Some(Color::White));
        assert_eq!(grid.get(3, 3), Some(BACKGROUND));
        assert_eq!(grid.into_lines().len(), 2);
    }
}
