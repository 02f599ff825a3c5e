use ratatui::style::Color;

use crate::scores;
use crate::ui::field::PixelGrid;

// Seven-segment geometry in grid pixels: horizontal bar 4x1, vertical bar 1x4.
const HBAR: (i64, i64) = (4, 1);
const VBAR: (i64, i64) = (1, 4);

/// Top-left offset and size of each segment, indexed like `scores::SEVEN_SEGMENT`.
const SEGMENT_RECTS: [(i64, i64, (i64, i64)); 7] = [
    (0, 0, HBAR), // top
    (0, 0, VBAR), // upper-left
    (3, 0, VBAR), // upper-right
    (0, 3, HBAR), // middle
    (0, 3, VBAR), // lower-left
    (3, 3, VBAR), // lower-right
    (0, 6, HBAR), // bottom
];

pub const DIGIT_WIDTH: i64 = HBAR.0;
/// Distance from the tens digit to the ones digit.
pub const DIGIT_PITCH: i64 = HBAR.0 + VBAR.0;
pub const PAIR_WIDTH: i64 = DIGIT_PITCH + DIGIT_WIDTH;
pub const TOP_OFFSET: i64 = 1;

pub fn draw_digit(grid: &mut PixelGrid, x: i64, y: i64, digit: u8, color: Color) {
    for (lit, (dx, dy, (w, h))) in scores::segments(digit).iter().zip(SEGMENT_RECTS) {
        if *lit {
            grid.fill(x + dx, y + dy, w, h, color);
        }
    }
}

pub fn draw_score(grid: &mut PixelGrid, x: i64, y: i64, (tens, ones): (u8, u8), color: Color) {
    draw_digit(grid, x, y, tens, color);
    draw_digit(grid, x + DIGIT_PITCH, y, ones, color);
}
