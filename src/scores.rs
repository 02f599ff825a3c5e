use crate::game::Side;

/* Seven-segment digit pieces
        _0_
      1|   |2
       |_3_|
      4|   |5
       |_6_|
*/
pub const SEVEN_SEGMENT: [[bool; 7]; 10] = [
    // 0     1      2      3      4      5      6
    [true, true, true, false, true, true, true],     // 0
    [false, false, true, false, false, true, false], // 1
    [true, false, true, true, true, false, true],    // 2
    [true, false, true, true, false, true, true],    // 3
    [false, true, true, true, false, true, false],   // 4
    [true, true, false, true, false, true, true],    // 5
    [true, true, false, true, true, true, true],     // 6
    [true, false, true, false, false, true, false],  // 7
    [true, true, true, true, true, true, true],      // 8
    [true, true, true, true, false, true, true],     // 9
];

/// Lit segments for a decimal digit; anything above 9 wraps.
pub fn segments(digit: u8) -> [bool; 7] {
    SEVEN_SEGMENT[(digit % 10) as usize]
}

#[derive(Debug, Clone)]
pub struct ScoreBoard {
    left: u32,
    right: u32,
    win_score: u32,
    last_scorer: Option<Side>,
}

impl ScoreBoard {
    pub fn new(win_score: u32) -> Self {
        ScoreBoard {
            left: 0,
            right: 0,
            win_score: win_score.max(1),
            last_scorer: None,
        }
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
        self.last_scorer = None;
    }

    /// Add a point and remember who scored it. Returns the new score.
    pub fn award(&mut self, side: Side) -> u32 {
        self.last_scorer = Some(side);
        match side {
            Side::Left => {
                self.left += 1;
                self.left
            }
            Side::Right => {
                self.right += 1;
                self.right
            }
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn last_scorer(&self) -> Option<Side> {
        self.last_scorer
    }

    pub fn win_score(&self) -> u32 {
        self.win_score
    }

    pub fn has_won(&self, side: Side) -> bool {
        self.score(side) >= self.win_score
    }

    /// The side that reached the win score, left checked first.
    pub fn winner(&self) -> Option<Side> {
        if self.has_won(Side::Left) {
            Some(Side::Left)
        } else if self.has_won(Side::Right) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// (tens, ones) for the seven-segment display.
    pub fn digits(&self, side: Side) -> (u8, u8) {
        let score = self.score(side);
        (((score / 10) % 10) as u8, (score % 10) as u8)
    }

    /// Window title text, `"{left}-{right}"`.
    pub fn title(&self) -> String {
        format!("{}-{}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_lights_everything_and_one_is_right_side_only() {
        assert!(segments(8).iter().all(|s| *s));
        let one = segments(1);
        let lit: Vec<usize> = (0..7).filter(|i| one[*i]).collect();
        assert_eq!(lit, vec![2, 5]);
        assert!(!segments(0)[3]);
    }

    #[test]
    fn award_tracks_last_scorer() {
        let mut board = ScoreBoard::new(11);
        assert_eq!(board.last_scorer(), None);
        assert_eq!(board.award(Side::Right), 1);
        assert_eq!(board.last_scorer(), Some(Side::Right));
        assert_eq!(board.award(Side::Left), 1);
        assert_eq!(board.last_scorer(), Some(Side::Left));
        assert_eq!(board.title(), "1-1");
        board.reset();
        assert_eq!(board.title(), "0-0");
        assert_eq!(board.last_scorer(), None);
    }

    #[test]
    fn digits_split_tens_and_ones() {
        let mut board = ScoreBoard::new(20);
        for _ in 0..11 {
            board.award(Side::Left);
        }
        board.award(Side::Right);
        assert_eq!(board.digits(Side::Left), (1, 1));
        assert_eq!(board.digits(Side::Right), (0, 1));
    }

    #[test]
    fn winner_needs_threshold() {
        let mut board = ScoreBoard::new(3);
        board.award(Side::Right);
        board.award(Side::Right);
        assert_eq!(board.winner(), None);
        board.award(Side::Right);
        assert_eq!(board.winner(), Some(Side::Right));
        assert!(board.has_won(Side::Right));
        assert!(!board.has_won(Side::Left));
    }
}
