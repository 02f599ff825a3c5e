use rand::Rng;

/// Paddle and ball color in RWG mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSelector {
    #[default]
    White,
    Red,
    Green,
}

impl ColorSelector {
    pub const ALL: [ColorSelector; 3] = [ColorSelector::White, ColorSelector::Red, ColorSelector::Green];

    pub fn next(self) -> Self {
        match self {
            ColorSelector::White => ColorSelector::Red,
            ColorSelector::Red => ColorSelector::Green,
            ColorSelector::Green => ColorSelector::White,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ColorSelector::White => ColorSelector::Green,
            ColorSelector::Red => ColorSelector::White,
            ColorSelector::Green => ColorSelector::Red,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorSelector::White => (255, 255, 255),
            ColorSelector::Red => (255, 0, 0),
            ColorSelector::Green => (0, 255, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorSelector::White => "white",
            ColorSelector::Red => "red",
            ColorSelector::Green => "green",
        }
    }
}
