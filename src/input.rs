use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

pub const LEFT_UP: KeyCode = KeyCode::Char('w');
pub const LEFT_DOWN: KeyCode = KeyCode::Char('s');
pub const LEFT_COLOR_PREV: KeyCode = KeyCode::Char('a');
pub const LEFT_COLOR_NEXT: KeyCode = KeyCode::Char('d');
pub const RIGHT_UP: KeyCode = KeyCode::Up;
pub const RIGHT_DOWN: KeyCode = KeyCode::Down;
pub const RIGHT_COLOR_PREV: KeyCode = KeyCode::Left;
pub const RIGHT_COLOR_NEXT: KeyCode = KeyCode::Right;
pub const HELP: KeyCode = KeyCode::F(1);
pub const SCANLINES: KeyCode = KeyCode::F(2);

// Keys read through a KeyLatch rather than as a held level
const LATCHED: [KeyCode; 6] = [
    LEFT_COLOR_PREV,
    LEFT_COLOR_NEXT,
    RIGHT_COLOR_PREV,
    RIGHT_COLOR_NEXT,
    HELP,
    SCANLINES,
];

/// Held state of every polled action for one tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    pub left_up: bool,
    pub left_down: bool,
    pub left_color_prev: bool,
    pub left_color_next: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub right_color_prev: bool,
    pub right_color_next: bool,
    pub help: bool,
    pub scanlines: bool,
}

/// Debounce for edge-triggered actions: a held key fires once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum KeyLatch {
    #[default]
    Idle,
    Held,
}

impl KeyLatch {
    /// Feed the current held state; true only on the press edge.
    pub fn fire(&mut self, pressed: bool) -> bool {
        match (*self, pressed) {
            (KeyLatch::Idle, true) => {
                *self = KeyLatch::Held;
                true
            }
            (KeyLatch::Held, false) => {
                *self = KeyLatch::Idle;
                false
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hold {
    UntilRelease,
    Frames(u32),
}

/// Tracks which keys are down from the terminal's key event stream.
///
/// Terminals that report release events keep a key held until it is let go.
/// Otherwise a press (or auto-repeat) keeps the key held for `hold_frames` ticks,
/// or `latch_frames` for latched keys so the gap before auto-repeat kicks in
/// does not read as a release.
pub struct Keyboard {
    held: HashMap<KeyCode, Hold>,
    reports_release: bool,
    hold_frames: u32,
    latch_frames: u32,
}

impl Keyboard {
    pub fn new(reports_release: bool, hold_frames: u32, latch_frames: u32) -> Self {
        Self {
            held: HashMap::new(),
            reports_release,
            hold_frames: hold_frames.max(1),
            latch_frames: latch_frames.max(1),
        }
    }

    pub fn record(&mut self, key: &KeyEvent) {
        let code = normalize(key.code);
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                let hold = if self.reports_release {
                    Hold::UntilRelease
                } else if LATCHED.contains(&code) {
                    Hold::Frames(self.latch_frames)
                } else {
                    Hold::Frames(self.hold_frames)
                };
                self.held.insert(code, hold);
            }
            KeyEventKind::Release => {
                self.held.remove(&code);
            }
        }
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains_key(&normalize(code))
    }

    pub fn sample(&self) -> FrameInput {
        FrameInput {
            left_up: self.is_held(LEFT_UP),
            left_down: self.is_held(LEFT_DOWN),
            left_color_prev: self.is_held(LEFT_COLOR_PREV),
            left_color_next: self.is_held(LEFT_COLOR_NEXT),
            right_up: self.is_held(RIGHT_UP),
            right_down: self.is_held(RIGHT_DOWN),
            right_color_prev: self.is_held(RIGHT_COLOR_PREV),
            right_color_next: self.is_held(RIGHT_COLOR_NEXT),
            help: self.is_held(HELP),
            scanlines: self.is_held(SCANLINES),
        }
    }

    /// Age timed holds by one tick.
    pub fn end_frame(&mut self) {
        self.held.retain(|_, hold| match hold {
            Hold::UntilRelease => true,
            Hold::Frames(left) => {
                *left = left.saturating_sub(1);
                *left > 0
            }
        });
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn latch_fires_once_per_press() {
        let mut latch = KeyLatch::default();
        assert!(latch.fire(true));
        assert!(!latch.fire(true));
        assert!(!latch.fire(true));
        assert!(!latch.fire(false));
        assert!(latch.fire(true));
    }

    #[test]
    fn release_clears_held_key() {
        let mut keyboard = Keyboard::new(true, 4, 40);
        keyboard.record(&event(KeyCode::Char('w'), KeyEventKind::Press));
        for _ in 0..10 {
            keyboard.end_frame();
        }
        assert!(keyboard.sample().left_up);
        keyboard.record(&event(KeyCode::Char('w'), KeyEventKind::Release));
        assert!(!keyboard.sample().left_up);
    }

    #[test]
    fn timed_hold_expires_without_repeat() {
        let mut keyboard = Keyboard::new(false, 3, 40);
        keyboard.record(&event(KeyCode::Up, KeyEventKind::Press));
        for _ in 0..2 {
            assert!(keyboard.sample().right_up);
            keyboard.end_frame();
        }
        assert!(keyboard.sample().right_up);
        keyboard.end_frame();
        assert!(!keyboard.sample().right_up);
    }

    #[test]
    fn shifted_letters_map_to_same_action() {
        let mut keyboard = Keyboard::new(true, 1, 40);
        keyboard.record(&event(KeyCode::Char('S'), KeyEventKind::Press));
        let input = keyboard.sample();
        assert!(input.left_down);
        assert!(!input.left_up);
    }

    #[test]
    fn latched_keys_outlast_auto_repeat_delay() {
        let mut keyboard = Keyboard::new(false, 8, 40);
        let mut latch = KeyLatch::default();
        keyboard.record(&event(KeyCode::Char('d'), KeyEventKind::Press));
        keyboard.record(&event(KeyCode::Char('w'), KeyEventKind::Press));

        let mut fired = 0;
        for tick in 0..30 {
            let input = keyboard.sample();
            assert_eq!(input.left_up, tick < 8);
            fired += latch.fire(input.left_color_next) as u32;
            keyboard.end_frame();
        }
        // Auto-repeat arrives as plain presses
        for _ in 0..10 {
            keyboard.record(&event(KeyCode::Char('d'), KeyEventKind::Press));
            for _ in 0..2 {
                fired += latch.fire(keyboard.sample().left_color_next) as u32;
                keyboard.end_frame();
            }
        }
        assert_eq!(fired, 1);
    }
}
