use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent};

use crate::error::AppError;

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Reads terminal input on a background thread and paces frames.
///
/// Key events (press, repeat and release) are forwarded as they arrive; a
/// `Tick` is sent once per frame period regardless of input traffic.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    // Key event read while collapsing ticks
    pending: Option<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms.max(1));

        thread::spawn(move || {
            let mut next_tick = Instant::now() + tick_rate;
            loop {
                let timeout = next_tick.saturating_duration_since(Instant::now());
                if event::poll(timeout).unwrap_or(false) {
                    if let Ok(crossterm::event::Event::Key(key)) = event::read() {
                        if tx.send(Event::Key(key)).is_err() {
                            return;
                        }
                    }
                }

                let now = Instant::now();
                if now >= next_tick {
                    next_tick += tick_rate;
                    // Don't burst ticks after a stall
                    if next_tick < now {
                        next_tick = now + tick_rate;
                    }
                    if tx.send(Event::Tick).is_err() {
                        return;
                    }
                }
            }
        });

        Self::with_receiver(rx)
    }

    fn with_receiver(rx: mpsc::Receiver<Event>) -> Self {
        Self { rx, pending: None }
    }

    /// Next event. Ticks queued up behind a slow frame fold into one.
    pub fn next(&mut self) -> Result<Event, AppError> {
        let event = match self.pending.take() {
            Some(event) => event,
            None => self.rx.recv().map_err(|_| AppError::EventChannelClosed)?,
        };
        if let Event::Tick = event {
            while let Ok(queued) = self.rx.try_recv() {
                if let Event::Key(_) = queued {
                    self.pending = Some(queued);
                    break;
                }
            }
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn queued_ticks_collapse_but_keys_keep_their_place() {
        let (tx, rx) = mpsc::channel();
        let mut events = EventHandler::with_receiver(rx);
        for _ in 0..5 {
            tx.send(Event::Tick).unwrap();
        }
        tx.send(Event::Key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE))).unwrap();
        tx.send(Event::Tick).unwrap();
        tx.send(Event::Tick).unwrap();

        assert!(matches!(events.next().unwrap(), Event::Tick));
        assert!(matches!(events.next().unwrap(), Event::Key(k) if k.code == KeyCode::Char('w')));
        assert!(matches!(events.next().unwrap(), Event::Tick));

        drop(tx);
        assert!(matches!(events.next(), Err(AppError::EventChannelClosed)));
    }
}
