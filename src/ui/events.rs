use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::apod::{FetchError, MediaItem};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// A fetch finished on the network runtime.
    /// Tagged with the request token so superseded results can be dropped.
    FetchCompleted {
        token: u64,
        result: Result<Vec<MediaItem>, FetchError>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                    let forwarded = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Mouse(mouse)) => event_tx.send(AppEvent::Mouse(mouse)),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "terminal read failed");
                                break;
                            }
                        },
                        Ok(false) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "terminal poll failed");
                            break;
                        }
                    };
                    // Receiver gone: the UI loop has exited.
                    if forwarded.is_err() {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
            .ok();

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
