use crate::apod::{ApodClient, GalleryFetchService};
use crate::config::Config;
use crate::facts::random_fact;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{fetch_worker, COMMAND_CHANNEL_SIZE};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Startup choices taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Start date applied before the first frame. Invalid text is ignored.
    pub start: Option<String>,
    /// Issue one fetch right away instead of waiting for the user.
    pub fetch_on_start: bool,
}

pub fn run(config: Config, launch: LaunchOptions) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .build()?;

    let client = ApodClient::new(&config.api).map_err(|err| io::Error::other(err.to_string()))?;
    let service: Arc<dyn GalleryFetchService> = Arc::new(client);

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
    runtime.spawn(fetch_worker(command_rx, service, events.sender()));

    let today = chrono::Local::now().date_naive();
    let mut app = App::new(today, random_fact());
    app.set_command_sender(command_tx);
    if let Some(start) = &launch.start {
        app.apply_start_date(start);
    }

    let (mut terminal, guard) = setup_terminal()?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    if launch.fetch_on_start {
        app.request_fetch();
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::FetchCompleted { token, result }) => {
                app.on_fetch_completed(token, result)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
