//! Network side of the fetch cycle.
//!
//! The UI thread stays the single writer of view state: the worker only runs
//! requests and posts their results back as [`AppEvent::FetchCompleted`].

use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;

use crate::apod::GalleryFetchService;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Buffered fetch commands between the UI thread and the worker.
pub const COMMAND_CHANNEL_SIZE: usize = 16;

/// Runs until every command sender is dropped.
///
/// Each fetch gets its own task, so overlapping requests are not serialized
/// here; the gallery controller decides which result is current.
pub async fn fetch_worker(
    mut commands: Receiver<UiCommand>,
    service: Arc<dyn GalleryFetchService>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Fetch(ticket) => {
                let service = Arc::clone(&service);
                let events = events.clone();
                tokio::spawn(async move {
                    let result = service.fetch(ticket.range).await;
                    if events
                        .send(AppEvent::FetchCompleted {
                            token: ticket.token,
                            result,
                        })
                        .is_err()
                    {
                        tracing::debug!(token = ticket.token, "UI gone, dropping fetch result");
                    }
                });
            }
        }
    }
    tracing::debug!("fetch worker stopped");
}
