//! Async event loop for hosts that deliver UI events over a channel.
//!
//! Everything runs on one task: events and the debounce deadline are
//! multiplexed with `select!`, so no work ever overlaps.

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info};
use wordfinder_search::DocumentHost;

use crate::finder::{FinderUi, UiEvent, WordFinder};

/// Drive `finder` from `events` until the channel closes, then hand the
/// finder back. A visibility pass still pending at close is dropped.
pub async fn run<D, U>(
    mut finder: WordFinder<D, U>,
    mut events: mpsc::Receiver<UiEvent>,
) -> WordFinder<D, U>
where
    D: DocumentHost,
    U: FinderUi,
{
    info!("word finder event loop started");

    loop {
        let deadline = finder.pending_deadline();

        tokio::select! {
            biased;

            _ = sleep_until(deadline) => {
                finder.on_tick(Instant::now().into_std());
            }
            event = events.recv() => match event {
                Some(event) => {
                    debug!(?event, "ui event");
                    finder.handle(event, Instant::now().into_std());
                }
                None => break,
            },
        }
    }

    info!("word finder event loop stopped");
    finder
}

async fn sleep_until(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
