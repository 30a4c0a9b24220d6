use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::clients::LocationProvider;
use crate::domain::IssLocation;
use crate::errors::ClientError;

/// One tracker update: a fresh position, or the error that poll produced.
pub type Update = Result<IssLocation, ClientError>;

const UPDATE_CHANNEL_CAPACITY: usize = 16;

/// Periodic position poller.
///
/// Fetches immediately on start and then once per interval, delivering every
/// outcome in order over a bounded channel. A failed poll is delivered as an
/// `Err` update and polling continues.
pub struct Tracker {
    updates: mpsc::Receiver<Update>,
    task: JoinHandle<()>,
}

impl Tracker {
    pub fn start<P>(provider: P, interval: Duration) -> Self
    where
        P: LocationProvider + 'static,
    {
        let (tx, rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);

        let task = tokio::spawn(async move {
            info!("Tracking started with interval {:?}", interval);

            loop {
                let update = provider.fetch_location().await;
                match &update {
                    Ok(location) => info!(
                        "ISS at ({}, {})",
                        location.coordinates.latitude, location.coordinates.longitude
                    ),
                    Err(e) => error!("ISS fetch failed: {}", e),
                }

                if tx.send(update).await.is_err() {
                    info!("Update receiver dropped, tracking stopped");
                    break;
                }

                tokio::time::sleep(interval).await;
            }
        });

        Self { updates: rx, task }
    }

    /// Next update; `None` once the tracker has stopped.
    pub async fn recv(&mut self) -> Option<Update> {
        self.updates.recv().await
    }

    /// Stop polling. Already-delivered updates can still be drained; the
    /// stream then ends.
    pub fn stop(&mut self) {
        self.task.abort();
        self.updates.close();
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
