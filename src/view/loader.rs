//! Asynchronous directory load with mount liveness
//!
//! ```text
//! RestaurantListView::load ──▶ tokio::spawn(load task)
//!                                   │ fetch_restaurants().await
//!                                   │ mount still alive?  ── no ──▶ discard
//!                                   ▼ yes
//!                         mpsc ──▶ ViewMessage ──▶ view.apply()
//! ```

use crate::directory::DirectoryClient;
use crate::entities::Restaurant;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Result of a directory load, as delivered to the view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMessage {
    /// The directory answered; replaces the view's collection
    Loaded(Vec<Restaurant>),

    /// The fetch failed and has already been logged
    LoadFailed,
}

/// What the load task did with its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// The view was torn down before the result arrived
    Discarded,
}

/// Owned by a mounted view; clears the liveness flag when dropped.
#[derive(Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A handle the load task can poll
    pub fn handle(&self) -> MountHandle {
        MountHandle {
            alive: Arc::clone(&self.alive),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Read-only view of a mount's liveness
#[derive(Debug, Clone)]
pub struct MountHandle {
    alive: Arc<AtomicBool>,
}

impl MountHandle {
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

/// Fetch the directory, logging instead of propagating any failure.
///
/// Returns `None` when the fetch failed; never retries.
pub async fn fetch_directory<C>(client: &C) -> Option<Vec<Restaurant>>
where
    C: DirectoryClient + ?Sized,
{
    tracing::debug!("loading restaurant directory");

    match client.fetch_restaurants().await {
        Ok(restaurants) => {
            tracing::info!(count = restaurants.len(), "restaurant directory loaded");
            Some(restaurants)
        }
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "Error fetching restaurants");
            None
        }
    }
}

/// Spawn the one-shot load task for a mount.
///
/// The result is sent over `tx` only if `mount` is still alive once the
/// fetch completes.
pub fn spawn_load<C>(
    client: C,
    mount: MountHandle,
    tx: UnboundedSender<ViewMessage>,
) -> JoinHandle<Delivery>
where
    C: DirectoryClient + 'static,
{
    tokio::spawn(async move {
        let message = match fetch_directory(&client).await {
            Some(restaurants) => ViewMessage::Loaded(restaurants),
            None => ViewMessage::LoadFailed,
        };

        if !mount.is_alive() {
            tracing::debug!("view unmounted before directory load finished, discarding result");
            return Delivery::Discarded;
        }

        match tx.send(message) {
            Ok(()) => Delivery::Delivered,
            Err(_) => {
                tracing::debug!("view inbox closed, discarding directory result");
                Delivery::Discarded
            }
        }
    })
}
