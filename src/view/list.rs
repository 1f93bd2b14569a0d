//! Restaurant list view state container

use super::cards::{FeaturedCard, ListPage, RestaurantCard};
use super::filter::{featured, filter_by_name};
use super::images::PlaceholderImages;
use super::loader::{Delivery, MountGuard, ViewMessage, spawn_load};
use crate::config::ViewConfig;
use crate::core::AuthContext;
use crate::directory::DirectoryClient;
use crate::entities::Restaurant;
use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

/// Progress of the single directory load of a mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// `load` has not been called yet
    Idle,
    /// The load task is running
    Loading,
    Loaded,
    /// The fetch failed; the collection was left as it was
    Failed,
}

/// State behind the restaurant listing page.
///
/// Holds the fetched collection and the current search term. The featured
/// and filtered sequences are derived on every call and never cached.
/// Dropping the view unmounts it: a load still in flight will discard its
/// result.
#[derive(Debug)]
pub struct RestaurantListView {
    restaurants: Vec<Restaurant>,
    search_term: String,
    featured_count: usize,
    images: PlaceholderImages,
    load_state: LoadState,
    inbox: Option<UnboundedReceiver<ViewMessage>>,
    mount: MountGuard,
}

impl RestaurantListView {
    pub fn new(config: &ViewConfig) -> Result<Self> {
        Ok(Self::with_images(
            PlaceholderImages::from_config(config)?,
            config.featured_count,
        ))
    }

    pub fn with_images(images: PlaceholderImages, featured_count: usize) -> Self {
        Self {
            restaurants: Vec::new(),
            search_term: String::new(),
            featured_count,
            images,
            load_state: LoadState::Idle,
            inbox: None,
            mount: MountGuard::new(),
        }
    }

    /// Start the directory load for this mount.
    ///
    /// Only the first call spawns a task; later calls return `None`. The
    /// result reaches the view through [`drain_messages`](Self::drain_messages)
    /// or [`next_message`](Self::next_message).
    pub fn load<C>(&mut self, client: C) -> Option<JoinHandle<Delivery>>
    where
        C: DirectoryClient + 'static,
    {
        if self.load_state != LoadState::Idle {
            tracing::warn!(state = ?self.load_state, "directory load already issued for this mount");
            return None;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        self.inbox = Some(rx);
        self.load_state = LoadState::Loading;

        Some(spawn_load(client, self.mount.handle(), tx))
    }

    /// Apply a load result to the state
    pub fn apply(&mut self, message: ViewMessage) {
        match message {
            ViewMessage::Loaded(restaurants) => {
                self.restaurants = restaurants;
                self.load_state = LoadState::Loaded;
            }
            ViewMessage::LoadFailed => {
                self.load_state = LoadState::Failed;
            }
        }
    }

    /// Apply every message already waiting, without blocking.
    ///
    /// Returns how many were applied.
    pub fn drain_messages(&mut self) -> usize {
        let mut pending = Vec::new();
        if let Some(inbox) = self.inbox.as_mut() {
            while let Ok(message) = inbox.try_recv() {
                pending.push(message);
            }
        }

        let applied = pending.len();
        for message in pending {
            self.apply(message);
        }
        applied
    }

    /// Wait for the next load result and apply it.
    ///
    /// Returns `false` when no result can arrive any more (no load issued,
    /// or the task ended without sending).
    pub async fn next_message(&mut self) -> bool {
        let Some(inbox) = self.inbox.as_mut() else {
            return false;
        };

        match inbox.recv().await {
            Some(message) => {
                self.apply(message);
                true
            }
            None => {
                self.inbox = None;
                false
            }
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    /// Tear the view down; any in-flight load discards its result
    pub fn unmount(self) {
        drop(self);
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The unfiltered collection, in service order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn filtered_restaurants(&self) -> Vec<&Restaurant> {
        filter_by_name(&self.restaurants, &self.search_term)
    }

    /// First restaurants of the unfiltered collection; ignores the search term
    pub fn featured_restaurants(&self) -> &[Restaurant] {
        featured(&self.restaurants, self.featured_count)
    }

    /// Placeholder for rendering position `index`
    pub fn get_image(&self, index: usize) -> &str {
        self.images.get(index)
    }

    /// Image for `restaurant` shown at `index` of the sequence being rendered
    pub fn image_for<'a>(&'a self, restaurant: &'a Restaurant, index: usize) -> &'a str {
        self.images.resolve(restaurant, index)
    }

    /// Build the page for the given viewer
    pub fn page(&self, auth: &AuthContext) -> ListPage {
        let featured = self
            .featured_restaurants()
            .iter()
            .enumerate()
            .map(|(index, r)| FeaturedCard::new(r, self.image_for(r, index)))
            .collect();

        let restaurants = self
            .filtered_restaurants()
            .into_iter()
            .enumerate()
            .map(|(index, r)| RestaurantCard::new(r, self.image_for(r, index)))
            .collect();

        ListPage {
            greeting: auth.greeting(),
            search_term: self.search_term.clone(),
            featured,
            restaurants,
        }
    }
}
