//! Placeholder image selection for restaurants without an image

use crate::config::{FallbackStrategy, ViewConfig};
use crate::entities::Restaurant;
use anyhow::{Result, bail};

/// Fixed, ordered set of bundled placeholder images
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderImages {
    images: Vec<String>,
    strategy: FallbackStrategy,
}

impl PlaceholderImages {
    /// Fails if `images` is empty: there would be nothing to cycle through.
    pub fn new(images: Vec<String>, strategy: FallbackStrategy) -> Result<Self> {
        if images.is_empty() {
            bail!("placeholder image set must not be empty");
        }
        Ok(Self { images, strategy })
    }

    pub fn from_config(config: &ViewConfig) -> Result<Self> {
        Self::new(config.placeholder_images.clone(), config.fallback)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; construction rejects an empty set.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn strategy(&self) -> FallbackStrategy {
        self.strategy
    }

    /// Placeholder at `index mod len`
    pub fn get(&self, index: usize) -> &str {
        &self.images[index % self.images.len()]
    }

    /// Image to show for `restaurant` rendered at `index` of some sequence.
    ///
    /// The restaurant's own image wins when it has one. Otherwise the
    /// placeholder depends on the strategy: by position, the same restaurant
    /// can get different placeholders in the carousel and in the grid.
    pub fn resolve<'a>(&'a self, restaurant: &'a Restaurant, index: usize) -> &'a str {
        restaurant
            .image()
            .unwrap_or_else(|| self.fallback(restaurant, index))
    }

    fn fallback(&self, restaurant: &Restaurant, index: usize) -> &str {
        match self.strategy {
            FallbackStrategy::Position => self.get(index),
            FallbackStrategy::Identity => {
                let slot = stable_hash(restaurant.restaurant_id.as_str()) % self.images.len() as u64;
                &self.images[slot as usize]
            }
        }
    }
}

// FNV-1a, so identity placeholders survive restarts and platforms.
fn stable_hash(key: &str) -> u64 {
    key.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
