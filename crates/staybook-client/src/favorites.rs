//! Favorite listings kept on the client.

use serde::{Deserialize, Serialize};

use staybook_core::types::ListingId;
use staybook_entity::listing::ListingWithLocation;

/// Listing ids the user marked as favorite, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: Vec<ListingId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ListingId] {
        &self.ids
    }

    /// Returns false if `id` was already a favorite.
    pub fn add(&mut self, id: ListingId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns false if `id` was not a favorite.
    pub fn remove(&mut self, id: ListingId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|f| *f != id);
        self.ids.len() != before
    }

    /// Flips `id` and returns whether it is now a favorite.
    pub fn toggle(&mut self, id: ListingId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// The favorite entries of `listings`, keeping their order.
    pub fn select(&self, listings: &[ListingWithLocation]) -> Vec<ListingWithLocation> {
        listings
            .iter()
            .filter(|l| self.contains(l.listing.id))
            .cloned()
            .collect()
    }
}
