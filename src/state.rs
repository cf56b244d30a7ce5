use crate::store::{AlbumRepository, InMemoryAlbumStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<dyn AlbumRepository>,
}

impl AppState {
    pub fn new(albums: Arc<dyn AlbumRepository>) -> Self {
        Self { albums }
    }

    /// State backed by a fresh in-memory store holding the seed catalog
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryAlbumStore::seeded()))
    }
}
