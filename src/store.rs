use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{seed_albums, Album};

/// Storage for the album collection
///
/// Implementations keep albums in insertion order. Ids are not unique; lookups
/// return the first album with a matching id.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// All albums in insertion order
    async fn list(&self) -> Result<Vec<Album>>;

    /// First album whose id equals `id`
    async fn get(&self, id: &str) -> Result<Option<Album>>;

    /// Append an album to the end of the collection
    async fn append(&self, album: Album) -> Result<()>;
}

/// Process-memory album collection, lost when the process exits
#[derive(Debug, Default)]
pub struct InMemoryAlbumStore {
    albums: RwLock<Vec<Album>>,
}

impl InMemoryAlbumStore {
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Store holding the fixed seed catalog
    pub fn seeded() -> Self {
        Self::new(seed_albums())
    }
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumStore {
    async fn list(&self) -> Result<Vec<Album>> {
        Ok(self.albums.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Album>> {
        let albums = self.albums.read().await;
        Ok(albums.iter().find(|album| album.id == id).cloned())
    }

    async fn append(&self, album: Album) -> Result<()> {
        self.albums.write().await.push(album);
        Ok(())
    }
}
