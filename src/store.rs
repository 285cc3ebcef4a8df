pub mod errors;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::data::{NoteRecord, UserRecord};
use errors::StoreError;

pub use memory::MemoryStore;

/// Fields of a user document at creation time.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    /// Already normalized (trimmed, lowercased) by the caller.
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user; username and email are unique across the
    /// collection.
    async fn create_user(&self, new: NewUser) -> Result<UserRecord, StoreError>;

    async fn user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError>;

    async fn user_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Find by either identifier, whichever is present. The email side
    /// expects an already-normalized address.
    async fn user_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<UserRecord>, StoreError>;

    async fn users(&self) -> Result<Vec<UserRecord>, StoreError>;
}

#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn create_note(&self, author: Uuid, content: String) -> Result<NoteRecord, StoreError>;

    async fn note_by_id(&self, id: Uuid) -> Result<Option<NoteRecord>, StoreError>;

    async fn notes(&self) -> Result<Vec<NoteRecord>, StoreError>;

    async fn notes_by_author(&self, author: Uuid) -> Result<Vec<NoteRecord>, StoreError>;

    async fn notes_favorited_by(&self, user: Uuid) -> Result<Vec<NoteRecord>, StoreError>;

    /// Set the content and bump `updated_at`.
    async fn set_content(&self, id: Uuid, content: String) -> Result<NoteRecord, StoreError>;

    /// Push [user] onto the favoritedBy set and increment the count,
    /// as one atomic update. Membership is the caller's concern.
    async fn add_favorite(&self, id: Uuid, user: Uuid) -> Result<NoteRecord, StoreError>;

    /// Pull [user] from the favoritedBy set and decrement the count,
    /// as one atomic update.
    async fn remove_favorite(&self, id: Uuid, user: Uuid) -> Result<NoteRecord, StoreError>;

    async fn delete_note(&self, id: Uuid) -> Result<(), StoreError>;

    /// A feed page: at most [limit] notes ordered newest-first, all
    /// strictly older (by feed key) than the note [before] references.
    /// The flag reports whether a strictly-older note remains beyond
    /// the page. An unknown [before] yields an empty page.
    async fn feed_page(
        &self,
        before: Option<Uuid>,
        limit: usize,
    ) -> Result<(Vec<NoteRecord>, bool), StoreError>;
}

/// Process-wide store handles, built once at startup and shared by
/// every request context.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub notes: Arc<dyn NoteStore>,
}

impl Stores {
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Stores {
            users: store.clone(),
            notes: store,
        }
    }
}
