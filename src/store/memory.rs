#[cfg(test)] mod tests;

use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::data::{NoteRecord, UserRecord};
use crate::store::errors::StoreError;
use crate::store::{NewUser, NoteStore, UserStore};

/// In-memory document store. Every method takes the lock once, so each
/// single call is atomic; sequencing across calls is the caller's
/// problem, exactly as with a remote document database.
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

#[derive(Default)]
struct Collections {
    users: HashMap<Uuid, UserRecord>,
    notes: HashMap<Uuid, NoteRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            collections: RwLock::new(Collections::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, new: NewUser) -> Result<UserRecord, StoreError> {
        let mut collections = self.collections.write().await;
        if collections.users.values().any(|u| u.username == new.username) {
            return Err(StoreError::Duplicate { constraint: "username" });
        }
        if collections.users.values().any(|u| u.email == new.email) {
            return Err(StoreError::Duplicate { constraint: "email" });
        }
        let user = UserRecord {
            id: Uuid::new_v4(),
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            avatar: new.avatar,
        };
        collections.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.collections.read().await.users.get(&id).cloned())
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(
            self.collections.read().await.users.values()
                .find(|u| u.username == username)
                .cloned()
        )
    }

    async fn user_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<UserRecord>, StoreError> {
        Ok(
            self.collections.read().await.users.values()
                .find(|u| {
                    username.is_some_and(|name| u.username == name)
                        || email.is_some_and(|email| u.email == email)
                })
                .cloned()
        )
    }

    async fn users(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.collections.read().await.users.values().cloned().collect())
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create_note(&self, author: Uuid, content: String) -> Result<NoteRecord, StoreError> {
        let now = OffsetDateTime::now_utc();
        let note = NoteRecord {
            id: Uuid::new_v4(),
            content,
            author,
            created_at: now,
            updated_at: now,
            favorite_count: 0,
            favorited_by: Vec::new(),
        };
        self.collections.write().await.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn note_by_id(&self, id: Uuid) -> Result<Option<NoteRecord>, StoreError> {
        Ok(self.collections.read().await.notes.get(&id).cloned())
    }

    async fn notes(&self) -> Result<Vec<NoteRecord>, StoreError> {
        Ok(self.collections.read().await.notes.values().cloned().collect())
    }

    async fn notes_by_author(&self, author: Uuid) -> Result<Vec<NoteRecord>, StoreError> {
        Ok(
            self.collections.read().await.notes.values()
                .filter(|n| n.author == author)
                .cloned()
                .collect()
        )
    }

    async fn notes_favorited_by(&self, user: Uuid) -> Result<Vec<NoteRecord>, StoreError> {
        Ok(
            self.collections.read().await.notes.values()
                .filter(|n| n.favorited_by.contains(&user))
                .cloned()
                .collect()
        )
    }

    async fn set_content(&self, id: Uuid, content: String) -> Result<NoteRecord, StoreError> {
        let mut collections = self.collections.write().await;
        let note = collections.notes.get_mut(&id)
            .ok_or(StoreError::NotFound)?;
        note.content = content;
        note.updated_at = OffsetDateTime::now_utc();
        Ok(note.clone())
    }

    async fn add_favorite(&self, id: Uuid, user: Uuid) -> Result<NoteRecord, StoreError> {
        let mut collections = self.collections.write().await;
        let note = collections.notes.get_mut(&id)
            .ok_or(StoreError::NotFound)?;
        note.favorited_by.push(user);
        note.favorite_count += 1;
        Ok(note.clone())
    }

    async fn remove_favorite(&self, id: Uuid, user: Uuid) -> Result<NoteRecord, StoreError> {
        let mut collections = self.collections.write().await;
        let note = collections.notes.get_mut(&id)
            .ok_or(StoreError::NotFound)?;
        note.favorited_by.retain(|u| *u != user);
        note.favorite_count -= 1;
        Ok(note.clone())
    }

    async fn delete_note(&self, id: Uuid) -> Result<(), StoreError> {
        self.collections.write().await.notes.remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn feed_page(
        &self,
        before: Option<Uuid>,
        limit: usize,
    ) -> Result<(Vec<NoteRecord>, bool), StoreError> {
        let collections = self.collections.read().await;
        let bound = match before {
            None => None,
            Some(id) => match collections.notes.get(&id) {
                Some(note) => Some(note.feed_key()),
                // stale cursor, nothing sensible to anchor on
                None => return Ok((Vec::new(), false)),
            },
        };
        let mut page: Vec<NoteRecord> = collections.notes.values()
            .filter(|n| bound.map_or(true, |bound| n.feed_key() < bound))
            .cloned()
            .collect();
        page.sort_by(|a, b| b.feed_key().cmp(&a.feed_key()));
        let has_next_page = page.len() > limit;
        page.truncate(limit);
        Ok((page, has_next_page))
    }
}
