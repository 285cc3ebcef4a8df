use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    /// Stored lowercased and trimmed.
    pub email: String,
    /// PHC string, never the plaintext.
    pub password_hash: String,
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NoteRecord {
    pub id: Uuid,
    pub content: String,
    pub author: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    /// Denormalized; equals `favorited_by.len()` after every toggle.
    pub favorite_count: i32,
    pub favorited_by: Vec<Uuid>,
}

impl NoteRecord {
    /// Feed ordering and cursor comparison key. Creation time first,
    /// id as the tiebreak, so pages are stable under equal timestamps.
    pub fn feed_key(&self) -> (OffsetDateTime, Uuid) {
        (self.created_at, self.id)
    }
}
