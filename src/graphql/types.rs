use async_graphql::{Context, ErrorExtensions, Object, Result, SimpleObject, ID};
use time::OffsetDateTime;

use crate::data::{NoteRecord, UserRecord};
use crate::graphql::errors::{internal, ApiError};
use crate::store::Stores;

pub struct User(pub UserRecord);

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_string())
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn avatar(&self) -> Option<&str> {
        self.0.avatar.as_deref()
    }

    async fn notes(&self, ctx: &Context<'_>) -> Result<Vec<Note>> {
        let stores = ctx.data::<Stores>()?;
        Ok(
            stores.notes.notes_by_author(self.0.id).await
                .map_err(internal)?
                .into_iter()
                .map(Note)
                .collect()
        )
    }

    async fn favorites(&self, ctx: &Context<'_>) -> Result<Vec<Note>> {
        let stores = ctx.data::<Stores>()?;
        Ok(
            stores.notes.notes_favorited_by(self.0.id).await
                .map_err(internal)?
                .into_iter()
                .map(Note)
                .collect()
        )
    }
}

pub struct Note(pub NoteRecord);

#[Object]
impl Note {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_string())
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        let stores = ctx.data::<Stores>()?;
        stores.users.user_by_id(self.0.author).await
            .map_err(internal)?
            .map(User)
            .ok_or_else(|| ApiError::NotFound.extend())
    }

    async fn created_at(&self) -> OffsetDateTime {
        self.0.created_at
    }

    async fn updated_at(&self) -> OffsetDateTime {
        self.0.updated_at
    }

    async fn favorite_count(&self) -> i32 {
        self.0.favorite_count
    }

    async fn favorited_by(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let stores = ctx.data::<Stores>()?;
        let mut users = Vec::with_capacity(self.0.favorited_by.len());
        for id in &self.0.favorited_by {
            if let Some(user) = stores.users.user_by_id(*id).await.map_err(internal)? {
                users.push(User(user));
            }
        }
        Ok(users)
    }
}

#[derive(SimpleObject)]
pub struct NoteFeed {
    pub notes: Vec<Note>,
    /// Id of the last note in the page, empty when the page is empty.
    pub cursor: String,
    pub has_next_page: bool,
}

impl NoteFeed {
    pub fn empty() -> Self {
        NoteFeed {
            notes: Vec::new(),
            cursor: String::new(),
            has_next_page: false,
        }
    }
}
