use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use uuid::Uuid;

use crate::graphql::errors::{internal, ApiError};
use crate::graphql::types::{Note, NoteFeed, User};
use crate::graphql::{parse_id, require_caller, FEED_PAGE_SIZE};
use crate::store::Stores;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn notes(&self, ctx: &Context<'_>) -> Result<Vec<Note>> {
        let stores = ctx.data::<Stores>()?;
        Ok(
            stores.notes.notes().await
                .map_err(internal)?
                .into_iter()
                .map(Note)
                .collect()
        )
    }

    async fn note(&self, ctx: &Context<'_>, id: ID) -> Result<Note> {
        let stores = ctx.data::<Stores>()?;
        stores.notes.note_by_id(parse_id(&id)?).await
            .map_err(internal)?
            .map(Note)
            .ok_or_else(|| ApiError::NotFound.extend())
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let stores = ctx.data::<Stores>()?;
        Ok(
            stores.users.users().await
                .map_err(internal)?
                .into_iter()
                .map(User)
                .collect()
        )
    }

    async fn user(&self, ctx: &Context<'_>, username: String) -> Result<Option<User>> {
        let stores = ctx.data::<Stores>()?;
        Ok(
            stores.users.user_by_username(&username).await
                .map_err(internal)?
                .map(User)
        )
    }

    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let caller = require_caller(ctx)?;
        let stores = ctx.data::<Stores>()?;
        stores.users.user_by_id(caller).await
            .map_err(internal)?
            .map(User)
            .ok_or_else(|| ApiError::NotFound.extend())
    }

    async fn note_feed(&self, ctx: &Context<'_>, cursor: Option<String>) -> Result<NoteFeed> {
        let stores = ctx.data::<Stores>()?;
        let before = match cursor.as_deref().filter(|c| !c.is_empty()) {
            None => None,
            Some(cursor) => match Uuid::parse_str(cursor) {
                Ok(id) => Some(id),
                // a malformed cursor anchors nothing
                Err(_) => return Ok(NoteFeed::empty()),
            },
        };
        let (page, has_next_page) = stores.notes
            .feed_page(before, FEED_PAGE_SIZE).await
            .map_err(internal)?;
        let cursor = page.last()
            .map(|n| n.id.to_string())
            .unwrap_or_default();
        Ok(
            NoteFeed {
                notes: page.into_iter().map(Note).collect(),
                cursor,
                has_next_page,
            }
        )
    }
}
