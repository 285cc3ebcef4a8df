pub mod errors;
pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Result, Schema, ID};
use uuid::Uuid;

use crate::access_token::AccessTokenGenerator;
use crate::hasher::Hasher;
use crate::store::Stores;
use errors::ApiError;
use mutation::MutationRoot;
use query::QueryRoot;

pub const FEED_PAGE_SIZE: usize = 10;

// requests past either limit are rejected before execution
pub const MAX_QUERY_DEPTH: usize = 5;
pub const MAX_QUERY_COMPLEXITY: usize = 1000;

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Identity the transport layer attaches to every request.
///
/// An unverifiable token never becomes [Caller::Anonymous]; the
/// request fails outright before resolver dispatch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Caller {
    Anonymous,
    User(Uuid),
}

impl Caller {
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Caller::User(id) => Some(*id),
            Caller::Anonymous => None,
        }
    }
}

pub fn build_schema(
    stores: Stores,
    hasher: Arc<dyn Hasher>,
    tokens: Arc<AccessTokenGenerator>,
) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(stores)
        .data(hasher)
        .data(tokens)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}

pub(crate) fn require_caller(ctx: &Context<'_>) -> Result<Uuid> {
    ctx.data_opt::<Caller>()
        .and_then(Caller::user_id)
        .ok_or_else(|| ApiError::Unauthenticated.extend())
}

pub(crate) fn parse_id(id: &ID) -> Result<Uuid> {
    Uuid::parse_str(id.as_str())
        .map_err(|_| ApiError::NotFound.extend())
}
