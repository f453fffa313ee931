use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use authors_api::model::{
    author::{Author, AuthorDraft, AuthorId},
    error::AuthorResult,
};

pub mod memory;

/// Ordered author store.
///
/// Records are kept in insertion order and every lookup is a linear scan.
#[async_trait]
pub trait AuthorRepository: Debug {
    /// Returns all authors, failing with `NotFound` when there are none.
    async fn list(&self) -> AuthorResult<Vec<Author>>;

    async fn get(&self, id: AuthorId) -> AuthorResult<Author>;

    /// Appends a new author under a freshly assigned id.
    ///
    /// Fails with `AlreadyExists` if any author already has the same name.
    async fn create(&self, draft: AuthorDraft) -> AuthorResult<Author>;

    /// Replaces name and email of an existing author.
    async fn update(&self, id: AuthorId, draft: AuthorDraft) -> AuthorResult<Author>;

    /// Removes an author and returns the authors that remain.
    async fn delete(&self, id: AuthorId) -> AuthorResult<Vec<Author>>;
}

pub type AuthorRepositoryArc = Arc<dyn AuthorRepository + Send + Sync>;
