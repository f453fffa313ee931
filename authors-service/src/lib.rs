pub mod author;
pub mod config;
pub mod error;
pub mod tracing;

use author::{
    adapter::AuthorAdapter,
    query_manager::AuthorQueryManager,
    repository::{AuthorRepositoryArc, memory::MemoryAuthorRepository},
};
use std::sync::Arc;

/// Builds the author service on top of the two default authors.
pub fn create_author_service() -> AuthorAdapter {
    create_author_service_with(Arc::new(MemoryAuthorRepository::seeded()))
}

pub fn create_author_service_with(author_repository: AuthorRepositoryArc) -> AuthorAdapter {
    let author_query_manager = AuthorQueryManager::new(Arc::clone(&author_repository));
    AuthorAdapter::new(author_query_manager, author_repository)
}
