use authors_api::model::author::{Author, AuthorId};

use crate::{author::repository::AuthorRepositoryArc, error::AppResult};

#[derive(Debug, Clone)]
pub struct AuthorQueryManager {
    author_repository: AuthorRepositoryArc,
}

impl AuthorQueryManager {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        AuthorQueryManager { author_repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn query_list(&self) -> AppResult<Vec<Author>> {
        Ok(self.author_repository.list().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn query_one(&self, id: AuthorId) -> AppResult<Author> {
        Ok(self.author_repository.get(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use authors_api::model::error::AuthorError;

    use crate::{author::repository::memory::MemoryAuthorRepository, error::AppError};

    use super::*;

    #[tokio::test]
    async fn query_seeded() {
        let query_manager = AuthorQueryManager::new(Arc::new(MemoryAuthorRepository::seeded()));
        assert_eq!(query_manager.query_list().await.unwrap().len(), 2);
        let author = query_manager.query_one(AuthorId::new(1)).await.unwrap();
        assert_eq!(author.name, "Roald Dahl");
    }

    #[tokio::test]
    async fn query_missing() {
        let query_manager = AuthorQueryManager::new(Arc::new(MemoryAuthorRepository::new()));
        assert!(matches!(
            query_manager.query_list().await,
            Err(AppError::Author(AuthorError::NotFound))
        ));
        assert!(matches!(
            query_manager.query_one(AuthorId::new(1)).await,
            Err(AppError::Author(AuthorError::NotFound))
        ));
    }
}
