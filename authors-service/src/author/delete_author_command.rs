use authors_api::model::author::{Author, AuthorId};
use tracing::info;

use crate::{author::repository::AuthorRepositoryArc, error::AppResult};

#[derive(Debug, Clone)]
pub struct DeleteAuthorCommand {
    author_repository: AuthorRepositoryArc,
}

#[derive(Debug, Clone)]
pub struct DeleteAuthorCommandOutput {
    /// Authors left after the deletion
    pub authors: Vec<Author>,
}

impl DeleteAuthorCommand {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        DeleteAuthorCommand { author_repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: AuthorId) -> AppResult<DeleteAuthorCommandOutput> {
        let authors = self.author_repository.delete(id).await?;

        info!(author_id = %id, remaining = authors.len(), "Deleted author");

        Ok(DeleteAuthorCommandOutput { authors })
    }
}
