use authors_api::model::author::{Author, AuthorDraft, AuthorId};
use tracing::info;

use crate::{author::repository::AuthorRepositoryArc, error::AppResult};

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommand {
    author_repository: AuthorRepositoryArc,
}

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommandInput {
    pub id: AuthorId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommandOutput {
    pub author: Author,
}

impl UpdateAuthorCommand {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        UpdateAuthorCommand { author_repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        input: UpdateAuthorCommandInput,
    ) -> AppResult<UpdateAuthorCommandOutput> {
        let author = self
            .author_repository
            .update(
                input.id,
                AuthorDraft {
                    name: input.name,
                    email: input.email,
                },
            )
            .await?;

        info!(author_id = %author.id, "Updated author");

        Ok(UpdateAuthorCommandOutput { author })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use authors_api::model::error::AuthorError;

    use crate::{author::repository::memory::MemoryAuthorRepository, error::AppError};

    use super::*;

    #[tokio::test]
    async fn it_works() {
        let command = UpdateAuthorCommand::new(Arc::new(MemoryAuthorRepository::seeded()));
        let output = command
            .execute(UpdateAuthorCommandInput {
                id: AuthorId::new(1),
                name: "Roald Dahl".into(),
                email: "roald@example.com".into(),
            })
            .await
            .unwrap();
        assert_eq!(output.author.id, AuthorId::new(1));
        assert_eq!(output.author.email, "roald@example.com");
    }

    #[tokio::test]
    async fn missing_author() {
        let command = UpdateAuthorCommand::new(Arc::new(MemoryAuthorRepository::seeded()));
        let result = command
            .execute(UpdateAuthorCommandInput {
                id: AuthorId::new(3),
                name: "Mark Twain".into(),
                email: "mark@twain.com".into(),
            })
            .await;
        assert!(matches!(
            result,
            Err(AppError::Author(AuthorError::NotFound))
        ));
    }
}
