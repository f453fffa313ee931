use authors_api::model::author::{Author, AuthorDraft};
use tracing::info;

use crate::{author::repository::AuthorRepositoryArc, error::AppResult};

/// Command for creating new authors.
///
/// Rejects names that are already taken and lets the repository assign the id.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommand {
    author_repository: AuthorRepositoryArc,
}

/// Input data for creating an author.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommandInput {
    /// Author name, must not match an existing author
    pub name: String,
    /// Author email
    pub email: String,
}

/// Output data from author creation.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommandOutput {
    /// The created author
    pub author: Author,
}

impl CreateAuthorCommand {
    /// Creates a new `CreateAuthorCommand`.
    ///
    /// # Arguments
    ///
    /// * `author_repository` - Repository holding author data
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        Self { author_repository }
    }

    /// Executes the author creation command.
    ///
    /// # Errors
    ///
    /// Returns an error if an author with the same name already exists.
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        input: CreateAuthorCommandInput,
    ) -> AppResult<CreateAuthorCommandOutput> {
        info!(name = %input.name, "Creating author");

        let author = self
            .author_repository
            .create(AuthorDraft {
                name: input.name,
                email: input.email,
            })
            .await?;

        info!(author_id = %author.id, "Successfully created author");

        Ok(CreateAuthorCommandOutput { author })
    }
}
