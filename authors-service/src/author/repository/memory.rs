use async_trait::async_trait;
use authors_api::model::{
    author::{Author, AuthorDraft, AuthorId},
    error::{AuthorError, AuthorResult},
};
use tokio::sync::RwLock;

use crate::author::repository::AuthorRepository;

/// In-memory implementation of the author repository.
#[derive(Debug)]
pub struct MemoryAuthorRepository {
    table: RwLock<AuthorTable>,
}

#[derive(Debug)]
struct AuthorTable {
    authors: Vec<Author>,
    next_id: AuthorId,
}

impl Default for MemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthorRepository {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self::with_data(Vec::new())
    }

    /// Creates a new memory repository with initial data.
    ///
    /// Ids are assigned in order starting from [`AuthorId::FIRST`].
    ///
    /// # Arguments
    ///
    /// * `authors` - Initial list of authors to populate the repository
    pub fn with_data(authors: Vec<AuthorDraft>) -> Self {
        let mut table = AuthorTable {
            authors: Vec::with_capacity(authors.len()),
            next_id: AuthorId::FIRST,
        };
        for draft in authors {
            table.append(draft);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    /// Creates a repository holding the two default authors.
    pub fn seeded() -> Self {
        Self::with_data(vec![
            AuthorDraft::new("Roald Dahl", "roald@dahl.com"),
            AuthorDraft::new("Jane Auston", "jane@auston.com"),
        ])
    }
}

impl AuthorTable {
    fn append(&mut self, draft: AuthorDraft) {
        let id = self.next_id;
        self.next_id = id.next();
        self.authors.push(Author::new(id, draft));
    }

    fn find_by_name(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|author| author.name == name)
    }

    fn position(&self, id: AuthorId) -> AuthorResult<usize> {
        self.authors
            .iter()
            .position(|author| author.id == id)
            .ok_or(AuthorError::NotFound)
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn list(&self) -> AuthorResult<Vec<Author>> {
        let table = self.table.read().await;
        if table.authors.is_empty() {
            return Err(AuthorError::NotFound);
        }
        Ok(table.authors.clone())
    }

    async fn get(&self, id: AuthorId) -> AuthorResult<Author> {
        let table = self.table.read().await;
        table
            .authors
            .iter()
            .find(|author| author.id == id)
            .cloned()
            .ok_or(AuthorError::NotFound)
    }

    async fn create(&self, draft: AuthorDraft) -> AuthorResult<Author> {
        let mut table = self.table.write().await;
        if table.find_by_name(&draft.name).is_some() {
            return Err(AuthorError::already_exists(draft.name));
        }

        let name = draft.name.clone();
        table.append(draft);

        // Stored record is looked up by name, first match wins.
        table
            .find_by_name(&name)
            .cloned()
            .ok_or(AuthorError::NotFound)
    }

    async fn update(&self, id: AuthorId, draft: AuthorDraft) -> AuthorResult<Author> {
        let mut table = self.table.write().await;
        let index = table.position(id)?;
        let author = &mut table.authors[index];
        author.apply(draft);
        Ok(author.clone())
    }

    async fn delete(&self, id: AuthorId) -> AuthorResult<Vec<Author>> {
        let mut table = self.table.write().await;
        let index = table.position(id)?;
        table.authors.remove(index);
        Ok(table.authors.clone())
    }
}
