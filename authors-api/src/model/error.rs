use http::StatusCode;
use thiserror::Error;

/// Errors produced by author store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorError {
    /// No author matches the requested id, or there are no authors at all.
    #[error("Not found")]
    NotFound,

    /// An author with the same name already exists.
    #[error("Author already exists")]
    AlreadyExists { name: String },
}

pub type AuthorResult<T> = Result<T, AuthorError>;

impl AuthorError {
    pub fn already_exists<S: ToString>(name: S) -> Self {
        AuthorError::AlreadyExists {
            name: name.to_string(),
        }
    }

    /// HTTP status reported to clients.
    ///
    /// Duplicate names are reported as `418 I'm a teapot`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthorError::NotFound => StatusCode::NOT_FOUND,
            AuthorError::AlreadyExists { .. } => StatusCode::IM_A_TEAPOT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AuthorError::NotFound.status_code().as_u16(), 404);
        assert_eq!(
            AuthorError::already_exists("Roald Dahl").status_code().as_u16(),
            418
        );
    }

    #[test]
    fn messages() {
        assert_eq!(AuthorError::NotFound.to_string(), "Not found");
        assert_eq!(
            AuthorError::already_exists("Roald Dahl").to_string(),
            "Author already exists"
        );
    }
}
