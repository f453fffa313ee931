use std::{
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// A stored author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub email: String,
}

/// Request body for creating or replacing an author.
///
/// Any `id` sent by the client is ignored, ids are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDraft {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub i64);

impl Author {
    pub fn new(id: AuthorId, draft: AuthorDraft) -> Self {
        Author {
            id,
            name: draft.name,
            email: draft.email,
        }
    }

    /// Overwrites name and email, keeping the id.
    pub fn apply(&mut self, draft: AuthorDraft) {
        self.name = draft.name;
        self.email = draft.email;
    }
}

impl AuthorDraft {
    pub fn new<N: ToString, E: ToString>(name: N, email: E) -> Self {
        AuthorDraft {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

impl AuthorId {
    /// The first id handed out by a fresh store.
    pub const FIRST: Self = AuthorId(1);

    pub fn new<T: Into<i64>>(id: T) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AuthorId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
