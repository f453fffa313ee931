use std::sync::Arc;

use authors_api::model::author::{Author, AuthorDraft, AuthorId};
use axum::{
    Json, Router,
    extract::{FromRequest, FromRequestParts, State},
    http::StatusCode,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::{
    author::{
        create_author_command::{CreateAuthorCommand, CreateAuthorCommandInput},
        delete_author_command::DeleteAuthorCommand,
        query_manager::AuthorQueryManager,
        repository::AuthorRepositoryArc,
        update_author_command::{UpdateAuthorCommand, UpdateAuthorCommandInput},
    },
    error::{AppError, AppResult},
};

/// HTTP adapter exposing author operations under `/authors`.
#[derive(Debug)]
pub struct AuthorAdapter {
    author_query_manager: AuthorQueryManager,
    create_author_command: CreateAuthorCommand,
    update_author_command: UpdateAuthorCommand,
    delete_author_command: DeleteAuthorCommand,
}

pub type AuthorAdapterArc = Arc<AuthorAdapter>;

/// JSON body extractor that reports failures as [`AppError`].
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor that reports failures as [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl AuthorAdapter {
    pub fn new(
        author_query_manager: AuthorQueryManager,
        author_repository: AuthorRepositoryArc,
    ) -> Self {
        AuthorAdapter {
            author_query_manager,
            create_author_command: CreateAuthorCommand::new(author_repository.clone()),
            update_author_command: UpdateAuthorCommand::new(author_repository.clone()),
            delete_author_command: DeleteAuthorCommand::new(author_repository),
        }
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/authors", get(list_authors).post(create_author))
            .route(
                "/authors/{id}",
                get(get_author).put(update_author).delete(delete_author),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::new(self))
    }
}

#[tracing::instrument(skip(adapter))]
async fn list_authors(State(adapter): State<AuthorAdapterArc>) -> AppResult<Json<Vec<Author>>> {
    let authors = adapter.author_query_manager.query_list().await?;
    Ok(Json(authors))
}

#[tracing::instrument(skip(adapter))]
async fn get_author(
    State(adapter): State<AuthorAdapterArc>,
    AppPath(id): AppPath<AuthorId>,
) -> AppResult<Json<Author>> {
    let author = adapter.author_query_manager.query_one(id).await?;
    Ok(Json(author))
}

#[tracing::instrument(skip(adapter))]
async fn create_author(
    State(adapter): State<AuthorAdapterArc>,
    AppJson(draft): AppJson<AuthorDraft>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let result = adapter
        .create_author_command
        .execute(CreateAuthorCommandInput {
            name: draft.name,
            email: draft.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.author)))
}

/// Replaces an author, answering `201 Created` like create does.
#[tracing::instrument(skip(adapter))]
async fn update_author(
    State(adapter): State<AuthorAdapterArc>,
    AppPath(id): AppPath<AuthorId>,
    AppJson(draft): AppJson<AuthorDraft>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let result = adapter
        .update_author_command
        .execute(UpdateAuthorCommandInput {
            id,
            name: draft.name,
            email: draft.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.author)))
}

#[tracing::instrument(skip(adapter))]
async fn delete_author(
    State(adapter): State<AuthorAdapterArc>,
    AppPath(id): AppPath<AuthorId>,
) -> AppResult<Json<Vec<Author>>> {
    let result = adapter.delete_author_command.execute(id).await?;
    Ok(Json(result.authors))
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, Write},
        sync::{Arc, Mutex},
    };

    use axum::{body::Body, http::Request};
    use tower::ServiceExt;
    use tracing_subscriber::fmt::format::FmtSpan;

    use crate::create_author_service;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn spans_do_not_record_store() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_span_events(FmtSpan::NEW)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let response = create_author_service()
            .router()
            .oneshot(
                Request::builder()
                    .uri("/authors/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_success());

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("get_author"));
        assert!(output.contains("query_one"));
        assert!(!output.contains("Jane Auston"));
        assert!(!output.contains("jane@auston.com"));
    }
}
