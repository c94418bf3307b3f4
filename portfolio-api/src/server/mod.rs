use axum::{
    Router,
    extract::{FromRef, Request, rejection::PathRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use json::Json;
use portfolio_catalog::client::Catalog;
use portfolio_common::model::{Id, post::PostMarker};
use serde::Serialize;
use std::{path::Path, sync::Arc};
use thiserror::Error;
use tower_http::services::ServeDir;
use tracing::{debug, error};
use views::Views;

mod json;
mod routes;
pub mod views;

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, Debug, FromRef)]
pub struct ServerState {
    pub catalog: Arc<Catalog>,
    pub views: Arc<Views>,
}

/// The complete site: pages, JSON API, and static files from `static_dir`.
pub fn app(state: ServerState, static_dir: &Path) -> Router {
    routes::routes()
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

pub async fn api_fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error("Post with id {0} was not found.")]
    PostByIdNotFound(Id<PostMarker>),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_)
            | ServerError::PathRejection(_)
            | ServerError::PostByIdNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::JsonResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            ServerError::UnknownRoute(_) | ServerError::PathRejection(_) => "Not found".to_owned(),
            ServerError::PostByIdNotFound(_) => "Post not found".to_owned(),
            ServerError::JsonResponse(_) => self.to_string(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, %status, "Replying with error");
        } else {
            debug!(error = %self, %status, "Replying with error");
        }

        let error_response = ErrorResponse {
            error: self.public_message(),
        };
        (status, Json(error_response)).into_response()
    }
}
