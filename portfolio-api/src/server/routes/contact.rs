use crate::server::{ServerError, ServerRouter, json::Json};
use axum::{
    Json as AxumJson,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::routing::{RouterExt, TypedPath};
use portfolio_common::contact::{ContactForm, ContactMessage, MissingContactFieldError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

pub const SENT_MESSAGE: &str = "Tin nhắn đã được gửi thành công! Cảm ơn bạn đã liên hệ.";
pub const MISSING_FIELD_MESSAGE: &str = "Vui lòng điền đầy đủ thông tin";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MissingField(#[from] MissingContactFieldError),
    #[error("{0}")]
    Rejection(#[from] JsonRejection),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingField(_) => StatusCode::BAD_REQUEST,
            Error::Rejection(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct ContactReply {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let error = match &self {
            Error::MissingField(err) => {
                debug!(error = %err, %status, "Rejecting contact message");
                MISSING_FIELD_MESSAGE.to_owned()
            }
            Error::Rejection(rejection) => {
                error!(error = %rejection, %status, "Contact message could not be read");
                rejection.body_text()
            }
        };

        let reply = ContactReply {
            success: false,
            message: None,
            error: Some(error),
        };
        (status, Json(reply)).into_response()
    }
}

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_post(send_message)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/send-message", rejection(ServerError))]
struct SendMessagePath();

async fn send_message(
    SendMessagePath(): SendMessagePath,
    payload: Result<AxumJson<ContactForm>, JsonRejection>,
) -> Result<Json<ContactReply>, Error> {
    let AxumJson(form) = payload?;
    let message = ContactMessage::try_from(form)?;

    // Messages are only logged, never stored or forwarded.
    info!(
        name = message.name(),
        email = message.email(),
        body = message.message(),
        "New contact message"
    );

    Ok(Json(ContactReply {
        success: true,
        message: Some(SENT_MESSAGE),
        error: None,
    }))
}
