use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Capability to emit the HTTP response for an already-accepted request.
///
/// Page handlers receive this instead of reaching for a server handle, so
/// the same handler can answer through axum or be driven directly in tests.
pub trait ResponseWriter {
    type Error;

    fn send(
        &mut self,
        status: StatusCode,
        content_type: &str,
        body: String,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("response already sent for this request")]
    AlreadySent,

    #[error("invalid content type {0:?}")]
    InvalidContentType(String),

    #[error("handler finished without sending a response")]
    NothingSent,
}

impl IntoResponse for SendError {
    fn into_response(self) -> Response {
        tracing::error!("Failed to send response: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

/// Writer that holds the single response of one axum request
#[derive(Default)]
pub struct BufferedResponse {
    sent: Option<Response>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the response out, failing if the handler never sent one
    pub fn finish(self) -> Result<Response, SendError> {
        self.sent.ok_or(SendError::NothingSent)
    }
}

impl ResponseWriter for BufferedResponse {
    type Error = SendError;

    fn send(
        &mut self,
        status: StatusCode,
        content_type: &str,
        body: String,
    ) -> Result<(), SendError> {
        if self.sent.is_some() {
            return Err(SendError::AlreadySent);
        }

        let content_type = HeaderValue::from_str(content_type)
            .map_err(|_| SendError::InvalidContentType(content_type.to_string()))?;

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);

        self.sent = Some(response);
        Ok(())
    }
}
