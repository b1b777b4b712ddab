use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body returned for every failed proxy request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("{0}")]
    Validation(String),

    #[error("Google Solar API key not configured")]
    MissingApiKey,

    #[error("{context}: {message}")]
    Upstream {
        context: &'static str,
        message: String,
    },

    #[error("{context}: {cause}")]
    Transport {
        context: &'static str,
        cause: String,
    },

    #[error("Not Found")]
    NotFound,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            ProxyError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope {
                    error: msg,
                    message: None,
                },
            ),
            ProxyError::MissingApiKey => {
                tracing::error!("Rejecting request: provider API key is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope {
                        error: ProxyError::MissingApiKey.to_string(),
                        message: None,
                    },
                )
            }
            ProxyError::Upstream { context, message } => {
                tracing::error!("{}: {}", context, message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope {
                        error: context.to_string(),
                        message: Some(message),
                    },
                )
            }
            ProxyError::Transport { context, cause } => {
                tracing::error!("{}: {}", context, cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope {
                        error: context.to_string(),
                        message: Some(cause),
                    },
                )
            }
            ProxyError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorEnvelope {
                    error: "Not Found".to_string(),
                    message: None,
                },
            ),
        };

        (status, Json(envelope)).into_response()
    }
}

impl From<QueryRejection> for ProxyError {
    fn from(rejection: QueryRejection) -> Self {
        ProxyError::Validation(rejection.body_text())
    }
}

pub type ProxyResult<T> = Result<T, ProxyError>;
