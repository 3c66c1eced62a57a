use actix_web::{HttpResponse, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use tracing::error;

/// One field that failed request validation.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FieldError {
    #[schema(example = "workDescription", value_type = String)]
    pub field: &'static str,
    #[schema(example = "Work description is required")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Domain error taxonomy. Every handler returns `Result<_, ApiError>` and the
/// `ResponseError` impl maps each variant to a structured JSON body with a
/// machine-distinguishable `kind`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("A log already exists for this date and project")]
    DuplicateLog { existing_log_id: String },

    #[error("Log is already {current}")]
    InvalidTransition { current: String },

    #[error("Cannot modify an approved log")]
    LogLocked,

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Unauthenticated(_) => "unauthenticated",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::NotFound(_) => "not_found",
            ApiError::DuplicateLog { .. } => "duplicate_log",
            ApiError::InvalidTransition { .. } => "invalid_transition",
            ApiError::LogLocked => "log_locked",
            ApiError::Store(_) => "store_unavailable",
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicateLog { .. }
            | ApiError::InvalidTransition { .. }
            | ApiError::LogLocked => StatusCode::CONFLICT,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });

        match self {
            ApiError::Validation(errors) => {
                body["errors"] = serde_json::to_value(errors).unwrap_or_default();
            }
            ApiError::DuplicateLog { existing_log_id } => {
                body["existingLogId"] = json!(existing_log_id);
            }
            ApiError::Store(e) => {
                // details go to the log only, the caller gets an opaque 500
                error!(error = %e, "Store operation failed");
                body["message"] = json!("Something went wrong on the server");
            }
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}
