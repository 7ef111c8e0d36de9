use actix_web::body::BoxBody;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::{NaiveDateTime, Utc};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Username already exists")]
    DuplicateUsername,
    #[error("Movie not found")]
    MovieNotFound,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Upload exceeds {0} bytes")]
    UploadTooLarge(usize),
    #[error("{0}")]
    Store(#[from] DieselError),
    #[error("Couldn't get db connection from pool: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("An unspecified internal error ocurred")]
    Blocking(#[from] BlockingError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("An unspecified internal error ocurred: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Maps a unique-constraint violation to [`ApiError::DuplicateUsername`].
    /// `users.username` is the only unique column written by the user operations.
    pub fn from_user_write(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ApiError::DuplicateUsername
            }
            err => ApiError::Store(err),
        }
    }

    fn get_error_code(&self) -> String {
        match self {
            ApiError::InvalidCredentials => "IC-00401".to_string(),
            ApiError::DuplicateUsername => "DU-00400".to_string(),
            ApiError::MovieNotFound => "MNF-00404".to_string(),
            ApiError::InvalidBody(_) => "IB-00400".to_string(),
            ApiError::InvalidPath(_) => "IP-00404".to_string(),
            ApiError::UploadTooLarge(_) => "UTL-00413".to_string(),
            ApiError::Io(_) => "IO-00500".to_string(),
            ApiError::Store(_) => "SE-00500".to_string(),
            ApiError::Pool(_) => "PE-00500".to_string(),
            ApiError::Blocking(_) => "DE-00500".to_string(),
            ApiError::Internal(_) => "IE-00500".to_string(),
        }
    }

    // Rejections carry `message`; store failures and misses carry `error`.
    fn is_rejection(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidCredentials
                | ApiError::DuplicateUsername
                | ApiError::InvalidBody(_)
                | ApiError::UploadTooLarge(_)
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status: u16,
    pub timestamp: NaiveDateTime,
    pub internal_code: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(value: &ApiError) -> Self {
        let text = value.to_string();
        let (message, error) = if value.is_rejection() {
            (Some(text), None)
        } else {
            (None, Some(text))
        };
        Self {
            success: false,
            message,
            error,
            status: value.status_code().as_u16(),
            timestamp: Utc::now().naive_utc(),
            internal_code: value.get_error_code(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::DuplicateUsername => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MovieNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidPath(_) => StatusCode::NOT_FOUND,
            ApiError::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse::from(self))
    }
}
