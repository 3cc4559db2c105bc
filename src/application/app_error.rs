use axum::extract::rejection::JsonRejection;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("User does not exist")]
    UserNotFound,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Profile already exists")]
    ProfileAlreadyExists,

    #[error("{0}")]
    InvalidId(String),

    #[error(transparent)]
    InvalidJson(#[from] JsonRejection),

    #[error(transparent)]
    ValidationError(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;
