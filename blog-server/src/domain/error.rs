use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("post not found")]
    PostNotFound,

    #[error("invalid post id: {0}")]
    InvalidId(String),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("login required")]
    Unauthorized,

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("internal server error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::PostNotFound => 404,
            Self::InvalidId(_) | Self::ValidationError(_) => 400,
            Self::InvalidCredentials | Self::Unauthorized => 401,
            Self::DatabaseError(_) | Self::InternalError(_) => 500,
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::PostNotFound,
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}
