// src/error/types.rs
use crate::domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("movie {0} not found")]
    MovieNotFound(i64),

    #[error("user already exists")]
    UserExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("role {0} does not exist")]
    UnknownRole(String),

    /// A failure annotated with the repository operation that produced it.
    #[error("{op}: {source}")]
    Operation {
        op: &'static str,
        #[source]
        source: Box<AppError>,
    },

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Wrap an error with the name of the operation that produced it.
    pub fn in_operation(op: &'static str, source: AppError) -> Self {
        AppError::Operation {
            op,
            source: Box::new(source),
        }
    }

    /// The innermost error, skipping operation annotations.
    pub fn root(&self) -> &AppError {
        let mut current = self;
        while let AppError::Operation { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self.root(),
            AppError::NotFound { .. } | AppError::MovieNotFound(_)
        )
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
