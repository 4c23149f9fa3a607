#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Project not found: {0}")]
    ProjectNotFound(u32),

    #[error("User not found: {0}")]
    UserNotFound(u32),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for lookups that matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ProjectNotFound(_) | Error::UserNotFound(_) | Error::CategoryNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
