/// Errors raised by catalog construction and the view-model.
///
/// `NotFound` is an expected outcome (stale link, mistyped id) and callers recover by
/// keeping the current view. `EmptyCatalog` means the process was started with nothing
/// to browse and is never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WikiError {
    #[error("article not found: {id}")]
    NotFound { id: String },

    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("duplicate article id: {0}")]
    DuplicateId(String),

    #[error("article has no sections: {0}")]
    EmptyArticle(String),
}

impl WikiError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// True for conditions that indicate misconfiguration rather than a bad request.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}
