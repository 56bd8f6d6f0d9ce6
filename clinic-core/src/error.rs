/// Outcome kinds a usecase can report to the HTTP layer.
///
/// Handlers switch on the variant; only [`UsecaseError::Internal`] carries
/// free-form text, and that text is echoed to the client in the `error`
/// field of the internal-error envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum UsecaseError {
    /// The addressed record does not exist (or is not in the required state).
    #[error("record not found")]
    NotFound,

    /// Another active record already uses the requested name.
    #[error("name is already registered")]
    DuplicateName,

    /// Any other failure inside the usecase or its storage.
    #[error("{0}")]
    Internal(String),
}

impl UsecaseError {
    /// Wraps any displayable failure as [`UsecaseError::Internal`].
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        Self::Internal(detail.to_string())
    }
}
