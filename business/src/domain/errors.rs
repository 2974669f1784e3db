/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The storage backend could not be reached or refused the operation.
    #[error("repository.unavailable")]
    Unavailable,
    /// The storage backend ran out of space.
    #[error("repository.quota_exceeded")]
    QuotaExceeded,
    /// Stored data exists but could not be parsed.
    #[error("repository.deserialization")]
    Deserialization,
}

impl RepositoryError {
    /// Storage failures keep the in-memory state authoritative; corrupt data
    /// is replaced by a default instead.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            RepositoryError::Unavailable | RepositoryError::QuotaExceeded
        )
    }
}
