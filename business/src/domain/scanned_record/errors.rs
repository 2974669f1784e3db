#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("scan.empty_payload")]
    EmptyPayload,
    #[error("scan.decode_failed")]
    DecodeFailed(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
