use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ScannedRecord;

#[async_trait]
pub trait ScannedRecordRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<ScannedRecord>, RepositoryError>;
    /// Appends to the end of the log; existing entries are never rewritten.
    async fn append(&self, records: &[ScannedRecord]) -> Result<(), RepositoryError>;
}
