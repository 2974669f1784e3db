use async_trait::async_trait;

use crate::domain::scanned_record::errors::ScanError;
use crate::domain::scanned_record::model::ScannedRecord;

#[async_trait]
pub trait GetAllScannedRecordsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ScannedRecord>, ScanError>;
}
