use async_trait::async_trait;

use crate::domain::scanned_record::errors::ScanError;
use crate::domain::scanned_record::model::ScannedRecord;

pub struct RecordScanParams {
    pub decoded_text: String,
}

#[async_trait]
pub trait RecordScanUseCase: Send + Sync {
    async fn execute(&self, params: RecordScanParams) -> Result<Vec<ScannedRecord>, ScanError>;
}
