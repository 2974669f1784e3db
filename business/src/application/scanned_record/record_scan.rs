use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::scanned_record::decoder::decode_scan;
use crate::domain::scanned_record::errors::ScanError;
use crate::domain::scanned_record::model::ScannedRecord;
use crate::domain::scanned_record::repository::ScannedRecordRepository;
use crate::domain::scanned_record::use_cases::record_scan::{RecordScanParams, RecordScanUseCase};

pub struct RecordScanUseCaseImpl {
    pub repository: Arc<dyn ScannedRecordRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecordScanUseCase for RecordScanUseCaseImpl {
    async fn execute(&self, params: RecordScanParams) -> Result<Vec<ScannedRecord>, ScanError> {
        self.logger.info("Recording decoded scan");

        let records = decode_scan(&params.decoded_text, Utc::now())?;
        if records.is_empty() {
            self.logger.warn("Scan decoded to a receipt without items");
            return Ok(records);
        }

        self.repository.append(&records).await?;

        self.logger
            .info(&format!("Appended {} scanned records", records.len()));
        Ok(records)
    }
}
