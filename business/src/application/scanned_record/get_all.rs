use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scanned_record::errors::ScanError;
use crate::domain::scanned_record::model::ScannedRecord;
use crate::domain::scanned_record::repository::ScannedRecordRepository;
use crate::domain::scanned_record::use_cases::get_all::GetAllScannedRecordsUseCase;

pub struct GetAllScannedRecordsUseCaseImpl {
    pub repository: Arc<dyn ScannedRecordRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Reads the scan log, treating an unreadable log as empty.
pub(crate) async fn read_scan_log(
    repository: &dyn ScannedRecordRepository,
    logger: &dyn Logger,
) -> Result<Vec<ScannedRecord>, ScanError> {
    match repository.get_all().await {
        Ok(records) => Ok(records),
        Err(err) if err.is_storage_failure() => Err(err.into()),
        Err(err) => {
            logger.warn(&format!("Scan log is unreadable ({}), treating it as empty", err));
            Ok(Vec::new())
        }
    }
}

#[async_trait]
impl GetAllScannedRecordsUseCase for GetAllScannedRecordsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ScannedRecord>, ScanError> {
        self.logger.info("Getting all scanned records");

        let records = read_scan_log(self.repository.as_ref(), self.logger.as_ref()).await?;

        self.logger
            .info(&format!("Found {} scanned records", records.len()));
        Ok(records)
    }
}
