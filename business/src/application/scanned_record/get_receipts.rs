use std::sync::Arc;

use async_trait::async_trait;

use super::get_all::read_scan_log;
use crate::domain::logger::Logger;
use crate::domain::scanned_record::errors::ScanError;
use crate::domain::scanned_record::receipts::{Receipt, group_receipts};
use crate::domain::scanned_record::repository::ScannedRecordRepository;
use crate::domain::scanned_record::use_cases::get_receipts::GetReceiptsUseCase;

pub struct GetReceiptsUseCaseImpl {
    pub repository: Arc<dyn ScannedRecordRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetReceiptsUseCase for GetReceiptsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Receipt>, ScanError> {
        self.logger.info("Grouping scan log into receipts");

        let records = read_scan_log(self.repository.as_ref(), self.logger.as_ref()).await?;
        let receipts = group_receipts(&records);

        self.logger.info(&format!(
            "Grouped {} scanned records into {} receipts",
            records.len(),
            receipts.len()
        ));
        Ok(receipts)
    }
}
