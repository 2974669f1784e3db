use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scanned_record::decoder::classify_scanner_error;
use crate::domain::scanned_record::errors::ScanError;
use crate::domain::scanned_record::use_cases::report_scan_error::{
    ReportScanErrorParams, ReportScanErrorUseCase,
};

pub struct ReportScanErrorUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReportScanErrorUseCase for ReportScanErrorUseCaseImpl {
    async fn execute(&self, params: ReportScanErrorParams) -> Result<(), ScanError> {
        match classify_scanner_error(&params.message) {
            Some(error) => {
                self.logger
                    .error(&format!("Scanner error: {}", params.message));
                Err(error)
            }
            None => {
                self.logger
                    .debug(&format!("Suppressed transient scanner error: {}", params.message));
                Ok(())
            }
        }
    }
}
