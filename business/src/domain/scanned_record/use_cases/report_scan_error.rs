use async_trait::async_trait;

use crate::domain::scanned_record::errors::ScanError;

pub struct ReportScanErrorParams {
    pub message: String,
}

#[async_trait]
pub trait ReportScanErrorUseCase: Send + Sync {
    /// `Ok` when the error is transient and should stay hidden, otherwise
    /// the error to show the user.
    async fn execute(&self, params: ReportScanErrorParams) -> Result<(), ScanError>;
}
