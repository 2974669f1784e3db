use async_trait::async_trait;

use crate::domain::scanned_record::errors::ScanError;
use crate::domain::scanned_record::receipts::Receipt;

#[async_trait]
pub trait GetReceiptsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Receipt>, ScanError>;
}
