use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::scanned_record::model::ScannedRecord;
use business::domain::scanned_record::receipts::Receipt;

#[derive(Debug, Clone, Object)]
pub struct ScannedRecordResponse {
    pub id: String,
    pub name: String,
    /// Price as printed on the scanned code
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    /// Numeric value of the price, absent when the printed price is not a number
    #[oai(skip_serializing_if_is_none)]
    pub amount: Option<f64>,
    pub store: String,
    pub address: String,
    pub purchase_date: DateTime<Utc>,
    pub completed: bool,
}

impl From<ScannedRecord> for ScannedRecordResponse {
    fn from(record: ScannedRecord) -> Self {
        Self {
            id: record.id.to_string(),
            amount: record
                .price
                .as_ref()
                .and_then(|price| price.amount())
                .and_then(|amount| amount.to_f64()),
            price: record.price.as_ref().map(|price| price.to_string()),
            name: record.name,
            store: record.store,
            address: record.address,
            purchase_date: record.purchase_date,
            completed: record.completed,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ReceiptResponse {
    #[oai(skip_serializing_if_is_none)]
    pub store: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    pub purchase_date: DateTime<Utc>,
    /// Records of the receipt sorted by name
    pub records: Vec<ScannedRecordResponse>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            store: receipt.store,
            address: receipt.address,
            purchase_date: receipt.purchase_date,
            records: receipt
                .records
                .into_iter()
                .map(ScannedRecordResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecordScanRequest {
    /// Text decoded from the barcode or QR code
    pub decoded_text: String,
}

#[derive(Debug, Clone, Object)]
pub struct ScannerErrorRequest {
    /// Error message reported by the scanner
    pub message: String,
}
