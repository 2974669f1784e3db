use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::scanned_record::errors::ScanError;
use business::domain::scanned_record::use_cases::get_all::GetAllScannedRecordsUseCase;
use business::domain::scanned_record::use_cases::get_receipts::GetReceiptsUseCase;
use business::domain::scanned_record::use_cases::record_scan::{
    RecordScanParams, RecordScanUseCase,
};
use business::domain::scanned_record::use_cases::report_scan_error::{
    ReportScanErrorParams, ReportScanErrorUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::scanned_record::dto::{
    ReceiptResponse, RecordScanRequest, ScannedRecordResponse, ScannerErrorRequest,
};
use crate::api::tags::ApiTags;

pub struct ScannedRecordApi {
    get_all_use_case: Arc<dyn GetAllScannedRecordsUseCase>,
    get_receipts_use_case: Arc<dyn GetReceiptsUseCase>,
    record_scan_use_case: Arc<dyn RecordScanUseCase>,
    report_scan_error_use_case: Arc<dyn ReportScanErrorUseCase>,
}

impl ScannedRecordApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllScannedRecordsUseCase>,
        get_receipts_use_case: Arc<dyn GetReceiptsUseCase>,
        record_scan_use_case: Arc<dyn RecordScanUseCase>,
        report_scan_error_use_case: Arc<dyn ReportScanErrorUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_receipts_use_case,
            record_scan_use_case,
            report_scan_error_use_case,
        }
    }
}

fn error_json(err: ScanError) -> Json<ErrorResponse> {
    let (_status, json) = err.into_error_response();
    json
}

/// Scan log API
///
/// Raw observations decoded from barcodes and QR codes, kept apart from the
/// shopping lists.
#[OpenApi]
impl ScannedRecordApi {
    /// List scanned records in scan order
    #[oai(path = "/scans", method = "get", tag = "ApiTags::Scans")]
    async fn get_all(&self) -> GetScannedRecordsResponse {
        match self.get_all_use_case.execute().await {
            Ok(records) => GetScannedRecordsResponse::Ok(Json(
                records.into_iter().map(ScannedRecordResponse::from).collect(),
            )),
            Err(err) => GetScannedRecordsResponse::InternalError(error_json(err)),
        }
    }

    /// Record a decoded scan
    ///
    /// A receipt payload yields one record per item; any other text is
    /// recorded as a single record.
    #[oai(path = "/scans", method = "post", tag = "ApiTags::Scans")]
    async fn record_scan(&self, body: Json<RecordScanRequest>) -> RecordScanResponse {
        let params = RecordScanParams {
            decoded_text: body.0.decoded_text,
        };

        match self.record_scan_use_case.execute(params).await {
            Ok(records) => RecordScanResponse::Created(Json(
                records.into_iter().map(ScannedRecordResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RecordScanResponse::BadRequest(json),
                    503 => RecordScanResponse::ServiceUnavailable(json),
                    _ => RecordScanResponse::InternalError(json),
                }
            }
        }
    }

    /// Report a scanner error
    ///
    /// Transient errors (no code in frame, camera permission prompts) are
    /// acknowledged silently; anything else comes back as an error to show.
    #[oai(path = "/scans/errors", method = "post", tag = "ApiTags::Scans")]
    async fn report_error(&self, body: Json<ScannerErrorRequest>) -> ReportScannerErrorResponse {
        let params = ReportScanErrorParams {
            message: body.0.message,
        };

        match self.report_scan_error_use_case.execute(params).await {
            Ok(()) => ReportScannerErrorResponse::Suppressed,
            Err(err) => ReportScannerErrorResponse::Unprocessable(error_json(err)),
        }
    }

    /// Scanned records grouped into receipts
    #[oai(path = "/scans/receipts", method = "get", tag = "ApiTags::Scans")]
    async fn get_receipts(&self) -> GetReceiptsResponse {
        match self.get_receipts_use_case.execute().await {
            Ok(receipts) => GetReceiptsResponse::Ok(Json(
                receipts.into_iter().map(ReceiptResponse::from).collect(),
            )),
            Err(err) => GetReceiptsResponse::InternalError(error_json(err)),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetScannedRecordsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ScannedRecordResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecordScanResponse {
    #[oai(status = 201)]
    Created(Json<Vec<ScannedRecordResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReportScannerErrorResponse {
    #[oai(status = 204)]
    Suppressed,
    #[oai(status = 422)]
    Unprocessable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetReceiptsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ReceiptResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
