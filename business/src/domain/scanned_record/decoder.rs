//! Interprets text decoded from a barcode or QR code.
//!
//! Receipts encoded as JSON (`{"store": .., "address": .., "items": [..]}`)
//! yield one record per item. A single JSON object yields one record. Any
//! other payload, including bare barcode numbers, is recorded verbatim.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::errors::ScanError;
use super::model::{ScannedPrice, ScannedRecord};

pub const UNKNOWN_ITEM_NAME: &str = "Unknown item";

/// Scanner errors that only mean "nothing decoded yet" or a camera
/// permission prompt; they are never shown to the user.
const TRANSIENT_SCANNER_ERRORS: [&str; 4] = [
    "NotFoundException",
    "IndexSizeError",
    "NotAllowedError: The request is not allowed",
    "NotFoundError: Requested device not found",
];

pub fn decode_scan(
    decoded_text: &str,
    scanned_at: DateTime<Utc>,
) -> Result<Vec<ScannedRecord>, ScanError> {
    if decoded_text.trim().is_empty() {
        return Err(ScanError::EmptyPayload);
    }

    let records = match serde_json::from_str::<Value>(decoded_text) {
        Ok(Value::Object(payload)) => match payload.get("items") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| receipt_line(item, &payload, scanned_at))
                .collect(),
            _ => vec![single_object(decoded_text, &payload, scanned_at)],
        },
        _ => vec![ScannedRecord::new(
            decoded_text.to_string(),
            None,
            String::new(),
            String::new(),
            scanned_at,
        )],
    };
    Ok(records)
}

/// Maps a scanner error message to a user-visible error, or `None` when the
/// message belongs to the transient classes that are suppressed.
pub fn classify_scanner_error(message: &str) -> Option<ScanError> {
    let message = message.trim();
    if message.is_empty()
        || TRANSIENT_SCANNER_ERRORS
            .iter()
            .any(|transient| message.contains(transient))
    {
        return None;
    }
    Some(ScanError::DecodeFailed(message.to_string()))
}

fn receipt_line(
    item: &Value,
    receipt: &Map<String, Value>,
    scanned_at: DateTime<Utc>,
) -> ScannedRecord {
    let (name, price) = match item {
        Value::Object(line) => (name_field(line, "name"), price_field(line.get("price"))),
        _ => (None, None),
    };
    ScannedRecord::new(
        name.unwrap_or_else(|| UNKNOWN_ITEM_NAME.to_string()),
        price,
        text_field(receipt, "store").unwrap_or_default(),
        text_field(receipt, "address").unwrap_or_default(),
        scanned_at,
    )
}

fn single_object(
    raw: &str,
    payload: &Map<String, Value>,
    scanned_at: DateTime<Utc>,
) -> ScannedRecord {
    let name = name_field(payload, "name")
        .or_else(|| name_field(payload, "text"))
        .unwrap_or_else(|| raw.to_string());
    ScannedRecord::new(
        name,
        price_field(payload.get("price")),
        text_field(payload, "store").unwrap_or_default(),
        text_field(payload, "address").unwrap_or_default(),
        scanned_at,
    )
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).and_then(non_blank)
}

/// Like [`text_field`], also taking numeric names such as product codes.
fn name_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Number(number) => Some(number.to_string()),
        _ => text_field(object, key),
    }
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn price_field(value: Option<&Value>) -> Option<ScannedPrice> {
    match value? {
        Value::Number(number) => number.as_f64().map(ScannedPrice::from_number),
        Value::String(text) => non_blank(text).map(|text| ScannedPrice::from_text(&text)),
        _ => None,
    }
}
