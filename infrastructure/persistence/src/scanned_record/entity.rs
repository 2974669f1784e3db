use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error};
use serde_json::Value;

use business::domain::scanned_record::model::ScannedRecord;
use business::domain::shared::value_objects::ScannedRecordId;

use crate::price_value::PriceValue;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedRecordEntity {
    pub id: String,
    #[serde(deserialize_with = "text_or_number")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub address: String,
    pub purchase_date: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

/// Scans of `{"name": 123}` were stored with a numeric name.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected a name, found {}", other))),
    }
}

impl ScannedRecordEntity {
    pub fn into_domain(self) -> ScannedRecord {
        ScannedRecord {
            id: ScannedRecordId::new(self.id),
            name: self.name,
            price: self.price.as_ref().map(PriceValue::to_scanned_price),
            store: self.store,
            address: self.address,
            purchase_date: self.purchase_date,
            completed: self.completed,
        }
    }
}

impl From<&ScannedRecord> for ScannedRecordEntity {
    fn from(record: &ScannedRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            price: record.price.as_ref().map(PriceValue::from),
            store: record.store.clone(),
            address: record.address.clone(),
            purchase_date: record.purchase_date,
            completed: record.completed,
        }
    }
}
