use chrono::{DateTime, Utc};

use crate::domain::shared::price::Price;
use crate::domain::shared::value_objects::ScannedRecordId;

/// A price as printed on a scanned code: either a usable amount or a label
/// such as `"R$ 2,50"` that is kept for display only.
#[derive(Debug, Clone, PartialEq)]
pub enum ScannedPrice {
    Amount(Price),
    Label(String),
}

impl ScannedPrice {
    pub fn from_text(text: &str) -> Self {
        match text.parse::<Price>() {
            Ok(price) => ScannedPrice::Amount(price),
            Err(_) => ScannedPrice::Label(text.trim().to_string()),
        }
    }

    pub fn from_number(value: f64) -> Self {
        match Price::from_f64(value) {
            Ok(price) => ScannedPrice::Amount(price),
            Err(_) => ScannedPrice::Label(value.to_string()),
        }
    }

    /// The amount usable in price comparisons; labels never take part.
    pub fn amount(&self) -> Option<&Price> {
        match self {
            ScannedPrice::Amount(price) => Some(price),
            ScannedPrice::Label(_) => None,
        }
    }
}

impl std::fmt::Display for ScannedPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScannedPrice::Amount(price) => write!(f, "{}", price),
            ScannedPrice::Label(label) => write!(f, "{}", label),
        }
    }
}

/// One raw observation from a scan, kept apart from the shopping lists.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedRecord {
    pub id: ScannedRecordId,
    pub name: String,
    pub price: Option<ScannedPrice>,
    pub store: String,
    pub address: String,
    pub purchase_date: DateTime<Utc>,
    pub completed: bool,
}

impl ScannedRecord {
    pub fn new(
        name: String,
        price: Option<ScannedPrice>,
        store: String,
        address: String,
        purchase_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ScannedRecordId::generate(),
            name,
            price,
            store,
            address,
            purchase_date,
            completed: false,
        }
    }
}
