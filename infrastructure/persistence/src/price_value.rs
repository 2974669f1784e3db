use serde::{Deserialize, Serialize};

use business::domain::scanned_record::model::ScannedPrice;
use business::domain::shared::price::Price;

/// A stored price. Written as a decimal string; older data may hold a JSON
/// number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(serde_json::Number),
    Text(String),
}

impl PriceValue {
    fn as_text(&self) -> String {
        match self {
            PriceValue::Number(number) => number.to_string(),
            PriceValue::Text(text) => text.clone(),
        }
    }

    /// The usable amount, or `None` for text that is not a price.
    pub fn to_price(&self) -> Option<Price> {
        self.as_text().parse().ok()
    }

    pub fn to_scanned_price(&self) -> ScannedPrice {
        ScannedPrice::from_text(&self.as_text())
    }
}

impl From<&Price> for PriceValue {
    fn from(price: &Price) -> Self {
        PriceValue::Text(price.to_string())
    }
}

impl From<&ScannedPrice> for PriceValue {
    fn from(price: &ScannedPrice) -> Self {
        PriceValue::Text(price.to_string())
    }
}
