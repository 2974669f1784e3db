use chrono::{DateTime, Utc};

use super::model::ScannedRecord;

/// Scanned records that share a store, an address and a purchase date.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub store: Option<String>,
    pub address: Option<String>,
    pub purchase_date: DateTime<Utc>,
    pub records: Vec<ScannedRecord>,
}

impl Receipt {
    fn matches(&self, record: &ScannedRecord) -> bool {
        self.store == present(&record.store)
            && self.address == present(&record.address)
            && self.purchase_date == record.purchase_date
    }
}

fn present(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Groups the scan log into receipts in first-seen order, each receipt
/// listing its records alphabetically.
pub fn group_receipts(records: &[ScannedRecord]) -> Vec<Receipt> {
    let mut receipts: Vec<Receipt> = Vec::new();
    for record in records {
        match receipts.iter_mut().find(|receipt| receipt.matches(record)) {
            Some(receipt) => receipt.records.push(record.clone()),
            None => receipts.push(Receipt {
                store: present(&record.store),
                address: present(&record.address),
                purchase_date: record.purchase_date,
                records: vec![record.clone()],
            }),
        }
    }

    for receipt in &mut receipts {
        receipt.records.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
    }
    receipts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(name: &str, store: &str, address: &str, hour: u32) -> ScannedRecord {
        ScannedRecord::new(
            name.to_string(),
            None,
            store.to_string(),
            address.to_string(),
            Utc.with_ymd_and_hms(2026, 5, 4, hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn should_group_by_store_address_and_date() {
        let records = vec![
            record("Milk", "Fresh Market", "12 Main St", 9),
            record("Apples", "Fresh Market", "12 Main St", 9),
            record("Soap", "Pharmacy", "", 9),
            record("Bread", "Fresh Market", "12 Main St", 17),
        ];

        let receipts = group_receipts(&records);

        assert_eq!(receipts.len(), 3);
        assert_eq!(receipts[0].store.as_deref(), Some("Fresh Market"));
        assert_eq!(receipts[0].records.len(), 2);
        assert_eq!(receipts[1].store.as_deref(), Some("Pharmacy"));
        assert!(receipts[1].address.is_none());
        assert_eq!(receipts[2].records[0].name, "Bread");
    }

    #[test]
    fn should_sort_records_by_name_case_insensitively() {
        let records = vec![
            record("milk", "Shop", "", 8),
            record("Apples", "Shop", "", 8),
            record("bananas", "Shop", "", 8),
        ];

        let receipts = group_receipts(&records);

        let names: Vec<&str> = receipts[0].records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Apples", "bananas", "milk"]);
    }

    #[test]
    fn should_group_records_without_store_together() {
        let records = vec![record("A", "", "", 8), record("B", "  ", "", 8)];

        let receipts = group_receipts(&records);

        assert_eq!(receipts.len(), 1);
        assert!(receipts[0].store.is_none());
    }

    #[test]
    fn should_return_empty_for_empty_log() {
        assert!(group_receipts(&[]).is_empty());
    }
}
