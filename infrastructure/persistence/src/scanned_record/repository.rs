use async_trait::async_trait;
use serde_json::Value;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::scanned_record::model::ScannedRecord;
use business::domain::scanned_record::repository::ScannedRecordRepository;

use super::entity::ScannedRecordEntity;
use crate::kv_store::KvStore;

pub const SCANNED_ITEMS_KEY: &str = "scannedItems";

pub struct ScannedRecordRepositorySqlite {
    store: KvStore,
}

impl ScannedRecordRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            store: KvStore::new(pool),
        }
    }
}

/// The stored log as raw entries, so one unreadable entry never costs the
/// others.
fn parse_log(raw: &str) -> Result<Vec<Value>, RepositoryError> {
    serde_json::from_str(raw).map_err(|_| RepositoryError::Deserialization)
}

#[async_trait]
impl ScannedRecordRepository for ScannedRecordRepositorySqlite {
    async fn get_all(&self) -> Result<Vec<ScannedRecord>, RepositoryError> {
        let Some(raw) = self.store.get(SCANNED_ITEMS_KEY).await? else {
            return Ok(Vec::new());
        };

        // Entries that do not read as a record are skipped, not dropped.
        Ok(parse_log(&raw)?
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<ScannedRecordEntity>(entry).ok())
            .map(ScannedRecordEntity::into_domain)
            .collect())
    }

    /// Appends to the stored log, keeping existing entries verbatim. A value
    /// that is not a JSON array holds no entries and is replaced.
    async fn append(&self, records: &[ScannedRecord]) -> Result<(), RepositoryError> {
        let appended = records
            .iter()
            .map(|record| serde_json::to_value(ScannedRecordEntity::from(record)))
            .collect::<Result<Vec<Value>, _>>()
            .map_err(|_| RepositoryError::Deserialization)?;

        self.store
            .update(SCANNED_ITEMS_KEY, move |current| {
                let mut log = current
                    .as_deref()
                    .and_then(|raw| parse_log(raw).ok())
                    .unwrap_or_default();
                log.extend(appended);
                serde_json::to_string(&log).map_err(|_| RepositoryError::Deserialization)
            })
            .await
    }
}
