use std::sync::Arc;

use sqlx::SqlitePool;

use logger::TracingLogger;
use lookup::client::LookupClient;
use lookup::wikipedia::ProductLookupWikipedia;
use persistence::scanned_record::repository::ScannedRecordRepositorySqlite;
use persistence::shopping_list::repository::ShoppingListRepositorySqlite;

use business::application::product_lookup::add_result::AddLookupResultUseCaseImpl;
use business::application::product_lookup::search::SearchProductUseCaseImpl;
use business::application::scanned_record::get_all::GetAllScannedRecordsUseCaseImpl;
use business::application::scanned_record::get_receipts::GetReceiptsUseCaseImpl;
use business::application::scanned_record::record_scan::RecordScanUseCaseImpl;
use business::application::scanned_record::report_scan_error::ReportScanErrorUseCaseImpl;
use business::application::shopping_list::add_item::AddItemUseCaseImpl;
use business::application::shopping_list::clear_completed::ClearCompletedItemsUseCaseImpl;
use business::application::shopping_list::create_list::CreateListUseCaseImpl;
use business::application::shopping_list::get_best_price::GetBestPriceUseCaseImpl;
use business::application::shopping_list::get_state::GetShoppingStateUseCaseImpl;
use business::application::shopping_list::remove_item::RemoveItemUseCaseImpl;
use business::application::shopping_list::remove_list::RemoveListUseCaseImpl;
use business::application::shopping_list::reorder_items::ReorderItemsUseCaseImpl;
use business::application::shopping_list::set_active_list::SetActiveListUseCaseImpl;
use business::application::shopping_list::set_filter::SetFilterUseCaseImpl;
use business::application::shopping_list::toggle_item::ToggleItemUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::shopping_list::store::ListStore;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product_lookup::routes::ProductLookupApi;
use crate::api::scanned_record::routes::ScannedRecordApi;
use crate::api::shopping_list::routes::{ShoppingListApi, ShoppingListUseCases};
use crate::config::lookup_config::LookupConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub shopping_list_api: ShoppingListApi,
    pub scanned_record_api: ScannedRecordApi,
    pub product_lookup_api: ProductLookupApi,
}

impl DependencyContainer {
    pub async fn new(pool: SqlitePool, lookup_config: &LookupConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let shopping_list_repository = Arc::new(ShoppingListRepositorySqlite::new(pool.clone()));
        let scanned_record_repository = Arc::new(ScannedRecordRepositorySqlite::new(pool));
        let lookup_client = LookupClient::new(&lookup_config.base_url, lookup_config.timeout)?;
        let lookup_service = Arc::new(ProductLookupWikipedia::new(lookup_client));

        // The store restores the saved lists once; every list use case shares it
        let store = Arc::new(ListStore::bootstrap(shopping_list_repository, logger.clone()).await);

        // Shopping list use cases
        let use_cases = ShoppingListUseCases {
            get_state: Arc::new(GetShoppingStateUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            create_list: Arc::new(CreateListUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            remove_list: Arc::new(RemoveListUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            set_active_list: Arc::new(SetActiveListUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            set_filter: Arc::new(SetFilterUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            add_item: Arc::new(AddItemUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            remove_item: Arc::new(RemoveItemUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            toggle_item: Arc::new(ToggleItemUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            reorder_items: Arc::new(ReorderItemsUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            clear_completed: Arc::new(ClearCompletedItemsUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            get_best_price: Arc::new(GetBestPriceUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
        };

        // Scan log use cases
        let get_all_scanned_use_case = Arc::new(GetAllScannedRecordsUseCaseImpl {
            repository: scanned_record_repository.clone(),
            logger: logger.clone(),
        });
        let get_receipts_use_case = Arc::new(GetReceiptsUseCaseImpl {
            repository: scanned_record_repository.clone(),
            logger: logger.clone(),
        });
        let record_scan_use_case = Arc::new(RecordScanUseCaseImpl {
            repository: scanned_record_repository,
            logger: logger.clone(),
        });
        let report_scan_error_use_case = Arc::new(ReportScanErrorUseCaseImpl {
            logger: logger.clone(),
        });

        // Product lookup use cases
        let search_use_case = Arc::new(SearchProductUseCaseImpl {
            lookup_service,
            logger: logger.clone(),
        });
        let add_result_use_case = Arc::new(AddLookupResultUseCaseImpl { store, logger });

        Ok(Self {
            health_api,
            shopping_list_api: ShoppingListApi::new(use_cases),
            scanned_record_api: ScannedRecordApi::new(
                get_all_scanned_use_case,
                get_receipts_use_case,
                record_scan_use_case,
                report_scan_error_use_case,
            ),
            product_lookup_api: ProductLookupApi::new(search_use_case, add_result_use_case),
        })
    }
}
