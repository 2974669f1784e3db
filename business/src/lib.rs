pub mod application {
    pub mod product_lookup {
        pub mod add_result;
        pub mod search;
    }
    pub mod scanned_record {
        pub mod get_all;
        pub mod get_receipts;
        pub mod record_scan;
        pub mod report_scan_error;
    }
    pub mod shopping_list {
        pub mod add_item;
        pub mod clear_completed;
        pub mod create_list;
        pub mod get_best_price;
        pub mod get_state;
        pub mod remove_item;
        pub mod remove_list;
        pub mod reorder_items;
        pub mod set_active_list;
        pub mod set_filter;
        pub mod toggle_item;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product_lookup {
        pub mod errors;
        pub mod services;
        pub mod use_cases {
            pub mod add_result;
            pub mod search;
        }
    }
    pub mod scanned_record {
        pub mod decoder;
        pub mod errors;
        pub mod model;
        pub mod receipts;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_receipts;
            pub mod record_scan;
            pub mod report_scan_error;
        }
    }
    pub mod shared {
        pub mod price;
        pub mod value_objects;
    }
    pub mod shopping_list {
        pub mod best_price;
        pub mod errors;
        pub mod filter;
        pub mod merge;
        pub mod model;
        pub mod repository;
        pub mod state;
        pub mod store;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear_completed;
            pub mod create_list;
            pub mod get_best_price;
            pub mod get_state;
            pub mod remove_item;
            pub mod remove_list;
            pub mod reorder_items;
            pub mod set_active_list;
            pub mod set_filter;
            pub mod toggle_item;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
