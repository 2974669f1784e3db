use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product_lookup::errors::LookupError;
use crate::domain::product_lookup::services::{ProductLookupService, ProductSummary};
use crate::domain::product_lookup::use_cases::search::{SearchProductParams, SearchProductUseCase};

pub struct SearchProductUseCaseImpl {
    pub lookup_service: Arc<dyn ProductLookupService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductUseCase for SearchProductUseCaseImpl {
    async fn execute(&self, params: SearchProductParams) -> Result<ProductSummary, LookupError> {
        let query = params.query.trim();
        if query.is_empty() {
            return Err(LookupError::QueryEmpty);
        }

        self.logger.info(&format!("Looking up product: {}", query));

        match self.lookup_service.lookup(query).await {
            Ok(summary) => {
                self.logger
                    .info(&format!("Lookup found: {}", summary.title));
                Ok(summary)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Lookup for '{}' failed: {}", query, err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProductLookup, mock_logger};

    #[tokio::test]
    async fn should_return_summary_for_trimmed_query() {
        let mut service = MockProductLookup::new();
        service
            .expect_lookup()
            .withf(|query| query.to_string() == "Gouda")
            .returning(|_| {
                Ok(ProductSummary {
                    title: "Gouda cheese".to_string(),
                    extract: "A Dutch yellow cheese".to_string(),
                    thumbnail_url: None,
                })
            });
        let use_case = SearchProductUseCaseImpl {
            lookup_service: Arc::new(service),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(SearchProductParams {
                query: "  Gouda ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(summary.title, "Gouda cheese");
    }

    #[tokio::test]
    async fn should_reject_blank_query_without_calling_service() {
        let mut service = MockProductLookup::new();
        service.expect_lookup().never();
        let use_case = SearchProductUseCaseImpl {
            lookup_service: Arc::new(service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductParams {
                query: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(LookupError::QueryEmpty)));
    }

    #[tokio::test]
    async fn should_pass_through_not_found() {
        let mut service = MockProductLookup::new();
        service
            .expect_lookup()
            .returning(|_| Err(LookupError::NotFound));
        let use_case = SearchProductUseCaseImpl {
            lookup_service: Arc::new(service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductParams {
                query: "zzzz".to_string(),
            })
            .await;

        assert!(matches!(result, Err(LookupError::NotFound)));
    }
}
