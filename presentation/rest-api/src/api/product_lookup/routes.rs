use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::product_lookup::use_cases::add_result::{
    AddLookupResultParams, AddLookupResultUseCase,
};
use business::domain::product_lookup::use_cases::search::{
    SearchProductParams, SearchProductUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product_lookup::dto::{AddLookupResultRequest, ProductSummaryResponse};
use crate::api::shopping_list::dto::MergeResponse;
use crate::api::tags::ApiTags;

pub struct ProductLookupApi {
    search_use_case: Arc<dyn SearchProductUseCase>,
    add_result_use_case: Arc<dyn AddLookupResultUseCase>,
}

impl ProductLookupApi {
    pub fn new(
        search_use_case: Arc<dyn SearchProductUseCase>,
        add_result_use_case: Arc<dyn AddLookupResultUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            add_result_use_case,
        }
    }
}

/// Product lookup API
///
/// Free-text product search against the encyclopedia summary service.
#[OpenApi]
impl ProductLookupApi {
    /// Look a product up by name
    #[oai(path = "/lookup", method = "get", tag = "ApiTags::Lookup")]
    async fn search(&self, query: Query<String>) -> SearchProductResponse {
        let params = SearchProductParams { query: query.0 };

        match self.search_use_case.execute(params).await {
            Ok(summary) => SearchProductResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchProductResponse::BadRequest(json),
                    404 => SearchProductResponse::NotFound(json),
                    _ => SearchProductResponse::BadGateway(json),
                }
            }
        }
    }

    /// Add a lookup result to the selected list
    ///
    /// The item is recorded without a price, with the lookup service as its
    /// store and the summary as its address.
    #[oai(path = "/lookup/items", method = "post", tag = "ApiTags::Lookup")]
    async fn add_result(&self, body: Json<AddLookupResultRequest>) -> AddLookupResultResponse {
        let params = AddLookupResultParams {
            title: body.0.title,
            extract: body.0.extract,
        };

        match self.add_result_use_case.execute(params).await {
            Ok(outcome) => AddLookupResultResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AddLookupResultResponse::BadRequest(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductSummaryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddLookupResultResponse {
    #[oai(status = 200)]
    Ok(Json<MergeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
