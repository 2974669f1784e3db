use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::price::Price;
use business::domain::shopping_list::errors::ShoppingListError;
use business::domain::shopping_list::use_cases::add_item::{AddItemParams, AddItemUseCase};
use business::domain::shopping_list::use_cases::clear_completed::ClearCompletedItemsUseCase;
use business::domain::shopping_list::use_cases::create_list::{
    CreateListParams, CreateListUseCase,
};
use business::domain::shopping_list::use_cases::get_best_price::{
    GetBestPriceParams, GetBestPriceUseCase,
};
use business::domain::shopping_list::use_cases::get_state::GetShoppingStateUseCase;
use business::domain::shopping_list::use_cases::remove_item::{
    RemoveItemParams, RemoveItemUseCase,
};
use business::domain::shopping_list::use_cases::remove_list::{
    RemoveListParams, RemoveListUseCase,
};
use business::domain::shopping_list::use_cases::reorder_items::{
    ReorderItemsParams, ReorderItemsUseCase,
};
use business::domain::shopping_list::use_cases::set_active_list::{
    SetActiveListParams, SetActiveListUseCase,
};
use business::domain::shopping_list::use_cases::set_filter::{
    SetFilterParams, SetFilterUseCase,
};
use business::domain::shopping_list::use_cases::toggle_item::{
    ToggleItemParams, ToggleItemUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shopping_list::dto::{
    AddItemRequest, BestPriceResponse, ClearCompletedResponse, CreateListRequest, ItemResponse,
    MergeResponse, ReorderItemsRequest, ReorderItemsResponse, SetActiveListRequest,
    SetFilterRequest, ShoppingListResponse, ShoppingStateResponse,
};
use crate::api::shopping_list::error_mapper::not_found;
use crate::api::tags::ApiTags;

/// Use cases behind the shopping list endpoints.
pub struct ShoppingListUseCases {
    pub get_state: Arc<dyn GetShoppingStateUseCase>,
    pub create_list: Arc<dyn CreateListUseCase>,
    pub remove_list: Arc<dyn RemoveListUseCase>,
    pub set_active_list: Arc<dyn SetActiveListUseCase>,
    pub set_filter: Arc<dyn SetFilterUseCase>,
    pub add_item: Arc<dyn AddItemUseCase>,
    pub remove_item: Arc<dyn RemoveItemUseCase>,
    pub toggle_item: Arc<dyn ToggleItemUseCase>,
    pub reorder_items: Arc<dyn ReorderItemsUseCase>,
    pub clear_completed: Arc<dyn ClearCompletedItemsUseCase>,
    pub get_best_price: Arc<dyn GetBestPriceUseCase>,
}

pub struct ShoppingListApi {
    use_cases: ShoppingListUseCases,
}

impl ShoppingListApi {
    pub fn new(use_cases: ShoppingListUseCases) -> Self {
        Self { use_cases }
    }
}

fn internal_error(err: ShoppingListError) -> Json<ErrorResponse> {
    let (_status, json) = err.into_error_response();
    json
}

/// Shopping list management API
///
/// Lists, the active-list selector, the item filter and the items of the
/// active list.
#[OpenApi]
impl ShoppingListApi {
    /// Get the shopping state
    ///
    /// Returns every list, the selected list, the filter and the best known
    /// price of each product.
    #[oai(path = "/lists", method = "get", tag = "ApiTags::ShoppingLists")]
    async fn get_state(&self) -> GetStateResponse {
        match self.use_cases.get_state.execute().await {
            Ok(state) => GetStateResponse::Ok(Json(ShoppingStateResponse::from(state.as_ref()))),
            Err(err) => GetStateResponse::InternalError(internal_error(err)),
        }
    }

    /// Create a list
    ///
    /// Appends an empty list and selects it.
    #[oai(path = "/lists", method = "post", tag = "ApiTags::ShoppingLists")]
    async fn create_list(&self, body: Json<CreateListRequest>) -> CreateListResponse {
        let params = CreateListParams { name: body.0.name };

        match self.use_cases.create_list.execute(params).await {
            Ok(list) => CreateListResponse::Created(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateListResponse::BadRequest(json),
                    _ => CreateListResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a list
    ///
    /// When the selected list is deleted the first remaining list becomes
    /// selected.
    #[oai(path = "/lists/:id", method = "delete", tag = "ApiTags::ShoppingLists")]
    async fn remove_list(&self, id: Path<String>) -> DeleteResponse {
        let params = RemoveListParams { id: id.0.into() };

        match self.use_cases.remove_list.execute(params).await {
            Ok(true) => DeleteResponse::NoContent,
            Ok(false) => DeleteResponse::NotFound(not_found("shopping_list.not_found")),
            Err(err) => DeleteResponse::InternalError(internal_error(err)),
        }
    }

    /// Select the active list
    #[oai(path = "/lists/active", method = "put", tag = "ApiTags::ShoppingLists")]
    async fn set_active_list(&self, body: Json<SetActiveListRequest>) -> UpdateStateResponse {
        let params = SetActiveListParams {
            id: body.0.id.into(),
        };

        match self.use_cases.set_active_list.execute(params).await {
            Ok(()) => UpdateStateResponse::NoContent,
            Err(err) => UpdateStateResponse::InternalError(internal_error(err)),
        }
    }

    /// Set the item filter
    #[oai(path = "/filter", method = "put", tag = "ApiTags::ShoppingLists")]
    async fn set_filter(&self, body: Json<SetFilterRequest>) -> UpdateStateResponse {
        let params = SetFilterParams {
            filter: body.0.filter.into(),
        };

        match self.use_cases.set_filter.execute(params).await {
            Ok(()) => UpdateStateResponse::NoContent,
            Err(err) => UpdateStateResponse::InternalError(internal_error(err)),
        }
    }

    /// List visible items
    ///
    /// Items of the selected list that pass the current filter, in list order.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn get_items(&self) -> GetItemsResponse {
        match self.use_cases.get_state.execute().await {
            Ok(state) => GetItemsResponse::Ok(Json(
                state
                    .filtered_items()
                    .into_iter()
                    .map(ItemResponse::from)
                    .collect(),
            )),
            Err(err) => GetItemsResponse::InternalError(internal_error(err)),
        }
    }

    /// Add an item
    ///
    /// Merges the item into the selected list. An item with the same name
    /// only changes when the new price is strictly lower.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn add_item(&self, body: Json<AddItemRequest>) -> AddItemResponse {
        let request = body.0;
        let price = match request.price.map(Price::from_f64).transpose() {
            Ok(price) => price,
            Err(err) => {
                let (_status, json) = ShoppingListError::from(err).into_error_response();
                return AddItemResponse::BadRequest(json);
            }
        };
        let params = AddItemParams {
            name: request.name,
            price,
            store: request.store,
            address: request.address,
            purchase_date: request.purchase_date,
        };

        match self.use_cases.add_item.execute(params).await {
            Ok(outcome) => AddItemResponse::Ok(Json(MergeResponse::from(outcome))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear completed items
    ///
    /// Removes every completed item from the selected list.
    #[oai(path = "/items/completed", method = "delete", tag = "ApiTags::Items")]
    async fn clear_completed(&self) -> ClearCompletedItemsResponse {
        match self.use_cases.clear_completed.execute().await {
            Ok(count) => ClearCompletedItemsResponse::Ok(Json(ClearCompletedResponse {
                count: count as u64,
            })),
            Err(err) => ClearCompletedItemsResponse::InternalError(internal_error(err)),
        }
    }

    /// Delete an item from the selected list
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn remove_item(&self, id: Path<String>) -> DeleteResponse {
        let params = RemoveItemParams { id: id.0.into() };

        match self.use_cases.remove_item.execute(params).await {
            Ok(Some(_)) => DeleteResponse::NoContent,
            Ok(None) => DeleteResponse::NotFound(not_found("shopping_list.item_not_found")),
            Err(err) => DeleteResponse::InternalError(internal_error(err)),
        }
    }

    /// Toggle an item between pending and completed
    #[oai(path = "/items/:id/toggle", method = "post", tag = "ApiTags::Items")]
    async fn toggle_item(&self, id: Path<String>) -> ToggleItemResponse {
        let params = ToggleItemParams { id: id.0.into() };

        match self.use_cases.toggle_item.execute(params).await {
            Ok(Some(item)) => ToggleItemResponse::Ok(Json(item.into())),
            Ok(None) => ToggleItemResponse::NotFound(not_found("shopping_list.item_not_found")),
            Err(err) => ToggleItemResponse::InternalError(internal_error(err)),
        }
    }

    /// Move an item within the selected list
    ///
    /// Indices past the end are clamped to the last position.
    #[oai(path = "/items/reorder", method = "post", tag = "ApiTags::Items")]
    async fn reorder_items(&self, body: Json<ReorderItemsRequest>) -> ReorderResponse {
        let params = ReorderItemsParams {
            from_index: body.0.from_index as usize,
            to_index: body.0.to_index as usize,
        };

        match self.use_cases.reorder_items.execute(params).await {
            Ok(moved) => ReorderResponse::Ok(Json(ReorderItemsResponse { moved })),
            Err(err) => ReorderResponse::InternalError(internal_error(err)),
        }
    }

    /// Best known price for a product across all lists
    #[oai(path = "/best-prices/:name", method = "get", tag = "ApiTags::ShoppingLists")]
    async fn get_best_price(&self, name: Path<String>) -> GetBestPriceResponse {
        let params = GetBestPriceParams {
            name: name.0.clone(),
        };

        match self.use_cases.get_best_price.execute(params).await {
            Ok(price) => GetBestPriceResponse::Ok(Json(BestPriceResponse {
                name: name.0,
                price: price.as_ref().and_then(Price::to_f64),
            })),
            Err(err) => GetBestPriceResponse::InternalError(internal_error(err)),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStateResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingStateResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateListResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateStateResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 200)]
    Ok(Json<MergeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCompletedItemsResponse {
    #[oai(status = 200)]
    Ok(Json<ClearCompletedResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReorderResponse {
    #[oai(status = 200)]
    Ok(Json<ReorderItemsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBestPriceResponse {
    #[oai(status = 200)]
    Ok(Json<BestPriceResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
