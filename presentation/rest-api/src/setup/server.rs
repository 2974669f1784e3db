use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// API routes plus the Swagger UI and the OpenAPI document.
    pub fn routes(container: DependencyContainer, addr: &str) -> Route {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.shopping_list_api,
                container.scanned_record_api,
                container.product_lookup_api,
            ),
            "Shopping List API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &addr)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::database_config::{DatabaseSettings, init_database};
    use crate::config::lookup_config::LookupConfig;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;
    use std::time::Duration;

    async fn client() -> TestClient<Route> {
        let pool = init_database(&DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            migrations_path: concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/../../infrastructure/persistence/migrations"
            )
            .to_string(),
        })
        .await
        .unwrap();
        let lookup = LookupConfig {
            base_url: "http://127.0.0.1:9/api".to_string(),
            timeout: Duration::from_secs(1),
        };
        let container = DependencyContainer::new(pool, &lookup).await.unwrap();
        TestClient::new(Server::routes(container, "127.0.0.1:8080"))
    }

    #[tokio::test]
    async fn should_report_healthy() {
        let cli = client().await;

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("status")
            .assert_string("healthy");
    }

    #[tokio::test]
    async fn should_start_from_default_list() {
        let cli = client().await;

        let resp = cli.get("/items").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let items = json.value().array();
        items.assert_len(3);
        items.get(0).object().get("name").assert_string("Milk");
    }

    #[tokio::test]
    async fn should_merge_lower_price_into_existing_item() {
        let cli = client().await;

        cli.post("/items")
            .body_json(&json!({"name": "Milk", "price": 3.0, "store": "Corner"}))
            .send()
            .await
            .assert_status_is_ok();
        let resp = cli
            .post("/items")
            .body_json(&json!({"name": " milk ", "price": 2.5, "store": "Market"}))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("outcome").assert_string("updated");
        body.get("item").object().get("store").assert_string("Market");

        let best = cli.get("/best-prices/MILK").send().await;
        best.assert_status_is_ok();
        best.json()
            .await
            .value()
            .object()
            .get("price")
            .assert_f64(2.5);
    }

    #[tokio::test]
    async fn should_reject_negative_price() {
        let cli = client().await;

        let resp = cli
            .post("/items")
            .body_json(&json!({"name": "Milk", "price": -1.0}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_blank_list_name() {
        let cli = client().await;

        let resp = cli
            .post("/lists")
            .body_json(&json!({"name": "   "}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_show_only_completed_items_after_filter_change() {
        let cli = client().await;
        let items = cli.get("/items").send().await.json().await;
        let bread_id = items
            .value()
            .array()
            .get(1)
            .object()
            .get("id")
            .string()
            .to_string();

        cli.post(format!("/items/{}/toggle", bread_id))
            .send()
            .await
            .assert_status_is_ok();
        cli.put("/filter")
            .body_json(&json!({"filter": "completed"}))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let resp = cli.get("/items").send().await;
        let json = resp.json().await;
        let visible = json.value().array();
        visible.assert_len(1);
        visible.get(0).object().get("name").assert_string("Bread");
    }

    #[tokio::test]
    async fn should_record_receipt_scan_and_group_it() {
        let cli = client().await;

        let resp = cli
            .post("/scans")
            .body_json(&json!({
                "decoded_text": r#"{"store":"Market","items":[{"name":"Tea","price":"R$ 9,90"},{"name":"Bread","price":4}]}"#
            }))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);

        let receipts = cli.get("/scans/receipts").send().await;
        receipts.assert_status_is_ok();
        let json = receipts.json().await;
        let groups = json.value().array();
        groups.assert_len(1);
        let records = groups.get(0).object().get("records").array();
        records.assert_len(2);
        records.get(0).object().get("name").assert_string("Bread");
    }

    #[tokio::test]
    async fn should_suppress_transient_scanner_error() {
        let cli = client().await;

        cli.post("/scans/errors")
            .body_json(&json!({"message": "NotFoundException: no code"}))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);
        cli.post("/scans/errors")
            .body_json(&json!({"message": "NotReadableError: camera busy"}))
            .send()
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_add_lookup_result_to_active_list() {
        let cli = client().await;

        let resp = cli
            .post("/lookup/items")
            .body_json(&json!({"title": "Gouda", "extract": "A Dutch cheese"}))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let item = json.value().object().get("item").object();
        item.get("store").assert_string("Wikipedia");
        item.get("address").assert_string("A Dutch cheese");
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_unknown_item() {
        let cli = client().await;

        cli.delete("/items/does-not-exist")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
