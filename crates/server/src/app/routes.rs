use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use fincatalog_core::validation::{validate_product, validate_update};
use fincatalog_core::{
    DomainError, MessageResponse, Product, ProductListResponse, ProductMutationResponse,
    ProductUpdate,
};

use crate::app::errors;
use crate::app::ServerState;

pub const ADDED: &str = "Product added successfully";
pub const UPDATED: &str = "Product updated successfully";
pub const REMOVED: &str = "Product removed successfully";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/verification/:id", get(verify_product))
        .route("/:id", put(update_product).delete(delete_product))
}

pub async fn list_products(Extension(state): Extension<ServerState>) -> Json<ProductListResponse> {
    Json(ProductListResponse {
        data: state.store.list(),
    })
}

pub async fn verify_product(
    Extension(state): Extension<ServerState>,
    Path(id): Path<String>,
) -> Json<bool> {
    Json(state.store.exists(&id))
}

pub async fn create_product(
    Extension(state): Extension<ServerState>,
    Json(body): Json<Product>,
) -> axum::response::Response {
    let violations = validate_product(&body, state.clock.today());
    if !violations.is_empty() {
        tracing::debug!(id = %body.id, count = violations.len(), "rejected invalid product");
        return errors::violations_to_response(&violations);
    }

    match state.store.insert(body) {
        Ok(product) => {
            tracing::info!(id = %product.id, "product added");
            (
                StatusCode::OK,
                Json(ProductMutationResponse {
                    message: ADDED.to_string(),
                    data: product,
                }),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(state): Extension<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<ProductUpdate>,
) -> axum::response::Response {
    if !state.store.exists(&id) {
        return errors::domain_error_to_response(DomainError::NotFound);
    }

    let violations = validate_update(&body);
    if !violations.is_empty() {
        return errors::violations_to_response(&violations);
    }

    match state.store.update(&id, body) {
        Ok(product) => {
            tracing::info!(id = %product.id, "product updated");
            Json(ProductMutationResponse {
                message: UPDATED.to_string(),
                data: product,
            })
            .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(state): Extension<ServerState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match state.store.remove(&id) {
        Ok(_) => {
            tracing::info!(%id, "product removed");
            Json(MessageResponse {
                message: REMOVED.to_string(),
            })
            .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use chrono::NaiveDate;
    use fincatalog_core::FixedClock;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app::build_app;
    use crate::store::InMemoryProductStore;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn existing() -> Product {
        Product {
            id: "old-01".to_string(),
            name: "Legacy account".to_string(),
            description: "An account released long ago".to_string(),
            logo: "legacy.png".to_string(),
            date_release: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            date_revision: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        }
    }

    fn app() -> Router {
        let store = Arc::new(InMemoryProductStore::seeded([existing()]));
        build_app(ServerState::new(store, Arc::new(FixedClock(today()))))
    }

    async fn call(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };

        let res = app.oneshot(req.body(body).unwrap()).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn new_product_body() -> Value {
        json!({
            "id": "new-01",
            "name": "Savings account",
            "description": "High-yield savings account",
            "logo": "savings.png",
            "date_release": "2025-06-01",
            "date_revision": "2026-06-01",
        })
    }

    #[tokio::test]
    async fn lists_products_in_envelope() {
        let (status, body) = call(app(), Method::GET, "/bp/products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["id"], "old-01");
        assert_eq!(body["data"][0]["date_release"], "2020-01-01");
    }

    #[tokio::test]
    async fn verification_reports_taken_ids() {
        let (_, taken) = call(app(), Method::GET, "/bp/products/verification/old-01", None).await;
        let (_, free) = call(app(), Method::GET, "/bp/products/verification/new-01", None).await;
        assert_eq!(taken, json!(true));
        assert_eq!(free, json!(false));
    }

    #[tokio::test]
    async fn create_returns_message_and_product() {
        let (status, body) =
            call(app(), Method::POST, "/bp/products", Some(new_product_body())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], ADDED);
        assert_eq!(body["data"]["id"], "new-01");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_id() {
        let mut body = new_product_body();
        body["id"] = json!("old-01");

        let (status, body) = call(app(), Method::POST, "/bp/products", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["name"], "BadRequestError");
        assert_eq!(body["message"], errors::DUPLICATE_ID);
    }

    #[tokio::test]
    async fn create_lists_field_violations() {
        let mut body = new_product_body();
        body["name"] = json!("Card");
        body["date_revision"] = json!("2026-06-02");

        let (status, body) = call(app(), Method::POST, "/bp/products", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], errors::INVALID_BODY);

        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0]["property"], "name");
        assert_eq!(errors[0]["constraint"], "minlength");
        assert_eq!(errors[1]["property"], "date_revision");
    }

    #[tokio::test]
    async fn create_rejects_release_before_today() {
        let mut body = new_product_body();
        body["date_release"] = json!("2025-05-31");
        body["date_revision"] = json!("2026-05-31");

        let (status, body) = call(app(), Method::POST, "/bp/products", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["constraint"], "date_invalid");
    }

    #[tokio::test]
    async fn update_allows_past_release_dates() {
        let body = json!({
            "name": "Legacy account v2",
            "description": "An account released long ago",
            "logo": "legacy.png",
            "date_release": "2020-01-01",
            "date_revision": "2021-01-01",
        });

        let (status, body) = call(app(), Method::PUT, "/bp/products/old-01", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], UPDATED);
        assert_eq!(body["data"]["id"], "old-01");
        assert_eq!(body["data"]["name"], "Legacy account v2");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let body = json!({
            "name": "Whatever name",
            "description": "Whatever description",
            "logo": "x.png",
            "date_release": "2025-06-01",
            "date_revision": "2026-06-01",
        });

        let (status, body) = call(app(), Method::PUT, "/bp/products/nope", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["name"], "NotFoundError");
        assert_eq!(body["message"], errors::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_removes_product() {
        let app = app();
        let (status, body) = call(app.clone(), Method::DELETE, "/bp/products/old-01", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], REMOVED);

        let (_, list) = call(app.clone(), Method::GET, "/bp/products", None).await;
        assert_eq!(list["data"], json!([]));

        let (status, _) = call(app, Method::DELETE, "/bp/products/old-01", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
