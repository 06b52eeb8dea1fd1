//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    entries_handler, get_handler, health_handler, put_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /put` - Store a key-value pair
/// - `GET /get/:key` - Retrieve a value by key
/// - `GET /entries` - List entries in eviction order
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/put", put(put_handler))
        .route("/get/:key", get(get_handler))
        .route("/entries", get(entries_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CachePolicy, SharedCache};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app(policy: CachePolicy, capacity: usize) -> Router {
        let cache = SharedCache::with_policy(policy, capacity).unwrap();
        create_router(AppState::new(cache))
    }

    fn put_request(key: &str, value: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri("/put")
            .header("content-type", "application/json")
            .body(Body::from(format!(
                r#"{{"key":"{}","value":"{}"}}"#,
                key, value
            )))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app(CachePolicy::Fifo, 4);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_put_endpoint_reports_lifo_discard() {
        let app = create_test_app(CachePolicy::Lifo, 2);

        for (key, value) in [("a", "1"), ("b", "2")] {
            let response = app.clone().oneshot(put_request(key, value)).await.unwrap();
            let json = json_body(response).await;
            assert_eq!(json["stored"], true);
            assert!(json["discarded"].is_null());
        }

        let response = app.clone().oneshot(put_request("c", "3")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["key"], "c");
        assert_eq!(json["discarded"], "b");
    }

    #[tokio::test]
    async fn test_entries_endpoint_follows_fifo_order() {
        let app = create_test_app(CachePolicy::Fifo, 2);
        for (key, value) in [("a", "1"), ("b", "2"), ("c", "3")] {
            app.clone().oneshot(put_request(key, value)).await.unwrap();
        }

        let response = app
            .oneshot(Request::builder().uri("/entries").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["policy"], "fifo");
        let keys: Vec<&str> = json["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = create_test_app(CachePolicy::Fifo, 4);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/get/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json["error"], "Key not found: nonexistent");
    }
}
