use std::sync::Arc;

use crate::{
    routes::apply_routes, services::hotel_store::hotel_store::HotelStore,
    types::app_state::AppState,
};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn gen_app(hotel_store: Arc<dyn HotelStore>) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState { hotel_store };

    apply_routes(Router::new())
        .route("/health", get(health))
        .layer(cors_middleware)
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub hotel_store: Arc<crate::services::hotel_store::mock_hotel_store::MockHotelStore>,
}

#[cfg(test)]
pub fn gen_mock_app(
    hotel_store: crate::services::hotel_store::mock_hotel_store::MockHotelStore,
) -> MockApp {
    let hotel_store = Arc::new(hotel_store);

    MockApp {
        app: gen_app(hotel_store.clone()),
        hotel_store,
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        http::StatusCode,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::services::hotel_store::mock_hotel_store::MockHotelStore;

    #[tokio::test]
    async fn health_check() {
        let mock_app = gen_mock_app(MockHotelStore::default());

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"OK");
        assert!(mock_app.hotel_store.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let mock_app = gen_mock_app(MockHotelStore::default());

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/places").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn places_route_only_accepts_get() {
        let mock_app = gen_mock_app(MockHotelStore::default());

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/hotels/available_places")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
