use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::Instrument;

use crate::proxy::error::LocatorError;
use crate::proxy::health::health_handler;
use crate::proxy::search::LocatorService;

pub const SEARCH_PATH: &str = "/api/locator/search";
pub const HEALTH_PATH: &str = "/health";

#[derive(Clone)]
pub struct RouterEngine {
    service: Arc<LocatorService>,
}

impl RouterEngine {
    pub fn new(service: LocatorService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn build_router(engine: RouterEngine) -> Router {
    Router::new()
        .route(SEARCH_PATH, post(search_handler))
        .route(HEALTH_PATH, get(health_handler))
        .with_state(engine)
}

/// The body is taken raw so that malformed JSON is reported like any other
/// unexpected failure instead of axum's extractor rejection.
async fn search_handler(State(engine): State<RouterEngine>, body: Bytes) -> Response {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("search", %request_id);

    async move {
        match engine.service.search(&body).await {
            Ok(results) => Json(results).into_response(),
            Err(err) => {
                if let LocatorError::Validation(msg) = &err {
                    tracing::warn!(error_type = err.error_type(), "{}", msg);
                } else {
                    tracing::error!(error_type = err.error_type(), "{}", err);
                }
                err.into_response()
            }
        }
    }
    .instrument(span)
    .await
}
