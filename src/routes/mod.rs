//! Router assembly and the middleware stack shared by every route.

mod common;
mod students;

pub use common::common_routes;
pub use students::student_routes;

use crate::error::{ErrorBody, INTERNAL_ERROR_MESSAGE};
use crate::handlers::common::not_found;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request bodies above this size are refused before reaching a handler.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application: students and common routes behind access logging and the panic boundary.
pub fn app(state: AppState) -> Router {
    let routes = Router::new()
        .merge(common_routes(state.clone()))
        .merge(student_routes(state));
    with_middleware(routes)
}

pub fn with_middleware(router: Router) -> Router {
    router.fallback(not_found).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(INTERNAL_ERROR_MESSAGE))).into_response()
}
