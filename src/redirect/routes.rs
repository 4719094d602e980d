use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers::resolve_short_code;
use super::resolver::Resolver;

pub fn create_redirect_router(resolver: Arc<Resolver>) -> Router {
    Router::new()
        .route("/{code}", get(resolve_short_code))
        .with_state(resolver)
}
