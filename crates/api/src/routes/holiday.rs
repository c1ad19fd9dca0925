use axum::{
    routing::{delete, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/holidays",
            post(handlers::holiday::create_holiday).get(handlers::holiday::list_holidays),
        )
        .route("/api/holidays/:id", delete(handlers::holiday::delete_holiday))
}
