use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments",
            get(handlers::appointment::list_appointments),
        )
        .route(
            "/api/appointments/generate",
            post(handlers::appointment::generate_appointments),
        )
}
