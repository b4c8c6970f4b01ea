// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::users;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::handlers::health::health_handler))

        // User directory
        .route("/users", get(users::list_handler))
        .route("/users/details/{id}", get(users::details_handler))
        .route(
            "/users/create",
            get(users::create_form_handler).post(users::create_handler),
        )
        .route(
            "/users/edit/{id}",
            get(users::edit_form_handler).post(users::edit_handler),
        )
        .route(
            "/users/delete/{id}",
            get(users::delete_confirm_handler).post(users::delete_handler),
        )

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
