pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod views;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use handlers::notice;
use service::NoticeService;

/// Routes under `/notice`, backed by whatever service is injected.
pub fn build_router(service: Arc<dyn NoticeService>) -> Router {
    let notice_router = Router::new()
        .route(
            "/create",
            get(notice::create_notice_form).post(notice::create_notice),
        )
        .route("/list", get(notice::get_all_notices))
        .route("/detail/{id}", get(notice::get_notice_detail))
        .route("/update/{id}", post(notice::update_notice))
        .route("/delete/{id}", get(notice::delete_notice))
        .with_state(service);

    Router::new()
        .nest("/notice", notice_router)
        .layer(TraceLayer::new_for_http())
}
