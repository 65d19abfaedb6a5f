/// Route table and middleware stack
use crate::{api, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// When `static_dir` is set the web client is served as a fallback, so the
/// API routes and the realtime channel always win over files.
pub fn create_router(app_state: AppState, static_dir: Option<PathBuf>) -> Router {
    let mut app = Router::new()
        .route("/api/register", post(api::auth::register))
        .route("/api/login", post(api::auth::login))
        .route("/api/getUser/:username", get(api::users::get_user))
        .route("/api/updateUser", post(api::users::update_user))
        .route("/api/pins", get(api::pins::list_pins))
        .route("/api/health", get(api::health::health))
        .route("/ws", get(api::pins::pin_feed))
        .with_state(app_state);

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(false)),
    )
    .layer(CorsLayer::permissive())
}
