use super::login::{login, logout, register_new_user, BackEnd};
use super::{admin, application, profile};
use axum::routing::{get, post};
use axum_login::{login_required, tower_sessions::MemoryStore, AuthManagerLayer};
use axum_messages::MessagesManagerLayer;

pub(super) fn setup(
    app_state: super::AppState,
    auth_manager: AuthManagerLayer<BackEnd, MemoryStore>,
) -> axum::routing::Router {
    axum::Router::new()
        .route("/profile", get(profile::page::get))
        .route("/profile", post(profile::save::post))
        .route("/profile/ncc", post(profile::add_ncc::post))
        .route("/profile/experience", post(profile::add_experience::post))
        .route("/admin", get(admin::page::get))
        .route_layer(login_required!(BackEnd, login_url = "/login"))
        .route("/", get(application::main::get))
        .route("/login", post(login::post))
        .route("/login", get(login::get))
        .route("/logout", post(logout::post))
        .route("/logout", get(logout::get))
        .route("/register", post(register_new_user::post))
        .route("/register", get(register_new_user::get))
        .layer(MessagesManagerLayer)
        .layer(auth_manager)
        .fallback(fallback)
        .with_state(app_state)
}

pub async fn fallback(_uri: axum::http::Uri) -> impl axum::response::IntoResponse {
    (axum::http::StatusCode::NOT_FOUND, "not found")
}
