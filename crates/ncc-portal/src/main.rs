use anyhow::Context;
use axum_login::{
    tower_sessions::{MemoryStore, SessionManagerLayer},
    AuthManagerLayerBuilder,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod admin;
mod application;
mod cipher;
mod config;
mod login;
mod profile;
mod routes;
mod validate;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let config = config::load().context("loading configuration")?;
    let cipher = Arc::new(
        cipher::Cipher::from_base64_encoded(&config.field_secret)
            .context("configuring field cipher")?,
    );
    let store = ncc_db::create(&config.database);
    let session_layer = SessionManagerLayer::new(MemoryStore::default());
    let login_backend = login::create_backend(store.clone());
    let auth_layer = AuthManagerLayerBuilder::new(login_backend, session_layer).build();
    let app_state = AppState { store, cipher };
    let app = routes::setup(app_state, auth_layer);
    let listener =
        tokio::net::TcpListener::bind((config.bind_address.as_str(), config.bind_port))
            .await
            .context("binding listener")?;
    Ok(axum::serve(listener, app)
        .await
        .context("serving application")?)
}

#[derive(Clone)]
struct AppState {
    store: ncc_db::Store,
    cipher: Arc<cipher::Cipher>,
}
