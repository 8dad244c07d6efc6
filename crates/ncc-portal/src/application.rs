use crate::login::{AuthzContext, BackEnd};
use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use axum_login::AuthSession;
use axum_messages::{Message, Messages};
use ncc_db::types;

pub mod main {
    use super::*;

    #[derive(Template)]
    #[template(path = "app-main.html")]
    pub struct MainTemplate {
        messages: Vec<Message>,
        logged_in: bool,
        is_admin: bool,
    }

    pub async fn get(
        messages: Messages,
        auth_session: AuthSession<BackEnd>,
        State(app_state): State<crate::AppState>,
    ) -> impl IntoResponse {
        let is_admin = match AuthzContext::from_session(&auth_session) {
            Some(ctx) => app_state
                .store
                .has_role(ctx.user_id, types::AppRole::Admin)
                .await
                .unwrap_or(false),
            None => false,
        };
        Html(
            MainTemplate {
                messages: messages.into_iter().collect(),
                logged_in: auth_session.user.is_some(),
                is_admin,
            }
            .render()
            .unwrap(),
        )
    }
}
