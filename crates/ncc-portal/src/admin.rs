//! Admin-only aggregate views over all students. Every handler consults the
//! role store first and defaults closed; a denial carries no information
//! about any underlying record.

use crate::login::{AuthzContext, BackEnd};
use crate::profile::{duration_label, or_not_available};
use askama_axum::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
};
use axum_login::AuthSession;
use axum_messages::{Message, Messages};
use http::StatusCode;
use ncc_db::{models, types};

/// True only when the identity holds an explicit "admin" role assignment.
async fn is_admin(store: &ncc_db::Store, ctx: &AuthzContext) -> Result<bool, ncc_db::Error> {
    store.has_role(ctx.user_id, types::AppRole::Admin).await
}

pub struct StudentRow {
    pub name: String,
    pub email: String,
    pub branch: String,
    pub year: String,
    pub phone_number: String,
    pub parents_phone_number: String,
}

impl From<models::Student> for StudentRow {
    fn from(student: models::Student) -> Self {
        Self {
            name: student.name,
            email: student.email,
            branch: or_not_available(student.branch),
            year: student
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "N/A".to_owned()),
            phone_number: or_not_available(student.phone_number),
            parents_phone_number: or_not_available(student.parents_phone_number),
        }
    }
}

pub struct NccRow {
    pub student: String,
    pub wing: String,
    pub regimental_number: String,
    pub cadet_rank: String,
    pub enrollment_date: String,
}

impl From<(models::NccDetail, models::StudentMainFields)> for NccRow {
    fn from((detail, student): (models::NccDetail, models::StudentMainFields)) -> Self {
        Self {
            student: student.name,
            wing: detail.wing,
            regimental_number: or_not_available(detail.regimental_number),
            cadet_rank: or_not_available(detail.cadet_rank),
            enrollment_date: or_not_available(detail.enrollment_date),
        }
    }
}

pub struct ExperienceRow {
    pub student: String,
    pub kind: String,
    pub company_name: String,
    pub role: String,
    pub duration: String,
}

impl From<(models::Experience, models::StudentMainFields)> for ExperienceRow {
    fn from((experience, student): (models::Experience, models::StudentMainFields)) -> Self {
        Self {
            student: student.name,
            kind: experience.experience,
            company_name: experience.company_name,
            role: or_not_available(experience.role),
            duration: duration_label(experience.start_date, experience.end_date),
        }
    }
}

pub mod page {
    use super::*;

    #[derive(Template)]
    #[template(path = "admin.html")]
    pub struct AdminTemplate {
        messages: Vec<Message>,
        students: Vec<StudentRow>,
        ncc_rows: Vec<NccRow>,
        experience_rows: Vec<ExperienceRow>,
    }

    pub async fn get(
        messages: Messages,
        auth_session: AuthSession<BackEnd>,
        State(app_state): State<crate::AppState>,
    ) -> impl IntoResponse {
        let Some(ctx) = AuthzContext::from_session(&auth_session) else {
            return Redirect::to("/login").into_response();
        };
        match is_admin(&app_state.store, &ctx).await {
            Ok(true) => (),
            Ok(false) => {
                messages.error("Access denied - you don't have admin privileges");
                return Redirect::to("/").into_response();
            }
            Err(err) => {
                tracing::error!("admin role lookup: {err}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
        let students = app_state.store.list_students().await;
        let ncc_details = app_state.store.list_ncc_details_with_students().await;
        let experiences = app_state.store.list_experiences_with_students().await;
        let (students, ncc_details, experiences) = match (students, ncc_details, experiences) {
            (Ok(students), Ok(ncc_details), Ok(experiences)) => {
                (students, ncc_details, experiences)
            }
            (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
                tracing::error!("loading admin aggregates: {err}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        Html(
            AdminTemplate {
                messages: messages.into_iter().collect(),
                // Plaintext columns only - the decrypt path is never invoked
                // for other users' data.
                students: students.into_iter().map(Into::into).collect(),
                ncc_rows: ncc_details.into_iter().map(Into::into).collect(),
                experience_rows: experiences.into_iter().map(Into::into).collect(),
            }
            .render()
            .unwrap(),
        )
        .into_response()
    }
}
