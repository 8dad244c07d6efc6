//! The sensitive-data boundary: encrypted profile writes and the single
//! sanctioned decrypted read, plus the student-facing form handlers.

use crate::login::{AuthzContext, BackEnd};
use crate::{cipher, validate};
use askama_axum::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use axum_login::AuthSession;
use axum_messages::{Message, Messages};
use http::StatusCode;
use ncc_db::{models, types};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Student database error: {0}")]
    Db(#[from] ncc_db::Error),
    #[error("Field encryption error: {0}")]
    Encryption(#[from] cipher::Error),
    #[error("{0}")]
    Validation(String),
}

/// A validated profile submission. Optional fields are `None` when the form
/// left them blank; sensitive values are still plaintext here and only ever
/// encrypted inside the write procedures.
#[derive(Debug, Clone)]
pub struct ProfileInput {
    pub name: String,
    pub email: String,
    pub branch: Option<String>,
    pub year: Option<i32>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub parents_phone_number: Option<String>,
    pub aadhaar_number: Option<String>,
    pub pan_number: Option<String>,
    pub account_number: Option<String>,
}

/// The caller's own student row with the sensitive fields decrypted. A field
/// that fails to decrypt is withheld rather than failing the whole read.
#[derive(Debug)]
pub struct DecryptedStudent {
    pub student_id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub branch: Option<String>,
    pub year: Option<i32>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub parents_phone_number: Option<String>,
    pub aadhaar_number: Option<String>,
    pub pan_number: Option<String>,
    pub account_number: Option<String>,
}

/// Encrypts the submitted profile into the dual-column record shape. The
/// plaintext copy and its ciphertext counterpart are built together; any
/// encryption failure aborts before a single column is persisted.
fn to_record(
    cipher: &cipher::Cipher,
    input: ProfileInput,
) -> Result<models::StudentRecord, Error> {
    if input.name.trim().is_empty() {
        return Err(Error::Validation("Name is required".to_owned()));
    }
    if input.email.trim().is_empty() {
        return Err(Error::Validation("Email is required".to_owned()));
    }
    let (aadhaar_number, aadhaar_encrypted) = encrypt_opt(cipher, input.aadhaar_number)?;
    let (pan_number, pan_encrypted) = encrypt_opt(cipher, input.pan_number)?;
    let (account_number, account_encrypted) = encrypt_opt(cipher, input.account_number)?;
    Ok(models::StudentRecord {
        name: input.name,
        email: input.email,
        branch: input.branch,
        year: input.year,
        address: input.address,
        phone_number: input.phone_number,
        parents_phone_number: input.parents_phone_number,
        aadhaar_number,
        aadhaar_encrypted,
        pan_number,
        pan_encrypted,
        account_number,
        account_encrypted,
    })
}

/// Absence propagates: a missing or empty value stores NULL in both columns
/// and is never encrypted as an empty string.
fn encrypt_opt(
    cipher: &cipher::Cipher,
    value: Option<String>,
) -> Result<(Option<String>, Option<Vec<u8>>), cipher::Error> {
    match value {
        Some(v) if !v.is_empty() => {
            let encrypted = cipher.encrypt(&v)?;
            Ok((Some(v), Some(encrypted)))
        }
        _ => Ok((None, None)),
    }
}

fn decrypt_field(
    cipher: &cipher::Cipher,
    field: &'static str,
    data: Option<Vec<u8>>,
) -> Option<String> {
    let data = data?;
    match cipher.decrypt(&data) {
        Ok(plaintext) => Some(plaintext),
        Err(err) => {
            tracing::warn!(field, "withholding sensitive field that failed to decrypt: {err}");
            None
        }
    }
}

fn decrypt_row(cipher: &cipher::Cipher, row: models::Student) -> DecryptedStudent {
    DecryptedStudent {
        student_id: row.student_id,
        name: row.name,
        email: row.email,
        branch: row.branch,
        year: row.year,
        address: row.address,
        phone_number: row.phone_number,
        parents_phone_number: row.parents_phone_number,
        aadhaar_number: decrypt_field(cipher, "aadhaar_number", row.aadhaar_encrypted),
        pan_number: decrypt_field(cipher, "pan_number", row.pan_encrypted),
        account_number: decrypt_field(cipher, "account_number", row.account_encrypted),
    }
}

/// Creates the caller's student row. Fails with
/// [`ncc_db::Error::AlreadyExists`] when the identity already has one.
#[tracing::instrument(skip(store, cipher, input))]
pub async fn insert_student_encrypted(
    store: &ncc_db::Store,
    cipher: &cipher::Cipher,
    ctx: &AuthzContext,
    input: ProfileInput,
) -> Result<uuid::Uuid, Error> {
    let record = to_record(cipher, input)?;
    let created = store.insert_student(ctx.user_id, record).await?;
    Ok(created.student_id)
}

/// Overwrites the caller's existing student row in place. Fails with
/// [`ncc_db::Error::NotFound`] when none exists.
#[tracing::instrument(skip(store, cipher, input))]
pub async fn update_student_encrypted(
    store: &ncc_db::Store,
    cipher: &cipher::Cipher,
    ctx: &AuthzContext,
    input: ProfileInput,
) -> Result<(), Error> {
    let record = to_record(cipher, input)?;
    store.update_student(ctx.user_id, record).await?;
    Ok(())
}

/// The only path that returns decrypted sensitive data, and it only ever
/// resolves the caller's own record - the context carries no other identity.
/// No row for the caller is `Ok(None)`, not an error.
#[tracing::instrument(skip(store, cipher))]
pub async fn get_student_decrypted(
    store: &ncc_db::Store,
    cipher: &cipher::Cipher,
    ctx: &AuthzContext,
) -> Result<Option<DecryptedStudent>, Error> {
    let row = store.load_student_by_user_id(ctx.user_id).await?;
    Ok(row.map(|row| decrypt_row(cipher, row)))
}

#[derive(serde::Deserialize, Debug)]
pub struct ProfileForm {
    name: String,
    email: String,
    branch: String,
    year: String,
    address: String,
    phone_number: String,
    parents_phone_number: String,
    aadhaar_number: String,
    pan_number: String,
    account_number: String,
}

fn none_if_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Applies the format checks the client form also performs; every violation
/// becomes one notification message.
fn validate_profile_form(form: ProfileForm) -> Result<ProfileInput, Vec<String>> {
    let mut errors = Vec::new();
    let mut check = |result: Result<(), String>| {
        if let Err(message) = result {
            errors.push(message);
        }
    };
    check(validate::name(&form.name));
    check(validate::email(&form.email));
    let year = match none_if_blank(form.year) {
        None => None,
        Some(raw) => match raw.parse::<i32>() {
            Ok(parsed) => {
                check(validate::year(parsed));
                Some(parsed)
            }
            Err(_) => {
                check(Err("Year must be between 1 and 5".to_owned()));
                None
            }
        },
    };
    let branch = none_if_blank(form.branch);
    if let Some(ref v) = branch {
        check(validate::branch(v));
    }
    let address = none_if_blank(form.address);
    if let Some(ref v) = address {
        check(validate::address(v));
    }
    let phone_number = none_if_blank(form.phone_number);
    if let Some(ref v) = phone_number {
        check(validate::phone_number(v, "Phone number"));
    }
    let parents_phone_number = none_if_blank(form.parents_phone_number);
    if let Some(ref v) = parents_phone_number {
        check(validate::phone_number(v, "Parent's phone number"));
    }
    let aadhaar_number = none_if_blank(form.aadhaar_number);
    if let Some(ref v) = aadhaar_number {
        check(validate::aadhaar_number(v));
    }
    let pan_number = none_if_blank(form.pan_number);
    if let Some(ref v) = pan_number {
        check(validate::pan_number(v));
    }
    let account_number = none_if_blank(form.account_number);
    if let Some(ref v) = account_number {
        check(validate::account_number(v));
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ProfileInput {
        name: form.name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        branch,
        year,
        address,
        phone_number,
        parents_phone_number,
        aadhaar_number,
        pan_number,
        account_number,
    })
}

pub struct FormView {
    pub name: String,
    pub email: String,
    pub branch: String,
    pub year: String,
    pub address: String,
    pub phone_number: String,
    pub parents_phone_number: String,
    pub aadhaar_number: String,
    pub pan_number: String,
    pub account_number: String,
}

impl FormView {
    fn empty() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            branch: String::new(),
            year: String::new(),
            address: String::new(),
            phone_number: String::new(),
            parents_phone_number: String::new(),
            aadhaar_number: String::new(),
            pan_number: String::new(),
            account_number: String::new(),
        }
    }
}

impl From<&DecryptedStudent> for FormView {
    fn from(student: &DecryptedStudent) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            branch: student.branch.clone().unwrap_or_default(),
            year: student.year.map(|y| y.to_string()).unwrap_or_default(),
            address: student.address.clone().unwrap_or_default(),
            phone_number: student.phone_number.clone().unwrap_or_default(),
            parents_phone_number: student.parents_phone_number.clone().unwrap_or_default(),
            aadhaar_number: student.aadhaar_number.clone().unwrap_or_default(),
            pan_number: student.pan_number.clone().unwrap_or_default(),
            account_number: student.account_number.clone().unwrap_or_default(),
        }
    }
}

pub struct NccRow {
    pub wing: String,
    pub regimental_number: String,
    pub cadet_rank: String,
    pub enrollment_date: String,
}

impl From<models::NccDetail> for NccRow {
    fn from(detail: models::NccDetail) -> Self {
        Self {
            wing: detail.wing,
            regimental_number: or_not_available(detail.regimental_number),
            cadet_rank: or_not_available(detail.cadet_rank),
            enrollment_date: or_not_available(detail.enrollment_date),
        }
    }
}

pub struct ExperienceRow {
    pub kind: String,
    pub company_name: String,
    pub role: String,
    pub duration: String,
}

impl From<models::Experience> for ExperienceRow {
    fn from(experience: models::Experience) -> Self {
        Self {
            kind: experience.experience,
            company_name: experience.company_name,
            role: or_not_available(experience.role),
            duration: duration_label(experience.start_date, experience.end_date),
        }
    }
}

pub(crate) fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_owned())
}

pub(crate) fn duration_label(start: Option<String>, end: Option<String>) -> String {
    match start {
        Some(start) => format!("{start} to {}", end.unwrap_or_else(|| "Present".to_owned())),
        None => "N/A".to_owned(),
    }
}

pub mod page {
    use super::*;

    #[derive(Template)]
    #[template(path = "profile.html")]
    pub struct ProfileTemplate {
        messages: Vec<Message>,
        has_profile: bool,
        form: FormView,
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
        let student =
            match get_student_decrypted(&app_state.store, &app_state.cipher, &ctx).await {
                Ok(student) => student,
                Err(err) => {
                    tracing::error!("loading profile: {err}");
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            };
        let (ncc_rows, experience_rows) = match &student {
            Some(student) => {
                let ncc = app_state
                    .store
                    .list_ncc_details_for_student(student.student_id)
                    .await;
                let experiences = app_state
                    .store
                    .list_experiences_for_student(student.student_id)
                    .await;
                match (ncc, experiences) {
                    (Ok(ncc), Ok(experiences)) => (
                        ncc.into_iter().map(Into::into).collect(),
                        experiences.into_iter().map(Into::into).collect(),
                    ),
                    (Err(err), _) | (_, Err(err)) => {
                        tracing::error!("loading profile lists: {err}");
                        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                    }
                }
            }
            None => (Vec::new(), Vec::new()),
        };
        Html(
            ProfileTemplate {
                messages: messages.into_iter().collect(),
                has_profile: student.is_some(),
                form: student
                    .as_ref()
                    .map(FormView::from)
                    .unwrap_or_else(FormView::empty),
                ncc_rows,
                experience_rows,
            }
            .render()
            .unwrap(),
        )
        .into_response()
    }
}

pub mod save {
    use super::*;

    pub async fn post(
        mut messages: Messages,
        auth_session: AuthSession<BackEnd>,
        State(app_state): State<crate::AppState>,
        Form(form): Form<ProfileForm>,
    ) -> impl IntoResponse {
        let Some(ctx) = AuthzContext::from_session(&auth_session) else {
            return Redirect::to("/login").into_response();
        };
        let input = match validate_profile_form(form) {
            Ok(input) => input,
            Err(errors) => {
                for error in errors {
                    messages = messages.error(error);
                }
                return Redirect::to("/profile").into_response();
            }
        };
        // Insert versus update is keyed by what already exists for the
        // caller, mirroring the form the client believes it is submitting.
        let exists = match app_state.store.load_student_by_user_id(ctx.user_id).await {
            Ok(existing) => existing.is_some(),
            Err(err) => {
                tracing::error!("resolving profile existence: {err}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        let outcome = if exists {
            update_student_encrypted(&app_state.store, &app_state.cipher, &ctx, input)
                .await
                .map(|()| "Profile updated successfully")
        } else {
            insert_student_encrypted(&app_state.store, &app_state.cipher, &ctx, input)
                .await
                .map(|_| "Profile created successfully")
        };
        match outcome {
            Ok(success) => {
                messages.success(success);
                Redirect::to("/profile").into_response()
            }
            Err(err) => {
                messages.error(user_facing_error(&err));
                tracing::error!("saving profile: {err}");
                Redirect::to("/profile").into_response()
            }
        }
    }

    /// Short notifications only - no internal error detail crosses the
    /// boundary to the client.
    fn user_facing_error(err: &Error) -> String {
        match err {
            Error::Validation(message) => message.clone(),
            Error::Db(ncc_db::Error::AlreadyExists) => {
                "A profile already exists for your account".to_owned()
            }
            Error::Db(ncc_db::Error::NotFound) => {
                "No profile exists yet for your account".to_owned()
            }
            Error::Encryption(_) => "Could not protect sensitive fields; nothing was saved".to_owned(),
            Error::Db(_) => "Could not save your profile".to_owned(),
        }
    }
}

pub mod add_ncc {
    use super::*;

    #[derive(serde::Deserialize, Debug)]
    pub struct NccForm {
        ncc_wing: String,
        regimental_number: String,
        cadet_rank: String,
        enrollment_date: String,
    }

    pub async fn post(
        mut messages: Messages,
        auth_session: AuthSession<BackEnd>,
        State(app_state): State<crate::AppState>,
        Form(form): Form<NccForm>,
    ) -> impl IntoResponse {
        let Some(ctx) = AuthzContext::from_session(&auth_session) else {
            return Redirect::to("/login").into_response();
        };
        let student = match app_state.store.load_student_by_user_id(ctx.user_id).await {
            Ok(Some(student)) => student,
            Ok(None) => {
                messages.error("Please save your student details first");
                return Redirect::to("/profile").into_response();
            }
            Err(err) => {
                tracing::error!("resolving profile: {err}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        let wing = match form.ncc_wing.parse::<types::Wing>() {
            Ok(wing) => wing,
            Err(_) => {
                messages.error("NCC wing must be one of air, army, navy");
                return Redirect::to("/profile").into_response();
            }
        };
        let mut errors = Vec::new();
        let regimental_number = none_if_blank(form.regimental_number);
        if let Some(ref v) = regimental_number {
            if let Err(message) = validate::regimental_number(v) {
                errors.push(message);
            }
        }
        let cadet_rank = none_if_blank(form.cadet_rank);
        if let Some(ref v) = cadet_rank {
            if let Err(message) = validate::cadet_rank(v) {
                errors.push(message);
            }
        }
        let enrollment_date = none_if_blank(form.enrollment_date);
        if let Some(ref v) = enrollment_date {
            if let Err(message) = validate::civil_date(v, "Enrollment date") {
                errors.push(message);
            }
        }
        if !errors.is_empty() {
            for error in errors {
                messages = messages.error(error);
            }
            return Redirect::to("/profile").into_response();
        }
        match app_state
            .store
            .add_ncc_detail(
                student.student_id,
                wing,
                regimental_number,
                cadet_rank,
                enrollment_date,
            )
            .await
        {
            Ok(_) => {
                messages.success("NCC details added successfully");
            }
            Err(err) => {
                tracing::error!("adding ncc detail: {err}");
                messages.error("Could not add NCC details");
            }
        }
        Redirect::to("/profile").into_response()
    }
}

pub mod add_experience {
    use super::*;

    #[derive(serde::Deserialize, Debug)]
    pub struct ExperienceForm {
        experience: String,
        company_name: String,
        role: String,
        start_date: String,
        end_date: String,
    }

    pub async fn post(
        mut messages: Messages,
        auth_session: AuthSession<BackEnd>,
        State(app_state): State<crate::AppState>,
        Form(form): Form<ExperienceForm>,
    ) -> impl IntoResponse {
        let Some(ctx) = AuthzContext::from_session(&auth_session) else {
            return Redirect::to("/login").into_response();
        };
        let student = match app_state.store.load_student_by_user_id(ctx.user_id).await {
            Ok(Some(student)) => student,
            Ok(None) => {
                messages.error("Please save your student details first");
                return Redirect::to("/profile").into_response();
            }
            Err(err) => {
                tracing::error!("resolving profile: {err}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        let kind = match form.experience.parse::<types::ExperienceKind>() {
            Ok(kind) => kind,
            Err(_) => {
                messages.error("Experience type must be placement or internship");
                return Redirect::to("/profile").into_response();
            }
        };
        let mut errors = Vec::new();
        if let Err(message) = validate::company_name(&form.company_name) {
            errors.push(message);
        }
        let role = none_if_blank(form.role);
        if let Some(ref v) = role {
            if let Err(message) = validate::experience_role(v) {
                errors.push(message);
            }
        }
        let start_date = none_if_blank(form.start_date);
        if let Some(ref v) = start_date {
            if let Err(message) = validate::civil_date(v, "Start date") {
                errors.push(message);
            }
        }
        // An absent end date means the engagement is ongoing.
        let end_date = none_if_blank(form.end_date);
        if let Some(ref v) = end_date {
            if let Err(message) = validate::civil_date(v, "End date") {
                errors.push(message);
            }
        }
        if !errors.is_empty() {
            for error in errors {
                messages = messages.error(error);
            }
            return Redirect::to("/profile").into_response();
        }
        match app_state
            .store
            .add_experience(
                student.student_id,
                kind,
                form.company_name.trim().to_owned(),
                role,
                start_date,
                end_date,
            )
            .await
        {
            Ok(_) => {
                messages.success("Experience added successfully");
            }
            Err(err) => {
                tracing::error!("adding experience: {err}");
                messages.error("Could not add experience");
            }
        }
        Redirect::to("/profile").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_gcm_siv::{aead::OsRng, Aes256GcmSiv, KeyInit};
    use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};

    fn test_cipher() -> cipher::Cipher {
        let key = Aes256GcmSiv::generate_key(&mut OsRng);
        cipher::Cipher::from_base64_encoded(&STANDARD_NO_PAD.encode(key.as_slice()))
            .expect("generated key should parse")
    }

    fn input(name: &str, email: &str) -> ProfileInput {
        ProfileInput {
            name: name.to_owned(),
            email: email.to_owned(),
            branch: None,
            year: None,
            address: None,
            phone_number: None,
            parents_phone_number: None,
            aadhaar_number: None,
            pan_number: None,
            account_number: None,
        }
    }

    fn row_from_record(record: models::StudentRecord) -> models::Student {
        let now = jiff::Timestamp::now().into();
        models::Student {
            student_id: uuid::Uuid::new_v4(),
            user_id: 1,
            name: record.name,
            email: record.email,
            branch: record.branch,
            year: record.year,
            address: record.address,
            phone_number: record.phone_number,
            parents_phone_number: record.parents_phone_number,
            aadhaar_number: record.aadhaar_number,
            aadhaar_encrypted: record.aadhaar_encrypted,
            pan_number: record.pan_number,
            pan_encrypted: record.pan_encrypted,
            account_number: record.account_number,
            account_encrypted: record.account_encrypted,
            created: now,
            updated: now,
        }
    }

    #[test]
    fn absent_sensitive_fields_store_null_in_both_columns() {
        let cipher = test_cipher();
        let (plain, encrypted) = encrypt_opt(&cipher, None).expect("absence should pass through");
        assert!(plain.is_none());
        assert!(encrypted.is_none());
        let (plain, encrypted) =
            encrypt_opt(&cipher, Some(String::new())).expect("empty should pass through");
        assert!(plain.is_none());
        assert!(encrypted.is_none());
    }

    #[test]
    fn present_sensitive_fields_store_plaintext_and_ciphertext_together() {
        let cipher = test_cipher();
        let (plain, encrypted) =
            encrypt_opt(&cipher, Some("123456789012".to_owned())).expect("encryption");
        assert_eq!(plain.as_deref(), Some("123456789012"));
        let encrypted = encrypted.expect("ciphertext must accompany the plaintext copy");
        assert_eq!(cipher.decrypt(&encrypted).expect("decryption"), "123456789012");
    }

    #[test]
    fn write_boundary_rejects_missing_name_or_email() {
        let cipher = test_cipher();
        assert!(matches!(
            to_record(&cipher, input("", "asha@example.com")),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            to_record(&cipher, input("Asha Rao", "  ")),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn written_profile_reads_back_with_original_sensitive_values() {
        let cipher = test_cipher();
        let mut submitted = input("Asha Rao", "asha@example.com");
        submitted.aadhaar_number = Some("123456789012".to_owned());
        submitted.account_number = Some("00011122233".to_owned());
        let record = to_record(&cipher, submitted).expect("record should build");
        assert!(record.pan_number.is_none());
        assert!(record.pan_encrypted.is_none());
        let read_back = decrypt_row(&cipher, row_from_record(record));
        assert_eq!(read_back.name, "Asha Rao");
        assert_eq!(read_back.aadhaar_number.as_deref(), Some("123456789012"));
        assert_eq!(read_back.account_number.as_deref(), Some("00011122233"));
        assert_eq!(read_back.pan_number, None);
    }

    #[test]
    fn undecryptable_field_degrades_to_absent_instead_of_failing_the_read() {
        let cipher = test_cipher();
        let mut submitted = input("Asha Rao", "asha@example.com");
        submitted.aadhaar_number = Some("123456789012".to_owned());
        submitted.pan_number = Some("ABCDE1234F".to_owned());
        let mut record = to_record(&cipher, submitted).expect("record should build");
        record.pan_encrypted = Some(b"garbage-that-was-never-ciphertext".to_vec());
        let read_back = decrypt_row(&cipher, row_from_record(record));
        assert_eq!(read_back.pan_number, None, "bad field is withheld");
        assert_eq!(
            read_back.aadhaar_number.as_deref(),
            Some("123456789012"),
            "healthy fields still decrypt"
        );
    }

    #[test]
    fn form_validation_reports_every_violation() {
        let form = ProfileForm {
            name: "Asha Rao".to_owned(),
            email: "asha@example.com".to_owned(),
            branch: String::new(),
            year: "7".to_owned(),
            address: String::new(),
            phone_number: "12345".to_owned(),
            parents_phone_number: String::new(),
            aadhaar_number: "123".to_owned(),
            pan_number: "nope".to_owned(),
            account_number: String::new(),
        };
        let errors = validate_profile_form(form).expect_err("violations expected");
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn blank_optional_fields_become_absent() {
        let form = ProfileForm {
            name: " Asha Rao ".to_owned(),
            email: "asha@example.com".to_owned(),
            branch: "  ".to_owned(),
            year: String::new(),
            address: String::new(),
            phone_number: String::new(),
            parents_phone_number: String::new(),
            aadhaar_number: String::new(),
            pan_number: String::new(),
            account_number: String::new(),
        };
        let input = validate_profile_form(form).expect("blank optionals are fine");
        assert_eq!(input.name, "Asha Rao");
        assert!(input.branch.is_none());
        assert!(input.year.is_none());
        assert!(input.aadhaar_number.is_none());
    }
}
