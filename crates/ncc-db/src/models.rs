use diesel::prelude::*;

#[derive(Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::ncc::app_user)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub logon_name: String,
    pub pass_phrase: String,
    pub created: jiff_diesel::Timestamp,
    pub updated: jiff_diesel::Timestamp,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ncc::app_user)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUser {
    pub logon_name: String,
    pub pass_phrase: String,
    pub created: jiff_diesel::Timestamp,
    pub updated: jiff_diesel::Timestamp,
}

#[derive(Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::ncc::user_role)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(belongs_to(User))]
pub struct RoleAssignment {
    pub id: i32,
    pub user_id: i32,
    pub role: String,
    pub created: jiff_diesel::Timestamp,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ncc::user_role)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewRoleAssignment {
    pub user_id: i32,
    pub role: String,
    pub created: jiff_diesel::Timestamp,
}

#[derive(Debug, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::ncc::student)]
#[diesel(primary_key(student_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(belongs_to(User))]
pub struct Student {
    pub student_id: uuid::Uuid,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub branch: Option<String>,
    pub year: Option<i32>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub parents_phone_number: Option<String>,
    pub aadhaar_number: Option<String>,
    pub aadhaar_encrypted: Option<Vec<u8>>,
    pub pan_number: Option<String>,
    pub pan_encrypted: Option<Vec<u8>>,
    pub account_number: Option<String>,
    pub account_encrypted: Option<Vec<u8>>,
    pub created: jiff_diesel::Timestamp,
    pub updated: jiff_diesel::Timestamp,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ncc::student)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewStudent {
    pub student_id: uuid::Uuid,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub branch: Option<String>,
    pub year: Option<i32>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub parents_phone_number: Option<String>,
    pub aadhaar_number: Option<String>,
    pub aadhaar_encrypted: Option<Vec<u8>>,
    pub pan_number: Option<String>,
    pub pan_encrypted: Option<Vec<u8>>,
    pub account_number: Option<String>,
    pub account_encrypted: Option<Vec<u8>>,
    pub created: jiff_diesel::Timestamp,
    pub updated: jiff_diesel::Timestamp,
}

/// Full-profile changeset - absent optional fields overwrite their columns
/// with NULL so the plaintext and encrypted copies can never diverge.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::ncc::student)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct StudentChanges {
    pub name: String,
    pub email: String,
    pub branch: Option<String>,
    pub year: Option<i32>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub parents_phone_number: Option<String>,
    pub aadhaar_number: Option<String>,
    pub aadhaar_encrypted: Option<Vec<u8>>,
    pub pan_number: Option<String>,
    pub pan_encrypted: Option<Vec<u8>>,
    pub account_number: Option<String>,
    pub account_encrypted: Option<Vec<u8>>,
    pub updated: jiff_diesel::Timestamp,
}

/// The full set of profile columns written by one encrypted write. Plaintext
/// sensitive fields and their ciphertext counterparts travel together so a
/// single store call persists both or neither.
pub struct StudentRecord {
    pub name: String,
    pub email: String,
    pub branch: Option<String>,
    pub year: Option<i32>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub parents_phone_number: Option<String>,
    pub aadhaar_number: Option<String>,
    pub aadhaar_encrypted: Option<Vec<u8>>,
    pub pan_number: Option<String>,
    pub pan_encrypted: Option<Vec<u8>>,
    pub account_number: Option<String>,
    pub account_encrypted: Option<Vec<u8>>,
}

/// The subset of student columns the admin aggregate views join against.
#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::ncc::student)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StudentMainFields {
    pub student_id: uuid::Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::ncc::ncc_detail)]
#[diesel(primary_key(ncc_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(belongs_to(Student))]
pub struct NccDetail {
    pub ncc_id: uuid::Uuid,
    pub student_id: uuid::Uuid,
    pub wing: String,
    pub regimental_number: Option<String>,
    pub cadet_rank: Option<String>,
    pub enrollment_date: Option<String>,
    pub created: jiff_diesel::Timestamp,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ncc::ncc_detail)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewNccDetail {
    pub ncc_id: uuid::Uuid,
    pub student_id: uuid::Uuid,
    pub wing: String,
    pub regimental_number: Option<String>,
    pub cadet_rank: Option<String>,
    pub enrollment_date: Option<String>,
    pub created: jiff_diesel::Timestamp,
}

#[derive(Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::ncc::placement_internship)]
#[diesel(primary_key(experience_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(belongs_to(Student))]
pub struct Experience {
    pub experience_id: uuid::Uuid,
    pub student_id: uuid::Uuid,
    pub experience: String,
    pub company_name: String,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created: jiff_diesel::Timestamp,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ncc::placement_internship)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewExperience {
    pub experience_id: uuid::Uuid,
    pub student_id: uuid::Uuid,
    pub experience: String,
    pub company_name: String,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created: jiff_diesel::Timestamp,
}
