use diesel::prelude::*;
use diesel_async::{
    pooled_connection::{
        mobc::{Builder, Pool},
        AsyncDieselConnectionManager,
    },
    scoped_futures::ScopedFutureExt,
    AsyncConnection, AsyncPgConnection, RunQueryDsl,
};
use std::time::Duration;

pub mod models;
mod schema;
#[cfg(test)]
mod tests;
pub mod types;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("getting connection from pool: {0}")]
    GetConnectionPool(#[from] mobc::Error<diesel_async::pooled_connection::PoolError>),
    #[error("result failure: {0}")]
    Result(#[from] diesel::result::Error),
    #[error("Not Found")]
    NotFound,
    #[error("Already Exists")]
    AlreadyExists,
}

impl Error {
    /// Collapses a duplicate-key failure into the store's own taxonomy.
    fn from_insert(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => Error::AlreadyExists,
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => Error::NotFound,
            err => err.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Store {
    pool: Pool<AsyncPgConnection>,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    db_url: String,
    max_open: u64,
    max_idle: u64,
    #[serde(with = "humantime_serde", default)]
    max_lifetime: Option<Duration>,
    #[serde(with = "humantime_serde", default)]
    max_idle_lifetime: Option<Duration>,
    #[serde(with = "humantime_serde")]
    timeout_for_get: Duration,
}

impl Config {
    /// Convenience for tools and tests that only have a connection URL.
    pub fn with_db_url(db_url: String) -> Self {
        Config {
            db_url,
            max_open: 16,
            max_idle: 4,
            max_lifetime: None,
            max_idle_lifetime: None,
            timeout_for_get: Duration::from_secs(5),
        }
    }
}

pub fn create(config: &Config) -> Store {
    Store {
        pool: create_pool(config),
    }
}

fn create_pool(config: &Config) -> mobc::Pool<AsyncDieselConnectionManager<AsyncPgConnection>> {
    let builder = Builder::new()
        .max_open(config.max_open)
        .max_idle(config.max_idle)
        .max_lifetime(
            config
                .max_lifetime
                .map(|v| v.max(Duration::from_secs(3600))),
        )
        .max_idle_lifetime(
            config
                .max_idle_lifetime
                .map(|v| v.max(Duration::from_secs(900))),
        )
        .get_timeout(Some(config.timeout_for_get.max(Duration::from_secs(5))));
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.db_url);
    builder.build(manager)
}

impl Store {
    async fn connection(
        &self,
    ) -> Result<mobc::Connection<AsyncDieselConnectionManager<AsyncPgConnection>>, Error> {
        self.pool.get().await.map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    pub async fn load_user_by_logon_name(&self, name: &str) -> Result<Option<models::User>, Error> {
        use schema::ncc::app_user::dsl::*;
        let mut conn = self.connection().await?;
        match app_user
            .filter(logon_name.eq(name))
            .select(models::User::as_select())
            .first(&mut conn)
            .await
        {
            Ok(loaded_user) => Ok(Some(loaded_user)),
            Err(diesel::result::Error::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip(self, user_id))]
    pub async fn load_user_by_id(&self, user_id: i32) -> Result<Option<models::User>, Error> {
        use schema::ncc::app_user::dsl::*;
        let mut conn = self.connection().await?;
        match app_user
            .filter(id.eq(user_id))
            .select(models::User::as_select())
            .first(&mut conn)
            .await
        {
            Ok(loaded_user) => Ok(Some(loaded_user)),
            Err(diesel::result::Error::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Creates the identity row together with its default "student" role
    /// assignment in a single transaction.
    #[tracing::instrument(skip(self, hashed_pass_phrase))]
    pub async fn register_user(
        &self,
        user_name: String,
        hashed_pass_phrase: String,
    ) -> Result<(models::User, models::RoleAssignment), Error> {
        let now = jiff::Timestamp::now().into();
        let new_user = models::NewUser {
            logon_name: user_name,
            pass_phrase: hashed_pass_phrase,
            created: now,
            updated: now,
        };
        self.connection()
            .await?
            .transaction(|mut conn| {
                use schema::ncc::{app_user, user_role};
                async move {
                    let created_user = diesel::insert_into(app_user::table)
                        .values(new_user)
                        .returning(models::User::as_returning())
                        .get_result(&mut conn)
                        .await
                        .map_err(Error::from_insert)?;
                    let new_role = models::NewRoleAssignment {
                        user_id: created_user.id,
                        role: types::AppRole::Student.as_str().to_owned(),
                        created: now,
                    };
                    let created_role = diesel::insert_into(user_role::table)
                        .values(new_role)
                        .returning(models::RoleAssignment::as_returning())
                        .get_result(&mut conn)
                        .await?;
                    Ok::<_, Error>((created_user, created_role))
                }
                .scope_boxed()
            })
            .await
    }

    /// Pure existence check - false when no such assignment, an error only
    /// when the store itself is unavailable.
    #[tracing::instrument(skip(self, user_id))]
    pub async fn has_role(&self, user_id: i32, role: types::AppRole) -> Result<bool, Error> {
        use schema::ncc::user_role;
        let mut conn = self.connection().await?;
        diesel::select(diesel::dsl::exists(
            user_role::table.filter(
                user_role::user_id
                    .eq(user_id)
                    .and(user_role::role.eq(role.as_str())),
            ),
        ))
        .get_result(&mut conn)
        .await
        .map_err(Into::into)
    }

    #[tracing::instrument(skip(self, user_id))]
    pub async fn grant_role(
        &self,
        user_id: i32,
        role: types::AppRole,
    ) -> Result<models::RoleAssignment, Error> {
        use schema::ncc::user_role;
        let mut conn = self.connection().await?;
        let new_role = models::NewRoleAssignment {
            user_id,
            role: role.as_str().to_owned(),
            created: jiff::Timestamp::now().into(),
        };
        diesel::insert_into(user_role::table)
            .values(new_role)
            .returning(models::RoleAssignment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Error::from_insert)
    }

    #[tracing::instrument(skip(self, for_user))]
    pub async fn load_student_by_user_id(
        &self,
        for_user: i32,
    ) -> Result<Option<models::Student>, Error> {
        use schema::ncc::student::dsl::*;
        let mut conn = self.connection().await?;
        match student
            .filter(user_id.eq(for_user))
            .select(models::Student::as_select())
            .first(&mut conn)
            .await
        {
            Ok(loaded) => Ok(Some(loaded)),
            Err(diesel::result::Error::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Persists a brand new profile. All sensitive plaintext columns and
    /// their ciphertext counterparts land in the same statement. Fails with
    /// [`Error::AlreadyExists`] when the identity already has a student row.
    #[tracing::instrument(skip(self, for_user, record))]
    pub async fn insert_student(
        &self,
        for_user: i32,
        record: models::StudentRecord,
    ) -> Result<models::Student, Error> {
        use schema::ncc::student;
        let now = jiff::Timestamp::now().into();
        let new_student = models::NewStudent {
            student_id: uuid::Uuid::new_v4(),
            user_id: for_user,
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
        };
        let mut conn = self.connection().await?;
        diesel::insert_into(student::table)
            .values(new_student)
            .returning(models::Student::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Error::from_insert)
    }

    /// Overwrites the identity's existing profile in place. Absent optional
    /// fields null out both the plaintext and the ciphertext column. Fails
    /// with [`Error::NotFound`] when no student row exists for the identity.
    #[tracing::instrument(skip(self, for_user, record))]
    pub async fn update_student(
        &self,
        for_user: i32,
        record: models::StudentRecord,
    ) -> Result<(), Error> {
        use schema::ncc::student;
        let changes = models::StudentChanges {
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
            updated: jiff::Timestamp::now().into(),
        };
        let mut conn = self.connection().await?;
        match diesel::update(student::table)
            .filter(student::user_id.eq(for_user))
            .set(changes)
            .execute(&mut conn)
            .await
        {
            Ok(0) => Err(Error::NotFound),
            Ok(_) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_students(&self) -> Result<Vec<models::Student>, Error> {
        use schema::ncc::student::dsl::*;
        let mut conn = self.connection().await?;
        student
            .order(created.desc())
            .select(models::Student::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self, for_student))]
    pub async fn add_ncc_detail(
        &self,
        for_student: uuid::Uuid,
        wing: types::Wing,
        regimental_number: Option<String>,
        cadet_rank: Option<String>,
        enrollment_date: Option<String>,
    ) -> Result<models::NccDetail, Error> {
        use schema::ncc::ncc_detail;
        let new_detail = models::NewNccDetail {
            ncc_id: uuid::Uuid::new_v4(),
            student_id: for_student,
            wing: wing.as_str().to_owned(),
            regimental_number,
            cadet_rank,
            enrollment_date,
            created: jiff::Timestamp::now().into(),
        };
        let mut conn = self.connection().await?;
        diesel::insert_into(ncc_detail::table)
            .values(new_detail)
            .returning(models::NccDetail::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Error::from_insert)
    }

    #[tracing::instrument(skip(self, for_student))]
    pub async fn list_ncc_details_for_student(
        &self,
        for_student: uuid::Uuid,
    ) -> Result<Vec<models::NccDetail>, Error> {
        use schema::ncc::ncc_detail::dsl::*;
        let mut conn = self.connection().await?;
        ncc_detail
            .filter(student_id.eq(for_student))
            .order(created.desc())
            .select(models::NccDetail::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_ncc_details_with_students(
        &self,
    ) -> Result<Vec<(models::NccDetail, models::StudentMainFields)>, Error> {
        use schema::ncc::{ncc_detail, student};
        let mut conn = self.connection().await?;
        ncc_detail::table
            .inner_join(student::table)
            .order(ncc_detail::created.desc())
            .select((
                models::NccDetail::as_select(),
                models::StudentMainFields::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self, for_student))]
    pub async fn add_experience(
        &self,
        for_student: uuid::Uuid,
        kind: types::ExperienceKind,
        company_name: String,
        role: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<models::Experience, Error> {
        use schema::ncc::placement_internship;
        let new_experience = models::NewExperience {
            experience_id: uuid::Uuid::new_v4(),
            student_id: for_student,
            experience: kind.as_str().to_owned(),
            company_name,
            role,
            start_date,
            end_date,
            created: jiff::Timestamp::now().into(),
        };
        let mut conn = self.connection().await?;
        diesel::insert_into(placement_internship::table)
            .values(new_experience)
            .returning(models::Experience::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(Error::from_insert)
    }

    #[tracing::instrument(skip(self, for_student))]
    pub async fn list_experiences_for_student(
        &self,
        for_student: uuid::Uuid,
    ) -> Result<Vec<models::Experience>, Error> {
        use schema::ncc::placement_internship::dsl::*;
        let mut conn = self.connection().await?;
        placement_internship
            .filter(student_id.eq(for_student))
            .order(created.desc())
            .select(models::Experience::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_experiences_with_students(
        &self,
    ) -> Result<Vec<(models::Experience, models::StudentMainFields)>, Error> {
        use schema::ncc::{placement_internship, student};
        let mut conn = self.connection().await?;
        placement_internship::table
            .inner_join(student::table)
            .order(placement_internship::created.desc())
            .select((
                models::Experience::as_select(),
                models::StudentMainFields::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }
}
