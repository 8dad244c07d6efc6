use crate::{models, types, Config, Error, Store};
use dotenvy::dotenv;
use std::env;

fn test_store() -> Store {
    dotenv().ok();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    crate::create(&Config::with_db_url(database_url))
}

fn unique_logon_name(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}

fn minimal_record(name: &str, email: &str) -> models::StudentRecord {
    models::StudentRecord {
        name: name.to_owned(),
        email: email.to_owned(),
        branch: None,
        year: None,
        address: None,
        phone_number: None,
        parents_phone_number: None,
        aadhaar_number: None,
        aadhaar_encrypted: None,
        pan_number: None,
        pan_encrypted: None,
        account_number: None,
        account_encrypted: None,
    }
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL with the ncc schema (DATABASE_URL)"]
async fn registration_creates_identity_with_student_role_only() {
    let store = test_store();
    let (user, role) = store
        .register_user(unique_logon_name("reg"), "hash".to_owned())
        .await
        .expect("registration should succeed");
    assert!(user.id > 0);
    assert_eq!(role.role, types::AppRole::Student.as_str());
    assert!(store
        .has_role(user.id, types::AppRole::Student)
        .await
        .expect("role lookup should succeed"));
    assert!(
        !store
            .has_role(user.id, types::AppRole::Admin)
            .await
            .expect("role lookup should succeed"),
        "absent admin assignment must read as false, not as an error"
    );
    store
        .grant_role(user.id, types::AppRole::Admin)
        .await
        .expect("granting admin should succeed");
    assert!(store
        .has_role(user.id, types::AppRole::Admin)
        .await
        .expect("role lookup should succeed"));
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL with the ncc schema (DATABASE_URL)"]
async fn profile_write_semantics_are_insert_xor_update() {
    let store = test_store();
    let (user, _) = store
        .register_user(unique_logon_name("profile"), "hash".to_owned())
        .await
        .expect("registration should succeed");

    // Update before any insert must report NotFound.
    let err = store
        .update_student(user.id, minimal_record("Asha Rao", "asha@example.com"))
        .await
        .expect_err("update without an existing row should fail");
    assert!(matches!(err, Error::NotFound));
    assert!(store
        .load_student_by_user_id(user.id)
        .await
        .expect("lookup should succeed")
        .is_none());

    let mut record = minimal_record("Asha Rao", "asha@example.com");
    record.aadhaar_number = Some("123456789012".to_owned());
    record.aadhaar_encrypted = Some(b"opaque".to_vec());
    let created = store
        .insert_student(user.id, record)
        .await
        .expect("insert should succeed");
    assert_eq!(created.user_id, user.id);
    assert_eq!(created.aadhaar_number.as_deref(), Some("123456789012"));
    assert_eq!(created.aadhaar_encrypted.as_deref(), Some(&b"opaque"[..]));

    // A second insert for the same identity violates the 1:1 invariant.
    let err = store
        .insert_student(user.id, minimal_record("Asha Rao", "asha@example.com"))
        .await
        .expect_err("duplicate insert should fail");
    assert!(matches!(err, Error::AlreadyExists));

    // A full-record update with the sensitive fields absent nulls out both
    // the plaintext and the encrypted column.
    store
        .update_student(user.id, minimal_record("Asha R. Rao", "asha@example.com"))
        .await
        .expect("update should succeed");
    let reloaded = store
        .load_student_by_user_id(user.id)
        .await
        .expect("lookup should succeed")
        .expect("row should exist");
    assert_eq!(reloaded.student_id, created.student_id);
    assert_eq!(reloaded.name, "Asha R. Rao");
    assert!(reloaded.aadhaar_number.is_none());
    assert!(reloaded.aadhaar_encrypted.is_none());
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL with the ncc schema (DATABASE_URL)"]
async fn child_records_reach_both_the_student_list_and_the_admin_aggregate() {
    let store = test_store();
    let (user, _) = store
        .register_user(unique_logon_name("child"), "hash".to_owned())
        .await
        .expect("registration should succeed");
    let student = store
        .insert_student(user.id, minimal_record("Asha Rao", "asha@example.com"))
        .await
        .expect("insert should succeed");

    store
        .add_ncc_detail(
            student.student_id,
            types::Wing::Air,
            Some("TN21SDA123456".to_owned()),
            Some("Cadet".to_owned()),
            Some("2023-07-01".to_owned()),
        )
        .await
        .expect("ncc detail should be added");
    let own_ncc = store
        .list_ncc_details_for_student(student.student_id)
        .await
        .expect("listing should succeed");
    assert_eq!(own_ncc.len(), 1);
    assert_eq!(own_ncc[0].wing, types::Wing::Air.as_str());

    store
        .add_experience(
            student.student_id,
            types::ExperienceKind::Placement,
            "Acme Corp".to_owned(),
            Some("Engineer".to_owned()),
            Some("2024-06-01".to_owned()),
            None,
        )
        .await
        .expect("placement should be added");
    store
        .add_experience(
            student.student_id,
            types::ExperienceKind::Internship,
            "Initech".to_owned(),
            None,
            Some("2023-05-01".to_owned()),
            Some("2023-07-31".to_owned()),
        )
        .await
        .expect("internship should be added");

    let own = store
        .list_experiences_for_student(student.student_id)
        .await
        .expect("listing should succeed");
    assert_eq!(own.len(), 2);

    let aggregate = store
        .list_experiences_with_students()
        .await
        .expect("aggregate listing should succeed");
    let mine = aggregate
        .iter()
        .filter(|(exp, _)| exp.student_id == student.student_id)
        .collect::<Vec<_>>();
    assert_eq!(mine.len(), 2);
    for (exp, main_fields) in &mine {
        assert_eq!(main_fields.name, "Asha Rao");
        assert!(
            exp.experience == types::ExperienceKind::Placement.as_str()
                || exp.experience == types::ExperienceKind::Internship.as_str()
        );
    }
    assert!(mine
        .iter()
        .any(|(exp, _)| exp.experience == types::ExperienceKind::Placement.as_str()));
    assert!(mine
        .iter()
        .any(|(exp, _)| exp.experience == types::ExperienceKind::Internship.as_str()));
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL with the ncc schema (DATABASE_URL)"]
async fn child_record_for_unknown_student_fails_not_found() {
    let store = test_store();
    let err = store
        .add_ncc_detail(uuid::Uuid::new_v4(), types::Wing::Navy, None, None, None)
        .await
        .expect_err("foreign key violation expected");
    assert!(matches!(err, Error::NotFound));
}
