//! Store behaviour against a migrated SQLite database.

mod common;

use erp_api::domain::{CompanyInput, CreatePosition, PositionKey, UserDraft};
use erp_api::errors::AppError;
use erp_api::infra::{CompanyStore, PositionStore, SoftDeleteRepository, UserStore};

fn acme() -> CompanyInput {
    CompanyInput {
        company_name: "Acme".to_string(),
    }
}

fn draft(email: &str, company_id: Option<i32>) -> UserDraft {
    UserDraft {
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role: "user".to_string(),
        company_id,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_unique_index_rejects_second_active_row() {
    let db = common::database().await;
    let companies = CompanyStore::new(db.get_connection());

    companies.create(acme()).await.unwrap();
    let err = companies.create(acme()).await.unwrap_err();

    assert!(err.is_unique_violation());
    assert!(matches!(err.into_conflict("company"), AppError::DuplicateActive(_)));
}

#[tokio::test]
async fn test_soft_deleted_row_frees_the_index() {
    let db = common::database().await;
    let companies = CompanyStore::new(db.get_connection());

    let first = companies.create(acme()).await.unwrap();
    assert_eq!(companies.soft_delete(first.id).await.unwrap(), 1);

    let second = companies.create(acme()).await.unwrap();
    assert_ne!(first.id, second.id);
    assert!(companies.find_by_id(first.id).await.unwrap().is_none());

    let deleted = companies.list_deleted().await.unwrap();
    assert_eq!(deleted.len(), 1);
    assert!(deleted[0].deleted_at.is_some());

    // bringing the first row back would give the name two active holders
    let err = companies.restore(first.id).await.unwrap_err();
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_unknown_ids_affect_nothing() {
    let db = common::database().await;
    let companies = CompanyStore::new(db.get_connection());

    assert_eq!(companies.soft_delete(404).await.unwrap(), 0);
    assert_eq!(companies.restore(404).await.unwrap(), 0);

    let company = companies.create(acme()).await.unwrap();
    assert_eq!(companies.restore(company.id).await.unwrap(), 0);
    assert_eq!(companies.soft_delete(company.id).await.unwrap(), 1);
    assert_eq!(companies.soft_delete(company.id).await.unwrap(), 0);
    assert_eq!(companies.restore(company.id).await.unwrap(), 1);
    assert_eq!(companies.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_referencing_users_counts_active_only() {
    let db = common::database().await;
    let companies = CompanyStore::new(db.get_connection());
    let users = UserStore::new(db.get_connection());

    let company = companies.create(acme()).await.unwrap();
    let jane = users.create(draft("jane@x.com", Some(company.id))).await.unwrap();
    users.create(draft("john@x.com", None)).await.unwrap();

    let referencing = companies.referencing_users(company.id).await.unwrap();
    assert_eq!(referencing.len(), 1);
    assert_eq!(referencing[0].id, jane.id);

    users.soft_delete(jane.id).await.unwrap();
    assert!(companies.referencing_users(company.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_position_referencing_users_counts_active_only() {
    let db = common::database().await;
    let positions = PositionStore::new(db.get_connection());
    let users = UserStore::new(db.get_connection());

    let engineer = positions
        .create(CreatePosition {
            position_name: "Engineer".to_string(),
            position_code: "ENG".to_string(),
        })
        .await
        .unwrap();

    let jane = users
        .create(UserDraft {
            position_id: Some(engineer.id),
            ..draft("jane@x.com", None)
        })
        .await
        .unwrap();
    users.create(draft("john@x.com", None)).await.unwrap();

    let referencing = positions.referencing_users(engineer.id).await.unwrap();
    assert_eq!(referencing.len(), 1);
    assert_eq!(referencing[0].id, jane.id);

    users.soft_delete(jane.id).await.unwrap();
    assert!(positions.referencing_users(engineer.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_position_key_lookup_matches_either_field() {
    let db = common::database().await;
    let positions = PositionStore::new(db.get_connection());

    let engineer = positions
        .create(CreatePosition {
            position_name: "Engineer".to_string(),
            position_code: "ENG".to_string(),
        })
        .await
        .unwrap();

    let by_name = PositionKey {
        name: "Engineer".to_string(),
        code: "XXX".to_string(),
    };
    let by_code = PositionKey {
        name: "Nobody".to_string(),
        code: "ENG".to_string(),
    };
    let neither = PositionKey {
        name: "Nobody".to_string(),
        code: "XXX".to_string(),
    };

    assert_eq!(positions.find_active_by_key(&by_name).await.unwrap()[0].id, engineer.id);
    assert_eq!(positions.find_active_by_key(&by_code).await.unwrap()[0].id, engineer.id);
    assert!(positions.find_active_by_key(&neither).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_lookup_by_email_skips_deleted() {
    let db = common::database().await;
    let users = UserStore::new(db.get_connection());

    let jane = users.create(draft("jane@x.com", None)).await.unwrap();
    assert_eq!(
        users.find_active_by_key(&"jane@x.com".to_string()).await.unwrap().len(),
        1
    );

    users.soft_delete(jane.id).await.unwrap();
    assert!(users
        .find_active_by_key(&"jane@x.com".to_string())
        .await
        .unwrap()
        .is_empty());
}
