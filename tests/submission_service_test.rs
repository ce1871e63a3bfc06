use agency_backend::entities::enums::{SubmissionStatus, SubmissionSubject};
use agency_backend::infrastructure::database;
use agency_backend::services::submission_service::{CreateSubmissionInput, SubmissionService};
use sea_orm::Database;
use uuid::Uuid;

async fn setup() -> sea_orm::DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    database::run_migrations(&db).await.unwrap();
    db
}

fn input(name: &str, subject: SubmissionSubject) -> CreateSubmissionInput {
    CreateSubmissionInput {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        subject,
        message: "Hello there".to_string(),
    }
}

#[tokio::test]
async fn create_always_starts_as_new() {
    let db = setup().await;

    let submission = SubmissionService::create(&db, input("Mara", SubmissionSubject::Booking))
        .await
        .unwrap();

    assert_eq!(submission.status, SubmissionStatus::New);
    assert_eq!(submission.subject, SubmissionSubject::Booking);
}

#[tokio::test]
async fn status_update_persists_and_bumps_updated_at() {
    let db = setup().await;

    let submission = SubmissionService::create(&db, input("Noor", SubmissionSubject::General))
        .await
        .unwrap();

    let updated = SubmissionService::update_status(&db, submission.id, SubmissionStatus::Responded)
        .await
        .unwrap();

    assert_eq!(updated.status, SubmissionStatus::Responded);
    assert!(updated.updated_at >= submission.updated_at);
}

#[tokio::test]
async fn list_filters_by_status_newest_first() {
    let db = setup().await;

    let first = SubmissionService::create(&db, input("One", SubmissionSubject::General))
        .await
        .unwrap();
    let second = SubmissionService::create(&db, input("Two", SubmissionSubject::Application))
        .await
        .unwrap();
    SubmissionService::update_status(&db, first.id, SubmissionStatus::Read)
        .await
        .unwrap();

    let new_only = SubmissionService::list(&db, Some(SubmissionStatus::New), 1, 20)
        .await
        .unwrap();
    assert_eq!(new_only.total_count, 1);
    assert_eq!(new_only.items[0].id, second.id);

    let all = SubmissionService::list(&db, None, 1, 20).await.unwrap();
    assert_eq!(all.total_count, 2);
}

#[tokio::test]
async fn get_missing_fails_not_found() {
    let db = setup().await;

    let err = SubmissionService::get(&db, Uuid::new_v4()).await.unwrap_err();
    assert!(err.to_string().contains("Submission not found"));
}

#[tokio::test]
async fn bulk_delete_tolerates_unknown_ids() {
    let db = setup().await;

    let keep = SubmissionService::create(&db, input("Keep", SubmissionSubject::Other))
        .await
        .unwrap();
    let gone = SubmissionService::create(&db, input("Gone", SubmissionSubject::Other))
        .await
        .unwrap();

    let deleted = SubmissionService::bulk_delete(&db, vec![gone.id, Uuid::new_v4()])
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    assert!(SubmissionService::get(&db, keep.id).await.is_ok());
    assert!(SubmissionService::get(&db, gone.id).await.is_err());
}
