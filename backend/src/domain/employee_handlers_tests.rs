//! Tests for the employee handler set.

use std::sync::Arc;

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::ports::{EmployeeRepositoryError, MockEmployeeRepository};

const ANN_ID: &str = "65a1b2c3d4e5f6a7b8c9d0e1";

#[fixture]
fn ann() -> EmployeeDraft {
    EmployeeDraft::new("Ann", "Lee", "Engineer", 30)
}

fn body(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).expect("body encodes")
}

fn handlers(repo: MockEmployeeRepository) -> EmployeeHandlers {
    EmployeeHandlers::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn create_inserts_validated_draft(ann: EmployeeDraft) {
    let expected = ann.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_insert()
        .withf(move |draft| *draft == expected)
        .times(1)
        .return_once(|_| Ok(EmployeeId::new(ANN_ID)));

    let envelope = handlers(repo)
        .create(&body(json!({
            "firstname": "Ann",
            "lastname": "Lee",
            "position": "Engineer",
            "age": 30,
        })))
        .await;

    assert_eq!(envelope.status(), status::CREATED);
    assert_eq!(envelope.message(), "Create Employee Success");
    assert_eq!(
        envelope.payload(),
        &Payload::Inserted(InsertOutcome {
            inserted_id: EmployeeId::new(ANN_ID),
        })
    );
}

#[rstest]
#[case(json!({ "lastname": "Lee", "position": "Engineer", "age": 30 }), "firstname")]
#[case(json!({ "firstname": "Ann", "position": "Engineer", "age": 30 }), "lastname")]
#[case(json!({ "firstname": "Ann", "lastname": "Lee", "age": 30 }), "position")]
#[case(json!({ "firstname": "Ann", "lastname": "Lee", "position": "Engineer", "age": 0 }), "age")]
#[tokio::test]
async fn create_rejects_missing_fields_without_persisting(
    #[case] payload: serde_json::Value,
    #[case] field: &str,
) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_insert().times(0);

    let envelope = handlers(repo).create(&body(payload)).await;

    assert_eq!(envelope.status(), status::BAD_REQUEST);
    assert_eq!(envelope.message(), "Error");
    let Payload::Detail(detail) = envelope.payload() else {
        panic!("expected detail payload, got {:?}", envelope.payload());
    };
    assert_eq!(detail, &format!("missing required fields: {field}"));
}

#[rstest]
#[case(b"{not json".as_slice())]
#[case(b"".as_slice())]
#[case(br#"{"firstname": 7}"#.as_slice())]
#[case(br#"["Ann", "Lee", "Engineer", 30]"#.as_slice())]
#[case(b"null".as_slice())]
#[case(b"\"Ann\"".as_slice())]
#[tokio::test]
async fn create_rejects_malformed_body(#[case] raw: &[u8]) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_insert().times(0);

    let envelope = handlers(repo).create(raw).await;

    assert_eq!(envelope.status(), status::BAD_REQUEST);
    let Payload::Detail(detail) = envelope.payload() else {
        panic!("expected detail payload");
    };
    assert!(detail.starts_with("malformed request body"));
}

#[rstest]
#[tokio::test]
async fn create_maps_store_failure_to_internal_error() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(EmployeeRepositoryError::connection("server selection timeout")));

    let envelope = handlers(repo)
        .create(&body(json!({
            "firstname": "Ann",
            "lastname": "Lee",
            "position": "Engineer",
            "age": 30,
        })))
        .await;

    assert_eq!(envelope.status(), status::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.message(), "Internal Server Error");
}

#[rstest]
#[tokio::test]
async fn list_all_returns_empty_list_as_success() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_all().times(1).return_once(|| Ok(Vec::new()));

    let envelope = handlers(repo).list_all().await;

    assert_eq!(envelope.status(), status::OK);
    assert_eq!(envelope.payload(), &Payload::Employees(Vec::new()));
}

#[rstest]
#[tokio::test]
async fn list_all_maps_timeout_to_internal_error() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(|| Err(EmployeeRepositoryError::timeout("find_all", 10_000_u64)));

    let envelope = handlers(repo).list_all().await;

    assert_eq!(envelope.status(), status::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.message(), "Error");
}

#[rstest]
#[tokio::test]
async fn get_one_returns_record(ann: EmployeeDraft) {
    let record = EmployeeRecord::from_parts(EmployeeId::new(ANN_ID), ann);
    let returned = record.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_one()
        .withf(|id| id.as_str() == ANN_ID)
        .times(1)
        .return_once(move |_| Ok(returned));

    let envelope = handlers(repo).get_one(ANN_ID).await;

    assert_eq!(envelope.status(), status::OK);
    assert_eq!(envelope.payload(), &Payload::Employee(record));
}

#[rstest]
#[tokio::test]
async fn get_one_reports_absence_as_internal_error() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_one()
        .times(1)
        .return_once(|id| Err(EmployeeRepositoryError::not_found(id.as_str())));

    let envelope = handlers(repo).get_one("missing").await;

    assert_eq!(envelope.status(), status::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.message(), "Internal Server Error");
    assert_eq!(
        envelope.payload(),
        &Payload::Detail("no employee matches id missing".to_owned())
    );
}

#[rstest]
#[tokio::test]
async fn update_returns_stored_state_after_match() {
    let replacement = EmployeeDraft::new("Ann", "Lee", "Manager", 31);
    let stored = EmployeeRecord::from_parts(EmployeeId::new(ANN_ID), replacement.clone());
    let returned = stored.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_update()
        .withf(move |id, draft| id.as_str() == ANN_ID && *draft == replacement)
        .times(1)
        .return_once(|_, _| Ok(1));
    repo.expect_find_one()
        .times(1)
        .return_once(move |_| Ok(returned));

    let envelope = handlers(repo)
        .update(
            ANN_ID,
            &body(json!({
                "id": "ignored",
                "firstname": "Ann",
                "lastname": "Lee",
                "position": "Manager",
                "age": 31,
            })),
        )
        .await;

    assert_eq!(envelope.status(), status::OK);
    assert_eq!(envelope.message(), "Update Success");
    assert_eq!(envelope.payload(), &Payload::Employee(stored));
}

#[rstest]
#[tokio::test]
async fn update_without_match_returns_empty_record() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_update().times(1).return_once(|_, _| Ok(0));
    repo.expect_find_one().times(0);

    let envelope = handlers(repo)
        .update(
            "not-hex",
            &body(json!({
                "firstname": "Ann",
                "lastname": "Lee",
                "position": "Engineer",
                "age": 30,
            })),
        )
        .await;

    assert_eq!(envelope.status(), status::OK);
    assert_eq!(envelope.payload(), &Payload::Employee(EmployeeRecord::empty()));
}

#[rstest]
#[tokio::test]
async fn update_validates_before_touching_store() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_update().times(0);

    let envelope = handlers(repo)
        .update(ANN_ID, &body(json!({ "firstname": "Ann" })))
        .await;

    assert_eq!(envelope.status(), status::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn update_rejects_array_body() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_update().times(0);

    let envelope = handlers(repo)
        .update(ANN_ID, br#"["Ann", "Lee", "Manager", 31]"#)
        .await;

    assert_eq!(envelope.status(), status::BAD_REQUEST);
    assert_eq!(envelope.message(), "Error");
}

#[rstest]
#[tokio::test]
async fn update_maps_store_failure_to_plain_error() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_update()
        .times(1)
        .return_once(|_, _| Err(EmployeeRepositoryError::query("not primary")));

    let envelope = handlers(repo)
        .update(
            ANN_ID,
            &body(json!({
                "firstname": "Ann",
                "lastname": "Lee",
                "position": "Engineer",
                "age": 30,
            })),
        )
        .await;

    assert_eq!(envelope.status(), status::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.message(), "Error");
}

#[rstest]
#[tokio::test]
async fn update_maps_refetch_failure_to_internal_error() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_update().times(1).return_once(|_, _| Ok(1));
    repo.expect_find_one()
        .times(1)
        .return_once(|_| Err(EmployeeRepositoryError::decode("age is not an integer")));

    let envelope = handlers(repo)
        .update(
            ANN_ID,
            &body(json!({
                "firstname": "Ann",
                "lastname": "Lee",
                "position": "Engineer",
                "age": 30,
            })),
        )
        .await;

    assert_eq!(envelope.status(), status::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.message(), "Error");
}

#[rstest]
#[tokio::test]
async fn delete_confirms_removal() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_delete()
        .withf(|id| id.as_str() == ANN_ID)
        .times(1)
        .return_once(|_| Ok(1));

    let envelope = handlers(repo).delete(ANN_ID).await;

    assert_eq!(envelope.status(), status::OK);
    assert_eq!(envelope.message(), "Successfully Deleted");
    assert_eq!(
        envelope.payload(),
        &Payload::Deletion(DeletionOutcome::Deleted {
            result: DeleteCount { deleted_count: 1 },
            deleted: EmployeeId::new(ANN_ID),
        })
    );
}

#[rstest]
#[tokio::test]
async fn delete_of_unknown_id_warns_but_succeeds() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_delete().times(1).return_once(|_| Ok(0));

    let envelope = handlers(repo).delete("never-created").await;

    assert_eq!(envelope.status(), status::OK);
    assert_eq!(envelope.message(), "Warning Zero Deletion occured");
    assert_eq!(
        envelope.payload(),
        &Payload::Deletion(DeletionOutcome::NothingDeleted(DeleteCount {
            deleted_count: 0
        }))
    );
}

#[rstest]
#[tokio::test]
async fn delete_maps_store_failure_to_internal_error() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_delete()
        .times(1)
        .return_once(|_| Err(EmployeeRepositoryError::query("not primary")));

    let envelope = handlers(repo).delete(ANN_ID).await;

    assert_eq!(envelope.status(), status::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.message(), "Error");
}

#[rstest]
#[tokio::test]
async fn success_payload_keys_follow_driver_result_names() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Ok(EmployeeId::new(ANN_ID)));
    repo.expect_delete().times(1).return_once(|_| Ok(1));
    let handlers = handlers(repo);

    let created = serde_json::to_value(
        handlers
            .create(&body(json!({
                "firstname": "Ann",
                "lastname": "Lee",
                "position": "Engineer",
                "age": 30,
            })))
            .await,
    )
    .expect("envelope encodes");
    let deleted = serde_json::to_value(handlers.delete(ANN_ID).await).expect("envelope encodes");

    assert_eq!(created.pointer("/data/data"), Some(&json!({ "InsertedID": ANN_ID })));
    assert_eq!(
        deleted.pointer("/data/data"),
        Some(&json!({ "result": { "DeletedCount": 1 }, "deleted": ANN_ID }))
    );
}
