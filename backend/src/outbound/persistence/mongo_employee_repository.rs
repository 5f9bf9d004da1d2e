//! MongoDB-backed implementation of the `EmployeeRepository` port.
//!
//! Every operation runs inside its own `tokio::time::timeout` scope; dropping
//! or timing out one request's future cancels only that request's work.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::error::{Error as DriverError, ErrorKind};
use tracing::debug;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{EmployeeDraft, EmployeeId, EmployeeRecord};

use super::employee_document::{EmployeeDocument, business_fields_update};
use super::store_client::{StoreClient, millis};

/// Employee repository over a MongoDB collection.
#[derive(Clone)]
pub struct MongoEmployeeRepository {
    collection: Collection<EmployeeDocument>,
    budget: Duration,
}

impl MongoEmployeeRepository {
    /// Bind the repository to the client's configured collection and budget.
    pub fn new(client: &StoreClient) -> Self {
        Self {
            collection: client.employees(),
            budget: client.config().operation_timeout(),
        }
    }

    async fn bounded<T, F>(
        &self,
        operation: &'static str,
        work: F,
    ) -> Result<T, EmployeeRepositoryError>
    where
        F: Future<Output = Result<T, DriverError>>,
    {
        tokio::time::timeout(self.budget, work)
            .await
            .map_err(|_| EmployeeRepositoryError::timeout(operation, millis(self.budget)))?
            .map_err(|err| map_driver_error(operation, err))
    }
}

/// Filter selecting the employee with the given identifier.
///
/// Identifiers that are not valid ObjectId hex fall back to the all-zero
/// ObjectId, which never matches a generated `_id`; the caller then sees
/// "no match" rather than a distinct parse failure.
fn id_filter(id: &EmployeeId) -> Document {
    let object_id = ObjectId::parse_str(id.as_str()).unwrap_or_else(|err| {
        debug!(employee_id = %id, error = %err, "identifier is not an ObjectId; matching nothing");
        ObjectId::from_bytes([0; 12])
    });
    doc! { "_id": object_id }
}

fn map_driver_error(operation: &'static str, error: DriverError) -> EmployeeRepositoryError {
    debug!(operation, error = %error, "document store operation failed");
    let message = error.to_string();
    match *error.kind {
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            EmployeeRepositoryError::decode(message)
        }
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => EmployeeRepositoryError::connection(message),
        _ => EmployeeRepositoryError::query(message),
    }
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    async fn insert(&self, draft: &EmployeeDraft) -> Result<EmployeeId, EmployeeRepositoryError> {
        let document = EmployeeDocument::new(ObjectId::new(), draft);
        let id = EmployeeId::new(document.id.to_hex());
        self.bounded("insert", async {
            self.collection.insert_one(&document).await
        })
        .await?;
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, EmployeeRepositoryError> {
        let documents: Vec<EmployeeDocument> = self
            .bounded("find_all", async {
                // The cursor is killed when dropped, whether drained or not.
                let cursor = self.collection.find(doc! {}).await?;
                cursor.try_collect::<Vec<EmployeeDocument>>().await
            })
            .await?;
        Ok(documents
            .into_iter()
            .map(EmployeeDocument::into_record)
            .collect())
    }

    async fn find_one(&self, id: &EmployeeId) -> Result<EmployeeRecord, EmployeeRepositoryError> {
        let filter = id_filter(id);
        self.bounded("find_one", async { self.collection.find_one(filter).await })
            .await?
            .map(EmployeeDocument::into_record)
            .ok_or_else(|| EmployeeRepositoryError::not_found(id.as_str()))
    }

    async fn update(
        &self,
        id: &EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<u64, EmployeeRepositoryError> {
        let filter = id_filter(id);
        let update = business_fields_update(draft);
        let result = self
            .bounded("update", async {
                self.collection.update_one(filter, update).await
            })
            .await?;
        Ok(result.matched_count)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<u64, EmployeeRepositoryError> {
        let filter = id_filter(id);
        let result = self
            .bounded("delete", async { self.collection.delete_one(filter).await })
            .await?;
        Ok(result.deleted_count)
    }
}
