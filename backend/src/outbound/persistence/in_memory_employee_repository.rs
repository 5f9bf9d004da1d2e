//! In-memory implementation of the `EmployeeRepository` port.
//!
//! Mirrors the MongoDB adapter's observable contract (hex identifiers,
//! not-found as an error, match and delete counts) without any I/O. Used by
//! the HTTP integration suite and handy for local runs.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{EmployeeDraft, EmployeeId, EmployeeRecord};

/// Employee store held in a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: Mutex<HashMap<EmployeeId, EmployeeDraft>>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn records(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<EmployeeId, EmployeeDraft>>, EmployeeRepositoryError> {
        self.records
            .lock()
            .map_err(|_| EmployeeRepositoryError::connection("in-memory store lock poisoned"))
    }
}

fn generate_id() -> EmployeeId {
    // 24 hex characters, the same width as an ObjectId.
    let hex = Uuid::new_v4().simple().to_string();
    EmployeeId::new(hex.get(..24).unwrap_or(&hex))
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, draft: &EmployeeDraft) -> Result<EmployeeId, EmployeeRepositoryError> {
        let mut records = self.records()?;
        let id = generate_id();
        records.insert(id.clone(), draft.clone());
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, EmployeeRepositoryError> {
        let records = self.records()?;
        Ok(records
            .iter()
            .map(|(id, draft)| EmployeeRecord::from_parts(id.clone(), draft.clone()))
            .collect())
    }

    async fn find_one(&self, id: &EmployeeId) -> Result<EmployeeRecord, EmployeeRepositoryError> {
        let records = self.records()?;
        records
            .get(id)
            .map(|draft| EmployeeRecord::from_parts(id.clone(), draft.clone()))
            .ok_or_else(|| EmployeeRepositoryError::not_found(id.as_str()))
    }

    async fn update(
        &self,
        id: &EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<u64, EmployeeRepositoryError> {
        let mut records = self.records()?;
        Ok(records.get_mut(id).map_or(0, |stored| {
            *stored = draft.clone();
            1
        }))
    }

    async fn delete(&self, id: &EmployeeId) -> Result<u64, EmployeeRepositoryError> {
        let mut records = self.records()?;
        Ok(u64::from(records.remove(id).is_some()))
    }
}
