//! BSON shape of a stored employee.
//!
//! This type is an implementation detail of the MongoDB adapter and never
//! leaves the persistence layer.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

use crate::domain::{EmployeeDraft, EmployeeId, EmployeeRecord};

/// Employee document keyed by its store-generated `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct EmployeeDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub firstname: String,
    pub lastname: String,
    pub position: String,
    pub age: i64,
}

impl EmployeeDocument {
    pub(crate) fn new(id: ObjectId, draft: &EmployeeDraft) -> Self {
        Self {
            id,
            firstname: draft.firstname.clone(),
            lastname: draft.lastname.clone(),
            position: draft.position.clone(),
            age: draft.age,
        }
    }

    pub(crate) fn into_record(self) -> EmployeeRecord {
        let Self {
            id,
            firstname,
            lastname,
            position,
            age,
        } = self;
        EmployeeRecord::from_parts(
            EmployeeId::new(id.to_hex()),
            EmployeeDraft {
                firstname,
                lastname,
                position,
                age,
            },
        )
    }
}

/// `$set` update replacing the four business fields.
pub(crate) fn business_fields_update(draft: &EmployeeDraft) -> Document {
    doc! {
        "$set": {
            "firstname": draft.firstname.as_str(),
            "lastname": draft.lastname.as_str(),
            "position": draft.position.as_str(),
            "age": draft.age,
        }
    }
}
