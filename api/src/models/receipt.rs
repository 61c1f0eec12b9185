//! Write acknowledgements returned to clients, shaped like the driver
//! results the frontend already consumes.

use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertReceipt {
    pub acknowledged: bool,
    pub inserted_id: Bson,
}

impl From<InsertOneResult> for InsertReceipt {
    fn from(result: InsertOneResult) -> Self {
        InsertReceipt {
            acknowledged: true,
            inserted_id: result.inserted_id,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReceipt {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<Bson>,
}

impl From<UpdateResult> for UpdateReceipt {
    fn from(result: UpdateResult) -> Self {
        UpdateReceipt {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(result.upserted_id.is_some()),
            upserted_id: result.upserted_id,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReceipt {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteReceipt {
    fn from(result: DeleteResult) -> Self {
        DeleteReceipt {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}
