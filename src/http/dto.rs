//! Response bodies that are not planner types.

use serde::{Deserialize, Serialize};

use crate::scheduler::ItemCount;

/// `GET /health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `"connected"`, `"disconnected"`, or `"error: ..."`.
    pub repository: String,
}

/// `GET /v1/program/item-counts` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCountsResponse {
    pub counts: Vec<ItemCount>,
    /// Registrations counted.
    pub total_items: usize,
}
