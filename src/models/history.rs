//! Device history model
//!
//! One history document per device holding an append-only ordered entry
//! list. Stored entries keep the raw `projectId` reference; the read path
//! resolves it into an embedded project summary (see `services::history`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::HistoryChange;
use super::project::Timelapse;

/// One stored history entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub change: HistoryChange,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i32>,
}

/// Entry as submitted by a client; timestamp defaults to now
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewHistoryEntry {
    pub change: HistoryChange,
    pub timestamp: Option<DateTime<Utc>>,
    pub description: String,
    pub user_id: Option<i32>,
    pub project_id: Option<i32>,
}

/// History document for one device
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct History {
    pub id: i32,
    pub equipment_id: i32,
    #[schema(value_type = Vec<HistoryEntry>)]
    pub entries: Json<Vec<HistoryEntry>>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Append-or-create request: entries are appended to the device's document
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppendHistory {
    pub equipment_id: i32,
    pub history: Vec<NewHistoryEntry>,
}

/// Raw replacement of a history document's entry list (admin maintenance)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHistory {
    pub entries: Vec<HistoryEntry>,
}

/// Project summary embedded in a resolved history entry.
///
/// Values are the project's current fields, not a snapshot taken when the
/// entry was written.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timelapse: Option<Timelapse>,
}

/// Display-ready history entry with the project reference resolved
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHistoryEntry {
    pub change: HistoryChange,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
}

/// Display-ready history document
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHistory {
    pub id: i32,
    pub equipment_id: i32,
    pub entries: Vec<ResolvedHistoryEntry>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoriesResponse {
    pub success: bool,
    pub count: usize,
    pub histories: Vec<ResolvedHistory>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Option<ResolvedHistory>,
}

/// Envelope for append and raw-update writes (unresolved document)
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryDocumentResponse {
    pub success: bool,
    pub history: Option<History>,
}
