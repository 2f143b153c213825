//! Shared domain enums
//!
//! Every status field the original data model kept as a free string is a
//! closed enum here, stored as TEXT and decoded through these types so that
//! handlers match exhaustively instead of comparing strings.

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

macro_rules! text_enum_sqlx {
    ($ty:ty) => {
        impl sqlx::Type<Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<Postgres>>::type_info()
            }
        }

        impl<'r> Decode<'r, Postgres> for $ty {
            fn decode(
                value: sqlx::postgres::PgValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let s: String = Decode::<Postgres>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl Encode<'_, Postgres> for $ty {
            fn encode_by_ref(
                &self,
                buf: &mut sqlx::postgres::PgArgumentBuffer,
            ) -> sqlx::encode::IsNull {
                let s: String = self.as_str().to_string();
                <String as Encode<Postgres>>::encode(s, buf)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// DeviceStatus
// ---------------------------------------------------------------------------

/// Availability of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DeviceStatus {
    Available,
    InUse,
    Maintenance,
    Broken,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Available => "available",
            DeviceStatus::InUse => "inUse",
            DeviceStatus::Maintenance => "maintenance",
            DeviceStatus::Broken => "broken",
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeviceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(DeviceStatus::Available),
            "inUse" => Ok(DeviceStatus::InUse),
            "maintenance" => Ok(DeviceStatus::Maintenance),
            "broken" => Ok(DeviceStatus::Broken),
            _ => Err(format!("Invalid device status: {}", s)),
        }
    }
}

text_enum_sqlx!(DeviceStatus);

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Progress of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "notStarted",
            ProjectStatus::InProgress => "inProgress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notStarted" => Ok(ProjectStatus::NotStarted),
            "inProgress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            "cancelled" => Ok(ProjectStatus::Cancelled),
            _ => Err(format!("Invalid project status: {}", s)),
        }
    }
}

text_enum_sqlx!(ProjectStatus);

// ---------------------------------------------------------------------------
// InquiryStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a project inquiry
///
/// Transitions only move forward: Unconfirmed -> Pending via token
/// confirmation, Pending -> Accepted | Rejected via admin decision.
/// Accepted and Rejected are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum InquiryStatus {
    Unconfirmed,
    Pending,
    Accepted,
    Rejected,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::Unconfirmed => "unconfirmed",
            InquiryStatus::Pending => "pending",
            InquiryStatus::Accepted => "accepted",
            InquiryStatus::Rejected => "rejected",
        }
    }

    /// Whether an admin decision (accept/reject) may be applied
    pub fn can_decide(&self) -> bool {
        matches!(self, InquiryStatus::Pending)
    }

    /// Whether this state accepts no further transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, InquiryStatus::Accepted | InquiryStatus::Rejected)
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unconfirmed" => Ok(InquiryStatus::Unconfirmed),
            "pending" => Ok(InquiryStatus::Pending),
            "accepted" => Ok(InquiryStatus::Accepted),
            "rejected" => Ok(InquiryStatus::Rejected),
            _ => Err(format!("Invalid inquiry status: {}", s)),
        }
    }
}

text_enum_sqlx!(InquiryStatus);

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Administrative role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::SuperAdmin => "superAdmin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "superAdmin" => Ok(UserRole::SuperAdmin),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

text_enum_sqlx!(UserRole);

// ---------------------------------------------------------------------------
// HistoryChange
// ---------------------------------------------------------------------------

/// Kind of event recorded in a device history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum HistoryChange {
    Created,
    Updated,
    UsedInProject,
}

impl HistoryChange {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryChange::Created => "created",
            HistoryChange::Updated => "updated",
            HistoryChange::UsedInProject => "usedInProject",
        }
    }
}

impl std::fmt::Display for HistoryChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_transitions() {
        assert!(!InquiryStatus::Unconfirmed.can_decide());
        assert!(InquiryStatus::Pending.can_decide());
        assert!(!InquiryStatus::Accepted.can_decide());
        assert!(InquiryStatus::Accepted.is_terminal());
        assert!(InquiryStatus::Rejected.is_terminal());
        assert!(!InquiryStatus::Pending.is_terminal());
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["available", "inUse", "maintenance", "broken"] {
            let parsed: DeviceStatus = s.parse().unwrap();
            assert_eq!(parsed.as_str(), s);
        }
        assert!("Available".parse::<DeviceStatus>().is_err());
    }
}
