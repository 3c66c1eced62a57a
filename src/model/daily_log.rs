use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    DeliveryNote,
    Receipt,
    Invoice,
    Other,
}

/// Stored reference to an uploaded document, as returned by the external
/// file-storage service. Embedded in the log as data, never interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[schema(example = "uploads/2024/01/certificate-0042.pdf")]
    pub path: String,
    #[schema(example = "certificate.pdf")]
    pub original_name: String,
    #[serde(rename = "type")]
    pub doc_type: DocType,
    #[schema(example = "2024-01-10T09:30:00Z", value_type = String, format = "date-time")]
    pub uploaded_at: DateTime<Utc>,
}

/// Log lifecycle state. Approval data lives inside the `Approved` variant, so
/// an approved-but-unattributed record cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum LogState {
    Draft,
    Submitted,
    Approved {
        approved_by: String,
        approved_at: DateTime<Utc>,
    },
}

#[derive(Debug, thiserror::Error)]
#[error("inconsistent log state columns: {0}")]
pub struct StateError(String);

impl LogState {
    pub fn status_str(&self) -> &'static str {
        match self {
            LogState::Draft => "draft",
            LogState::Submitted => "submitted",
            LogState::Approved { .. } => "approved",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, LogState::Approved { .. })
    }

    /// Rebuilds the variant from the three persisted columns, rejecting rows
    /// where the approver fields disagree with the status.
    pub fn from_columns(
        status: &str,
        approved_by: Option<String>,
        approved_at: Option<DateTime<Utc>>,
    ) -> Result<Self, StateError> {
        match (status, approved_by, approved_at) {
            ("draft", None, None) => Ok(LogState::Draft),
            ("submitted", None, None) => Ok(LogState::Submitted),
            ("approved", Some(by), Some(at)) => Ok(LogState::Approved {
                approved_by: by,
                approved_at: at,
            }),
            (status, by, at) => Err(StateError(format!(
                "status={status:?} approved_by={by:?} approved_at={at:?}"
            ))),
        }
    }
}

pub fn is_valid_status(s: &str) -> bool {
    matches!(s, "draft" | "submitted" | "approved")
}

// Flattened into the log JSON as status/approvedBy/approvedAt.
impl Serialize for LogState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("status", self.status_str())?;
        if let LogState::Approved {
            approved_by,
            approved_at,
        } = self
        {
            map.serialize_entry("approvedBy", approved_by)?;
            map.serialize_entry("approvedAt", approved_at)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub id: String,
    pub date: NaiveDate,
    pub project: String,
    /// Employee names as entered on the form, not references to the directory.
    pub employees: Vec<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub work_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(flatten)]
    pub state: LogState,
    pub team_leader: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for DailyLog {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let employees_json: String = row.try_get("employees")?;
        let employees = serde_json::from_str(&employees_json).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "employees".into(),
                source: Box::new(e),
            }
        })?;

        let attachment = match row.try_get::<Option<String>, _>("attachment")? {
            Some(json) => {
                Some(
                    serde_json::from_str(&json).map_err(|e| sqlx::Error::ColumnDecode {
                        index: "attachment".into(),
                        source: Box::new(e),
                    })?,
                )
            }
            None => None,
        };

        let status: String = row.try_get("status")?;
        let state = LogState::from_columns(
            &status,
            row.try_get("approved_by")?,
            row.try_get("approved_at")?,
        )
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".into(),
            source: Box::new(e),
        })?;

        Ok(DailyLog {
            id: row.try_get("id")?,
            date: row.try_get("date")?,
            project: row.try_get("project")?,
            employees,
            start_time: row.try_get("start_time")?,
            end_time: row.try_get("end_time")?,
            work_description: row.try_get("work_description")?,
            attachment,
            state,
            team_leader: row.try_get("team_leader")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
