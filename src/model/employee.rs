use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "7f6b8c1e-2a4d-4e80-9b1f-3c5d6e7f8a90",
        "fullName": "Dana Levi",
        "position": "Site Engineer",
        "phone": "+972501234567",
        "email": "dana.levi@company.com",
        "employeeCode": "EMP-014",
        "hireDate": "2023-04-16",
        "isActive": true,
        "notes": null,
        "createdAt": "2024-01-01T08:00:00Z",
        "updatedAt": "2024-01-01T08:00:00Z"
    })
)]
pub struct Employee {
    #[schema(example = "7f6b8c1e-2a4d-4e80-9b1f-3c5d6e7f8a90")]
    pub id: String,

    #[schema(example = "Dana Levi")]
    pub full_name: String,

    #[schema(example = "Site Engineer")]
    pub position: String,

    #[schema(example = "+972501234567", nullable = true)]
    pub phone: Option<String>,

    #[schema(example = "dana.levi@company.com", nullable = true)]
    pub email: Option<String>,

    /// External employee identifier, free text.
    #[schema(example = "EMP-014", nullable = true)]
    pub employee_code: Option<String>,

    #[schema(example = "2023-04-16", value_type = String, format = "date")]
    pub hire_date: NaiveDate,

    #[schema(example = true)]
    pub is_active: bool,

    #[schema(nullable = true)]
    pub notes: Option<String>,

    #[schema(example = "2024-01-01T08:00:00Z", value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,

    #[schema(example = "2024-01-01T08:00:00Z", value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}
