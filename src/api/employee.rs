use crate::{
    auth::auth::AuthUser,
    error::{ApiError, FieldError},
    model::{employee::Employee, role::Capability},
    utils::db_utils::{SqlValue, build_update_sql, execute_update},
};
use actix_web::{HttpResponse, web};
use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;
use utoipa::ToSchema;

// lightweight address check, full RFC validation is not worth it here
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,})+$").unwrap());

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    #[schema(example = "Dana Levi")]
    pub full_name: String,
    #[schema(example = "Site Engineer")]
    pub position: String,
    pub phone: Option<String>,
    #[schema(example = "dana.levi@company.com", format = "email")]
    pub email: Option<String>,
    #[schema(example = "EMP-014")]
    pub employee_code: Option<String>,
    #[schema(example = "2023-04-16", format = "date", value_type = String)]
    pub hire_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub employee_code: Option<String>,
    #[schema(example = "2023-04-16", format = "date", value_type = String)]
    pub hire_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

fn validate_email(email: &str, errors: &mut Vec<FieldError>) {
    if !EMAIL_RE.is_match(email) {
        errors.push(FieldError::new("email", "Please provide a valid email"));
    }
}

async fn fetch_employee(pool: &SqlitePool, id: &str) -> Result<Employee, ApiError> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ApiError::NotFound("Employee"))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employee records", body = [Employee]),
        (status = 401, description = "Unauthenticated"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn list_employees(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::ReadEmployees)?;

    let employees =
        sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY full_name")
            .fetch_all(pool.get_ref())
            .await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// List active employees
#[utoipa::path(
    get,
    path = "/api/employees/active",
    responses(
        (status = 200, description = "Active employee records", body = [Employee]),
        (status = 401, description = "Unauthenticated"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn list_active_employees(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::ReadEmployees)?;

    let employees = sqlx::query_as::<_, Employee>(
        "SELECT * FROM employees WHERE is_active = 1 ORDER BY full_name",
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn get_employee(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::ReadEmployees)?;

    let employee = fetch_employee(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Create employee (managers only)
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn create_employee(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::ManageEmployees)?;

    let mut errors = Vec::new();
    let full_name = trimmed(&payload.full_name);
    let position = trimmed(&payload.position);
    if full_name.is_empty() {
        errors.push(FieldError::new("fullName", "Full name is required"));
    }
    if position.is_empty() {
        errors.push(FieldError::new("position", "Position is required"));
    }
    let email = payload
        .email
        .as_deref()
        .map(|e| trimmed(e).to_lowercase())
        .filter(|e| !e.is_empty());
    if let Some(e) = &email {
        validate_email(e, &mut errors);
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let now = Utc::now();
    let employee = Employee {
        id: Uuid::new_v4().to_string(),
        full_name,
        position,
        phone: payload.phone.as_deref().map(trimmed),
        email,
        employee_code: payload.employee_code.as_deref().map(trimmed),
        hire_date: payload.hire_date.unwrap_or_else(|| now.date_naive()),
        is_active: payload.is_active.unwrap_or(true),
        notes: payload.notes.as_deref().map(trimmed),
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO employees
        (id, full_name, position, phone, email, employee_code, hire_date, is_active, notes, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&employee.id)
    .bind(&employee.full_name)
    .bind(&employee.position)
    .bind(&employee.phone)
    .bind(&employee.email)
    .bind(&employee.employee_code)
    .bind(employee.hire_date)
    .bind(employee.is_active)
    .bind(&employee.notes)
    .bind(employee.created_at)
    .bind(employee.updated_at)
    .execute(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(employee))
}

/// Update employee (managers only, partial)
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee ID")),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Employee not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn update_employee(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    payload: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::ManageEmployees)?;
    let employee_id = path.into_inner();

    let mut errors = Vec::new();
    let mut sets: Vec<(&'static str, SqlValue)> = Vec::new();

    if let Some(name) = &payload.full_name {
        let name = trimmed(name);
        if name.is_empty() {
            errors.push(FieldError::new("fullName", "Full name cannot be empty"));
        } else {
            sets.push(("full_name", SqlValue::String(name)));
        }
    }
    if let Some(position) = &payload.position {
        let position = trimmed(position);
        if position.is_empty() {
            errors.push(FieldError::new("position", "Position cannot be empty"));
        } else {
            sets.push(("position", SqlValue::String(position)));
        }
    }
    if let Some(phone) = &payload.phone {
        sets.push(("phone", SqlValue::String(trimmed(phone))));
    }
    if let Some(email) = &payload.email {
        let email = trimmed(email).to_lowercase();
        validate_email(&email, &mut errors);
        sets.push(("email", SqlValue::String(email)));
    }
    if let Some(code) = &payload.employee_code {
        sets.push(("employee_code", SqlValue::String(trimmed(code))));
    }
    if let Some(hire_date) = payload.hire_date {
        sets.push(("hire_date", SqlValue::Date(hire_date)));
    }
    if let Some(is_active) = payload.is_active {
        sets.push(("is_active", SqlValue::Bool(is_active)));
    }
    if let Some(notes) = &payload.notes {
        sets.push(("notes", SqlValue::String(trimmed(notes))));
    }

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    if sets.is_empty() {
        return Err(ApiError::Validation(vec![FieldError::new(
            "body",
            "No fields provided for update",
        )]));
    }
    sets.push(("updated_at", SqlValue::Timestamp(Utc::now())));

    let update = build_update_sql("employees", sets, "id", &employee_id);
    let affected = execute_update(pool.get_ref(), update).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Employee"));
    }

    let employee = fetch_employee(pool.get_ref(), &employee_id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete employee (managers only)
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "Employee not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn delete_employee(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::ManageEmployees)?;

    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(path.into_inner())
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Employee"));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Employee deleted successfully" })))
}

/// Toggle employee active flag (managers only)
#[utoipa::path(
    patch,
    path = "/api/employees/{id}/toggle-status",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Flag flipped", body = Object, example = json!({
            "id": "7f6b8c1e-2a4d-4e80-9b1f-3c5d6e7f8a90",
            "isActive": false,
            "message": "Employee deactivated successfully"
        })),
        (status = 404, description = "Employee not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn toggle_employee_status(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::ManageEmployees)?;
    let employee_id = path.into_inner();

    let employee = fetch_employee(pool.get_ref(), &employee_id).await?;
    let is_active = !employee.is_active;

    sqlx::query("UPDATE employees SET is_active = ?, updated_at = ? WHERE id = ?")
        .bind(is_active)
        .bind(Utc::now())
        .bind(&employee_id)
        .execute(pool.get_ref())
        .await?;

    let message = if is_active {
        "Employee activated successfully"
    } else {
        "Employee deactivated successfully"
    };
    Ok(HttpResponse::Ok().json(json!({
        "id": employee_id,
        "isActive": is_active,
        "message": message,
    })))
}
