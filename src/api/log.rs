use crate::{
    auth::auth::AuthUser,
    error::{ApiError, FieldError},
    model::{
        daily_log::{Attachment, DailyLog, LogState, is_valid_status},
        role::Capability,
    },
    notify::{Event, Notifier},
    utils::db_utils::{SqlValue, build_update_sql, execute_update},
};
use actix_web::{HttpResponse, web};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLog {
    #[schema(example = "2024-01-10", format = "date", value_type = String)]
    pub date: Option<NaiveDate>,
    #[schema(example = "Site A")]
    pub project: Option<String>,
    #[schema(example = json!(["Dana"]))]
    pub employees: Option<Vec<String>>,
    #[schema(example = "2024-01-10T08:00:00", value_type = String)]
    pub start_time: Option<NaiveDateTime>,
    #[schema(example = "2024-01-10T17:00:00", value_type = String)]
    pub end_time: Option<NaiveDateTime>,
    #[schema(example = "Poured foundation")]
    pub work_description: Option<String>,
    pub attachment: Option<Attachment>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLog {
    #[schema(example = "2024-01-10", format = "date", value_type = String)]
    pub date: Option<NaiveDate>,
    pub project: Option<String>,
    pub employees: Option<Vec<String>>,
    #[schema(example = "2024-01-10T08:00:00", value_type = String)]
    pub start_time: Option<NaiveDateTime>,
    #[schema(example = "2024-01-10T17:00:00", value_type = String)]
    pub end_time: Option<NaiveDateTime>,
    pub work_description: Option<String>,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogFilter {
    /// Inclusive lower bound on the log date
    #[param(example = "2024-01-01", value_type = String)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the log date
    #[param(example = "2024-01-31", value_type = String)]
    pub end_date: Option<NaiveDate>,
    /// Exact project name
    pub project: Option<String>,
    /// draft | submitted | approved
    pub status: Option<String>,
    /// Owning team leader (ignored for team-leader callers)
    pub team_leader: Option<String>,
    /// Case-insensitive substring over the work description
    pub search_term: Option<String>,
}

// Helper enum for typed SQLx binding
enum FilterValue {
    Str(String),
    Date(NaiveDate),
}

async fn fetch_log(pool: &SqlitePool, id: &str) -> Result<DailyLog, ApiError> {
    sqlx::query_as::<_, DailyLog>("SELECT * FROM daily_logs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ApiError::NotFound("Log"))
}

/// Finds a non-deleted log matching the (team leader, date, trimmed project)
/// composite key, optionally ignoring one log id.
async fn find_duplicate(
    pool: &SqlitePool,
    team_leader: &str,
    date: NaiveDate,
    project: &str,
    exclude_id: Option<&str>,
) -> Result<Option<String>, ApiError> {
    let existing = sqlx::query_scalar::<_, String>(
        "SELECT id FROM daily_logs WHERE team_leader = ? AND date = ? AND project = ? \
         AND id != ?",
    )
    .bind(team_leader)
    .bind(date)
    .bind(project)
    .bind(exclude_id.unwrap_or(""))
    .fetch_optional(pool)
    .await?;
    Ok(existing)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|d| d.is_unique_violation())
}

// `%` and `_` in a search term are literal characters, not wildcards
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/* =========================
List logs (filtered)
========================= */
#[utoipa::path(
    get,
    path = "/api/logs",
    params(LogFilter),
    responses(
        (status = 200, description = "Logs matching the filters, newest date first"),
        (status = 401, description = "Unauthenticated"),
    ),
    security(("bearer_auth" = [])),
    tag = "Logs"
)]
pub async fn list_logs(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    query: web::Query<LogFilter>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::ReadLogs)?;

    if let Some(status) = query.status.as_deref() {
        if !is_valid_status(status) {
            return Err(ApiError::Validation(vec![FieldError::new(
                "status",
                "Status must be one of draft, submitted, approved",
            )]));
        }
    }

    let mut conditions: Vec<&str> = Vec::new();
    let mut bindings: Vec<FilterValue> = Vec::new();

    if let Some(start) = query.start_date {
        conditions.push("date >= ?");
        bindings.push(FilterValue::Date(start));
    }
    if let Some(end) = query.end_date {
        conditions.push("date <= ?");
        bindings.push(FilterValue::Date(end));
    }
    if let Some(project) = &query.project {
        conditions.push("project = ?");
        bindings.push(FilterValue::Str(project.clone()));
    }
    if let Some(status) = &query.status {
        conditions.push("status = ?");
        bindings.push(FilterValue::Str(status.clone()));
    }
    // a team leader can never list another leader's logs
    if let Some(owner) = auth.scoped_owner(query.team_leader.clone()) {
        conditions.push("team_leader = ?");
        bindings.push(FilterValue::Str(owner));
    }
    if let Some(term) = &query.search_term {
        conditions.push(r"LOWER(work_description) LIKE ? ESCAPE '\'");
        bindings.push(FilterValue::Str(format!(
            "%{}%",
            escape_like(&term.to_lowercase())
        )));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    let sql = format!(
        "SELECT * FROM daily_logs {} ORDER BY date DESC, created_at DESC",
        where_clause
    );

    let mut data_query = sqlx::query_as::<_, DailyLog>(&sql);
    for b in bindings {
        data_query = match b {
            FilterValue::Str(v) => data_query.bind(v),
            FilterValue::Date(v) => data_query.bind(v),
        };
    }

    let logs = data_query.fetch_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(logs))
}

/* =========================
My logs (team leader shortcut)
========================= */
#[utoipa::path(
    get,
    path = "/api/logs/team-leader",
    responses(
        (status = 200, description = "Logs owned by the calling team leader"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Logs"
)]
pub async fn my_logs(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::WriteOwnLogs)?;

    let logs = sqlx::query_as::<_, DailyLog>(
        "SELECT * FROM daily_logs WHERE team_leader = ? ORDER BY date DESC, created_at DESC",
    )
    .bind(&auth.actor_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(logs))
}

/* =========================
Get log by id
========================= */
#[utoipa::path(
    get,
    path = "/api/logs/{id}",
    params(("id" = String, Path, description = "Log ID")),
    responses(
        (status = 200, description = "Log found"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Log not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Logs"
)]
pub async fn get_log(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let log = fetch_log(pool.get_ref(), &path.into_inner()).await?;
    auth.require_owned(Capability::ReadLogs, &log.team_leader)?;
    Ok(HttpResponse::Ok().json(log))
}

/* =========================
Create log (team leaders only)
========================= */
#[utoipa::path(
    post,
    path = "/api/logs",
    request_body = CreateLog,
    responses(
        (status = 201, description = "Log created in draft"),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Duplicate (team leader, date, project)"),
    ),
    security(("bearer_auth" = [])),
    tag = "Logs"
)]
pub async fn create_log(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    notifier: web::Data<Notifier>,
    payload: web::Json<CreateLog>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::WriteOwnLogs)?;

    let mut errors = Vec::new();

    let project = payload
        .project
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());
    if project.is_none() {
        errors.push(FieldError::new("project", "Project name is required"));
    }

    let employees: Vec<String> = payload
        .employees
        .iter()
        .flatten()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect();
    if employees.is_empty() {
        errors.push(FieldError::new(
            "employees",
            "At least one employee is required",
        ));
    }

    let work_description = payload
        .work_description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    if work_description.is_none() {
        errors.push(FieldError::new(
            "workDescription",
            "Work description is required",
        ));
    }

    if payload.date.is_none() {
        errors.push(FieldError::new("date", "Valid date is required"));
    }
    if payload.start_time.is_none() {
        errors.push(FieldError::new("startTime", "Valid start time is required"));
    }
    if payload.end_time.is_none() {
        errors.push(FieldError::new("endTime", "Valid end time is required"));
    }
    if let (Some(start), Some(end)) = (payload.start_time, payload.end_time) {
        if end <= start {
            errors.push(FieldError::new(
                "endTime",
                "End time must be after start time",
            ));
        }
    }

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let date = payload.date.unwrap();
    let project = project.unwrap().to_string();

    if let Some(existing_log_id) =
        find_duplicate(pool.get_ref(), &auth.actor_id, date, &project, None).await?
    {
        // best effort, must never fail the rejection response
        notifier.emit(Event::DuplicateLog {
            recipient: auth.actor_id.clone(),
            date,
            project,
        });
        return Err(ApiError::DuplicateLog { existing_log_id });
    }

    let now = Utc::now();
    let log = DailyLog {
        id: Uuid::new_v4().to_string(),
        date,
        project,
        employees,
        start_time: payload.start_time.unwrap(),
        end_time: payload.end_time.unwrap(),
        work_description: work_description.unwrap().to_string(),
        attachment: payload.attachment.clone(),
        state: LogState::Draft,
        team_leader: auth.actor_id.clone(),
        created_at: now,
        updated_at: now,
    };

    let employees_json = serde_json::to_string(&log.employees).unwrap_or_else(|_| "[]".into());
    let attachment_json = log
        .attachment
        .as_ref()
        .and_then(|a| serde_json::to_string(a).ok());

    let result = sqlx::query(
        r#"
        INSERT INTO daily_logs
        (id, date, project, employees, start_time, end_time, work_description,
         attachment, status, team_leader, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&log.id)
    .bind(log.date)
    .bind(&log.project)
    .bind(employees_json)
    .bind(log.start_time)
    .bind(log.end_time)
    .bind(&log.work_description)
    .bind(attachment_json)
    .bind(log.state.status_str())
    .bind(&log.team_leader)
    .bind(log.created_at)
    .bind(log.updated_at)
    .execute(pool.get_ref())
    .await;

    if let Err(e) = result {
        // lost the race against a concurrent create on the same composite key
        if is_unique_violation(&e) {
            return Err(ApiError::DuplicateLog {
                existing_log_id: String::new(),
            });
        }
        return Err(e.into());
    }

    Ok(HttpResponse::Created().json(log))
}

/* =========================
Update log (owner, non-approved)
========================= */
#[utoipa::path(
    put,
    path = "/api/logs/{id}",
    params(("id" = String, Path, description = "Log ID")),
    request_body = UpdateLog,
    responses(
        (status = 200, description = "Log updated"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Log not found"),
        (status = 409, description = "Log is approved and locked"),
    ),
    security(("bearer_auth" = [])),
    tag = "Logs"
)]
pub async fn update_log(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    payload: web::Json<UpdateLog>,
) -> Result<HttpResponse, ApiError> {
    let log_id = path.into_inner();
    let log = fetch_log(pool.get_ref(), &log_id).await?;

    auth.require_owned(Capability::WriteOwnLogs, &log.team_leader)?;
    if log.state.is_approved() {
        return Err(ApiError::LogLocked);
    }

    let mut errors = Vec::new();
    let mut sets: Vec<(&'static str, SqlValue)> = Vec::new();

    if let Some(date) = payload.date {
        sets.push(("date", SqlValue::Date(date)));
    }

    let mut project = log.project.clone();
    if let Some(p) = &payload.project {
        let p = p.trim();
        if p.is_empty() {
            errors.push(FieldError::new("project", "Project name cannot be empty"));
        } else {
            project = p.to_string();
            sets.push(("project", SqlValue::String(project.clone())));
        }
    }

    if let Some(employees) = &payload.employees {
        let employees: Vec<String> = employees
            .iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if employees.is_empty() {
            errors.push(FieldError::new(
                "employees",
                "At least one employee is required",
            ));
        } else {
            let json = serde_json::to_string(&employees).unwrap_or_else(|_| "[]".into());
            sets.push(("employees", SqlValue::String(json)));
        }
    }

    // the end-after-start invariant holds over the merged bounds
    let start = payload.start_time.unwrap_or(log.start_time);
    let end = payload.end_time.unwrap_or(log.end_time);
    if (payload.start_time.is_some() || payload.end_time.is_some()) && end <= start {
        errors.push(FieldError::new(
            "endTime",
            "End time must be after start time",
        ));
    } else {
        if let Some(start) = payload.start_time {
            sets.push(("start_time", SqlValue::DateTime(start)));
        }
        if let Some(end) = payload.end_time {
            sets.push(("end_time", SqlValue::DateTime(end)));
        }
    }

    if let Some(desc) = &payload.work_description {
        let desc = desc.trim();
        if desc.is_empty() {
            errors.push(FieldError::new(
                "workDescription",
                "Work description cannot be empty",
            ));
        } else {
            sets.push(("work_description", SqlValue::String(desc.to_string())));
        }
    }

    if let Some(attachment) = &payload.attachment {
        match serde_json::to_string(attachment) {
            Ok(json) => sets.push(("attachment", SqlValue::String(json))),
            Err(_) => errors.push(FieldError::new("attachment", "Invalid attachment")),
        }
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

    // moving the log onto another (date, project) must not collide
    let date = payload.date.unwrap_or(log.date);
    if payload.date.is_some() || payload.project.is_some() {
        if let Some(existing_log_id) = find_duplicate(
            pool.get_ref(),
            &log.team_leader,
            date,
            &project,
            Some(log_id.as_str()),
        )
        .await?
        {
            return Err(ApiError::DuplicateLog { existing_log_id });
        }
    }

    sets.push(("updated_at", SqlValue::Timestamp(Utc::now())));

    let update = build_update_sql("daily_logs", sets, "id", &log_id);
    if let Err(e) = execute_update(pool.get_ref(), update).await {
        // lost the race against a concurrent write onto the same composite key
        if is_unique_violation(&e) {
            return Err(ApiError::DuplicateLog {
                existing_log_id: String::new(),
            });
        }
        return Err(e.into());
    }

    let updated = fetch_log(pool.get_ref(), &log_id).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/* =========================
Submit log (owner, draft only)
========================= */
#[utoipa::path(
    patch,
    path = "/api/logs/{id}/submit",
    params(("id" = String, Path, description = "Log ID")),
    responses(
        (status = 200, description = "Log submitted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Log not found"),
        (status = 409, description = "Log is not in draft"),
    ),
    security(("bearer_auth" = [])),
    tag = "Logs"
)]
pub async fn submit_log(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let log_id = path.into_inner();
    let log = fetch_log(pool.get_ref(), &log_id).await?;

    auth.require_owned(Capability::WriteOwnLogs, &log.team_leader)?;
    if log.state != LogState::Draft {
        return Err(ApiError::InvalidTransition {
            current: log.state.status_str().to_string(),
        });
    }

    let result = sqlx::query(
        "UPDATE daily_logs SET status = 'submitted', updated_at = ? \
         WHERE id = ? AND status = 'draft'",
    )
    .bind(Utc::now())
    .bind(&log_id)
    .execute(pool.get_ref())
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::InvalidTransition {
            current: log.state.status_str().to_string(),
        });
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Log submitted successfully",
        "id": log_id,
        "status": "submitted",
    })))
}

/* =========================
Approve log (managers only, submitted only)
========================= */
#[utoipa::path(
    patch,
    path = "/api/logs/{id}/approve",
    params(("id" = String, Path, description = "Log ID")),
    responses(
        (status = 200, description = "Log approved"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Log not found"),
        (status = 409, description = "Log is not submitted"),
    ),
    security(("bearer_auth" = [])),
    tag = "Logs"
)]
pub async fn approve_log(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    notifier: web::Data<Notifier>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    auth.require(Capability::ApproveLogs)?;

    let log_id = path.into_inner();
    let log = fetch_log(pool.get_ref(), &log_id).await?;
    if log.state != LogState::Submitted {
        return Err(ApiError::InvalidTransition {
            current: log.state.status_str().to_string(),
        });
    }

    // status flip and approver attribution land in one guarded write
    let result = sqlx::query(
        "UPDATE daily_logs SET status = 'approved', approved_by = ?, approved_at = ?, \
         updated_at = ? WHERE id = ? AND status = 'submitted'",
    )
    .bind(&auth.actor_id)
    .bind(Utc::now())
    .bind(Utc::now())
    .bind(&log_id)
    .execute(pool.get_ref())
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::InvalidTransition {
            current: log.state.status_str().to_string(),
        });
    }

    notifier.emit(Event::LogApproved {
        recipient: log.team_leader.clone(),
        log_id: log_id.clone(),
    });

    Ok(HttpResponse::Ok().json(json!({
        "message": "Log approved successfully",
        "id": log_id,
        "status": "approved",
        "approvedBy": auth.actor_id,
    })))
}

/* =========================
Delete log
========================= */
#[utoipa::path(
    delete,
    path = "/api/logs/{id}",
    params(("id" = String, Path, description = "Log ID")),
    responses(
        (status = 200, description = "Log deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Log not found"),
        (status = 409, description = "Approved logs are manager-delete only"),
    ),
    security(("bearer_auth" = [])),
    tag = "Logs"
)]
pub async fn delete_log(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let log_id = path.into_inner();
    let log = fetch_log(pool.get_ref(), &log_id).await?;

    // managers delete unconditionally, owners only while not approved
    if !auth.can(Capability::DeleteAnyLog) {
        auth.require_owned(Capability::WriteOwnLogs, &log.team_leader)?;
        if log.state.is_approved() {
            return Err(ApiError::LogLocked);
        }
    }

    sqlx::query("DELETE FROM daily_logs WHERE id = ?")
        .bind(&log_id)
        .execute(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Log deleted successfully" })))
}

/* =========================
Export log (pure projection)
========================= */
#[utoipa::path(
    get,
    path = "/api/logs/{id}/export",
    params(("id" = String, Path, description = "Log ID")),
    responses(
        (status = 200, description = "Rendered log document", content_type = "text/plain"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Log not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Logs"
)]
pub async fn export_log(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let log = fetch_log(pool.get_ref(), &path.into_inner()).await?;
    auth.require_owned(Capability::ReadLogs, &log.team_leader)?;

    let filename = format!("daily-log-{}.txt", log.id);
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename={filename}"),
        ))
        .body(render_export(&log)))
}

/// Renders the export document. Rendering technology is deliberately plain
/// text; the field set is the contract.
fn render_export(log: &DailyLog) -> String {
    let mut doc = String::new();
    doc.push_str("Daily Work Log\n");
    doc.push_str("==============\n\n");
    doc.push_str(&format!("Date: {}\n", log.date.format("%d/%m/%Y")));
    doc.push_str(&format!("Project: {}\n", log.project));
    doc.push_str(&format!("Team Leader ID: {}\n", log.team_leader));
    doc.push_str(&format!(
        "Work Hours: {} - {}\n",
        log.start_time.format("%H:%M"),
        log.end_time.format("%H:%M")
    ));
    doc.push_str(&format!("Status: {}\n\n", log.state.status_str()));

    doc.push_str("Employees Present:\n");
    if log.employees.is_empty() {
        doc.push_str("No employees recorded.\n");
    } else {
        for emp in &log.employees {
            doc.push_str(&format!("- {}\n", emp));
        }
    }

    doc.push_str("\nWork Description:\n");
    doc.push_str(&log.work_description);
    doc.push('\n');
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_log() -> DailyLog {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        DailyLog {
            id: "log-1".into(),
            date,
            project: "Site A".into(),
            employees: vec!["Dana".into()],
            start_time: date.and_hms_opt(8, 0, 0).unwrap(),
            end_time: date.and_hms_opt(17, 0, 0).unwrap(),
            work_description: "Poured foundation".into(),
            attachment: None,
            state: LogState::Draft,
            team_leader: "tl-1".into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 7, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 10, 7, 0, 0).unwrap(),
        }
    }

    #[test]
    fn export_contains_every_contract_field() {
        let doc = render_export(&sample_log());
        assert!(doc.contains("Date: 10/01/2024"));
        assert!(doc.contains("Project: Site A"));
        assert!(doc.contains("Team Leader ID: tl-1"));
        assert!(doc.contains("Work Hours: 08:00 - 17:00"));
        assert!(doc.contains("Status: draft"));
        assert!(doc.contains("- Dana"));
        assert!(doc.contains("Poured foundation"));
    }

    #[test]
    fn export_marks_missing_employees() {
        let mut log = sample_log();
        log.employees.clear();
        assert!(render_export(&log).contains("No employees recorded."));
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50% done"), "50\\% done");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like(r"back\slash"), r"back\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
