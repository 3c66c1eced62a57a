use crate::api::employee::{CreateEmployee, UpdateEmployee};
use crate::api::log::{CreateLog, LogFilter, UpdateLog};
use crate::error::FieldError;
use crate::model::daily_log::{Attachment, DocType};
use crate::model::employee::Employee;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Daily Work Log API",
        version = "1.0.0",
        description = r#"
## Daily Work Log System

Backend for tracking daily work logs submitted by team leaders and approved by managers.

### Key Features
- **Employee Directory**
  - Manager-administered records with an active/inactive flag
- **Daily Logs**
  - One log per (team leader, date, project); draft → submitted → approved lifecycle
- **Export**
  - Rendered document per log for archiving

### Security
All endpoints require a **JWT Bearer token** issued by the external auth service.
Roles: **Manager** (employee admin, approvals) and **Team Leader** (own logs).
"#,
    ),
    paths(
        crate::api::log::list_logs,
        crate::api::log::my_logs,
        crate::api::log::get_log,
        crate::api::log::create_log,
        crate::api::log::update_log,
        crate::api::log::submit_log,
        crate::api::log::approve_log,
        crate::api::log::delete_log,
        crate::api::log::export_log,

        crate::api::employee::list_employees,
        crate::api::employee::list_active_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,
        crate::api::employee::toggle_employee_status,
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            UpdateEmployee,
            CreateLog,
            UpdateLog,
            LogFilter,
            Attachment,
            DocType,
            FieldError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Logs", description = "Daily log lifecycle APIs"),
        (name = "Employee", description = "Employee directory APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
