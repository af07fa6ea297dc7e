use crate::api::StatusQuery;
use crate::lifecycle::RequestSummary;
use crate::model::absence::{AbsenceJustification, AbsenceStatus, AbsenceType, CreateAbsence};
use crate::model::identity::Identity;
use crate::model::leave_request::{CreateLeave, LeaveRequest, LeaveStatus, LeaveType};
use crate::model::role::Role;
use crate::models::{LoginReqDto, LoginResponse, MeResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Attendance API",
        version = "0.1.0",
        description = r#"
## Attendance & Leave Management

Employees submit **leave requests** and **absence justifications**; admins
approve, justify or reject them. Every request starts `pending` and is decided
exactly once.

### 🔐 Security
Endpoints under `/api` require a **JWT Bearer** token from `POST /auth/login`.
Employees see only their own requests; admins see all requests and the
employee directory but never submit requests themselves.

### 📦 Response Format
- JSON bodies, snake_case fields
- Errors as `{"message": "..."}`: 400 invalid input, 401 bad credentials,
  403 forbidden, 404 unknown request, 409 already decided

---
Built with **Rust**, **Actix Web** and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::logout,
        crate::auth::handlers::me,

        crate::api::leave_request::leave_list,
        crate::api::leave_request::leave_summary,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::create_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,

        crate::api::absence::absence_list,
        crate::api::absence::absence_summary,
        crate::api::absence::get_absence,
        crate::api::absence::create_absence,
        crate::api::absence::justify_absence,
        crate::api::absence::reject_absence,

        crate::api::employee::list_employees
    ),
    components(
        schemas(
            LoginReqDto,
            LoginResponse,
            MeResponse,
            Identity,
            Role,
            StatusQuery,
            RequestSummary,
            LeaveRequest,
            CreateLeave,
            LeaveType,
            LeaveStatus,
            AbsenceJustification,
            CreateAbsence,
            AbsenceType,
            AbsenceStatus
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Login, logout and current identity"),
        (name = "Leave", description = "Leave request APIs"),
        (name = "Absence", description = "Absence justification APIs"),
        (name = "Employee", description = "Employee directory APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
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
