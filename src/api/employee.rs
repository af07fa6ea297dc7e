use crate::auth::auth::AuthUser;
use crate::model::identity::Identity;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};

/// Employee directory, admin only
#[utoipa::path(
    get,
    path = "/api/employee",
    responses(
        (status = 200, description = "Directory listing", body = [Identity]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    auth: AuthUser,
    state: web::Data<AppState>,
) -> actix_web::Result<impl Responder> {
    let employees = state.directory.employees(&auth.identity)?;
    Ok(HttpResponse::Ok().json(employees))
}
