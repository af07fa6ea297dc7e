use crate::api::StatusQuery;
use crate::auth::auth::AuthUser;
use crate::error::RequestId;
use crate::lifecycle::{Decision, RequestSummary, parse_status_filter};
use crate::model::leave_request::{CreateLeave, LeaveRequest, LeaveStatus};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};

/* =========================
Create leave request (Employee)
========================= */
/// Swagger doc for create_leave endpoint
#[utoipa::path(
    post,
    path = "/api/leave",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request submitted", body = LeaveRequest),
        (status = 400, description = "Missing or malformed field", body = Object, example = json!({
            "message": "invalid reason: is required"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    auth: AuthUser,
    state: web::Data<AppState>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    let leave = state.leaves.submit(&auth.identity, payload.into_inner())?;
    Ok(HttpResponse::Created().json(leave))
}

/* =========================
Approve leave (Admin)
========================= */
/// Swagger doc for approve_leave endpoint
#[utoipa::path(
    put,
    path = "/api/leave/{leave_id}/approve",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to approve")
    ),
    responses(
        (status = 200, description = "Leave approved", body = LeaveRequest),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Leave request already decided", body = Object, example = json!({
            "message": "request 1 has already been decided"
        }))
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<RequestId>,
) -> actix_web::Result<impl Responder> {
    let leave = state
        .leaves
        .decide(&auth.identity, path.into_inner(), Decision::Approve)?;
    Ok(HttpResponse::Ok().json(leave))
}

/* =========================
Reject leave (Admin)
========================= */
/// Swagger doc for reject_leave endpoint
#[utoipa::path(
    put,
    path = "/api/leave/{leave_id}/reject",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to reject")
    ),
    responses(
        (status = 200, description = "Leave rejected", body = LeaveRequest),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Leave request already decided")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<RequestId>,
) -> actix_web::Result<impl Responder> {
    let leave = state
        .leaves
        .decide(&auth.identity, path.into_inner(), Decision::Reject)?;
    Ok(HttpResponse::Ok().json(leave))
}

/* =========================
Get one leave request
========================= */
/// for getting a leave application details endpoint
#[utoipa::path(
    get,
    path = "/api/leave/{leave_id}",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveRequest),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "request 1 not found"
        }))
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<RequestId>,
) -> actix_web::Result<impl Responder> {
    let leave = state.leaves.find_for(&auth.identity, path.into_inner())?;
    Ok(HttpResponse::Ok().json(leave))
}

/* =========================
List leave requests (Employee: own, Admin: all)
========================= */
/// for getting leave applications endpoint
#[utoipa::path(
    get,
    path = "/api/leave",
    params(StatusQuery),
    responses(
        (status = 200, description = "Visible leave requests, newest first", body = [LeaveRequest]),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    auth: AuthUser,
    state: web::Data<AppState>,
    query: web::Query<StatusQuery>,
) -> actix_web::Result<impl Responder> {
    let status = parse_status_filter::<LeaveStatus>(query.status.as_deref())?;
    let leaves = state.leaves.list_for(&auth.identity, status)?;
    Ok(HttpResponse::Ok().json(leaves))
}

/* =========================
Leave summary
========================= */
/// Status counts of the visible leave requests
#[utoipa::path(
    get,
    path = "/api/leave/summary",
    responses(
        (status = 200, description = "Leave request counts", body = RequestSummary),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn leave_summary(
    auth: AuthUser,
    state: web::Data<AppState>,
) -> actix_web::Result<impl Responder> {
    let summary = state.leaves.summary_for(&auth.identity)?;
    Ok(HttpResponse::Ok().json(summary))
}
