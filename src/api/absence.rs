use crate::api::StatusQuery;
use crate::auth::auth::AuthUser;
use crate::error::RequestId;
use crate::lifecycle::{Decision, RequestSummary, parse_status_filter};
use crate::model::absence::{AbsenceJustification, AbsenceStatus, CreateAbsence};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};

/* =========================
Submit absence justification (Employee)
========================= */
#[utoipa::path(
    post,
    path = "/api/absence",
    request_body(
        content = CreateAbsence,
        description = "Absence justification payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Justification submitted", body = AbsenceJustification),
        (status = 400, description = "Missing or malformed field"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Absence"
)]
pub async fn create_absence(
    auth: AuthUser,
    state: web::Data<AppState>,
    payload: web::Json<CreateAbsence>,
) -> actix_web::Result<impl Responder> {
    let absence = state.absences.submit(&auth.identity, payload.into_inner())?;
    Ok(HttpResponse::Created().json(absence))
}

/* =========================
Justify absence (Admin)
========================= */
#[utoipa::path(
    put,
    path = "/api/absence/{absence_id}/justify",
    params(("absence_id" = u64, Path, description = "ID of the justification to accept")),
    responses(
        (status = 200, description = "Absence justified", body = AbsenceJustification),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Justification not found"),
        (status = 409, description = "Justification already decided")
    ),
    security(("bearer_auth" = [])),
    tag = "Absence"
)]
pub async fn justify_absence(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<RequestId>,
) -> actix_web::Result<impl Responder> {
    let absence = state
        .absences
        .decide(&auth.identity, path.into_inner(), Decision::Approve)?;
    Ok(HttpResponse::Ok().json(absence))
}

/* =========================
Reject absence (Admin)
========================= */
#[utoipa::path(
    put,
    path = "/api/absence/{absence_id}/reject",
    params(("absence_id" = u64, Path, description = "ID of the justification to reject")),
    responses(
        (status = 200, description = "Justification rejected", body = AbsenceJustification),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Justification not found"),
        (status = 409, description = "Justification already decided")
    ),
    security(("bearer_auth" = [])),
    tag = "Absence"
)]
pub async fn reject_absence(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<RequestId>,
) -> actix_web::Result<impl Responder> {
    let absence = state
        .absences
        .decide(&auth.identity, path.into_inner(), Decision::Reject)?;
    Ok(HttpResponse::Ok().json(absence))
}

/* =========================
Get one justification
========================= */
#[utoipa::path(
    get,
    path = "/api/absence/{absence_id}",
    params(("absence_id" = u64, Path, description = "ID of the justification to fetch")),
    responses(
        (status = 200, description = "Justification found", body = AbsenceJustification),
        (status = 404, description = "Justification not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Absence"
)]
pub async fn get_absence(
    auth: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<RequestId>,
) -> actix_web::Result<impl Responder> {
    let absence = state.absences.find_for(&auth.identity, path.into_inner())?;
    Ok(HttpResponse::Ok().json(absence))
}

/* =========================
List justifications (Employee: own, Admin: all)
========================= */
#[utoipa::path(
    get,
    path = "/api/absence",
    params(StatusQuery),
    responses(
        (status = 200, description = "Visible justifications, newest first", body = [AbsenceJustification]),
        (status = 400, description = "Unknown status filter")
    ),
    security(("bearer_auth" = [])),
    tag = "Absence"
)]
pub async fn absence_list(
    auth: AuthUser,
    state: web::Data<AppState>,
    query: web::Query<StatusQuery>,
) -> actix_web::Result<impl Responder> {
    let status = parse_status_filter::<AbsenceStatus>(query.status.as_deref())?;
    let absences = state.absences.list_for(&auth.identity, status)?;
    Ok(HttpResponse::Ok().json(absences))
}

/* =========================
Justification summary
========================= */
#[utoipa::path(
    get,
    path = "/api/absence/summary",
    responses((status = 200, description = "Justification counts", body = RequestSummary)),
    security(("bearer_auth" = [])),
    tag = "Absence"
)]
pub async fn absence_summary(
    auth: AuthUser,
    state: web::Data<AppState>,
) -> actix_web::Result<impl Responder> {
    let summary = state.absences.summary_for(&auth.identity)?;
    Ok(HttpResponse::Ok().json(summary))
}
