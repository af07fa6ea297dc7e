use crate::{
    auth::{
        auth::AuthUser,
        directory::IdentityProvider,
        jwt::{generate_access_token, verify_token},
    },
    config::Config,
    error::CoreError,
    models::{LoginReqDto, LoginResponse, MeResponse},
    state::AppState,
};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{error, info, instrument};

/// Swagger doc for login endpoint
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body(content = LoginReqDto, content_type = "application/json"),
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = Object, example = json!({
            "message": "invalid credentials"
        }))
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(state, config, user),
    fields(email = %user.email)
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    state: web::Data<AppState>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    info!("Login request received");

    let user = user.into_inner();
    // argon2 verification is CPU bound
    let lookup_state = state.clone();
    let identity = web::block(move || {
        lookup_state
            .directory
            .find_by_credentials(&user.email, &user.password)
    })
    .await?;

    let Some(identity) = identity else {
        info!("Invalid credentials");
        return Err(CoreError::AuthFailure.into());
    };

    let (access_token, _) =
        generate_access_token(&identity, &config.jwt_secret, config.access_token_ttl).map_err(|e| {
            error!(error = %e, "Failed to issue access token");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    info!(user_id = identity.id, role = %identity.role, "Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token,
        identity,
    }))
}

/// Swagger doc for logout endpoint
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses((status = 204, description = "Logged out, token revoked if one was presented")),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn logout(
    req: HttpRequest,
    state: web::Data<AppState>,
    config: web::Data<Config>,
) -> impl Responder {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    // revoke (idempotent); anything unverifiable is already unusable
    if let Some(claims) = token.and_then(|t| verify_token(t, &config.jwt_secret).ok()) {
        state.denylist.revoke(&claims.jti).await;
        info!(user_id = claims.user_id, "Logged out");
    }

    HttpResponse::NoContent().finish()
}

/// Swagger doc for current identity endpoint
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Current identity", body = MeResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn me(auth: AuthUser) -> impl Responder {
    let role = auth.identity.role;
    HttpResponse::Ok().json(MeResponse {
        identity: auth.identity,
        role,
        is_authenticated: true,
    })
}
