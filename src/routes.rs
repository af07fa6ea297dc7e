use crate::{
    api::{absence, employee, leave_request},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, error::InternalError, middleware::from_fn, web};
use anyhow::{Result, anyhow};
use serde_json::json;
use std::sync::Arc;

type Limiter = Arc<Governor<PeerIpKeyExtractor, NoOpMiddleware>>;

/// Per-route rate limiters, built once and shared by every worker.
#[derive(Clone)]
pub struct Limiters {
    login: Limiter,
    protected: Limiter,
}

impl Limiters {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            login: build_limiter(config.rate_login_per_min)?,
            protected: build_limiter(config.rate_protected_per_min)?,
        })
    }
}

fn build_limiter(requests_per_min: u32) -> Result<Limiter> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = 60_000 / requests_per_min as u64;
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit of {} per minute", requests_per_min))?;
    Ok(Arc::new(Governor::new(&cfg)))
}

/// Malformed JSON bodies answer with the same `{"message"}` shape as domain errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let resp = HttpResponse::BadRequest().json(json!({ "message": err.to_string() }));
        InternalError::from_response(err, resp).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiters: &Limiters) {
    cfg.app_data(json_config());

    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .wrap(limiters.login.clone())
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/logout")
                    .wrap(limiters.login.clone())
                    .route(web::post().to(handlers::logout)),
            ),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(limiters.protected.clone()) // rate limiting
            .service(web::resource("/me").route(web::get().to(handlers::me)))
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave_request::leave_list))
                            .route(web::post().to(leave_request::create_leave)),
                    )
                    // /leave/summary, ahead of /leave/{id}
                    .service(
                        web::resource("/summary")
                            .route(web::get().to(leave_request::leave_summary)),
                    )
                    // /leave/{id}
                    .service(web::resource("/{id}").route(web::get().to(leave_request::get_leave)))
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::put().to(leave_request::approve_leave)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject")
                            .route(web::put().to(leave_request::reject_leave)),
                    ),
            )
            .service(
                web::scope("/absence")
                    .service(
                        web::resource("")
                            .route(web::get().to(absence::absence_list))
                            .route(web::post().to(absence::create_absence)),
                    )
                    .service(
                        web::resource("/summary").route(web::get().to(absence::absence_summary)),
                    )
                    .service(web::resource("/{id}").route(web::get().to(absence::get_absence)))
                    .service(
                        web::resource("/{id}/justify")
                            .route(web::put().to(absence::justify_absence)),
                    )
                    .service(
                        web::resource("/{id}/reject").route(web::put().to(absence::reject_absence)),
                    ),
            )
            .service(web::resource("/employee").route(web::get().to(employee::list_employees))),
    );
}

// LOGIN
//  └─ access_token (ACCESS_TOKEN_TTL, 15 min by default)

// API REQUEST
//  └─ Authorization: Bearer access_token

// LOGOUT
//  └─ POST /auth/logout with the access token
//       └─ token id denied until it would have expired
