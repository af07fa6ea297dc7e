//! HTTP tests: the actix app wired exactly as the server wires it, driven
//! through `actix_web::test`.

use actix_web::http::StatusCode;
use actix_web::{App, test, web::Data};
use serde_json::{Value, json};

use hrm_attendance::auth::directory::Directory;
use hrm_attendance::config::Config;
use hrm_attendance::model::identity::Identity;
use hrm_attendance::model::role::Role;
use hrm_attendance::routes::{self, Limiters};
use hrm_attendance::state::AppState;

const SECRET: &str = "test-secret";

fn directory() -> Directory {
    let mut directory = Directory::with_demo_accounts().unwrap();
    directory
        .register(
            Identity {
                id: 3,
                email: "jsmith@example.com".into(),
                name: "Jane Smith".into(),
                role: Role::Employee,
                position: "Marketing Specialist".into(),
            },
            "jane123",
        )
        .unwrap();
    directory
}

macro_rules! init_app {
    () => {{
        let config = Config::new(SECRET);
        let limiters = Limiters::from_config(&config).unwrap();
        let state = Data::new(AppState::new(directory(), config.access_token_ttl));
        let config = Data::new(config);
        test::init_service(
            App::new()
                .app_data(state)
                .app_data(config.clone())
                .configure(|cfg| routes::configure(cfg, &config, &limiters)),
        )
        .await
    }};
}

fn peer() -> std::net::SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

macro_rules! call {
    ($app:expr, $req:expr) => {
        test::call_service(&$app, $req.peer_addr(peer()).to_request()).await
    };
}

macro_rules! login {
    ($app:expr, $email:expr, $password:expr) => {{
        let resp = call!(
            $app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({ "email": $email, "password": $password }))
        );
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        body["access_token"].as_str().unwrap().to_string()
    }};
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

fn vacation() -> Value {
    json!({
        "leave_type": "vacation",
        "start_date": "2023-06-15",
        "end_date": "2023-06-20",
        "reason": "Family vacation"
    })
}

#[actix_web::test]
async fn login_returns_token_and_identity() {
    let app = init_app!();
    let resp = call!(
        app,
        test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "email": "admin@example.com", "password": "admin123" }))
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["identity"]["role"], "admin");
    assert_eq!(body["identity"]["name"], "Admin User");
    assert!(body["identity"].get("password").is_none());
    assert!(body["access_token"].as_str().is_some());
}

#[actix_web::test]
async fn bad_credentials_fail_generically() {
    let app = init_app!();
    let mut bodies = Vec::new();
    for (email, password) in [
        ("admin@example.com", "wrong"),
        ("nobody@example.com", "admin123"),
    ] {
        let resp = call!(
            app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({ "email": email, "password": password }))
        );
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        bodies.push(body);
    }
    assert_eq!(bodies[0], bodies[1]);
}

#[actix_web::test]
async fn protected_routes_need_a_token() {
    let app = init_app!();
    let resp = call!(app, test::TestRequest::get().uri("/api/leave"));
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = call!(
        app,
        test::TestRequest::get()
            .uri("/api/leave")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
    );
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn me_reports_role() {
    let app = init_app!();
    let token = login!(app, "employee@example.com", "employee123");
    let resp = call!(app, test::TestRequest::get().uri("/api/me").insert_header(bearer(&token)));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["role"], "employee");
    assert_eq!(body["is_authenticated"], true);
}

#[actix_web::test]
async fn logout_revokes_token_and_is_idempotent() {
    let app = init_app!();
    let token = login!(app, "employee@example.com", "employee123");

    for _ in 0..2 {
        let resp = call!(
            app,
            test::TestRequest::post().uri("/auth/logout").insert_header(bearer(&token))
        );
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
    let resp = call!(app, test::TestRequest::post().uri("/auth/logout"));
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = call!(app, test::TestRequest::get().uri("/api/me").insert_header(bearer(&token)));
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn employee_submits_and_sees_request_first() {
    let app = init_app!();
    let token = login!(app, "employee@example.com", "employee123");

    let resp = call!(
        app,
        test::TestRequest::post()
            .uri("/api/leave")
            .insert_header(bearer(&token))
            .set_json(vacation())
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: Value = test::read_body_json(resp).await;
    assert_eq!(first["days"], 6.0);
    assert_eq!(first["status"], "pending");
    assert_eq!(first["employee_name"], "John Employee");
    assert!(first["approved_by"].is_null());

    let resp = call!(
        app,
        test::TestRequest::post()
            .uri("/api/leave")
            .insert_header(bearer(&token))
            .set_json(json!({
                "leave_type": "personal",
                "start_date": "2023-07-10",
                "end_date": "2023-07-10",
                "half_day": true,
                "reason": "Personal errands"
            }))
    );
    let second: Value = test::read_body_json(resp).await;
    assert_eq!(second["days"], 0.5);

    let resp = call!(app, test::TestRequest::get().uri("/api/leave").insert_header(bearer(&token)));
    let listed: Value = test::read_body_json(resp).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], second["id"]);
    assert_eq!(listed[1]["id"], first["id"]);
}

#[actix_web::test]
async fn admin_cannot_submit() {
    let app = init_app!();
    let token = login!(app, "admin@example.com", "admin123");
    let resp = call!(
        app,
        test::TestRequest::post()
            .uri("/api/leave")
            .insert_header(bearer(&token))
            .set_json(vacation())
    );
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn invalid_submissions_name_the_field() {
    let app = init_app!();
    let token = login!(app, "employee@example.com", "employee123");

    let resp = call!(
        app,
        test::TestRequest::post()
            .uri("/api/leave")
            .insert_header(bearer(&token))
            .set_json(json!({
                "leave_type": "vacation",
                "start_date": "2023-06-15",
                "end_date": "2023-06-20"
            }))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("reason"));

    let resp = call!(
        app,
        test::TestRequest::post()
            .uri("/api/leave")
            .insert_header(bearer(&token))
            .set_json(json!({
                "leave_type": "vacation",
                "start_date": "2023-06-20",
                "end_date": "2023-06-15",
                "reason": "Backwards"
            }))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = call!(
        app,
        test::TestRequest::post()
            .uri("/api/leave")
            .insert_header(bearer(&token))
            .set_json(json!({ "leave_type": "holiday", "reason": "x" }))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn decisions_are_admin_only_and_one_shot() {
    let app = init_app!();
    let employee = login!(app, "employee@example.com", "employee123");
    let admin = login!(app, "admin@example.com", "admin123");

    let resp = call!(
        app,
        test::TestRequest::post()
            .uri("/api/leave")
            .insert_header(bearer(&employee))
            .set_json(vacation())
    );
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_u64().unwrap();

    let resp = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/leave/{id}/approve"))
            .insert_header(bearer(&employee))
    );
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/leave/{id}/approve"))
            .insert_header(bearer(&admin))
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let approved: Value = test::read_body_json(resp).await;
    assert_eq!(approved["status"], "approved");
    assert_eq!(approved["approved_by"], "Admin User");

    let resp = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/leave/{id}/reject"))
            .insert_header(bearer(&admin))
    );
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = call!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/leave/{id}"))
            .insert_header(bearer(&employee))
    );
    let stored: Value = test::read_body_json(resp).await;
    assert_eq!(stored["status"], "approved");

    let resp = call!(
        app,
        test::TestRequest::put()
            .uri("/api/leave/999/approve")
            .insert_header(bearer(&admin))
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn employees_never_see_each_other() {
    let app = init_app!();
    let john = login!(app, "employee@example.com", "employee123");
    let jane = login!(app, "jsmith@example.com", "jane123");
    let admin = login!(app, "admin@example.com", "admin123");

    let resp = call!(
        app,
        test::TestRequest::post()
            .uri("/api/leave")
            .insert_header(bearer(&john))
            .set_json(vacation())
    );
    let johns: Value = test::read_body_json(resp).await;

    let resp = call!(app, test::TestRequest::get().uri("/api/leave").insert_header(bearer(&jane)));
    let listed: Value = test::read_body_json(resp).await;
    assert!(listed.as_array().unwrap().is_empty());

    let resp = call!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/leave/{}", johns["id"]))
            .insert_header(bearer(&jane))
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = call!(app, test::TestRequest::get().uri("/api/leave").insert_header(bearer(&admin)));
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn status_filter_and_summary() {
    let app = init_app!();
    let employee = login!(app, "employee@example.com", "employee123");
    let admin = login!(app, "admin@example.com", "admin123");

    for _ in 0..3 {
        call!(
            app,
            test::TestRequest::post()
                .uri("/api/leave")
                .insert_header(bearer(&employee))
                .set_json(vacation())
        );
    }
    call!(app, test::TestRequest::put().uri("/api/leave/1/approve").insert_header(bearer(&admin)));
    call!(app, test::TestRequest::put().uri("/api/leave/2/reject").insert_header(bearer(&admin)));

    let resp = call!(
        app,
        test::TestRequest::get()
            .uri("/api/leave?status=Approved")
            .insert_header(bearer(&employee))
    );
    let approved: Value = test::read_body_json(resp).await;
    assert_eq!(approved.as_array().unwrap().len(), 1);
    assert_eq!(approved[0]["id"], 1);

    let resp = call!(
        app,
        test::TestRequest::get()
            .uri("/api/leave?status=All")
            .insert_header(bearer(&employee))
    );
    let all: Value = test::read_body_json(resp).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let resp = call!(
        app,
        test::TestRequest::get()
            .uri("/api/leave?status=justified")
            .insert_header(bearer(&employee))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = call!(
        app,
        test::TestRequest::get().uri("/api/leave/summary").insert_header(bearer(&employee))
    );
    let summary: Value = test::read_body_json(resp).await;
    assert_eq!(
        summary,
        json!({ "total": 3, "pending": 1, "accepted": 1, "rejected": 1 })
    );
}

#[actix_web::test]
async fn absence_justification_flow() {
    let app = init_app!();
    let jane = login!(app, "jsmith@example.com", "jane123");
    let admin = login!(app, "admin@example.com", "admin123");

    let resp = call!(
        app,
        test::TestRequest::post()
            .uri("/api/absence")
            .insert_header(bearer(&jane))
            .set_json(json!({
                "date": "2023-05-17",
                "absence_type": "sick_leave",
                "reason": "Flu symptoms",
                "document": "medical-note.pdf"
            }))
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["status"], "pending");
    let id = created["id"].as_u64().unwrap();

    let resp = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/absence/{id}/justify"))
            .insert_header(bearer(&admin))
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let justified: Value = test::read_body_json(resp).await;
    assert_eq!(justified["status"], "justified");
    assert_eq!(justified["reviewed_by"], "Admin User");

    let resp = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/absence/{id}/reject"))
            .insert_header(bearer(&admin))
    );
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = call!(
        app,
        test::TestRequest::get()
            .uri("/api/absence?status=justified")
            .insert_header(bearer(&jane))
    );
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let resp = call!(
        app,
        test::TestRequest::get().uri("/api/absence/summary").insert_header(bearer(&admin))
    );
    let summary: Value = test::read_body_json(resp).await;
    assert_eq!(summary["accepted"], 1);
}

#[actix_web::test]
async fn directory_is_admin_only() {
    let app = init_app!();
    let admin = login!(app, "admin@example.com", "admin123");
    let employee = login!(app, "employee@example.com", "employee123");

    let resp = call!(
        app,
        test::TestRequest::get().uri("/api/employee").insert_header(bearer(&admin))
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let listing: Value = test::read_body_json(resp).await;
    assert_eq!(listing.as_array().unwrap().len(), 3);

    let resp = call!(
        app,
        test::TestRequest::get().uri("/api/employee").insert_header(bearer(&employee))
    );
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
