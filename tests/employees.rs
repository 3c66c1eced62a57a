mod common;

use actix_web::http::Method;
use actix_web::test;
use common::{TestContext, authed, leader_token, manager_token};
use serde_json::{Value, json};

async fn create_employee<S, B>(app: &S, body: Value) -> Value
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse<B>,
            Error = actix_web::Error,
        >,
    B: actix_web::body::MessageBody,
    B::Error: std::fmt::Debug,
{
    let req = authed(Method::POST, "/api/employees", &manager_token())
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201, "employee create should succeed");
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn manager_creates_and_reads_employee() {
    let ctx = TestContext::new().await;
    let app = test_app!(&ctx);

    let created = create_employee(
        &app,
        json!({
            "fullName": "  Dana Levi ",
            "position": "Site Engineer",
            "email": "Dana.Levi@Company.com",
        }),
    )
    .await;

    // strings are trimmed, emails lowercased, defaults applied
    assert_eq!(created["fullName"], "Dana Levi");
    assert_eq!(created["email"], "dana.levi@company.com");
    assert_eq!(created["isActive"], true);
    let id = created["id"].as_str().unwrap().to_string();

    // team leaders may read the directory
    let req = authed(Method::GET, "/api/employees", &leader_token("tl-1")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let all: Value = test::read_body_json(resp).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let req = authed(
        Method::GET,
        &format!("/api/employees/{id}"),
        &leader_token("tl-1"),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn team_leader_cannot_mutate_directory() {
    let ctx = TestContext::new().await;
    let app = test_app!(&ctx);

    let req = authed(Method::POST, "/api/employees", &leader_token("tl-1"))
        .set_json(json!({ "fullName": "X", "position": "Y" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "forbidden");
}

#[actix_web::test]
async fn create_validates_required_fields_and_email() {
    let ctx = TestContext::new().await;
    let app = test_app!(&ctx);

    let req = authed(Method::POST, "/api/employees", &manager_token())
        .set_json(json!({ "fullName": "  ", "position": "", "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "validation_error");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"fullName"));
    assert!(fields.contains(&"position"));
    assert!(fields.contains(&"email"));

    // TLDs longer than three characters are valid
    let created = create_employee(
        &app,
        json!({
            "fullName": "Dana Levi",
            "position": "Site Engineer",
            "email": "dana@company.info",
        }),
    )
    .await;
    assert_eq!(created["email"], "dana@company.info");
}

#[actix_web::test]
async fn update_applies_only_provided_fields() {
    let ctx = TestContext::new().await;
    let app = test_app!(&ctx);

    let created = create_employee(
        &app,
        json!({ "fullName": "Dana Levi", "position": "Site Engineer", "notes": "old hand" }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let req = authed(
        Method::PUT,
        &format!("/api/employees/{id}"),
        &manager_token(),
    )
    .set_json(json!({ "position": "Foreman" }))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["position"], "Foreman");
    // omitted fields are left untouched
    assert_eq!(updated["fullName"], "Dana Levi");
    assert_eq!(updated["notes"], "old hand");
}

#[actix_web::test]
async fn unknown_ids_return_not_found() {
    let ctx = TestContext::new().await;
    let app = test_app!(&ctx);

    for (method, uri) in [
        (Method::GET, "/api/employees/nope"),
        (Method::DELETE, "/api/employees/nope"),
        (Method::PATCH, "/api/employees/nope/toggle-status"),
    ] {
        let req = authed(method, uri, &manager_token()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404, "{uri}");
    }

    let req = authed(Method::PUT, "/api/employees/nope", &manager_token())
        .set_json(json!({ "position": "Foreman" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn toggle_twice_restores_original_flag() {
    let ctx = TestContext::new().await;
    let app = test_app!(&ctx);

    let created =
        create_employee(&app, json!({ "fullName": "Dana", "position": "Engineer" })).await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/api/employees/{id}/toggle-status");

    let req = authed(Method::PATCH, &uri, &manager_token()).to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["isActive"], false);

    // deactivated employees drop out of the active listing
    let req = authed(Method::GET, "/api/employees/active", &manager_token()).to_request();
    let active: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(active.as_array().unwrap().len(), 0);

    let req = authed(Method::PATCH, &uri, &manager_token()).to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["isActive"], true);
}

#[actix_web::test]
async fn missing_token_is_unauthenticated() {
    let ctx = TestContext::new().await;
    let app = test_app!(&ctx);

    let req = actix_web::test::TestRequest::get()
        .uri("/api/employees")
        .peer_addr("127.0.0.1:8080".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "unauthenticated");
}
