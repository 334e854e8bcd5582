mod test_utils;

use std::str::FromStr;

use actix_web::{http::StatusCode, middleware::NormalizePath, test, web, App};
use portfolio_cms::{
    graphql::build_schema, middlewares::auth::AuthMiddleware, routes::configure_routes,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use test_utils::{build_test_state, TEST_ADMIN_PASSWORD};

macro_rules! spawn_app {
    () => {{
        let state = build_test_state();
        let schema = build_schema(state.clone());
        test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(web::Data::new(schema))
                .wrap(NormalizePath::trim())
                .wrap(AuthMiddleware)
                .configure(configure_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn me_crud_round_trip() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/me")
        .set_json(json!({
            "first_name": "Marselle",
            "last_name": "Naz",
            "email": "marselle@example.com",
            "phone": "+7 900 123-45-67",
            "github": "https://github.com/marselle"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["first_name"], "Marselle");
    assert_eq!(created["github"], "https://github.com/marselle");
    assert_eq!(created["instagram"], Value::Null);
    let id = created["id"].as_i64().unwrap();

    // retrieve
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/me/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);

    // partial update: set education, clear github, leave the rest alone
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/me/{id}"))
        .set_json(json!({
            "education": "MSU",
            "github": null
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["education"], "MSU");
    assert_eq!(updated["github"], Value::Null);
    assert_eq!(updated["first_name"], "Marselle");
    assert_eq!(updated["phone"], "+7 900 123-45-67");

    // delete exactly once
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/me/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/me/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/me/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn validation_failures_return_400_with_field_details() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/skills")
        .set_json(json!({
            "category": "programming",
            "name": "Rust",
            "percentage": 101
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "percentage");

    let req = test::TestRequest::post()
        .uri("/api/v1/contacts")
        .set_json(json!({
            "name": "Visitor",
            "email": "not-an-email",
            "subject": "Hi",
            "message": "Hello"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn skill_boundary_percentages_are_stored() {
    let app = spawn_app!();

    for percentage in [0, 100] {
        let req = test::TestRequest::post()
            .uri("/api/v1/skills")
            .set_json(json!({
                "category": "devops",
                "name": "CI pipelines",
                "percentage": percentage
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["percentage"], percentage);
        assert_eq!(body["category"], "devops");
    }
}

#[actix_web::test]
async fn pricing_responses_carry_derived_total_cost() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/pricings")
        .set_json(json!({
            "service": "Backend development",
            "description": "REST and GraphQL APIs",
            "rate_per_hour": "50.00",
            "estimated_hours": "3.50"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["id"].as_i64().unwrap();
    assert_eq!(
        decimal_from(&body["total_cost"]),
        Decimal::from_str("175.00").unwrap()
    );

    // updating a factor recomputes the derived value
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/pricings/{id}"))
        .set_json(json!({ "estimated_hours": "2.00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        decimal_from(&body["total_cost"]),
        Decimal::from_str("100.00").unwrap()
    );
}

#[actix_web::test]
async fn project_patch_keeps_created_at_and_touches_updated_at() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/projects")
        .set_json(json!({
            "title": "Portfolio Site",
            "description": "Backend",
            "start_date": "2024-01-01"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/projects/{id}"))
        .set_json(json!({ "title": "Portfolio Backend" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let updated: Value = test::read_body_json(resp).await;

    assert_eq!(updated["title"], "Portfolio Backend");
    assert_eq!(updated["description"], "Backend");
    assert_eq!(updated["created_at"], created["created_at"]);

    let before = chrono::DateTime::parse_from_rfc3339(created["updated_at"].as_str().unwrap());
    let after = chrono::DateTime::parse_from_rfc3339(updated["updated_at"].as_str().unwrap());
    assert!(after.unwrap() >= before.unwrap());
}

#[actix_web::test]
async fn patch_and_delete_of_missing_ids_are_404_with_kind_and_id() {
    let app = spawn_app!();

    let req = test::TestRequest::patch()
        .uri("/api/v1/projects/999")
        .set_json(json!({ "title": "Ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Project with id 999"));

    let req = test::TestRequest::delete()
        .uri("/api/v1/pricings/555")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Pricing with id 555"));
}

#[actix_web::test]
async fn graphql_endpoint_requires_a_session() {
    let app = spawn_app!();

    // API-style access without a token is refused
    let req = test::TestRequest::post()
        .uri("/graphql")
        .set_json(json!({"query": "{ listMe { id } }"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // browser-style access is redirected to the login flow
    let req = test::TestRequest::get()
        .uri("/graphql")
        .insert_header(("Accept", "text/html"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/auth/login"
    );

    // REST stays public
    let req = test::TestRequest::get().uri("/api/v1/projects").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn login_issues_a_token_that_opens_the_graphql_endpoint() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"username": "admin", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"username": "admin", "password": TEST_ADMIN_PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["access_token"].as_str().unwrap().to_string();
    assert_eq!(body["token_type"], "Bearer");

    let req = test::TestRequest::post()
        .uri("/graphql")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({"query": "{ listMe { id } }"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["listMe"].is_array());
}

#[actix_web::test]
async fn contact_messages_start_unread() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/contacts")
        .set_json(json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "subject": "Hiring",
            "message": "Are you available?"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["is_read"], false);
    let id = body["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/contacts/{id}"))
        .set_json(json!({ "is_read": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["is_read"], true);
    assert_eq!(body["subject"], "Hiring");
}

#[actix_web::test]
async fn projects_rest_listing_is_newest_created_first() {
    let app = spawn_app!();

    for (title, start_date) in [("First", "2024-05-01"), ("Second", "2020-01-01")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/projects")
            .set_json(json!({
                "title": title,
                "description": "…",
                "start_date": start_date
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/v1/projects").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Second", "First"]);
}

/// The Decimal fields may travel as strings or numbers; accept both.
fn decimal_from(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).unwrap(),
        other => panic!("not a decimal value: {other:?}"),
    }
}
