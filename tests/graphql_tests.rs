mod test_utils;

use std::str::FromStr;

use portfolio_cms::graphql::PortfolioSchema;
use rust_decimal::Decimal;
use serde_json::Value;
use test_utils::build_test_schema;

async fn execute(schema: &PortfolioSchema, document: &str) -> Value {
    let response = schema.execute(document).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors for {document}: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

async fn execute_expecting_error(schema: &PortfolioSchema, document: &str) -> Value {
    let response = schema.execute(document).await;
    assert!(
        !response.errors.is_empty(),
        "expected errors for {document}, got none"
    );
    serde_json::to_value(&response).unwrap()
}

/// The Decimal scalar may travel as a string or a number; accept both.
fn decimal_from(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).unwrap(),
        other => panic!("not a decimal value: {other:?}"),
    }
}

#[tokio::test]
async fn create_me_returns_supplied_fields_and_null_optionals() {
    let schema = build_test_schema();

    let data = execute(
        &schema,
        r#"mutation {
            createMe(input: {
                firstName: "Marselle",
                lastName: "Naz",
                email: "marselle@example.com",
                phone: "+7 (900) 123-45-67",
                github: "https://github.com/marselle"
            }) {
                id firstName lastName email phone github instagram education workHistory
            }
        }"#,
    )
    .await;

    let me = &data["createMe"];
    assert_eq!(me["firstName"], "Marselle");
    assert_eq!(me["email"], "marselle@example.com");
    assert_eq!(me["github"], "https://github.com/marselle");
    assert_eq!(me["instagram"], Value::Null);
    assert_eq!(me["education"], Value::Null);

    // the created record is immediately readable through the query surface
    let id = me["id"].as_i64().unwrap();
    let fetched = execute(&schema, &format!(r#"{{ me(id: "{id}") {{ id email }} }}"#)).await;
    assert_eq!(fetched["me"]["id"].as_i64().unwrap(), id);
    assert_eq!(fetched["me"]["email"], "marselle@example.com");
}

#[tokio::test]
async fn update_me_changes_only_supplied_fields() {
    let schema = build_test_schema();

    let data = execute(
        &schema,
        r#"mutation {
            createMe(input: {
                firstName: "Marselle", lastName: "Naz",
                email: "marselle@example.com", phone: "+7 900 1234567",
                education: "MSU", workHistory: "Freelance"
            }) { id }
        }"#,
    )
    .await;
    let id = data["createMe"]["id"].as_i64().unwrap();

    // only phone is supplied; everything else must keep its value
    let data = execute(
        &schema,
        &format!(
            r#"mutation {{
                updateMe(id: "{id}", input: {{ phone: "+7 900 0000000" }}) {{
                    phone education workHistory firstName
                }}
            }}"#
        ),
    )
    .await;
    assert_eq!(data["updateMe"]["phone"], "+7 900 0000000");
    assert_eq!(data["updateMe"]["education"], "MSU");
    assert_eq!(data["updateMe"]["workHistory"], "Freelance");
    assert_eq!(data["updateMe"]["firstName"], "Marselle");

    // an explicit null clears a nullable field; omitted fields stay
    let data = execute(
        &schema,
        &format!(
            r#"mutation {{
                updateMe(id: "{id}", input: {{ education: null }}) {{
                    education workHistory
                }}
            }}"#
        ),
    )
    .await;
    assert_eq!(data["updateMe"]["education"], Value::Null);
    assert_eq!(data["updateMe"]["workHistory"], "Freelance");
}

#[tokio::test]
async fn update_and_delete_of_missing_ids_fail_with_not_found() {
    let schema = build_test_schema();

    let response = execute_expecting_error(
        &schema,
        r#"mutation { updateSkill(id: "999", input: { name: "Rust" }) { id } }"#,
    )
    .await;
    assert_eq!(response["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert!(response["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("Skill with id 999"));

    let response = execute_expecting_error(
        &schema,
        r#"mutation { deleteProject(id: "12345") }"#,
    )
    .await;
    assert_eq!(response["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert!(response["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("Project with id 12345"));
}

#[tokio::test]
async fn delete_returns_true_exactly_once() {
    let schema = build_test_schema();

    let data = execute(
        &schema,
        r#"mutation {
            createSkill(input: { category: PROGRAMMING, name: "Rust", percentage: 90 }) { id }
        }"#,
    )
    .await;
    let id = data["createSkill"]["id"].as_i64().unwrap();

    let data = execute(&schema, &format!(r#"mutation {{ deleteSkill(id: "{id}") }}"#)).await;
    assert_eq!(data["deleteSkill"], true);

    // no silent no-op on the second attempt
    let response =
        execute_expecting_error(&schema, &format!(r#"mutation {{ deleteSkill(id: "{id}") }}"#))
            .await;
    assert_eq!(response["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn skill_percentage_bounds_are_inclusive() {
    let schema = build_test_schema();

    for (percentage, ok) in [(0, true), (100, true), (-1, false), (101, false)] {
        let document = format!(
            r#"mutation {{
                createSkill(input: {{ category: TESTING, name: "QA", percentage: {percentage} }}) {{
                    percentage
                }}
            }}"#
        );
        let response = schema.execute(document.as_str()).await;
        if ok {
            assert!(
                response.errors.is_empty(),
                "percentage {percentage} should be accepted: {:?}",
                response.errors
            );
        } else {
            let json = serde_json::to_value(&response).unwrap();
            assert_eq!(
                json["errors"][0]["extensions"]["code"], "BAD_USER_INPUT",
                "percentage {percentage} should be rejected"
            );
        }
    }
}

#[tokio::test]
async fn pricing_total_cost_is_derived_and_tracks_updates() {
    let schema = build_test_schema();

    let data = execute(
        &schema,
        r#"mutation {
            createPricing(input: {
                service: "Backend development",
                description: "REST and GraphQL APIs",
                ratePerHour: "50.00",
                estimatedHours: "3.50"
            }) { id totalCost }
        }"#,
    )
    .await;
    let id = data["createPricing"]["id"].as_i64().unwrap();
    assert_eq!(
        decimal_from(&data["createPricing"]["totalCost"]),
        Decimal::from_str("175.00").unwrap()
    );

    let data = execute(
        &schema,
        &format!(
            r#"mutation {{
                updatePricing(id: "{id}", input: {{ ratePerHour: "80.00" }}) {{
                    totalCost estimatedHours
                }}
            }}"#
        ),
    )
    .await;
    assert_eq!(
        decimal_from(&data["updatePricing"]["totalCost"]),
        Decimal::from_str("280.00").unwrap()
    );
}

#[tokio::test]
async fn projects_list_newest_created_first_not_by_start_date() {
    let schema = build_test_schema();

    execute(
        &schema,
        r#"mutation {
            createProject(input: {
                title: "Portfolio Site",
                description: "First created, later start date",
                startDate: "2024-01-01"
            }) { id }
        }"#,
    )
    .await;

    execute(
        &schema,
        r#"mutation {
            createProject(input: {
                title: "Legacy Tooling",
                description: "Created second, earlier start date",
                startDate: "2020-01-01"
            }) { id }
        }"#,
    )
    .await;

    let data = execute(&schema, r#"{ projects { title } }"#).await;
    let titles: Vec<&str> = data["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Legacy Tooling", "Portfolio Site"]);
}

#[tokio::test]
async fn project_update_clears_end_date_only_when_explicit() {
    let schema = build_test_schema();

    let data = execute(
        &schema,
        r#"mutation {
            createProject(input: {
                title: "Portfolio Site",
                description: "Backend",
                startDate: "2024-01-01",
                endDate: "2024-06-01",
                repository: "https://github.com/marselle/portfolio"
            }) { id }
        }"#,
    )
    .await;
    let id = data["createProject"]["id"].as_i64().unwrap();

    // omitting endDate keeps it
    let data = execute(
        &schema,
        &format!(
            r#"mutation {{
                updateProject(id: "{id}", input: {{ title: "Portfolio Backend" }}) {{
                    title endDate repository
                }}
            }}"#
        ),
    )
    .await;
    assert_eq!(data["updateProject"]["endDate"], "2024-06-01");
    assert_eq!(
        data["updateProject"]["repository"],
        "https://github.com/marselle/portfolio"
    );

    // explicit null clears it
    let data = execute(
        &schema,
        &format!(
            r#"mutation {{
                updateProject(id: "{id}", input: {{ endDate: null }}) {{ title endDate }}
            }}"#
        ),
    )
    .await;
    assert_eq!(data["updateProject"]["endDate"], Value::Null);
    assert_eq!(data["updateProject"]["title"], "Portfolio Backend");
}

#[tokio::test]
async fn contact_is_read_flips_only_by_explicit_update() {
    let schema = build_test_schema();

    let data = execute(
        &schema,
        r#"mutation {
            createContact(input: {
                name: "Visitor",
                email: "visitor@example.com",
                subject: "Hiring",
                message: "Are you available?"
            }) { id isRead }
        }"#,
    )
    .await;
    let id = data["createContact"]["id"].as_i64().unwrap();
    assert_eq!(data["createContact"]["isRead"], false);

    // reading does not flip the flag
    let data = execute(&schema, &format!(r#"{{ contact(id: "{id}") {{ isRead }} }}"#)).await;
    assert_eq!(data["contact"]["isRead"], false);

    let data = execute(
        &schema,
        &format!(
            r#"mutation {{
                updateContact(id: "{id}", input: {{ isRead: true }}) {{
                    isRead name subject message
                }}
            }}"#
        ),
    )
    .await;
    assert_eq!(data["updateContact"]["isRead"], true);
    assert_eq!(data["updateContact"]["name"], "Visitor");
    assert_eq!(data["updateContact"]["subject"], "Hiring");

    let data = execute(&schema, &format!(r#"{{ contact(id: "{id}") {{ isRead }} }}"#)).await;
    assert_eq!(data["contact"]["isRead"], true);
}

#[tokio::test]
async fn list_me_preserves_insertion_order() {
    let schema = build_test_schema();

    for email in ["first@example.com", "second@example.com"] {
        execute(
            &schema,
            &format!(
                r#"mutation {{
                    createMe(input: {{
                        firstName: "A", lastName: "B",
                        email: "{email}", phone: "555-0100"
                    }}) {{ id }}
                }}"#
            ),
        )
        .await;
    }

    let data = execute(&schema, r#"{ listMe { email } }"#).await;
    let emails: Vec<&str> = data["listMe"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["first@example.com", "second@example.com"]);
}

#[tokio::test]
async fn malformed_ids_are_validation_errors() {
    let schema = build_test_schema();

    let response =
        execute_expecting_error(&schema, r#"{ project(id: "not-a-number") { id } }"#).await;
    assert_eq!(response["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
}

#[tokio::test]
async fn invalid_urls_are_rejected_with_field_details() {
    let schema = build_test_schema();

    let response = execute_expecting_error(
        &schema,
        r#"mutation {
            createMe(input: {
                firstName: "A", lastName: "B",
                email: "a@example.com", phone: "555-0100",
                github: "github dot com"
            }) { id }
        }"#,
    )
    .await;
    assert_eq!(response["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
}
