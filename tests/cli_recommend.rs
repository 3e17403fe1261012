mod common;

use common::adspecta;
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;

fn two_spaces() -> serde_json::Value {
    json!([
        {
            "id": 3,
            "name": "MG Road Billboard",
            "type": "billboard",
            "price_per_month": 45000,
            "predicted_impressions": 120000,
            "audience_match": 0.7314,
            "final_score": 61.255
        },
        {
            "id": 7,
            "name": "Phoenix Mall Atrium Screen",
            "type": "digital_screen",
            "price_per_month": 52000,
            "predicted_impressions": 98000,
            "audience_match": 0.52,
            "final_score": 54.1
        }
    ])
}

#[test]
fn recommend_sends_the_exact_payload_and_renders_results() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "lat": 18.5204,
            "lng": 73.8567,
            "budget": 60000,
            "audience_age_min": 18,
            "audience_age_max": 60,
            "audience_type": "students"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(two_spaces().to_string())
        .create();

    adspecta()
        .args([
            "recommend",
            "--budget",
            "60000",
            "--audience",
            "students",
            "--age-min",
            "18",
            "--age-max",
            "60",
            "--api-url",
            &server.url(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 matching ad spaces"))
        .stdout(predicate::str::contains("MG Road Billboard"))
        .stdout(predicate::str::contains("Audience match: 0.73"))
        .stdout(predicate::str::contains("Phoenix Mall Atrium Screen"));

    mock.assert();
}

#[test]
fn recommend_reports_empty_result_sets() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();

    adspecta()
        .args([
            "recommend",
            "--budget",
            "500",
            "--audience",
            "general",
            "--age-min",
            "18",
            "--age-max",
            "60",
            "--api-url",
            &server.url(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results returned"))
        .stdout(predicate::str::contains("No results to show."));
}

#[test]
fn recommend_treats_error_objects_as_no_results() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/predict")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"No adspaces fit your budget"}"#)
        .create();

    adspecta()
        .args([
            "recommend",
            "--budget",
            "1",
            "--audience",
            "general",
            "--age-min",
            "18",
            "--age-max",
            "60",
            "--api-url",
            &server.url(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results returned"));
}

#[test]
fn recommend_surfaces_non_json_bodies() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/predict")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    adspecta()
        .args([
            "recommend",
            "--budget",
            "60000",
            "--audience",
            "general",
            "--age-min",
            "18",
            "--age-max",
            "60",
            "--api-url",
            &server.url(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Status: Request failed"))
        .stdout(predicate::str::contains("Internal Server Error"));
}

#[test]
fn recommend_tolerates_items_without_scores() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id":1,"name":"Station Underpass Panel","type":"poster","price_per_month":8000,"predicted_impressions":20000}]"#,
        )
        .create();

    adspecta()
        .args([
            "recommend",
            "--budget",
            "10000",
            "--audience",
            "general",
            "--age-min",
            "18",
            "--age-max",
            "60",
            "--api-url",
            &server.url(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 matching ad spaces"))
        .stdout(predicate::str::contains("Station Underpass Panel"))
        .stdout(predicate::str::contains("NaN").not())
        .stdout(predicate::str::contains("Audience match").not());
}

#[test]
fn recommend_resolves_base_url_from_environment() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();

    adspecta()
        .env("ADSPECTA_API_URL", server.url())
        .args([
            "recommend",
            "--budget",
            "60000",
            "--audience",
            "general",
            "--age-min",
            "18",
            "--age-max",
            "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results returned"));

    mock.assert();
}

#[test]
fn recommend_rejects_an_unparseable_base_url() {
    adspecta()
        .args([
            "recommend",
            "--budget",
            "60000",
            "--audience",
            "general",
            "--age-min",
            "18",
            "--age-max",
            "60",
            "--api-url",
            "not a url",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API base URL"));
}
