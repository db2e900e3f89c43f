mod common;

use common::{ranked_fixture, StaticSource};
use openreview_crawler::{App, Config, RunOptions, Venue};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(source: &StaticSource, failing: &[&str]) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(query_param("invitation", "ICLR.cc/2025/Conference/-/Submission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notes": source.submissions,
            "count": source.submissions.len()
        })))
        .mount(&server)
        .await;

    for (forum, replies) in &source.replies {
        let response = if failing.contains(&forum.as_str()) {
            ResponseTemplate::new(502)
        } else {
            ResponseTemplate::new(200).set_body_json(json!({
                "notes": replies,
                "count": replies.len()
            }))
        };
        Mock::given(method("GET"))
            .and(path("/notes"))
            .and(query_param("forum", forum.as_str()))
            .respond_with(response)
            .mount(&server)
            .await;
    }

    server
}

fn config(server: &MockServer, dir: &std::path::Path) -> Config {
    Config {
        api_base_url: server.uri(),
        output_dir: dir.join("out").to_string_lossy().to_string(),
        failure_log_file: dir.join("failures.txt").to_string_lossy().to_string(),
        ..Config::default()
    }
}

fn options(limit: usize) -> RunOptions {
    RunOptions {
        venue: Venue::from_key("ICLR2025").unwrap(),
        limit,
        scan_limit: None,
    }
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_run_exports_both_categories() {
    let dir = tempfile::tempdir().unwrap();
    let server = serve(&ranked_fixture(), &[]).await;

    let app = App::initialize(config(&server, dir.path()), options(2)).unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.scanned, 4);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.top_accepted, vec!["p1", "p3"]);
    assert_eq!(summary.bottom_rejected, vec!["p4"]);

    let high = dir.path().join("out/ICLR2025_2_high_quality_papers.json");
    let low = dir.path().join("out/ICLR2025_2_low_quality_papers.json");
    assert_eq!(summary.exported, vec![high.clone(), low.clone()]);

    let high = read_json(&high);
    let keys: Vec<_> = high.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["p1", "p3"]);
    assert_eq!(high["p1"]["decision"], "Accept (Oral)");
    assert_eq!(high["p1"]["venue"], "ICLR 2025");

    let low = read_json(&low);
    assert_eq!(low["p4"]["review scores"], json!([3]));
}

#[tokio::test]
async fn test_run_survives_failed_forum() {
    let dir = tempfile::tempdir().unwrap();
    let server = serve(&ranked_fixture(), &["p4"]).await;

    let app = App::initialize(config(&server, dir.path()), options(5)).unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.scanned, 4);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.top_accepted, vec!["p1", "p3", "p2"]);
    assert!(summary.bottom_rejected.is_empty());
    assert_eq!(summary.exported.len(), 1);

    let failures = std::fs::read_to_string(dir.path().join("failures.txt")).unwrap();
    assert!(failures.contains("论文 p4 | 原因:"));
}

#[tokio::test]
async fn test_run_fails_when_submissions_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = App::initialize(config(&server, dir.path()), options(5)).unwrap();
    assert!(app.run().await.is_err());
}
