mod common;

use common::ranked_fixture;
use openreview_crawler::models::DEFAULT_WEB_URL;
use openreview_crawler::services::exporter::PENDING_DECISION;
use openreview_crawler::services::export;
use openreview_crawler::{AppError, CrawlReport, Crawler, Paper, Venue};
use serde_json::Value;

async fn crawled_papers() -> Vec<Paper> {
    let crawler = Crawler::new(ranked_fixture(), &Venue::from_key("ICLR2025").unwrap());
    CrawlReport::collect(crawler.crawl(100).await.unwrap())
        .await
        .papers
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("papers.json");
    let mut papers = crawled_papers().await;
    papers[1].decision = None;

    let written = export(&papers, "ICLR 2025", DEFAULT_WEB_URL, &path).unwrap();

    assert_eq!(written, 4);
    let document = read_json(&path);
    let object = document.as_object().unwrap();
    assert_eq!(object.len(), 4);

    for paper in &papers {
        let entry = &object[&paper.id];
        match &paper.decision {
            Some(decision) => assert_eq!(entry["decision"], decision.as_str()),
            None => assert_eq!(entry["decision"], PENDING_DECISION),
        }
        assert_eq!(entry["venue"], "ICLR 2025");
        assert_eq!(entry["title"], paper.title.as_str());
    }

    let p2 = &object["p2"];
    assert_eq!(p2["review scores"], serde_json::json!([6, 8]));
    assert_eq!(
        p2["strengths"],
        serde_json::json!(["- Strength from r21", "- Strength from r22"])
    );
    assert_eq!(p2["link"], "https://openreview.net/forum?id=p2");
}

#[tokio::test]
async fn test_export_is_pretty_printed_with_four_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("papers.json");
    let papers = crawled_papers().await;

    export(papers.iter().take(1), "ICLR 2025", DEFAULT_WEB_URL, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n    \"p1\": {\n        \"venue\""));
}

#[test]
fn test_export_empty_list_writes_empty_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");

    let written = export(&Vec::<Paper>::new(), "ICLR 2025", DEFAULT_WEB_URL, &path).unwrap();

    assert_eq!(written, 0);
    assert_eq!(read_json(&path), serde_json::json!({}));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("papers.json");

    let err = export(&Vec::<Paper>::new(), "ICLR 2025", DEFAULT_WEB_URL, &path).unwrap_err();

    assert!(matches!(err, AppError::Export { .. }));
}
