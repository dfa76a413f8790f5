mod server;

use pagegrade::analyzer::analyze;
use pagegrade::document::HtmlDocument;
use pagegrade::fetcher;
use pagegrade::http_client::build_http_client;
use pagegrade::models::RobotsStatus;
use server::{RobotsBehavior, spawn_test_server};
use url::Url;

#[tokio::test]
async fn test_good_page_only_flags_missing_https() {
    let base = spawn_test_server(RobotsBehavior::Ok).await;
    let url = Url::parse(&format!("{}/good", base)).expect("valid URL");
    let client = build_http_client(10).expect("client should build");

    let (html, retrieval) = fetcher::retrieve(&client, &url)
        .await
        .expect("retrieve should succeed");
    assert!(!retrieval.is_secure_transport);
    assert_eq!(retrieval.robots_status, RobotsStatus::Present);

    let report = analyze(&HtmlDocument::parse(&html), retrieval);

    assert_eq!(report.page.title, "A well-optimized page");
    assert_eq!(
        report.page.meta_description,
        "An example page used to exercise the analyzer."
    );
    assert!(report.page.word_count >= 300);
    assert_eq!(report.page.image_count, 2);
    // alt="" is intentional and must not count as missing
    assert_eq!(report.page.images_without_alt, 0);
    assert_eq!(report.page.heading_levels, vec![1, 2, 3, 4, 5, 6]);
    assert!(report.page.missing_levels.is_empty());

    // the test server only speaks http, so that is the one deduction left
    assert_eq!(report.score, 80);
    assert_eq!(report.tips, vec!["Page does not use HTTPS."]);
}

#[tokio::test]
async fn test_weak_page_scores_ten_with_six_tips() {
    let base = spawn_test_server(RobotsBehavior::NotFound).await;
    let url = Url::parse(&format!("{}/weak", base)).expect("valid URL");
    let client = build_http_client(10).expect("client should build");

    let (html, retrieval) = fetcher::retrieve(&client, &url)
        .await
        .expect("retrieve should succeed");
    assert_eq!(retrieval.robots_status, RobotsStatus::Absent);

    let report = analyze(&HtmlDocument::parse(&html), retrieval);

    assert_eq!(report.page.images_without_alt, 2);
    assert!(report.page.word_count < 300);

    // no title, no meta description, thin content, 2 alt-less images,
    // plain http, robots.txt 404: 100 - 10 - 10 - 15 - 10 - 20 - 5
    assert_eq!(report.score, 10);
    assert_eq!(
        report.tips,
        vec![
            "Page has no title.",
            "Page has no meta description.",
            "Page content is too thin (under 300 words).",
            "2 image(s) missing the ALT attribute.",
            "Page does not use HTTPS.",
            "robots.txt file is missing.",
        ]
    );
}

#[tokio::test]
async fn test_heading_gaps_and_empty_headings_reported() {
    let base = spawn_test_server(RobotsBehavior::Ok).await;
    let url = Url::parse(&format!("{}/gaps", base)).expect("valid URL");
    let client = build_http_client(10).expect("client should build");

    let (html, retrieval) = fetcher::retrieve(&client, &url)
        .await
        .expect("retrieve should succeed");

    let report = analyze(&HtmlDocument::parse(&html), retrieval);

    assert_eq!(report.page.heading_levels, vec![1, 2, 3]);
    assert_eq!(report.page.missing_levels, vec![4, 5, 6]);
    assert_eq!(report.page.empty_heading_count(), 1);

    // thin content, http, one empty heading, three missing levels
    assert_eq!(report.score, 45);
    assert!(
        report
            .tips
            .contains(&"1 heading(s) are empty.".to_string())
    );
    assert!(
        report
            .tips
            .contains(&"Missing heading levels: H4, H5, H6.".to_string())
    );
}

#[tokio::test]
async fn test_restricted_robots_is_informational() {
    let base = spawn_test_server(RobotsBehavior::Forbidden).await;
    let url = Url::parse(&format!("{}/good", base)).expect("valid URL");
    let client = build_http_client(10).expect("client should build");

    let (html, retrieval) = fetcher::retrieve(&client, &url)
        .await
        .expect("retrieve should succeed");
    assert_eq!(retrieval.robots_status, RobotsStatus::Restricted);

    let report = analyze(&HtmlDocument::parse(&html), retrieval);

    // http costs 20; the restricted robots.txt adds a tip but no deduction
    assert_eq!(report.score, 80);
    assert_eq!(
        report.tips,
        vec![
            "Page does not use HTTPS.",
            "robots.txt file is restricted and cannot be accessed publicly.",
        ]
    );
}

#[tokio::test]
async fn test_rerunning_engine_is_byte_identical() {
    let base = spawn_test_server(RobotsBehavior::Ok).await;
    let url = Url::parse(&format!("{}/good", base)).expect("valid URL");
    let client = build_http_client(10).expect("client should build");

    let (html, retrieval) = fetcher::retrieve(&client, &url)
        .await
        .expect("retrieve should succeed");

    let doc = HtmlDocument::parse(&html);
    let first = serde_json::to_vec(&analyze(&doc, retrieval)).expect("serializes");
    let second = serde_json::to_vec(&analyze(&doc, retrieval)).expect("serializes");
    assert_eq!(first, second);
}
