//! End-to-end: crawl a mock site and write the CSV report the way the
//! binary does.

use link_warden::report::write_report_if_broken;
use link_warden::{parse_seed, CrawlConfig, Crawler};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

#[tokio::test]
async fn test_crawl_and_write_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r##"<a href="/docs/">Docs</a>
                <a href="/blog">Blog</a>
                <a href="https://crates.io/crates/url">url</a>
                <a href="#main">Skip</a>"##,
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/docs/"))
        .respond_with(html(
            r#"<a href="install">Install</a><a href="../">Home</a><a href="old.html">Old</a>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/docs/install"))
        .respond_with(html(r#"<a href="/docs/">Back</a>"#))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/docs/old.html"))
        .respond_with(ResponseTemplate::new(410))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blog"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let seed = parse_seed(&server.uri()).unwrap();
    let config = CrawlConfig {
        timeout: Duration::from_secs(2),
        ..CrawlConfig::default()
    };

    let report = Crawler::new(seed, &config).unwrap().run().await;
    assert_eq!(report.pages_fetched, 5);
    assert!(report.has_broken_links());

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("result.csv");
    assert!(write_report_if_broken(&out, &report).unwrap());

    let base = server.uri();
    let expected = format!(
        "Origin,Target,Error\n\
         {base}/docs/,{base}/docs/old.html,Fail: 410 Gone\n\
         {base}/,{base}/blog,Fail: 404 Not Found\n"
    );
    assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
}

#[tokio::test]
async fn test_healthy_site_has_nothing_to_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/about">About</a>"#))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html(r#"<a href="/">Home</a>"#))
        .expect(1)
        .mount(&server)
        .await;

    let seed = parse_seed(&server.uri()).unwrap();
    let report = Crawler::new(seed, &CrawlConfig::default())
        .unwrap()
        .run()
        .await;

    assert_eq!(report.pages_fetched, 2);
    assert!(!report.has_broken_links());

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("result.csv");
    assert!(!write_report_if_broken(&out, &report).unwrap());
    assert!(!out.exists());
}
