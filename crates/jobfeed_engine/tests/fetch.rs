use std::time::Duration;

use jobfeed_core::{FailureKind, SearchParams};
use jobfeed_engine::{FetchSettings, ListingSource, ReqwestListingSource};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> FetchSettings {
    let endpoint = format!("{}/positions.json", server.uri())
        .parse()
        .expect("mock endpoint url");
    FetchSettings::new(endpoint)
}

fn listing_body(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "type": "Full Time",
        "created_at": "Wed Jun 10 21:53:14 UTC 2020",
        "company": "Initech",
        "location": "Remote",
        "title": "Backend Engineer",
        "description": "Keep the listing feed fresh.",
        "url": format!("https://example.com/positions/{id}"),
    })
}

#[tokio::test]
async fn source_sends_markdown_page_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/positions.json"))
        .and(query_param("markdown", "true"))
        .and(query_param("page", "1"))
        .and(query_param("search", "engineer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![listing_body("a1")]))
        .expect(1)
        .mount(&server)
        .await;

    let source = ReqwestListingSource::new(settings_for(&server)).expect("build source");
    let params = SearchParams::new().with("search", "engineer");
    let jobs = source.fetch_page(&params, 1).await.expect("fetch ok");

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, "a1");
    assert_eq!(jobs[0].company, "Initech");
    assert_eq!(jobs[0].employment_type.as_deref(), Some("Full Time"));
}

#[tokio::test]
async fn source_forwards_the_requested_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/positions.json"))
        .and(query_param("page", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<serde_json::Value>::new()))
        .expect(1)
        .mount(&server)
        .await;

    let source = ReqwestListingSource::new(settings_for(&server)).expect("build source");
    let jobs = source.fetch_page(&SearchParams::new(), 7).await.expect("fetch ok");

    assert!(jobs.is_empty());
}

#[tokio::test]
async fn source_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/positions.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = ReqwestListingSource::new(settings_for(&server)).expect("build source");
    let err = source
        .fetch_page(&SearchParams::new(), 1)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn source_fails_on_a_body_that_is_not_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/positions.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let source = ReqwestListingSource::new(settings_for(&server)).expect("build source");
    let err = source
        .fetch_page(&SearchParams::new(), 1)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn source_fails_on_a_json_object_instead_of_a_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/positions.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "rate limited"})),
        )
        .mount(&server)
        .await;

    let source = ReqwestListingSource::new(settings_for(&server)).expect("build source");
    let err = source
        .fetch_page(&SearchParams::new(), 1)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn source_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/positions.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(Vec::<serde_json::Value>::new()),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let source = ReqwestListingSource::new(settings).expect("build source");
    let err = source
        .fetch_page(&SearchParams::new(), 1)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}
