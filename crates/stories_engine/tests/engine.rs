use std::sync::mpsc::RecvTimeoutError;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use stories_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchSettings, Fetcher, Hit,
    SearchResponse,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

fn init_logging() {
    engine_logging::initialize_for_tests();
}

fn hit(id: u64, title: &str) -> Hit {
    Hit {
        object_id: id,
        title: title.to_string(),
        url: String::new(),
        author: "someone".to_string(),
        num_comments: 0,
        points: 0,
    }
}

/// Answers from a fixed table keyed by url and records every call.
struct TableFetcher {
    calls: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl Fetcher for TableFetcher {
    async fn fetch(&self, url: &str) -> Result<SearchResponse, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        if url.contains("React") {
            Ok(SearchResponse {
                hits: vec![hit(0, "React"), hit(1, "Redux")],
                page: None,
            })
        } else {
            Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "boom".to_string(),
            })
        }
    }
}

/// Never resolves.
struct StuckFetcher;

#[async_trait::async_trait]
impl Fetcher for StuckFetcher {
    async fn fetch(&self, _url: &str) -> Result<SearchResponse, FetchError> {
        futures_util::future::pending().await
    }
}

fn completed(event: Result<EngineEvent, RecvTimeoutError>) -> (u64, String, Result<SearchResponse, FetchError>) {
    match event.expect("engine event") {
        EngineEvent::FetchCompleted {
            request_id,
            url,
            result,
        } => (request_id, url, result),
    }
}

#[test]
fn engine_reports_success_and_failure() {
    init_logging();
    let fetcher = Arc::new(TableFetcher {
        calls: Mutex::new(Vec::new()),
    });
    let engine = EngineHandle::with_fetcher(fetcher.clone());

    engine.enqueue(1, "http://search.test/?query=React&page=0");
    let (request_id, url, result) = completed(engine.recv_timeout(WAIT));
    assert_eq!(request_id, 1);
    assert_eq!(url, "http://search.test/?query=React&page=0");
    assert_eq!(result.expect("success").hits.len(), 2);

    engine.enqueue(2, "http://search.test/?query=Vue&page=0");
    let (request_id, _, result) = completed(engine.recv_timeout(WAIT));
    assert_eq!(request_id, 2);
    assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(500));

    assert_eq!(fetcher.calls.lock().unwrap().len(), 2);
    assert!(engine.try_recv().is_none());
}

#[test]
fn shutdown_cancels_pending_fetch() {
    init_logging();
    let engine = EngineHandle::with_fetcher(Arc::new(StuckFetcher));

    engine.enqueue(9, "http://search.test/?query=React&page=0");
    assert!(matches!(
        engine.recv_timeout(Duration::from_millis(100)),
        Err(RecvTimeoutError::Timeout)
    ));

    engine.shutdown();
    let (request_id, _, result) = completed(engine.recv_timeout(WAIT));
    assert_eq!(request_id, 9);
    assert_eq!(result.unwrap_err().kind, FailureKind::Cancelled);
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_fetches_over_http() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                r#"{"hits": [{"objectID": "3", "title": "JavaScript", "author": "Brendan Eich"}], "page": 0}"#,
                "application/json",
            ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default());
    let url = format!("{}/api/v1/search?query=JavaScript&page=0", server.uri());
    engine.enqueue(4, url);

    let event = tokio::task::spawn_blocking(move || engine.recv_timeout(WAIT))
        .await
        .expect("join");
    let (request_id, _, result) = completed(event);
    let response = result.expect("fetch ok");
    assert_eq!(request_id, 4);
    assert_eq!(response.page, Some(0));
    assert_eq!(response.hits[0].author, "Brendan Eich");
}
