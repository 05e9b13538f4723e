use std::sync::{Arc, Mutex, Once};

use watcher_app::runner::run_watch;
use watcher_app::surface::ResultSurface;
use watcher_core::QueryParams;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(watch_logging::initialize_for_tests);
}

#[derive(Default, Clone)]
struct RecordingSurface {
    lead: Arc<Mutex<Vec<String>>>,
    raw: Arc<Mutex<Vec<String>>>,
}

impl ResultSurface for RecordingSurface {
    fn set_lead(&mut self, text: &str) {
        self.lead.lock().unwrap().push(text.to_string());
    }

    fn set_raw(&mut self, text: &str) {
        self.raw.lock().unwrap().push(text.to_string());
    }
}

fn json_body(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

async fn watch(page_url: String, surface: &RecordingSurface) -> anyhow::Result<()> {
    let mut task_surface = surface.clone();
    tokio::task::spawn_blocking(move || {
        let task_id = QueryParams::from_url(&page_url)
            .task_id()
            .map(str::to_owned);
        run_watch(&page_url, task_id, &mut task_surface)
    })
    .await
    .expect("join watch thread")
}

#[tokio::test(flavor = "multi_thread")]
async fn watches_until_ready_and_renders_both_regions() {
    init_logging();
    let server = MockServer::start().await;
    // First poll answers not-ready, then burns out; the second mock takes
    // over for the poll after the delay. expect(1) on both pins the total
    // request count to exactly two.
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(query_param("task_id", "abc123"))
        .respond_with(json_body(r#"{"ready": false}"#))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(query_param("task_id", "abc123"))
        .respond_with(json_body(
            r#"{"ready": true, "result": "Passed", "raw_base64": "UGFzc2Vk"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let surface = RecordingSurface::default();
    let page_url = format!("{}/main?task_id=abc123", server.uri());

    watch(page_url, &surface).await.expect("watch ok");

    assert_eq!(surface.lead.lock().unwrap().as_slice(), ["Passed"]);
    assert_eq!(surface.raw.lock().unwrap().as_slice(), ["Passed"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn immediately_ready_task_polls_once() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(json_body(
            r#"{"ready": true, "result": "OK", "raw_base64": "aGVsbG8="}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let surface = RecordingSurface::default();
    let page_url = format!("{}/main?task_id=t1", server.uri());

    watch(page_url, &surface).await.expect("watch ok");

    assert_eq!(surface.lead.lock().unwrap().as_slice(), ["OK"]);
    assert_eq!(surface.raw.lock().unwrap().as_slice(), ["hello"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn page_without_task_id_never_polls() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(json_body(r#"{"ready": true}"#))
        .expect(0)
        .mount(&server)
        .await;

    let surface = RecordingSurface::default();
    let page_url = format!("{}/main", server.uri());

    watch(page_url, &surface).await.expect("inert ok");

    assert!(surface.lead.lock().unwrap().is_empty());
    assert!(surface.raw.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_task_id_never_polls() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(json_body(r#"{"ready": true}"#))
        .expect(0)
        .mount(&server)
        .await;

    let surface = RecordingSurface::default();
    let page_url = format!("{}/main?task_id=", server.uri());

    watch(page_url, &surface).await.expect("inert ok");

    assert!(surface.lead.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn bad_payload_fails_after_the_lead_is_set() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(json_body(
            r#"{"ready": true, "result": "Done", "raw_base64": "@@garbage@@"}"#,
        ))
        .mount(&server)
        .await;

    let surface = RecordingSurface::default();
    let page_url = format!("{}/main?task_id=t1", server.uri());

    let err = watch(page_url, &surface).await.unwrap_err();
    assert!(err.to_string().contains("base64"), "error: {err}");

    // The lead was rendered before the decode blew up; raw never was.
    assert_eq!(surface.lead.lock().unwrap().as_slice(), ["Done"]);
    assert!(surface.raw.lock().unwrap().is_empty());
}
