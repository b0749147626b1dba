use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stt_clova::{ClovaClient, Language};
use transcriber_core::{BatchController, BatchEvent, BatchOutcome, BatchRuntime};

struct CollectingRuntime {
    events: Mutex<Vec<BatchEvent>>,
}

impl CollectingRuntime {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
        })
    }

    fn events(&self) -> Vec<BatchEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl BatchRuntime for CollectingRuntime {
    fn emit(&self, event: BatchEvent) {
        self.events.lock().unwrap().push(event);
    }
}

async fn wait_until_pending(controller: &BatchController) {
    for _ in 0..100 {
        if controller.is_pending() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("submission never became pending");
}

fn client_for(server: &MockServer) -> ClovaClient {
    ClovaClient::builder()
        .api_base(server.uri())
        .client_id("id")
        .client_secret("secret")
        .build()
}

#[tokio::test]
async fn no_file_issues_no_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recog/v1/stt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"text": ""})))
        .expect(0)
        .mount(&server)
        .await;

    let controller = BatchController::new();
    let runtime = CollectingRuntime::new();

    let accepted = controller
        .submit(&client_for(&server), &*runtime, "s1", None, Language::Kor)
        .await;

    assert!(accepted);

    let events = runtime.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        BatchEvent::BatchFailed { error, .. } => {
            assert!(error.contains("no audio file selected"), "got: {error}");
        }
        other => panic!("expected BatchFailed, got {other:?}"),
    }

    assert!(matches!(
        controller.last_outcome(),
        Some(BatchOutcome::Failure(_))
    ));

    server.verify().await;
}

#[tokio::test]
async fn success_retains_response_verbatim() {
    let server = MockServer::start().await;
    let body = serde_json::json!({"text": "hello", "quota": 3});

    Mock::given(method("POST"))
        .and(path("/recog/v1/stt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let controller = BatchController::new();
    let runtime = CollectingRuntime::new();

    controller
        .submit(
            &client_for(&server),
            &*runtime,
            "s1",
            Some(Bytes::from_static(b"audio")),
            Language::Eng,
        )
        .await;

    let events = runtime.events();
    assert!(matches!(&events[0], BatchEvent::BatchStarted { .. }));
    match &events[1] {
        BatchEvent::BatchResponse { response, .. } => assert_eq!(response, &body),
        other => panic!("expected BatchResponse, got {other:?}"),
    }

    match controller.last_outcome() {
        Some(BatchOutcome::Success(value)) => assert_eq!(value, body),
        other => panic!("expected success outcome, got {other:?}"),
    }
    assert!(!controller.is_pending());
}

#[tokio::test]
async fn http_failure_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recog/v1/stt"))
        .respond_with(ResponseTemplate::new(415).set_body_string("bad audio"))
        .mount(&server)
        .await;

    let controller = BatchController::new();
    let runtime = CollectingRuntime::new();

    controller
        .submit(
            &client_for(&server),
            &*runtime,
            "s1",
            Some(Bytes::from_static(b"not audio")),
            Language::Kor,
        )
        .await;

    let events = runtime.events();
    match events.last().unwrap() {
        BatchEvent::BatchFailed { error, .. } => {
            assert!(error.contains("415"), "got: {error}");
            assert!(error.contains("bad audio"), "got: {error}");
        }
        other => panic!("expected BatchFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn pending_submission_makes_resubmit_a_noop() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recog/v1/stt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"text": "slow"}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let controller = Arc::new(BatchController::new());
    let runtime = CollectingRuntime::new();
    let client = Arc::new(client_for(&server));

    let first = tokio::spawn({
        let controller = controller.clone();
        let runtime = runtime.clone();
        let client = client.clone();
        async move {
            controller
                .submit(
                    &client,
                    &*runtime,
                    "s1",
                    Some(Bytes::from_static(b"audio")),
                    Language::Kor,
                )
                .await
        }
    });

    wait_until_pending(&controller).await;

    let second = controller
        .submit(
            &*client,
            &*runtime,
            "s2",
            Some(Bytes::from_static(b"audio")),
            Language::Kor,
        )
        .await;
    assert!(!second, "second submit must be a no-op while pending");

    assert!(first.await.unwrap());
    assert!(!controller.is_pending());

    // Exactly one request reached the server.
    server.verify().await;

    let started: Vec<_> = runtime
        .events()
        .iter()
        .filter(|e| matches!(e, BatchEvent::BatchStarted { .. }))
        .cloned()
        .collect();
    assert_eq!(started.len(), 1);
}

#[tokio::test]
async fn new_submission_supersedes_previous_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recog/v1/stt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"text": "ok"})))
        .mount(&server)
        .await;

    let controller = BatchController::new();
    let runtime = CollectingRuntime::new();
    let client = client_for(&server);

    controller
        .submit(
            &client,
            &*runtime,
            "s1",
            Some(Bytes::from_static(b"audio")),
            Language::Kor,
        )
        .await;
    assert!(matches!(
        controller.last_outcome(),
        Some(BatchOutcome::Success(_))
    ));

    // The follow-up fails before any network activity, and its failure
    // replaces the earlier success.
    controller
        .submit(&client, &*runtime, "s2", None, Language::Kor)
        .await;
    assert!(matches!(
        controller.last_outcome(),
        Some(BatchOutcome::Failure(_))
    ));
}
