//! 触发器测试：地址拼接、认证头、保存端调用次数、失败时不保存、重叠触发互不影响。

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;

use crate::config::ConnectionConfig;
use crate::document::DocumentId;
use crate::tests::{
    MockCmisServer, RecordingSink, error_response, pdf_response, unreachable_base_url,
};
use crate::{DownloadError, DownloadTrigger};

const DEFAULT_ID: &str = "07cdb579-b845-46a7-b22f-f49fa4f7de8b";

fn trigger_for(
    server: &MockCmisServer,
    sink: &Arc<RecordingSink>,
) -> DownloadTrigger {
    DownloadTrigger::new(server.config("Administrator", "secret"), sink.clone())
        .unwrap()
}

fn expected_basic(user: &str, pass: &str) -> String {
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(format!("{user}:{pass}"))
    )
}

#[tokio::test]
async fn empty_field_requests_default_document() {
    let server = MockCmisServer::start(pdf_response(b"%PDF")).await;
    let sink = Arc::new(RecordingSink::default());
    let trigger = trigger_for(&server, &sink);

    let outcome = trigger.download("").await.unwrap();
    assert_eq!(outcome.document_id.as_str(), DEFAULT_ID);

    let requests = server.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(
        requests[0].target,
        format!(
            "/nuxeo/json/cmis/default/root?succinct=true&streamId=nuxeo%3Arendition%3Apdf&cmisselector=content&objectId={DEFAULT_ID}&download=attachment"
        )
    );
}

#[tokio::test]
async fn entered_id_replaces_default() {
    let server = MockCmisServer::start(pdf_response(b"%PDF")).await;
    let sink = Arc::new(RecordingSink::default());
    let trigger = trigger_for(&server, &sink);

    trigger.download("abc-123").await.unwrap();

    let requests = server.requests().await;
    let target = &requests[0].target;
    assert!(target.contains("objectId=abc-123"));
    assert!(!target.contains(DEFAULT_ID));
}

#[tokio::test]
async fn entered_id_persists_for_later_empty_fields() {
    let server = MockCmisServer::start(pdf_response(b"%PDF")).await;
    let sink = Arc::new(RecordingSink::default());
    let trigger = trigger_for(&server, &sink);

    trigger.download("first-doc").await.unwrap();
    trigger.download("").await.unwrap();

    let requests = server.requests().await;
    assert!(requests[1].target.contains("objectId=first-doc"));
    assert_eq!(trigger.current_document_id().unwrap().as_str(), "first-doc");
}

#[tokio::test]
async fn authorization_uses_config_at_call_time() {
    let server = MockCmisServer::start(pdf_response(b"%PDF")).await;
    let sink = Arc::new(RecordingSink::default());
    let trigger = trigger_for(&server, &sink);

    trigger.download("").await.unwrap();
    trigger
        .set_config(server.config("reader", "p@ss:word"))
        .unwrap();
    trigger.download("").await.unwrap();

    let requests = server.requests().await;
    assert_eq!(
        requests[0].authorization(),
        Some(expected_basic("Administrator", "secret").as_str())
    );
    assert_eq!(
        requests[1].authorization(),
        Some(expected_basic("reader", "p@ss:word").as_str())
    );
}

#[tokio::test]
async fn success_saves_payload_once_under_fixed_name() {
    let payload = b"%PDF-1.7\n\x00\x01binary";
    let server = MockCmisServer::start(pdf_response(payload)).await;
    let sink = Arc::new(RecordingSink::default());
    let trigger = trigger_for(&server, &sink);

    let outcome = trigger.download("").await.unwrap();

    let saves = sink.saves();
    assert_eq!(saves.len(), 1);
    assert_eq!(saves[0].0.as_ref(), payload);
    assert_eq!(saves[0].1, "myFile.pdf");
    assert_eq!(outcome.bytes, payload.len());
    assert_eq!(outcome.file_name, "myFile.pdf");
}

#[tokio::test]
async fn error_status_skips_sink_and_reports_cmis_details() {
    let server = MockCmisServer::start(error_response(
        404,
        r#"{"exception":"objectNotFound","message":"Object not found"}"#,
        "application/json",
    ))
    .await;
    let sink = Arc::new(RecordingSink::default());
    let trigger = trigger_for(&server, &sink);

    let err = trigger.download("missing").await.unwrap_err();

    match err {
        DownloadError::Status {
            status,
            exception,
            message,
        } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(exception.as_deref(), Some("objectNotFound"));
            assert_eq!(message.as_deref(), Some("Object not found"));
        }
        other => panic!("预期 Status，得到 {:?}", other),
    }
    assert!(sink.saves().is_empty());
}

#[tokio::test]
async fn unauthorized_without_json_body_skips_sink() {
    let server =
        MockCmisServer::start(error_response(401, "<html>denied</html>", "text/html")).await;
    let sink = Arc::new(RecordingSink::default());
    let trigger = trigger_for(&server, &sink);

    let handle = trigger.activate("");
    let err = handle.await.unwrap().unwrap_err();

    assert!(matches!(
        err,
        DownloadError::Status { exception: None, message: None, .. }
    ));
    assert!(sink.saves().is_empty());
}

#[tokio::test]
async fn network_failure_skips_sink() {
    let base_url = unreachable_base_url().await;
    let sink = Arc::new(RecordingSink::default());
    let trigger = DownloadTrigger::new(
        ConnectionConfig::new(base_url, "u", "p"),
        sink.clone(),
    )
    .unwrap();

    let err = trigger.download("").await.unwrap_err();

    assert!(matches!(err, DownloadError::Request(_)));
    assert!(sink.saves().is_empty());
}

#[tokio::test]
async fn unset_base_url_fails_before_any_request() {
    let sink = Arc::new(RecordingSink::default());
    let trigger =
        DownloadTrigger::new(ConnectionConfig::default(), sink.clone()).unwrap();

    let err = trigger.activate("doc").await.unwrap().unwrap_err();

    assert!(matches!(err, DownloadError::MissingConfig("base_url")));
    assert!(sink.saves().is_empty());
    // 标识替换发生在地址校验之前
    assert_eq!(trigger.current_document_id().unwrap().as_str(), "doc");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn overlapping_activations_are_independent() {
    let server = MockCmisServer::start_with_slow_document(
        pdf_response(b"%PDF"),
        "slow-doc",
        Duration::from_millis(300),
    )
    .await;
    let sink = Arc::new(RecordingSink::default());
    let trigger = trigger_for(&server, &sink);

    let slow = trigger.activate("slow-doc");
    let fast = trigger.activate("fast-doc");

    let fast_outcome = fast.await.unwrap().unwrap();
    assert_eq!(fast_outcome.document_id.as_str(), "fast-doc");
    assert!(!slow.is_finished(), "慢请求此时应仍在进行中");

    let slow_outcome = slow.await.unwrap().unwrap();
    assert_eq!(slow_outcome.document_id.as_str(), "slow-doc");

    let mut targets: Vec<String> =
        server.requests().await.into_iter().map(|r| r.target).collect();
    targets.sort();
    assert_eq!(targets.len(), 2);
    assert!(targets[0].contains("objectId=fast-doc"));
    assert!(!targets[0].contains("slow-doc"));
    assert!(targets[1].contains("objectId=slow-doc"));
    assert!(!targets[1].contains("fast-doc"));

    let saves = sink.saves();
    assert_eq!(saves.len(), 2);
    assert!(saves.iter().all(|(_, name)| name == "myFile.pdf"));
}

#[tokio::test]
async fn builder_options_shape_the_request() {
    let server = MockCmisServer::start(pdf_response(b"%PDF")).await;
    let sink = Arc::new(RecordingSink::default());
    let trigger = trigger_for(&server, &sink)
        .with_default_document_id(DocumentId::parse("start doc").unwrap())
        .with_file_name("rendition.pdf")
        .encode_document_id();

    trigger.download("").await.unwrap();

    let requests = server.requests().await;
    assert!(requests[0].target.contains("objectId=start%20doc&"));
    assert_eq!(sink.saves()[0].1, "rendition.pdf");
}

#[test]
fn prepare_snapshots_each_activation() {
    let sink = Arc::new(RecordingSink::default());
    let trigger = DownloadTrigger::new(
        ConnectionConfig::new("http://localhost:8080/nuxeo", "u", "p"),
        sink,
    )
    .unwrap();

    let first = trigger.prepare("doc-a").unwrap();
    let second = trigger.prepare("doc-b").unwrap();

    assert!(first.url.as_str().contains("objectId=doc-a&"));
    assert!(second.url.as_str().contains("objectId=doc-b&"));
    assert_eq!(first.document_id.as_str(), "doc-a");
}

#[tokio::test]
async fn custom_client_and_config_round_trip() {
    let server = MockCmisServer::start(pdf_response(b"%PDF")).await;
    let sink = Arc::new(RecordingSink::default());
    let client = reqwest::Client::builder()
        .user_agent("cmis-download-test")
        .build()
        .unwrap();
    let trigger = trigger_for(&server, &sink).with_client(client);
    assert_eq!(trigger.file_name(), "myFile.pdf");

    let updated = server.config("reader", "changed");
    trigger.set_config(updated.clone()).unwrap();
    assert_eq!(trigger.config().unwrap(), updated);

    trigger.download("").await.unwrap();

    let requests = server.requests().await;
    assert_eq!(requests[0].header("user-agent"), Some("cmis-download-test"));
    assert_eq!(
        requests[0].authorization(),
        Some(expected_basic("reader", "changed").as_str())
    );
}
