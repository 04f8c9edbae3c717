use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};
use timetable_core::{ApiClient, CurrentTermSource, ScheduleError, Session};

const SCHEDULE_BODY: &str = r#"[{
  "code": "IC5701",
  "name": "Compiladores e intérpretes",
  "section": "01",
  "term": "II-2024",
  "meetings": [{ "day": "Miércoles", "startTime": "13:00", "endTime": "14:50" }]
}]"#;

/// Serves a single HTTP response and hands back the raw request it answered.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let base_url = format!("http://{}/api", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("Failed to read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Failed to write response");
        String::from_utf8_lossy(&request).into_owned()
    });

    (base_url, handle)
}

#[tokio::test]
async fn test_fetch_sends_bearer_token() {
    let (base_url, server) = serve_once("200 OK", SCHEDULE_BODY).await;
    let session = Session::new(format!("{base_url}/"), Some("secret".to_string()));

    let client = ApiClient::new().unwrap();
    let entries = client.fetch_current_term(&session).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].professor, None);
    assert_eq!(entries[0].meetings[0].to_string(), "Wednesday 13:00-14:50");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/users/me/schedule HTTP/1.1"));
    let lower = request.to_lowercase();
    assert!(lower.contains("authorization: bearer secret"));
    assert!(lower.contains("accept: application/json"));
}

#[tokio::test]
async fn test_fetch_without_token_omits_authorization() {
    let (base_url, server) = serve_once("200 OK", "[]").await;
    let session = Session::new(base_url, None);

    let entries = ApiClient::new()
        .unwrap()
        .fetch_current_term(&session)
        .await
        .unwrap();
    assert!(entries.is_empty());

    let request = server.await.unwrap();
    assert!(!request.to_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn test_error_status_uses_body_message() {
    let (base_url, _server) =
        serve_once("401 Unauthorized", r#"{"message": "Token expired"}"#).await;
    let session = Session::new(base_url, Some("stale".to_string()));

    let err = ApiClient::new()
        .unwrap()
        .fetch_current_term(&session)
        .await
        .unwrap_err();

    match &err {
        ScheduleError::Api { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "Token expired");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.needs_reauth());
}

#[tokio::test]
async fn test_error_status_without_message_falls_back() {
    let (base_url, _server) = serve_once("500 Internal Server Error", "<html></html>").await;
    let session = Session::new(base_url, None);

    let err = ApiClient::new()
        .unwrap()
        .fetch_current_term(&session)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "API error (500): Request to /users/me/schedule failed with status 500"
    );
    assert!(!err.needs_reauth());
}
