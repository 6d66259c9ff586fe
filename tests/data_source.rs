// SPDX-License-Identifier: MPL-2.0
use squad_desk::application::port::{DataError, TeamDataSource};
use squad_desk::infrastructure::{fixtures, HttpDataSource, MockDataSource, Operation};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn mock_answers_every_operation_after_its_delay() {
    let source = MockDataSource::new(Duration::from_millis(800));
    let started = tokio::time::Instant::now();

    let teams = source.teams().await.expect("teams");
    let roster = source.roster(&teams[0]).await.expect("roster");
    let drills = source.drills().await.expect("drills");
    let sessions = source.sessions().await.expect("sessions");

    assert!(started.elapsed() >= Duration::from_millis(3200));
    assert!(teams.iter().any(|team| team.id == fixtures::DEFAULT_TEAM_ID));
    assert!(!roster.is_empty());
    assert_eq!(drills, fixtures::drills());
    assert_eq!(sessions, fixtures::sessions());
}

#[tokio::test]
async fn failure_hook_only_hits_selected_operations() {
    let source: Arc<dyn TeamDataSource> = Arc::new(
        MockDataSource::new(Duration::ZERO)
            .with_failure_hook(Arc::new(|operation| operation == Operation::Drills)),
    );

    assert_eq!(source.drills().await, Err(DataError::Unavailable));
    assert!(source.sessions().await.is_ok());
    assert!(source.teams().await.is_ok());
}

#[tokio::test]
async fn malformed_base_url_fails_at_request_time() {
    let source = HttpDataSource::new("not a url").expect("client builds");
    assert!(matches!(source.drills().await, Err(DataError::Transport(_))));
}

/// Serves one canned response per connection, in order, then stops.
async fn serve_canned(responses: Vec<(u16, String)>) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local port");
    let address = listener.local_addr().expect("local address");

    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut chunk).await.expect("read request");
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
            }
            let response = format!(
                "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            let _ = stream.shutdown().await;
        }
    });

    format!("http://{address}/api/")
}

#[tokio::test]
async fn http_source_maps_status_decode_and_success() {
    let teams_json = serde_json::to_string(&fixtures::teams()).expect("encode fixtures");
    let base_url = serve_canned(vec![
        (503, String::new()),
        (200, "not json".to_string()),
        (200, teams_json),
    ])
    .await;
    let source = HttpDataSource::new(base_url).expect("client builds");

    assert_eq!(source.teams().await, Err(DataError::Status(503)));
    assert!(matches!(source.teams().await, Err(DataError::Decode(_))));
    assert_eq!(source.teams().await, Ok(fixtures::teams()));
}
