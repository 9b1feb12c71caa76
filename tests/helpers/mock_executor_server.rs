use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, oneshot};

async fn serve(app: Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

/// A `/transcribe` endpoint that always answers with `status` and `body`.
pub async fn start_mock_executor(
    status: u16,
    body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let app = Router::new().route(
        "/transcribe",
        post(move || async move {
            let status = StatusCode::from_u16(status).unwrap();
            (status, body).into_response()
        }),
    );
    serve(app).await
}

/// Like [`start_mock_executor`], but forwards every received JSON payload.
pub async fn start_capturing_executor(
    body: &'static str,
) -> (
    String,
    oneshot::Sender<()>,
    mpsc::UnboundedReceiver<serde_json::Value>,
) {
    let (payload_tx, payload_rx) = mpsc::unbounded_channel();
    let app = Router::new().route(
        "/transcribe",
        post(move |Json(payload): Json<serde_json::Value>| {
            let payload_tx = payload_tx.clone();
            async move {
                payload_tx.send(payload).ok();
                (StatusCode::OK, body).into_response()
            }
        }),
    );
    let (base_url, shutdown_tx) = serve(app).await;
    (base_url, shutdown_tx, payload_rx)
}

/// Answers only after `delay`.
pub async fn start_slow_executor(delay: Duration) -> (String, oneshot::Sender<()>) {
    let app = Router::new().route(
        "/transcribe",
        post(move || async move {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, r#"{"transcription":"late"}"#).into_response()
        }),
    );
    serve(app).await
}

/// A base URL with nothing listening behind it.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
