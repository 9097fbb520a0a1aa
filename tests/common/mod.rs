//! Shared helpers for integration tests.

use ingest_guard::{GuardConfig, GuardServer};
use tokio::net::TcpListener;

/// Spawn a gateway on an ephemeral port and return its base URL. The
/// listener is bound before the task is spawned, so requests can be sent
/// immediately.
pub async fn spawn_gateway(config: GuardConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let server = GuardServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{addr}")
}
