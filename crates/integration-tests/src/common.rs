//! Common utilities for integration tests

use crate::*;
use mockito::{Mock, ServerGuard};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Client pointed at `base_url` with test-friendly settings
pub fn test_client(base_url: &str) -> EolClient {
    EolClient::with_options([
        ClientOption::BaseUrl(base_url.to_string()),
        ClientOption::UserAgent("endoflife-integration/1.0".to_string()),
        ClientOption::Timeout(Duration::from_secs(10)),
    ])
    .expect("Failed to create test client")
}

/// Register a `GET path` mock answering 200 with `body`
pub async fn mock_json(server: &mut ServerGuard, path: &str, body: Value) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub fn release_json(name: &str, release_date: &str, eol_from: Option<&str>) -> Value {
    json!({
        "name": name,
        "codename": null,
        "label": name,
        "releaseDate": release_date,
        "isLts": false,
        "ltsFrom": null,
        "isEol": eol_from.is_some(),
        "eolFrom": eol_from,
        "isMaintained": eol_from.is_none(),
        "latest": {"name": format!("{name}.1"), "date": release_date, "link": null}
    })
}

pub fn product_json(name: &str, releases: Vec<Value>) -> Value {
    json!({
        "name": name,
        "label": name.to_uppercase(),
        "aliases": [],
        "category": "lang",
        "tags": ["lang"],
        "uri": format!("https://endoflife.date/api/v1/products/{name}"),
        "identifiers": [{"id": format!("pkg:generic/{name}"), "type": "purl"}],
        "labels": {"eol": "Security Support"},
        "links": {"html": format!("https://endoflife.date/{name}")},
        "releases": releases
    })
}

pub fn list_json(result: Vec<Value>) -> Value {
    json!({
        "schema_version": "1.2.0",
        "total": result.len(),
        "result": result
    })
}

pub fn item_json(result: Value) -> Value {
    json!({
        "schema_version": "1.2.0",
        "result": result
    })
}

/// TCP server that accepts connections and never writes a byte.
///
/// Accepted sockets are held open so requests hang until the caller gives up.
pub struct SilentServer {
    pub url: String,
    accepted: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl SilentServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind silent server");
        let addr = listener.local_addr().expect("Failed to read local address");
        let accepted = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&accepted);
        let handle = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                held.push(socket);
            }
        });

        Self {
            url: format!("http://{addr}"),
            accepted,
            handle,
        }
    }

    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }
}

impl Drop for SilentServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Response head promising more body than is ever sent
pub const TRUNCATED_RESPONSE: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"sch";

/// What a [`StallingServer`] does after the partial body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterPartialBody {
    /// Keep the connection open without sending the rest
    Hold,
    /// Close the connection before the promised length
    Close,
}

/// TCP server that answers 200 and then stalls partway through the body.
pub struct StallingServer {
    pub url: String,
    handle: JoinHandle<()>,
}

impl StallingServer {
    pub async fn start(after: AfterPartialBody) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stalling server");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((mut socket, _)) = listener.accept().await {
                if send_partial_response(&mut socket).await.is_err() {
                    continue;
                }
                match after {
                    AfterPartialBody::Hold => held.push(socket),
                    AfterPartialBody::Close => drop(socket),
                }
            }
        });

        Self {
            url: format!("http://{addr}"),
            handle,
        }
    }
}

impl Drop for StallingServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Read the request head, then write the truncated response
async fn send_partial_response(socket: &mut TcpStream) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        request.extend_from_slice(&buf[..n]);
    }

    socket.write_all(TRUNCATED_RESPONSE).await?;
    socket.flush().await
}
