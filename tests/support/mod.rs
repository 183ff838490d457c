//! Minimal stub HTTP backend for end-to-end tests.
//!
//! Serves one request per connection on a loopback port and journals every
//! call; the binary under test reaches it through the `GITHUB_API_URL` /
//! `GITHUB_UPLOAD_URL` overrides.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// A request as the stub backend saw it
pub struct StubRequest {
    pub method: String,
    /// Request target including any query string
    pub path: String,
    pub body: Vec<u8>,
}

/// Canned response a test handler hands back
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    pub fn not_found() -> Self {
        Self::json(404, r#"{"message": "Not Found"}"#)
    }
}

/// Loopback HTTP responder driven by a per-test handler closure
pub struct StubServer {
    base_url: String,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl StubServer {
    /// Bind an ephemeral port and serve requests through `handler` on a
    /// background thread for the rest of the test process.
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&StubRequest) -> StubResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub backend");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let calls = Arc::new(Mutex::new(Vec::new()));

        let journal = Arc::clone(&calls);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let Some(request) = read_request(&stream) else {
                    continue;
                };
                journal
                    .lock()
                    .unwrap()
                    .push((request.method.clone(), request.path.clone()));
                write_response(stream, handler(&request));
            }
        });

        Self { base_url, calls }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every `(method, path)` pair received so far, in arrival order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

fn read_request(stream: &TcpStream) -> Option<StubRequest> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':')
            && name.eq_ignore_ascii_case("content-length")
        {
            content_length = value.trim().parse().ok()?;
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;

    Some(StubRequest { method, path, body })
}

fn write_response(mut stream: TcpStream, response: StubResponse) {
    let reason = match response.status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        _ => "",
    };
    let _ = write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    let _ = stream.flush();
}
