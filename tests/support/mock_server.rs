use std::{
    io::{Read, Write},
    net::{TcpListener, TcpStream},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

/// One-shot HTTP server standing in for the prediction service.
pub struct MockPredictionServer {
    pub url: String,
    requests: Receiver<String>,
    release: Option<Sender<()>>,
}

impl MockPredictionServer {
    /// Answer the first request immediately with `status` and a JSON `body`.
    pub fn json(status: &str, body: &str) -> Self {
        Self::start(status, body, false)
    }

    /// Like [`MockPredictionServer::json`], but hold the response until [`release`] is called.
    ///
    /// [`release`]: MockPredictionServer::release
    pub fn gated(status: &str, body: &str) -> Self {
        Self::start(status, body, true)
    }

    fn start(status: &str, body: &str, gated: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server addr");
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (request_tx, requests) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let request = read_request(&mut stream);
                let _ = request_tx.send(request);
                if gated {
                    let _ = release_rx.recv();
                }
                let _ = stream.write_all(response.as_bytes());
            }
        });
        Self {
            url: format!("http://{addr}/predict"),
            requests,
            release: gated.then_some(release_tx),
        }
    }

    /// Wait for the request the server received.
    pub fn received_request(&self, timeout: Duration) -> Option<String> {
        self.requests.recv_timeout(timeout).ok()
    }

    /// Let a gated server send its response.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            let _ = release.send(());
        }
    }
}

/// An endpoint on a port nothing is listening on.
pub fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}/predict")
}

/// JSON body of a captured HTTP request.
pub fn request_body(request: &str) -> serde_json::Value {
    let start = request.find("\r\n\r\n").expect("request has a header terminator") + 4;
    serde_json::from_str(&request[start..]).expect("request body is JSON")
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let Ok(read) = stream.read(&mut buf) else {
            break;
        };
        if read == 0 {
            break;
        }
        data.extend_from_slice(&buf[..read]);
        if request_complete(&data) {
            break;
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

fn request_complete(data: &[u8]) -> bool {
    let text = String::from_utf8_lossy(data);
    let Some(head_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let length = text[..head_end]
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    data.len() >= head_end + 4 + length
}
