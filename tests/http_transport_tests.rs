use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread;

use battle_client::{Endpoints, Game, GameStatus, HttpTransport, Transport};
use serde_json::{json, Value};

/// Raw request as seen by the server.
struct Captured {
    request_line: String,
    headers: Vec<(String, String)>,
    body: Value,
}

impl Captured {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Serve exactly one HTTP exchange on an ephemeral port, answering with
/// `status` and `body`.
fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            let (k, v) = line.split_once(':').unwrap();
            headers.push((k.trim().to_string(), v.trim().to_string()));
        }
        let len: usize = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .map(|(_, v)| v.parse().unwrap())
            .unwrap_or(0);
        let mut raw = vec![0u8; len];
        reader.read_exact(&mut raw).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
        .unwrap();
        stream.flush().unwrap();

        Captured {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: serde_json::from_slice(&raw).unwrap(),
        }
    });
    (format!("http://{}", addr), handle)
}

#[test]
fn test_post_sends_json_and_parses_reply() -> anyhow::Result<()> {
    let (base, server) = serve_once("200 OK", r#"{"id":"2746","x":7,"y":6}"#);
    let mut transport = HttpTransport::new()?;
    let reply = transport.post(&format!("{}/register", base), &json!({"name": "Bob", "email": "bob@example.com"}))?;
    assert_eq!(Value::Object(reply), json!({"id": "2746", "x": 7, "y": 6}));

    let captured = server.join().unwrap();
    assert_eq!(captured.request_line, "POST /register HTTP/1.1");
    assert_eq!(captured.header("content-type"), Some("application/json"));
    assert_eq!(captured.header("accept"), Some("application/json"));
    assert_eq!(captured.body, json!({"name": "Bob", "email": "bob@example.com"}));
    Ok(())
}

#[test]
fn test_error_status_is_not_a_failure() -> anyhow::Result<()> {
    let (base, server) = serve_once("400 Bad Request", r#"{"error":"something went wrong"}"#);
    let endpoints = Endpoints::new(format!("{}/register", base), format!("{}/nuke", base));
    let mut game = Game::resume("2746", HttpTransport::new()?).with_endpoints(endpoints);

    let reply = game.nuke(5, 9)?;
    assert_eq!(Value::Object(reply), json!({"error": "something went wrong"}));
    assert_eq!(game.status(), GameStatus::Start);

    let captured = server.join().unwrap();
    assert_eq!(captured.request_line, "POST /nuke HTTP/1.1");
    assert_eq!(captured.body, json!({"id": "2746", "x": 5, "y": 9}));
    Ok(())
}

#[test]
fn test_non_object_reply_fails() -> anyhow::Result<()> {
    let (base, server) = serve_once("200 OK", "[1,2,3]");
    let mut transport = HttpTransport::new()?;
    assert!(transport.post(&format!("{}/nuke", base), &json!({})).is_err());
    server.join().unwrap();
    Ok(())
}
