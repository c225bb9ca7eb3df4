//! Minimal HTTP stand-in for a Kokoro server.
#![allow(dead_code)]

use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

const IO_TIMEOUT: Duration = Duration::from_secs(10);

pub struct MockServer {
    pub url: String,
    pub bodies: Arc<Mutex<Vec<serde_json::Value>>>,
    handle: Option<JoinHandle<io::Result<()>>>,
}

impl MockServer {
    /// Serves one canned `(status, body)` per incoming request, then stops.
    pub fn start(responses: Vec<(u16, Vec<u8>)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let url = format!("http://{}", listener.local_addr().expect("mock server address"));
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&bodies);

        let handle = std::thread::spawn(move || -> io::Result<()> {
            for (status, payload) in responses {
                let (stream, _) = listener.accept()?;
                let body = read_request(&stream)?;
                seen.lock()
                    .map_err(|_| io::Error::new(io::ErrorKind::Other, "request log poisoned"))?
                    .push(serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null));
                write_response(&stream, status, &payload)?;
            }
            Ok(())
        });

        Self {
            url,
            bodies,
            handle: Some(handle),
        }
    }

    /// Waits for every canned response to be served and returns the JSON
    /// bodies received. Panics with the server's I/O error if one occurred.
    pub fn join(mut self) -> Vec<serde_json::Value> {
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => panic!("mock server failed: {e}"),
                Err(_) => panic!("mock server thread panicked"),
            }
        }
        self.bodies.lock().expect("request log poisoned").clone()
    }
}

fn read_request(stream: &TcpStream) -> io::Result<Vec<u8>> {
    stream.set_read_timeout(Some(IO_TIMEOUT))?;
    let mut reader = BufReader::new(stream);

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed inside request headers",
            ));
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().map_err(|e| {
                    io::Error::new(io::ErrorKind::InvalidData, format!("bad content-length: {e}"))
                })?;
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;
    Ok(body)
}

fn write_response(mut stream: &TcpStream, status: u16, payload: &[u8]) -> io::Result<()> {
    stream.set_write_timeout(Some(IO_TIMEOUT))?;
    let head = format!(
        "HTTP/1.1 {} X\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        payload.len()
    );
    stream.write_all(head.as_bytes())?;
    stream.write_all(payload)?;
    stream.flush()
}

pub fn pcm16(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}
