//! In-process blocking HTTP stub for endpoint checker tests.
//!
//! One request per connection, `Connection: close`. Routes map a path to a
//! canned status and body; unknown paths get 404 with an empty body. A route
//! registered with [`Reply::Hangup`] closes the socket without answering.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Maximum header section size (32 KiB)
const MAX_HEADER_SIZE: usize = 32 * 1024;

#[derive(Clone)]
pub enum Reply {
    Respond { status: u16, body: &'static [u8] },
    Hangup,
}

pub struct StubServer {
    addr: SocketAddr,
    hits: Arc<Mutex<Vec<(String, String)>>>,
}

impl StubServer {
    pub fn start(routes: &[(&'static str, Reply)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        let routes: HashMap<&'static str, Reply> = routes.iter().cloned().collect();
        let hits = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let Some((method, path)) = read_request_line(&mut stream) else {
                    continue;
                };
                recorded.lock().unwrap().push((method, path.clone()));

                match routes.get(path.as_str()) {
                    Some(Reply::Respond { status, body }) => {
                        write_response(&mut stream, *status, body)
                    }
                    Some(Reply::Hangup) => {
                        let _ = stream.shutdown(std::net::Shutdown::Both);
                    }
                    None => write_response(&mut stream, 404, b""),
                }
            }
        });

        Self { addr, hits }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// (method, path) of every request received so far
    pub fn hits(&self) -> Vec<(String, String)> {
        self.hits.lock().unwrap().clone()
    }
}

/// Base URL of a loopback port with nothing listening on it
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

fn read_request_line(stream: &mut TcpStream) -> Option<(String, String)> {
    let mut header_buf = Vec::with_capacity(1024);
    let mut byte = [0u8; 1];

    loop {
        match stream.read(&mut byte) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {
                header_buf.push(byte[0]);
                if header_buf.len() > MAX_HEADER_SIZE {
                    return None;
                }
                if header_buf.ends_with(b"\r\n\r\n") {
                    break;
                }
            }
        }
    }

    let mut headers = [httparse::EMPTY_HEADER; 64];
    let mut req = httparse::Request::new(&mut headers);
    match req.parse(&header_buf) {
        Ok(httparse::Status::Complete(_)) => Some((
            req.method.unwrap_or("").to_string(),
            req.path.unwrap_or("/").to_string(),
        )),
        _ => None,
    }
}

fn write_response(stream: &mut TcpStream, status: u16, body: &[u8]) {
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}
