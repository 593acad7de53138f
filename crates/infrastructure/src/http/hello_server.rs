//! One-shot HTTP responder: accepts a single connection, reads one request
//! and answers with a fixed `text/plain` body.

use std::net::SocketAddr;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info};

const READ_BUFFER_SIZE: usize = 4096;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("bind failed on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read listener address: {0}")]
    LocalAddr(#[source] std::io::Error),

    #[error("accept failed: {0}")]
    Accept(#[source] std::io::Error),

    #[error("recv failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("client closed connection before sending data")]
    ClientClosed,

    #[error("send failed: {0}")]
    Write(#[source] std::io::Error),
}

/// Builds the complete HTTP/1.1 response for `body`.
pub fn build_response(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: text/plain\r\n\r\n{}",
        body.len(),
        body
    )
}

/// What a finished exchange looked like.
///
/// A failed send does not abort the exchange; it is kept in `sent`.
#[derive(Debug)]
pub struct ServedRequest {
    pub peer: SocketAddr,
    pub request: String,
    pub sent: Result<usize, ServeError>,
}

pub struct HelloServer {
    listener: TcpListener,
    body: String,
}

impl HelloServer {
    pub async fn bind(addr: &str, body: impl Into<String>) -> Result<Self, ServeError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServeError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        Ok(Self {
            listener,
            body: body.into(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServeError> {
        self.listener.local_addr().map_err(ServeError::LocalAddr)
    }

    /// Waits for the single client this server will ever handle.
    async fn accept(self) -> Result<Connection, ServeError> {
        let (stream, peer) = self.listener.accept().await.map_err(ServeError::Accept)?;
        info!(peer = %peer, "Client connected");

        // The listener is dropped here: no further clients are accepted.
        Ok(Connection {
            stream,
            peer,
            body: self.body,
        })
    }

    /// Accept, read one request, hand it to `on_request`, respond, close.
    pub async fn serve_once<F>(self, on_request: F) -> Result<ServedRequest, ServeError>
    where
        F: FnOnce(SocketAddr, &str) + Send,
    {
        let mut connection = self.accept().await?;
        let request = connection.read_request().await?;
        on_request(connection.peer, &request);
        let sent = connection.respond().await;

        Ok(ServedRequest {
            peer: connection.peer,
            request,
            sent,
        })
    }
}

struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    body: String,
}

impl Connection {
    /// Reads once, up to the buffer size. Zero bytes means the client hung up.
    async fn read_request(&mut self) -> Result<String, ServeError> {
        let mut buf = vec![0u8; READ_BUFFER_SIZE - 1];
        let n = self.stream.read(&mut buf).await.map_err(ServeError::Read)?;
        if n == 0 {
            return Err(ServeError::ClientClosed);
        }

        debug!(peer = %self.peer, bytes = n, "Request received");
        Ok(String::from_utf8_lossy(&buf[..n]).into_owned())
    }

    /// Sends the whole response and shuts the write half down.
    async fn respond(&mut self) -> Result<usize, ServeError> {
        let response = build_response(&self.body);
        self.stream
            .write_all(response.as_bytes())
            .await
            .map_err(ServeError::Write)?;
        self.stream.shutdown().await.map_err(ServeError::Write)?;

        debug!(peer = %self.peer, bytes = response.len(), "Response sent");
        Ok(response.len())
    }
}
