use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

use crate::error::Result;

/// HYG star database v3 (~120k stars, ~33 MB of CSV).
pub const HYG_DATABASE_URL: &str = "https://rawcdn.githack.com/astronexus/HYG-Database/800de966fb36661c7c03e2f1eab62fbab9bec345/hygdata_v3.csv";

/// Boxed stream of body chunks.
pub type ChunkStream = Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>;

/// Issue a GET for `url` and return its body as a chunk stream.
///
/// Fails if the request cannot be sent or the response status is not a success.
pub async fn fetch_catalog(client: &reqwest::Client, url: &str) -> Result<ChunkStream> {
    tracing::info!(%url, "fetching catalog");
    let response = client.get(url).send().await?.error_for_status()?;
    tracing::debug!(
        status = %response.status(),
        content_length = ?response.content_length(),
        "catalog response"
    );
    Ok(Box::pin(response.bytes_stream()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use futures_util::StreamExt;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(status: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test http listener");
        let addr = listener.local_addr().expect("listener addr");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = [0u8; 1024];
            let mut request = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let head = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(body).await;
        });

        format!("http://{addr}/hyg.csv")
    }

    #[tokio::test]
    async fn test_fetch_streams_body() {
        let url = serve_once("200 OK", b"id,x\n1,2\n").await;
        let client = reqwest::Client::new();

        let mut stream = fetch_catalog(&client, &url).await.unwrap();
        let mut body = Vec::new();
        while let Some(chunk) = stream.next().await {
            body.extend_from_slice(&chunk.unwrap());
        }

        assert_eq!(body, b"id,x\n1,2\n");
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let url = serve_once("404 Not Found", b"").await;
        let client = reqwest::Client::new();

        let result = fetch_catalog(&client, &url).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
