// SPDX-License-Identifier: MPL-2.0
//! Downloading gallery images over HTTP.

use super::image::{decode_image, ImageData};
use crate::error::{Error, Result};
use futures_util::StreamExt;
use std::time::Duration;

/// Per-request timeout for gallery images.
const IMAGE_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP client shared by all gallery downloads.
///
/// # Errors
///
/// Returns [`Error::Network`] if the TLS backend cannot be initialized.
pub fn image_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(IMAGE_TIMEOUT)
        .build()
        .map_err(Error::from)
}

/// Fetches `url` and decodes it off the UI thread.
///
/// The body is streamed and abandoned as soon as it grows past `max_bytes`.
/// Returns the URL alongside the outcome so results can be matched to cache
/// slots.
pub async fn fetch_image(
    client: reqwest::Client,
    url: String,
    max_bytes: u64,
) -> (String, Result<ImageData>) {
    let result = download(&client, &url, max_bytes).await;
    let result = match result {
        Ok(bytes) => tokio::task::spawn_blocking(move || decode_image(&bytes))
            .await
            .unwrap_or_else(|e| Err(Error::Image(format!("decode task failed: {e}")))),
        Err(err) => Err(err),
    };

    if let Err(err) = &result {
        tracing::debug!(%url, error = %err, "gallery image unavailable");
    }
    (url, result)
}

async fn download(client: &reqwest::Client, url: &str, max_bytes: u64) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?.error_for_status()?;

    if let Some(length) = response.content_length() {
        if length > max_bytes {
            return Err(Error::Network(format!(
                "image is {length} bytes, limit is {max_bytes}"
            )));
        }
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if (body.len() + chunk.len()) as u64 > max_bytes {
            return Err(Error::Network(format!(
                "image exceeds {max_bytes} bytes"
            )));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let client = reqwest::Client::new();
        // Port 9 on localhost is the discard service; nothing listens in CI.
        let (url, result) = fetch_image(client, "http://127.0.0.1:9/x.jpg".into(), 1024).await;
        assert_eq!(url, "http://127.0.0.1:9/x.jpg");
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[test]
    fn client_builds() {
        assert!(image_client().is_ok());
    }

    #[tokio::test]
    async fn invalid_url_is_network_error() {
        let client = reqwest::Client::new();
        let (_, result) = fetch_image(client, "not a url".into(), 1024).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
