// SPDX-License-Identifier: MPL-2.0
//! Multipart HTTP delivery of applications.

use crate::app::config::MAX_RESUME_BYTES;
use crate::application::port::ApplicationSubmitter;
use crate::domain::career::{Application, Receipt, ResumeFile, SubmissionError};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// POSTs `multipart/form-data` to a configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    /// Builds a submitter whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be created.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::from)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ApplicationSubmitter for HttpSubmitter {
    fn submit(&self, application: Application) -> BoxFuture<'static, std::result::Result<Receipt, SubmissionError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            let form = build_form(application).await?;
            let response = client
                .post(&endpoint)
                .multipart(form)
                .send()
                .await
                .map_err(classify)?;

            let status = response.status();
            if !status.is_success() {
                tracing::warn!(%status, "application rejected by endpoint");
                return Err(SubmissionError::Rejected(status.as_u16()));
            }

            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!(error = %err, "could not read response body, no reference kept");
                    String::new()
                }
            };
            let reference = Some(body.trim())
                .filter(|text| !text.is_empty() && text.len() <= 128)
                .map(str::to_string);
            Ok(Receipt { reference })
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

async fn build_form(application: Application) -> std::result::Result<Form, SubmissionError> {
    let mut form = Form::new()
        .text("name", application.name)
        .text("email", application.email)
        .text("phone", application.phone)
        .text("coverLetter", application.cover_letter)
        .text("position", application.position);

    if let Some(resume) = application.resume {
        form = form.part("resume", resume_part(&resume).await?);
    }
    Ok(form)
}

async fn resume_part(resume: &ResumeFile) -> std::result::Result<Part, SubmissionError> {
    let metadata = tokio::fs::metadata(resume.path())
        .await
        .map_err(|e| SubmissionError::Resume(e.to_string()))?;
    if metadata.len() > MAX_RESUME_BYTES {
        return Err(SubmissionError::Resume(format!(
            "file is larger than {} MB",
            MAX_RESUME_BYTES / (1024 * 1024)
        )));
    }

    let bytes = tokio::fs::read(resume.path())
        .await
        .map_err(|e| SubmissionError::Resume(e.to_string()))?;
    Part::bytes(bytes)
        .file_name(resume.file_name())
        .mime_str(resume.mime_type())
        .map_err(|e| SubmissionError::Resume(e.to_string()))
}

fn classify(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        SubmissionError::Timeout
    } else {
        SubmissionError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::career::ApplicationForm;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn application() -> Application {
        ApplicationForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9848294006".into(),
            cover_letter: "I like Rust".into(),
            resume: None,
        }
        .validate()
        .expect("valid form")
    }

    /// Serves one connection: reads the request, optionally waits, then
    /// writes `response`. Yields the raw request text.
    async fn one_shot_server(
        response: &'static str,
        delay: Duration,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let url = format!("http://{}/apply", listener.local_addr().expect("addr"));
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.expect("read");
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                // Multipart bodies end with the closing boundary.
                if n == 0 || text.trim_end().ends_with("--") {
                    break;
                }
            }
            tokio::time::sleep(delay).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).into_owned()
        });
        (url, handle)
    }

    #[tokio::test]
    async fn success_sends_all_fields() {
        let (url, server) = one_shot_server(
            "HTTP/1.1 200 OK\r\ncontent-length: 6\r\nconnection: close\r\n\r\nAPP-42",
            Duration::ZERO,
        )
        .await;
        let submitter = HttpSubmitter::new(url, Duration::from_secs(5)).expect("client");

        let receipt = submitter.submit(application()).await.expect("accepted");
        assert_eq!(receipt.reference.as_deref(), Some("APP-42"));

        let request = server.await.expect("server task");
        assert!(request.starts_with("POST /apply"));
        for field in ["name", "email", "phone", "coverLetter", "position"] {
            assert!(request.contains(&format!("name=\"{field}\"")), "{field}");
        }
        assert!(request.contains("Student Internship Application"));
    }

    #[tokio::test]
    async fn truncated_body_still_counts_as_accepted() {
        let (url, _server) = one_shot_server(
            "HTTP/1.1 200 OK\r\ncontent-length: 64\r\nconnection: close\r\n\r\nAPP",
            Duration::ZERO,
        )
        .await;
        let submitter = HttpSubmitter::new(url, Duration::from_secs(5)).expect("client");

        let receipt = submitter.submit(application()).await.expect("accepted");
        assert!(receipt.reference.is_none());
    }

    #[tokio::test]
    async fn server_error_is_rejected() {
        let (url, _server) = one_shot_server(
            "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            Duration::ZERO,
        )
        .await;
        let submitter = HttpSubmitter::new(url, Duration::from_secs(5)).expect("client");

        let result = submitter.submit(application()).await;
        assert_eq!(result, Err(SubmissionError::Rejected(503)));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let (url, _server) = one_shot_server(
            "HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n",
            Duration::from_secs(5),
        )
        .await;
        let submitter = HttpSubmitter::new(url, Duration::from_millis(200)).expect("client");

        let result = submitter.submit(application()).await;
        assert_eq!(result, Err(SubmissionError::Timeout));
    }

    #[tokio::test]
    async fn missing_resume_file_fails_before_sending() {
        let mut app = application();
        app.resume = Some(ResumeFile::new("/nonexistent/dir/cv.pdf").expect("pdf accepted"));
        let submitter =
            HttpSubmitter::new("http://127.0.0.1:9/apply", Duration::from_secs(1)).expect("client");

        let result = submitter.submit(app).await;
        assert!(matches!(result, Err(SubmissionError::Resume(_))));
    }

    #[tokio::test]
    async fn resume_is_attached_as_file_part() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, b"%PDF-1.4 fake").expect("write resume");

        let (url, server) = one_shot_server(
            "HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            Duration::ZERO,
        )
        .await;
        let mut app = application();
        app.resume = Some(ResumeFile::new(&path).expect("pdf accepted"));
        let submitter = HttpSubmitter::new(url, Duration::from_secs(5)).expect("client");

        let receipt = submitter.submit(app).await.expect("accepted");
        assert!(receipt.reference.is_none());

        let request = server.await.expect("server task");
        assert!(request.contains("name=\"resume\"; filename=\"cv.pdf\""));
        assert!(request.contains("application/pdf"));
        assert!(request.contains("%PDF-1.4 fake"));
    }
}
