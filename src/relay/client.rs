//! EmailJS client for delivering contact messages
//!
//! Messages are posted to the EmailJS REST API, which renders them through a
//! template and forwards them to the site owner's inbox.

use super::MessageRelay;
use crate::config::RelayConfig;
use crate::contact::DeliveryPayload;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

/// Default EmailJS send endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Errors raised while talking to the relay
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Relay is not configured, missing: {}", .missing.join(", "))]
    NotConfigured { missing: Vec<&'static str> },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Request body understood by the EmailJS send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a DeliveryPayload,
}

/// Relay backed by the EmailJS REST API
pub struct EmailJsRelay {
    client: Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    /// Create a relay from explicit configuration.
    ///
    /// Missing credentials are not an error here; every send will fail with
    /// [`RelayError::NotConfigured`] instead.
    pub fn new(config: RelayConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!("portfolio-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self::with_client(client, config)
    }

    /// Create a relay around an existing HTTP client
    pub fn with_client(client: Client, config: RelayConfig) -> Self {
        if !config.is_complete() {
            tracing::warn!(
                missing = ?config.missing_fields(),
                "EmailJS credentials incomplete, contact messages cannot be delivered"
            );
        }

        Self { client, config }
    }

    fn endpoint(&self) -> &str {
        self.config.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn build_request<'a>(
        &'a self,
        payload: &'a DeliveryPayload,
    ) -> Result<SendRequest<'a>, RelayError> {
        match (
            self.config.service_id.as_deref(),
            self.config.template_id.as_deref(),
            self.config.public_key.as_deref(),
        ) {
            (Some(service_id), Some(template_id), Some(user_id)) => Ok(SendRequest {
                service_id,
                template_id,
                user_id,
                template_params: payload,
            }),
            _ => Err(RelayError::NotConfigured {
                missing: self.config.missing_fields(),
            }),
        }
    }
}

#[async_trait]
impl MessageRelay for EmailJsRelay {
    async fn send(&self, payload: &DeliveryPayload) -> Result<(), RelayError> {
        let request = self.build_request(payload)?;

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "EmailJS accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn payload() -> DeliveryPayload {
        DeliveryPayload {
            from_name: "Jane Doe".to_string(),
            from_email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
            to_name: "Sheikh Azwad Abrar Nabil".to_string(),
        }
    }

    /// Local test servers must not be routed through a proxy from the environment
    fn local_relay(endpoint: String) -> EmailJsRelay {
        let client = Client::builder().no_proxy().build().unwrap();
        EmailJsRelay::with_client(client, configured(Some(endpoint)))
    }

    fn configured(endpoint: Option<String>) -> RelayConfig {
        RelayConfig {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("pk_123".to_string()),
            endpoint,
        }
    }

    /// Serve a single HTTP request with a canned response, returning the
    /// request body that was received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}/send", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            let header_end = loop {
                let n = stream.read(&mut buf).await.unwrap();
                received.extend_from_slice(&buf[..n]);
                if let Some(pos) = find(&received, b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let headers = String::from_utf8_lossy(&received[..header_end]).to_lowercase();
            let content_length: usize = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .map(|v| v.trim().parse().unwrap())
                .unwrap_or(0);
            while received.len() < header_end + content_length {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "{status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&received[header_end..]).to_string()
        });

        (address, handle)
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[test]
    fn test_request_body_shape() {
        let relay = EmailJsRelay::new(configured(None));
        let payload = payload();
        let request = relay.build_request(&payload).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["service_id"], "service_abc");
        assert_eq!(json["template_id"], "template_xyz");
        assert_eq!(json["user_id"], "pk_123");
        assert_eq!(json["template_params"]["from_name"], "Jane Doe");
        assert_eq!(json["template_params"]["from_email"], "jane@example.com");
        assert_eq!(json["template_params"]["subject"], "Hello");
        assert_eq!(json["template_params"]["message"], "Hi there");
        assert_eq!(json["template_params"]["to_name"], "Sheikh Azwad Abrar Nabil");
    }

    #[test]
    fn test_default_endpoint() {
        let relay = EmailJsRelay::new(configured(None));
        assert_eq!(relay.endpoint(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_unconfigured_relay_fails_without_network() {
        let relay = EmailJsRelay::new(RelayConfig {
            service_id: Some("service_abc".to_string()),
            ..Default::default()
        });

        let err = relay.send(&payload()).await.unwrap_err();
        match err {
            RelayError::NotConfigured { missing } => {
                assert_eq!(missing, vec!["template_id", "public_key"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_status_is_delivered() {
        let (address, server) = serve_once("HTTP/1.1 200 OK", "OK").await;
        let relay = local_relay(address);

        relay.send(&payload()).await.unwrap();

        let body = server.await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["user_id"], "pk_123");
        assert_eq!(json["template_params"]["subject"], "Hello");
    }

    #[tokio::test]
    async fn test_error_status_is_rejected() {
        let (address, server) =
            serve_once("HTTP/1.1 400 Bad Request", "The Public Key is invalid").await;
        let relay = local_relay(address);

        let err = relay.send(&payload()).await.unwrap_err();
        server.await.unwrap();

        match err {
            RelayError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "The Public Key is invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_not_configured_message_lists_fields() {
        let err = RelayError::NotConfigured {
            missing: vec!["service_id", "public_key"],
        };
        assert_eq!(
            err.to_string(),
            "Relay is not configured, missing: service_id, public_key"
        );
    }
}
