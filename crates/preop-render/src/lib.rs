//! Client for the remote rendering collaborator.
//!
//! The service accepts raw OOXML spreadsheet bytes over a synchronous POST
//! and returns rendered PDF bytes, or a non-success status carrying an
//! error description. One failed attempt is terminal; there is no retry.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Content type of the spreadsheet payload.
pub const SPREADSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Errors from the rendering service.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The request never completed.
    #[error("conversion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a failure description.
    #[error("{0}")]
    Service(String),
}

/// Failure body the service returns on a non-success status.
#[derive(Debug, Deserialize)]
struct ServiceFailure {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

/// Blocking client for the conversion endpoint.
#[derive(Debug, Clone)]
pub struct HttpRenderer {
    base_url: String,
    client: Client,
}

impl HttpRenderer {
    /// Client for a service base URL such as `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Convert spreadsheet bytes to rendered document bytes.
    pub fn convert(&self, xlsx: &[u8]) -> Result<Vec<u8>, RenderError> {
        let url = format!(
            "{}/api/convert-to-pdf",
            self.base_url.trim_end_matches('/')
        );
        debug!(%url, bytes = xlsx.len(), "sending conversion request");
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, SPREADSHEET_CONTENT_TYPE)
            .body(xlsx.to_vec())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RenderError::Service(failure_message(status, &body)));
        }
        let bytes = response.bytes()?.to_vec();
        info!(bytes = bytes.len(), "conversion succeeded");
        Ok(bytes)
    }
}

impl preop_core::Renderer for HttpRenderer {
    fn convert(&self, xlsx: &[u8]) -> Result<Vec<u8>, String> {
        Self::convert(self, xlsx).map_err(|error| error.to_string())
    }
}

/// Pull the service's own description out of a failure body when present.
fn failure_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(failure) = serde_json::from_str::<ServiceFailure>(body) {
        return failure.details.unwrap_or(failure.error);
    }
    if body.trim().is_empty() {
        format!("conversion service returned {status}")
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::failure_message;

    #[test]
    fn failure_message_prefers_service_details() {
        let body = r#"{"error":"Error al convertir el archivo","details":"soffice not found"}"#;
        assert_eq!(
            failure_message(StatusCode::INTERNAL_SERVER_ERROR, body),
            "soffice not found"
        );
        let body = r#"{"error":"No se recibió el archivo Excel"}"#;
        assert_eq!(
            failure_message(StatusCode::BAD_REQUEST, body),
            "No se recibió el archivo Excel"
        );
    }

    #[test]
    fn failure_message_falls_back_to_body_or_status() {
        assert_eq!(
            failure_message(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down"
        );
        assert_eq!(
            failure_message(StatusCode::BAD_GATEWAY, "  "),
            "conversion service returned 502 Bad Gateway"
        );
    }
}
