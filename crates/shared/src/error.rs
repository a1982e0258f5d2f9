//! Client-side error taxonomy for calls to the MyRSS server.

use thiserror::Error;

/// Outcome of an HTTP exchange with the server.
///
/// `Network` covers requests that could not be sent or whose response
/// could not be read; `Http` covers responses received with a
/// non-success status; `Deserialize` covers successful responses whose
/// body did not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server rejected request (HTTP {status})")]
    Http { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Deserialize(String),
}

impl ApiError {
    /// True when a response was received and the server said no.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Http { .. })
    }
}

/// Derive a short user-facing message from an API error.
///
/// The server replies to bad form submissions with a plain-text body
/// ("Please provide a URL or RSS content", "Failed to parse feed: ...");
/// prefer that text when it is present and reasonably short.
pub fn user_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { status, body } => {
            let body = body.trim();
            if !body.is_empty() && body.len() <= 200 && !body.starts_with('<') {
                body.to_string()
            } else {
                format!("The server rejected the request (HTTP {status})")
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_short_plain_bodies() {
        let err = ApiError::Http {
            status: 400,
            body: "Please provide a URL or RSS content".to_string(),
        };
        assert_eq!(user_message(&err), "Please provide a URL or RSS content");
    }

    #[test]
    fn user_message_falls_back_for_html_or_empty_bodies() {
        let html = ApiError::Http {
            status: 500,
            body: "<!DOCTYPE html><html>...</html>".to_string(),
        };
        assert_eq!(
            user_message(&html),
            "The server rejected the request (HTTP 500)"
        );

        let empty = ApiError::Http {
            status: 502,
            body: String::new(),
        };
        assert_eq!(
            user_message(&empty),
            "The server rejected the request (HTTP 502)"
        );
    }

    #[test]
    fn network_errors_use_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(user_message(&err), "network error: connection refused");
    }
}
