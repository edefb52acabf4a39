use std::fmt;

/// The stage at which a transport failure occurred.
///
/// Carried inside [`ValorantError::Transport`] so operators can tell a DNS
/// failure from a timeout from a truncated body without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStage {
    /// Connection could not be established (DNS, refused, TLS).
    Connect,
    /// The request exceeded the configured timeout.
    Timeout,
    /// The connection dropped while reading the response body.
    Body,
    /// The response body was not valid JSON.
    Decode,
    /// Anything reqwest reports that does not fit the stages above.
    Request,
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestStage::Connect => "connect",
            RequestStage::Timeout => "timeout",
            RequestStage::Body => "body",
            RequestStage::Decode => "decode",
            RequestStage::Request => "request",
        };
        f.write_str(s)
    }
}

/// Error taxonomy for all SDK operations.
///
/// Variants carry owned strings rather than source errors so the type is
/// `Clone`; a coalesced in-flight failure is broadcast to every waiter.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValorantError {
    /// Network-level failure: unreachable host, timeout, dropped body,
    /// or a response that was not JSON.
    #[error("transport error at {stage} stage: {message}")]
    Transport {
        stage: RequestStage,
        message: String,
    },

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {status} for {endpoint}")]
    Status { status: u16, endpoint: String },

    /// The response envelope was structurally wrong (e.g. `data` missing or
    /// not an array). Hard failure; never retried.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// A single-entity lookup for an identifier that does not exist, or a
    /// lookup attempted with a blank identifier.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ValorantError {
    /// Whether the consuming layer's single transparent retry applies.
    ///
    /// Transport failures and non-2xx statuses are transient; invalid
    /// envelopes and missing entities are not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ValorantError::Transport { .. } | ValorantError::Status { .. }
        )
    }
}

impl From<reqwest::Error> for ValorantError {
    fn from(err: reqwest::Error) -> Self {
        let stage = if err.is_timeout() {
            RequestStage::Timeout
        } else if err.is_connect() {
            RequestStage::Connect
        } else if err.is_decode() {
            RequestStage::Decode
        } else if err.is_body() {
            RequestStage::Body
        } else {
            RequestStage::Request
        };
        ValorantError::Transport {
            stage,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ValorantError {
    fn from(err: serde_json::Error) -> Self {
        ValorantError::InvalidResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ValorantError>;
