//! HTTP resource client for the valorant-api.com endpoints.
//!
//! One shared [`reqwest::Client`] with a fixed timeout performs every GET.
//! All transport-level failures (unreachable, timeout, non-2xx, malformed
//! envelope) are logged with context and normalized into the crate error
//! taxonomy. Business-level absence (an empty `data` array) is a success.

use std::fmt;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, warn};

use crate::error::{Result, ValorantError};

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

/// The closed set of upstream endpoints the SDK talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Agents,
    /// Single-agent detail lookup, parameterized by uuid.
    Agent(String),
    Maps,
    Weapons,
    WeaponSkins,
    Sprays,
    PlayerCards,
    CompetitiveTiers,
    Bundles,
}

impl Endpoint {
    /// Path relative to the API base, without a leading slash.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Agents => "agents".to_string(),
            Endpoint::Agent(uuid) => format!("agents/{uuid}"),
            Endpoint::Maps => "maps".to_string(),
            Endpoint::Weapons => "weapons".to_string(),
            Endpoint::WeaponSkins => "weapons/skins".to_string(),
            Endpoint::Sprays => "sprays".to_string(),
            Endpoint::PlayerCards => "playercards".to_string(),
            Endpoint::CompetitiveTiers => "competitivetiers".to_string(),
            Endpoint::Bundles => "bundles".to_string(),
        }
    }

    /// Whether this endpoint addresses a single entity rather than a list.
    pub fn is_detail(&self) -> bool {
        matches!(self, Endpoint::Agent(_))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// The outer `{status, data}` wrapper every upstream response carries.
///
/// Both fields are defaulted: structural checks on `data` are the accessors'
/// responsibility (hard pre-check), not the client's.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub data: Value,
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Performs HTTP GETs against the upstream API.
///
/// Attaches the common request configuration: base address, bounded timeout,
/// and the `language` locale parameter on every request. The agents list
/// additionally constrains to playable characters.
pub struct ApiClient {
    http: Client,
    base_url: String,
    language: String,
}

impl ApiClient {
    /// Create a client with the given base address, locale, and timeout.
    pub fn new(
        base_url: impl Into<String>,
        language: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ValorantError::from)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: language.into(),
        })
    }

    /// The locale sent with every request.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The configured base address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint and decode its `{status, data}` envelope.
    ///
    /// Transport failures are logged and surfaced; no retry happens at this
    /// layer. A 404 on a detail endpoint maps to [`ValorantError::NotFound`].
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Envelope> {
        let url = format!("{}/{}", self.base_url, endpoint.path());
        let mut request = self
            .http
            .get(&url)
            .query(&[("language", self.language.as_str())]);
        if *endpoint == Endpoint::Agents {
            request = request.query(&[("isPlayableCharacter", "true")]);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let err = ValorantError::from(err);
                error!(endpoint = %endpoint, %err, "request failed");
                return Err(err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::NOT_FOUND && endpoint.is_detail() {
                let err = ValorantError::NotFound(format!("no entity at {endpoint}"));
                warn!(endpoint = %endpoint, "upstream has no such entity");
                return Err(err);
            }
            error!(endpoint = %endpoint, status = status.as_u16(), "upstream returned error status");
            return Err(ValorantError::Status {
                status: status.as_u16(),
                endpoint: endpoint.path(),
            });
        }

        match response.json::<Envelope>().await {
            Ok(envelope) => Ok(envelope),
            Err(err) => {
                let err = ValorantError::from(err);
                error!(endpoint = %endpoint, %err, "response envelope could not be decoded");
                Err(err)
            }
        }
    }
}
