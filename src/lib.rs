//! Valorant SDK for Rust.
//!
//! Provides a high-level async client for the public valorant-api.com
//! game-data service: agents, maps, weapons, skins, sprays, player cards,
//! competitive tiers, and bundles. Fetched collections are validated
//! advisorily against expected shapes, held in an in-memory query cache
//! with a two-tier freshness policy, and filtered in memory.
//!
//! # Quick start
//!
//! ```no_run
//! use valorant_sdk::ValorantSdk;
//!
//! # async fn demo() -> valorant_sdk::Result<()> {
//! let sdk = ValorantSdk::builder().language("pt-BR").build()?;
//!
//! let agents = sdk.agents().list().await?;
//! let jett = sdk.agents().get("add6443a-41bd-e414-f6ad-e58d267f4e95").await?;
//!
//! let weapons = sdk.weapons().list().await?;
//! println!("{} agents, {} weapons", agents.len(), weapons.len());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod queries;
pub mod schema;

pub use cache::{QueryCache, QueryKey};
pub use client::{ApiClient, Endpoint, Envelope};
pub use config::CachePolicy;
pub use error::{RequestStage, Result, ValorantError};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ValorantSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ValorantSdk`] instance.
///
/// Use [`ValorantSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ValorantSdkBuilder::build) to create the SDK.
pub struct ValorantSdkBuilder {
    base_url: String,
    language: String,
    timeout: Duration,
    policy: CachePolicy,
}

impl Default for ValorantSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::BASE_URL.to_string(),
            language: config::DEFAULT_LANGUAGE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            policy: CachePolicy::default(),
        }
    }
}

impl ValorantSdkBuilder {
    /// Override the API base address. Intended for tests and proxies; the
    /// default is the public valorant-api.com service.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the locale sent as the `language` parameter on every request.
    ///
    /// Defaults to `en-US`.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the fixed per-request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the freshness window for the general resource tier
    /// (agents, maps, weapons). Defaults to one hour.
    pub fn freshness(mut self, window: Duration) -> Self {
        self.policy.default_freshness = window;
        self
    }

    /// Set the freshness window for the cosmetic resource tier
    /// (sprays, skins, player cards, competitive tiers, bundles).
    /// Defaults to 24 hours.
    pub fn cosmetic_freshness(mut self, window: Duration) -> Self {
        self.policy.cosmetic_freshness = window;
        self
    }

    /// Build the SDK, constructing the HTTP client and an empty query cache.
    ///
    /// Nothing is fetched eagerly; collections are pulled lazily on first
    /// lookup and replaced wholesale when their freshness window elapses.
    pub fn build(self) -> Result<ValorantSdk> {
        let client = ApiClient::new(self.base_url, self.language, self.timeout)?;
        Ok(ValorantSdk {
            client,
            cache: QueryCache::new(self.policy),
        })
    }
}

// ---------------------------------------------------------------------------
// ValorantSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Valorant SDK.
///
/// Owns the [`ApiClient`] and the [`QueryCache`] and exposes per-resource
/// query interfaces as lightweight borrowing wrappers. The cache has the
/// same lifetime as the instance; consumers share it by reference rather
/// than through global state.
///
/// Created via [`ValorantSdk::builder()`].
pub struct ValorantSdk {
    client: ApiClient,
    cache: QueryCache,
}

impl ValorantSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> ValorantSdkBuilder {
        ValorantSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the agent query interface.
    pub fn agents(&self) -> queries::AgentQuery<'_> {
        queries::AgentQuery::new(self)
    }

    /// Access the map query interface.
    pub fn maps(&self) -> queries::MapQuery<'_> {
        queries::MapQuery::new(self)
    }

    /// Access the weapon and weapon-skin query interface.
    pub fn weapons(&self) -> queries::WeaponQuery<'_> {
        queries::WeaponQuery::new(self)
    }

    /// Access the cosmetic query interface (sprays, player cards, bundles).
    pub fn cosmetics(&self) -> queries::CosmeticsQuery<'_> {
        queries::CosmeticsQuery::new(self)
    }

    /// Access the competitive tier query interface.
    pub fn competitive(&self) -> queries::CompetitiveQuery<'_> {
        queries::CompetitiveQuery::new(self)
    }

    // -- Cache control -----------------------------------------------------

    /// Drop every cached collection, forcing re-fetch on next lookup.
    ///
    /// This is the reset transition for consumer-side error boundaries: on
    /// recovery, invalidate and re-run the failed lookups.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Drop a single cached key.
    pub fn invalidate(&self, key: &QueryKey) {
        self.cache.invalidate(key);
    }

    // -- Internals ---------------------------------------------------------

    /// The underlying resource client, for advanced usage.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The underlying query cache, for advanced usage.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }
}

impl fmt::Display for ValorantSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValorantSdk(base_url={}, language={}, cached={})",
            self.client.base_url(),
            self.client.language(),
            self.cache.len()
        )
    }
}
