use std::time::Duration;

/// Base address of the public valorant-api.com service.
pub const BASE_URL: &str = "https://valorant-api.com/v1";

/// Locale sent as the `language` query parameter when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Fixed per-request timeout. Exceeding it is a transport error; the
/// client never retries on its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Freshness window for the general resource tier (agents, maps, weapons).
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(60 * 60);

/// Freshness window for rarely-changing cosmetic resources (sprays, skins,
/// player cards, competitive tiers, bundles).
pub const COSMETIC_FRESHNESS: Duration = Duration::from_secs(24 * 60 * 60);

/// Two-tier cache freshness policy.
///
/// The tier split is configuration, not per-call-site magic numbers: every
/// [`QueryKey`](crate::cache::QueryKey) resolves its window through this
/// struct.
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    /// Window for the general resource tier.
    pub default_freshness: Duration,
    /// Window for the cosmetic resource tier.
    pub cosmetic_freshness: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            default_freshness: DEFAULT_FRESHNESS,
            cosmetic_freshness: COSMETIC_FRESHNESS,
        }
    }
}
