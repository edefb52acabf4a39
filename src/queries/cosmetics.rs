//! Cosmetic resource queries: sprays, player cards, bundles.
//!
//! All three are flat lists in the cosmetic freshness tier (24 h default).

use std::sync::Arc;

use crate::cache::QueryKey;
use crate::client::Endpoint;
use crate::error::Result;
use crate::models::{Bundle, PlayerCard, Spray};
use crate::schema;

use super::fetch_list;

/// Query interface grouping the small cosmetic lookups.
pub struct CosmeticsQuery<'a> {
    sdk: &'a crate::ValorantSdk,
}

impl<'a> CosmeticsQuery<'a> {
    pub fn new(sdk: &'a crate::ValorantSdk) -> Self {
        Self { sdk }
    }

    pub async fn sprays(&self) -> Result<Arc<Vec<Spray>>> {
        fetch_list(self.sdk, QueryKey::Sprays, Endpoint::Sprays, &schema::SPRAY).await
    }

    pub async fn player_cards(&self) -> Result<Arc<Vec<PlayerCard>>> {
        fetch_list(
            self.sdk,
            QueryKey::PlayerCards,
            Endpoint::PlayerCards,
            &schema::PLAYER_CARD,
        )
        .await
    }

    pub async fn bundles(&self) -> Result<Arc<Vec<Bundle>>> {
        fetch_list(self.sdk, QueryKey::Bundles, Endpoint::Bundles, &schema::BUNDLE).await
    }
}
