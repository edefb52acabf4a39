//! Competitive tier queries.

use std::sync::Arc;

use crate::cache::QueryKey;
use crate::client::Endpoint;
use crate::error::Result;
use crate::models::CompetitiveSeason;
use crate::schema;

use super::fetch_list;

/// Query interface for competitive season tier data.
pub struct CompetitiveQuery<'a> {
    sdk: &'a crate::ValorantSdk,
}

impl<'a> CompetitiveQuery<'a> {
    pub fn new(sdk: &'a crate::ValorantSdk) -> Self {
        Self { sdk }
    }

    /// Every season's tier data, in upstream (chronological) order.
    /// Cosmetic freshness tier.
    pub async fn seasons(&self) -> Result<Arc<Vec<CompetitiveSeason>>> {
        fetch_list(
            self.sdk,
            QueryKey::CompetitiveTiers,
            Endpoint::CompetitiveTiers,
            &schema::COMPETITIVE_SEASON,
        )
        .await
    }

    /// The current season: by upstream convention, the last element.
    pub async fn latest_season(&self) -> Result<Option<CompetitiveSeason>> {
        Ok(self.seasons().await?.last().cloned())
    }
}
