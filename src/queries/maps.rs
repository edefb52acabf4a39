//! Map queries.

use std::sync::Arc;

use crate::cache::QueryKey;
use crate::client::Endpoint;
use crate::error::Result;
use crate::models::ValorantMap;
use crate::schema;

use super::fetch_list;

/// Query interface for maps.
pub struct MapQuery<'a> {
    sdk: &'a crate::ValorantSdk,
}

impl<'a> MapQuery<'a> {
    pub fn new(sdk: &'a crate::ValorantSdk) -> Self {
        Self { sdk }
    }

    /// The map list, in upstream order. General freshness tier.
    pub async fn list(&self) -> Result<Arc<Vec<ValorantMap>>> {
        fetch_list(self.sdk, QueryKey::Maps, Endpoint::Maps, &schema::MAP).await
    }
}
