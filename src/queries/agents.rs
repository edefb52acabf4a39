//! Agent queries: the playable-agent list and single-agent detail lookups.

use std::sync::Arc;

use crate::cache::QueryKey;
use crate::client::Endpoint;
use crate::error::{Result, ValorantError};
use crate::models::Agent;
use crate::schema;

use super::{expect_object, fetch_list, with_retry};

/// Query interface for agents.
pub struct AgentQuery<'a> {
    sdk: &'a crate::ValorantSdk,
}

impl<'a> AgentQuery<'a> {
    /// Create a new `AgentQuery` bound to the given SDK instance.
    pub fn new(sdk: &'a crate::ValorantSdk) -> Self {
        Self { sdk }
    }

    /// The playable-agent list, in upstream order.
    ///
    /// Cached under the general freshness tier. The request always carries
    /// `isPlayableCharacter=true` alongside the configured locale.
    pub async fn list(&self) -> Result<Arc<Vec<Agent>>> {
        fetch_list(self.sdk, QueryKey::Agents, Endpoint::Agents, &schema::AGENT).await
    }

    /// A single agent by uuid.
    ///
    /// A blank identifier fails with [`ValorantError::NotFound`] before any
    /// network call; an upstream 404 surfaces the same variant, uncached.
    pub async fn get(&self, uuid: &str) -> Result<Arc<Agent>> {
        let uuid = uuid.trim();
        if uuid.is_empty() {
            return Err(ValorantError::NotFound(
                "agent lookup requires a uuid".to_string(),
            ));
        }

        let sdk = self.sdk;
        let key = QueryKey::AgentDetail(uuid.to_string());
        let endpoint = Endpoint::Agent(uuid.to_string());
        with_retry(|| {
            let key = key.clone();
            let endpoint = endpoint.clone();
            async move {
                sdk.cache()
                    .get_or_fetch(key, || async move {
                        let envelope = sdk.client().fetch(&endpoint).await?;
                        let record = expect_object(envelope, schema::AGENT.resource)?;
                        schema::validate(&record, &schema::AGENT);
                        let agent: Agent = serde_json::from_value(record)?;
                        Ok(agent)
                    })
                    .await
            }
        })
        .await
    }
}
