//! Query modules for the Valorant SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`ValorantSdk`](crate::ValorantSdk) and exposes async accessors returning
//! `Result<Arc<T>>` over cached, validated collections.
//!
//! Every accessor runs the same pipeline (hard envelope pre-check, advisory
//! schema validation, lenient parse, cache store) and applies exactly one
//! transparent retry when the first attempt fails with a transport-class
//! error.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

use crate::cache::QueryKey;
use crate::client::{Endpoint, Envelope};
use crate::error::{Result, ValorantError};
use crate::schema::{self, RecordShape};
use crate::ValorantSdk;

pub mod agents;
pub mod competitive;
pub mod cosmetics;
pub mod maps;
pub mod weapons;

pub use agents::AgentQuery;
pub use competitive::CompetitiveQuery;
pub use cosmetics::CosmeticsQuery;
pub use maps::MapQuery;
pub use weapons::WeaponQuery;

/// Run `op`, retrying once if it fails with a transport-class error.
///
/// Invalid envelopes and missing entities are surfaced immediately. The
/// retry wraps the whole cache lookup; a failed producer caches nothing, so
/// the second attempt re-delegates upstream.
pub(crate) async fn with_retry<T, F, Fut>(op: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match op().await {
        Err(err) if err.is_transient() => {
            warn!(%err, "lookup failed, retrying once");
            op().await
        }
        other => other,
    }
}

/// Hard pre-check for list accessors: the envelope's `data` field must be a
/// sequence. Anything else is an invalid response, rejected before any
/// schema validation is attempted.
pub(crate) fn expect_array(envelope: Envelope, resource: &str) -> Result<Vec<Value>> {
    match envelope.data {
        Value::Array(records) => Ok(records),
        other => {
            let err = ValorantError::InvalidResponse(format!(
                "{resource}: expected an array in the data field, got {}",
                schema::json_kind(&other)
            ));
            error!(resource, %err, "rejecting structurally invalid envelope");
            Err(err)
        }
    }
}

/// Hard pre-check for single-entity accessors: `data` must be an object.
pub(crate) fn expect_object(envelope: Envelope, resource: &str) -> Result<Value> {
    match envelope.data {
        record @ Value::Object(_) => Ok(record),
        other => {
            let err = ValorantError::InvalidResponse(format!(
                "{resource}: expected an object in the data field, got {}",
                schema::json_kind(&other)
            ));
            error!(resource, %err, "rejecting structurally invalid envelope");
            Err(err)
        }
    }
}

/// Shared list pipeline: fetch, pre-check, validate (advisory), parse, cache.
///
/// Element order of the upstream `data` array is preserved exactly.
pub(crate) async fn fetch_list<T>(
    sdk: &ValorantSdk,
    key: QueryKey,
    endpoint: Endpoint,
    shape: &'static RecordShape,
) -> Result<Arc<Vec<T>>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    with_retry(|| {
        let key = key.clone();
        let endpoint = endpoint.clone();
        async move {
            sdk.cache()
                .get_or_fetch(key, || async move {
                    let envelope = sdk.client().fetch(&endpoint).await?;
                    let records = expect_array(envelope, shape.resource)?;
                    let raw = Value::Array(records);
                    schema::validate(&raw, shape);
                    let parsed: Vec<T> = serde_json::from_value(raw)?;
                    Ok(parsed)
                })
                .await
        }
    })
    .await
}
