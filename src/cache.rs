//! In-memory query cache with a two-tier freshness policy and request
//! coalescing.
//!
//! Each logical resource list has one [`QueryKey`]; a fetched collection is
//! held until its freshness window elapses, then re-fetched on next lookup.
//! Concurrent lookups of the same uncached key collapse onto a single
//! in-flight producer. Failures are never cached.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::sync::broadcast;
use tracing::debug;

use crate::config::CachePolicy;
use crate::error::{RequestStage, Result, ValorantError};

// ---------------------------------------------------------------------------
// QueryKey
// ---------------------------------------------------------------------------

/// Structured cache key: one per logical resource list, plus a parameterized
/// key per single-agent detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Agents,
    AgentDetail(String),
    Maps,
    Weapons,
    Skins,
    Sprays,
    PlayerCards,
    CompetitiveTiers,
    Bundles,
}

impl QueryKey {
    /// Resolve this key's freshness window against the configured policy.
    ///
    /// Cosmetic resources change rarely and sit in the long-lived tier.
    pub fn freshness(&self, policy: &CachePolicy) -> Duration {
        match self {
            QueryKey::Sprays
            | QueryKey::Skins
            | QueryKey::PlayerCards
            | QueryKey::CompetitiveTiers
            | QueryKey::Bundles => policy.cosmetic_freshness,
            QueryKey::Agents
            | QueryKey::AgentDetail(_)
            | QueryKey::Maps
            | QueryKey::Weapons => policy.default_freshness,
        }
    }
}

// ---------------------------------------------------------------------------
// QueryCache
// ---------------------------------------------------------------------------

type CachedValue = Arc<dyn Any + Send + Sync>;
type FetchOutcome = std::result::Result<CachedValue, ValorantError>;

enum Slot {
    Ready {
        value: CachedValue,
        stored_at: Instant,
    },
    Pending {
        tx: broadcast::Sender<FetchOutcome>,
        /// Set when the key is invalidated mid-flight: the producer's result
        /// is still delivered to waiters but not stored.
        invalidated: bool,
    },
}

/// Keyed in-memory store for fetched collections.
///
/// Explicitly constructed and owned by the SDK instance; consumers reach it
/// through a handle rather than module-level state. Mutated only by itself.
pub struct QueryCache {
    policy: CachePolicy,
    slots: Mutex<HashMap<QueryKey, Slot>>,
}

impl QueryCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Look up `key`, delegating to `produce` on a miss or stale entry.
    ///
    /// While a producer is in flight, further lookups of the same key
    /// subscribe to its outcome instead of issuing duplicate upstream calls.
    /// A failed producer caches nothing; the next lookup re-delegates.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: QueryKey, produce: F) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let freshness = key.freshness(&self.policy);

        enum Lookup {
            Hit(CachedValue),
            Wait(broadcast::Receiver<FetchOutcome>),
            Produce(broadcast::Sender<FetchOutcome>),
        }

        // Decide under the lock: serve fresh, join in-flight, or register
        // ourselves as the producer. The lock is never held across an await.
        let lookup = {
            let mut slots = self.slots.lock().expect("cache lock poisoned");
            match slots.get(&key) {
                Some(Slot::Ready { value, stored_at }) if stored_at.elapsed() < freshness => {
                    Lookup::Hit(Arc::clone(value))
                }
                Some(Slot::Pending { tx, .. }) => Lookup::Wait(tx.subscribe()),
                _ => {
                    let (tx, _rx) = broadcast::channel(1);
                    slots.insert(
                        key.clone(),
                        Slot::Pending {
                            tx: tx.clone(),
                            invalidated: false,
                        },
                    );
                    Lookup::Produce(tx)
                }
            }
        };

        let tx = match lookup {
            Lookup::Hit(value) => return Ok(downcast::<T>(value)),
            Lookup::Wait(mut rx) => {
                debug!(?key, "joining in-flight lookup");
                return match rx.recv().await {
                    Ok(Ok(value)) => Ok(downcast::<T>(value)),
                    Ok(Err(err)) => Err(err),
                    Err(_) => Err(ValorantError::Transport {
                        stage: RequestStage::Request,
                        message: "in-flight lookup was abandoned".to_string(),
                    }),
                };
            }
            Lookup::Produce(tx) => tx,
        };

        debug!(?key, "cache miss, delegating to producer");
        let outcome = produce().await;

        let mut slots = self.slots.lock().expect("cache lock poisoned");
        match outcome {
            Ok(value) => {
                let shared: CachedValue = Arc::new(value);
                // A key invalidated while we were in flight must not come
                // back: deliver the value to waiters but store nothing.
                let store = matches!(
                    slots.get(&key),
                    Some(Slot::Pending {
                        invalidated: false,
                        ..
                    })
                );
                if store {
                    slots.insert(
                        key,
                        Slot::Ready {
                            value: Arc::clone(&shared),
                            stored_at: Instant::now(),
                        },
                    );
                } else {
                    slots.remove(&key);
                }
                drop(slots);
                let _ = tx.send(Ok(Arc::clone(&shared)));
                Ok(downcast::<T>(shared))
            }
            Err(err) => {
                // No negative caching: drop the pending slot so the next
                // lookup re-delegates.
                if matches!(slots.get(&key), Some(Slot::Pending { .. })) {
                    slots.remove(&key);
                }
                drop(slots);
                let _ = tx.send(Err(err.clone()));
                Err(err)
            }
        }
    }

    /// Whether a resolved value is currently stored under `key`.
    ///
    /// Pending lookups do not count; neither does staleness factor in. This
    /// reports raw occupancy.
    pub fn contains(&self, key: &QueryKey) -> bool {
        let slots = self.slots.lock().expect("cache lock poisoned");
        matches!(slots.get(key), Some(Slot::Ready { .. }))
    }

    /// Drop a single key, forcing the next lookup for it to re-delegate.
    ///
    /// If a producer for the key is in flight, its result is delivered to
    /// current waiters but not stored.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut slots = self.slots.lock().expect("cache lock poisoned");
        let drop_ready = match slots.get_mut(key) {
            Some(Slot::Pending { invalidated, .. }) => {
                *invalidated = true;
                false
            }
            Some(Slot::Ready { .. }) => true,
            None => false,
        };
        if drop_ready {
            slots.remove(key);
        }
    }

    /// Clear every cached key. In-flight lookups still complete and deliver
    /// to their subscribers, but their results are not stored; the next
    /// lookup re-fetches.
    pub fn invalidate_all(&self) {
        let mut slots = self.slots.lock().expect("cache lock poisoned");
        slots.retain(|_, slot| matches!(slot, Slot::Pending { .. }));
        for slot in slots.values_mut() {
            if let Slot::Pending { invalidated, .. } = slot {
                *invalidated = true;
            }
        }
    }

    /// Number of resolved entries currently held.
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().expect("cache lock poisoned");
        slots
            .values()
            .filter(|slot| matches!(slot, Slot::Ready { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Recover the typed value from a slot.
///
/// Each key is written by exactly one typed accessor, so a mismatch here is a
/// bug in this crate, not a runtime condition.
fn downcast<T: Send + Sync + 'static>(value: CachedValue) -> Arc<T> {
    value
        .downcast::<T>()
        .expect("cache slot holds a different type than its key")
}
