//! Record models for every fetched resource.
//!
//! Deserialization is lenient throughout: each field falls back to its
//! default when the upstream value is missing, null, or of the wrong kind.
//! Field-level drift degrades to missing data instead of a failed parse;
//! the advisory schema check reports it.

use serde::{Deserialize, Deserializer};

pub mod agent;
pub mod competitive;
pub mod cosmetics;
pub mod map;
pub mod weapon;

pub use agent::*;
pub use competitive::*;
pub use cosmetics::*;
pub use map::*;
pub use weapon::*;

/// Field-level fallback: a value that does not deserialize as `T` becomes
/// `T::default()`. Keeps record parsing total over well-formed envelopes.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(T::deserialize(deserializer).unwrap_or_default())
}
