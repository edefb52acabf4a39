//! Pure in-memory filters over fetched collections.
//!
//! Everything here is deterministic and side-effect free: text search,
//! heuristic category classification for player cards, weapon category
//! labels, and display-name deduplication. Classification keywords are
//! injected through [`CategoryKeywords`] so the policy is unit-testable
//! independently of any rendering.

use std::collections::HashMap;

use crate::models::{Agent, Bundle, PlayerCard, Spray, ValorantMap, Weapon, WeaponSkin};

// ---------------------------------------------------------------------------
// Named
// ---------------------------------------------------------------------------

/// Anything with a display name, searchable by substring.
pub trait Named {
    fn display_name(&self) -> &str;
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(impl Named for $ty {
            fn display_name(&self) -> &str {
                &self.display_name
            }
        })*
    };
}

impl_named!(Agent, ValorantMap, Weapon, WeaponSkin, Spray, PlayerCard, Bundle);

/// Case-insensitive substring search against display names.
pub fn search_by_name<'a, T: Named>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.display_name().to_lowercase().contains(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Player-card categories
// ---------------------------------------------------------------------------

/// Keyword table driving the esports-theme heuristic.
#[derive(Debug, Clone)]
pub struct CategoryKeywords {
    /// Lower-case substrings that mark a card as esports-themed.
    pub esports: Vec<String>,
}

impl Default for CategoryKeywords {
    fn default() -> Self {
        Self {
            esports: ["vct", "champions", "lock in", "masters"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Heuristic card categories. Evaluated independently of one another, with
/// no precedence order; a name may satisfy both `Esports` and `AgentThemed`.
/// `Standard` is the set-difference fallback bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardCategory {
    Esports,
    AgentThemed,
    Standard,
}

/// Whether a display name matches any esports keyword.
pub fn is_esports_themed(name: &str, keywords: &CategoryKeywords) -> bool {
    let name = name.to_lowercase();
    keywords
        .esports
        .iter()
        .any(|keyword| name.contains(keyword.as_str()))
}

/// Whether a display name contains any known agent's display name.
pub fn is_agent_themed(name: &str, agent_names: &[String]) -> bool {
    let name = name.to_lowercase();
    agent_names
        .iter()
        .any(|agent| name.contains(&agent.to_lowercase()))
}

/// The fallback bucket: everything matching no named category.
pub fn is_standard(name: &str, keywords: &CategoryKeywords, agent_names: &[String]) -> bool {
    !is_esports_themed(name, keywords) && !is_agent_themed(name, agent_names)
}

/// Filter cards by one category, evaluating that category's predicate alone.
pub fn filter_cards<'a>(
    cards: &'a [PlayerCard],
    category: CardCategory,
    keywords: &CategoryKeywords,
    agent_names: &[String],
) -> Vec<&'a PlayerCard> {
    cards
        .iter()
        .filter(|card| match category {
            CardCategory::Esports => is_esports_themed(&card.display_name, keywords),
            CardCategory::AgentThemed => is_agent_themed(&card.display_name, agent_names),
            CardCategory::Standard => is_standard(&card.display_name, keywords, agent_names),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Weapon categories
// ---------------------------------------------------------------------------

/// Last segment of a colon-delimited category tag
/// (`EEquippableCategory::Rifle` -> `Rifle`).
pub fn weapon_category_name(tag: &str) -> &str {
    tag.rsplit("::").next().unwrap_or(tag)
}

/// Sorted unique category names across a weapon collection.
pub fn weapon_categories(weapons: &[Weapon]) -> Vec<String> {
    let mut names: Vec<String> = weapons
        .iter()
        .map(|weapon| weapon.category_name().to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}

// ---------------------------------------------------------------------------
// Deduplication
// ---------------------------------------------------------------------------

/// Collapse agents sharing a display name into one entry.
///
/// Order follows the first occurrence of each name; the retained record is
/// the last occurrence, matching the consuming UI's keyed-map behavior.
pub fn dedup_by_display_name(agents: &[Agent]) -> Vec<&Agent> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_name: HashMap<&str, &Agent> = HashMap::new();
    for agent in agents {
        let name = agent.display_name.as_str();
        if !by_name.contains_key(name) {
            order.push(name);
        }
        by_name.insert(name, agent);
    }
    order.into_iter().filter_map(|name| by_name.remove(name)).collect()
}
