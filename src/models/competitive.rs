use serde::{Deserialize, Serialize};

/// Tier data for one competitive season.
///
/// The upstream returns seasons in chronological order; by its convention the
/// last element is the current season.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveSeason {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_object_name: String,
    /// Ordered; tier ordering is meaningful.
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub tiers: Vec<CompetitiveTier>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
}

impl CompetitiveSeason {
    /// Tiers that represent actual ranks: tier 0-2 are unranked placeholders
    /// and some entries carry no artwork.
    pub fn ranked_tiers(&self) -> Vec<&CompetitiveTier> {
        self.tiers
            .iter()
            .filter(|tier| tier.tier >= 3 && tier.large_icon.is_some())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveTier {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub tier: i64,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub tier_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub division: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub division_name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub background_color: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub small_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub large_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub rank_triangle_down_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub rank_triangle_up_icon: Option<String>,
}
