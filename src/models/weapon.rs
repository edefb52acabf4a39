use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Weapon
// ---------------------------------------------------------------------------

/// A weapon, with optional nested stats, shop data, and its skin line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    /// Colon-delimited hierarchical tag, e.g. `EEquippableCategory::Rifle`.
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub category: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub kill_stream_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub weapon_stats: Option<WeaponStats>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub shop_data: Option<ShopData>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub skins: Vec<WeaponSkin>,
}

impl Weapon {
    /// Human-readable category: the last segment of the hierarchical tag.
    pub fn category_name(&self) -> &str {
        crate::filters::weapon_category_name(&self.category)
    }
}

/// Ballistics and handling characteristics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponStats {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub fire_rate: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub magazine_size: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub run_speed_multiplier: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub equip_time_seconds: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub reload_time_seconds: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub first_bullet_accuracy: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub shotgun_pellet_count: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub wall_penetration: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub feature: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub fire_mode: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub alt_fire_type: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub ads_stats: Option<AdsStats>,
    #[serde(default)]
    pub alt_shotgun_stats: Value,
    #[serde(default)]
    pub air_burst_stats: Value,
    /// Damage keyed by distance band, in upstream order.
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub damage_ranges: Vec<DamageRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdsStats {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub zoom_multiplier: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub fire_rate: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub run_speed_multiplier: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub burst_count: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub first_bullet_accuracy: Option<f64>,
}

/// Damage values for one distance band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageRange {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub range_start_meters: f64,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub range_end_meters: f64,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub head_damage: f64,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub body_damage: f64,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub leg_damage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopData {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub cost: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub category_text: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub grid_position: Option<GridPosition>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub can_be_trashed: Option<bool>,
    #[serde(default)]
    pub image: Value,
    #[serde(default)]
    pub new_image: Value,
    #[serde(default, rename = "newImage2")]
    pub new_image2: Value,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPosition {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub row: i64,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub column: i64,
}

// ---------------------------------------------------------------------------
// WeaponSkin
// ---------------------------------------------------------------------------

/// A weapon skin with its chroma and level sub-records, in upstream order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponSkin {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub theme_uuid: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub content_tier_uuid: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub wallpaper: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub chromas: Vec<SkinChroma>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub levels: Vec<SkinLevel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinChroma {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub full_render: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub swatch: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub streamed_video: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinLevel {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub level_item: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub streamed_video: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
}
