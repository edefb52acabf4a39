//! Flat cosmetic records: sprays, player cards, bundles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spray {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub theme_uuid: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub full_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub full_transparent_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub animation_png: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub animation_gif: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub levels: Vec<SprayLevel>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub is_null_spray: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprayLevel {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub spray_level: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub is_hidden_if_not_owned: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub theme_uuid: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub small_art: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub wide_art: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub large_art: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name_sub_text: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub extra_description: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub promo_description: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub use_additional_context: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(
        default,
        rename = "displayIcon2",
        deserialize_with = "crate::models::lenient"
    )]
    pub display_icon2: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub vertical_promo_image: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
}
