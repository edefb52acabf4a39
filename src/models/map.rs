use serde::{Deserialize, Serialize};

/// A playable map. Self-contained: no references to other resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValorantMap {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub coordinates: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub list_view_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub splash: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub map_url: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub x_multiplier: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub y_multiplier: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub x_scalar_to_add: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub y_scalar_to_add: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub callouts: Option<Vec<Callout>>,
}

/// Named region of a map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Callout {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub region_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub super_region_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub location: Option<CalloutLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalloutLocation {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub x: f64,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub y: f64,
}
