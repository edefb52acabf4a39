use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// A playable agent.
///
/// Every field tolerates missing, null, and wrong-kind upstream values,
/// degrading to its default; the advisory schema check reports the drift.
///
/// The uuid is unique within a fetch. The display name doubles as the
/// deduplication key in consuming UIs: two agents sharing a display name are
/// collapsed into one (see `filters::dedup_by_display_name`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub developer_name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub character_tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon_small: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub bust_portrait: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub full_portrait: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub full_portrait_v2: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub killfeed_portrait: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub background: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub background_gradient_colors: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub is_full_portrait_right_facing: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub is_playable_character: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub is_available_for_test: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub is_base_content: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub role: Option<AgentRole>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub abilities: Vec<Ability>,
    /// Opaque upstream structure (duration bounds and a media list); kept
    /// raw since nothing in the SDK interprets it.
    #[serde(default)]
    pub voice_line: Value,
}

/// Role sub-record embedded in an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRole {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub uuid: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub asset_path: Option<String>,
}

/// One ability of an agent; ordering follows the upstream slot order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub slot: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::models::lenient")]
    pub display_icon: Option<String>,
}
