//! Advisory response-shape validation.
//!
//! The upstream API evolves independently of this crate, so validation here
//! is observability, not a safety gate: [`validate`] checks a raw response
//! against the expected record shape, logs one diagnostic when it drifts,
//! and always returns the raw value unchanged. Strict rejection would turn
//! every upstream schema change into a caller-facing outage.
//!
//! The hard structural check (envelope `data` must be an array/object) lives
//! in the accessor layer and runs before this module is ever consulted.

use serde_json::Value;
use tracing::warn;

/// Cap on per-call mismatch detail carried into the diagnostic event.
const MAX_REPORTED: usize = 5;

// ---------------------------------------------------------------------------
// Shape definitions
// ---------------------------------------------------------------------------

/// JSON kind a field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Bool,
    Array,
    Object,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Bool => "bool",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Bool => value.is_boolean(),
            FieldKind::Array => value.is_array(),
            FieldKind::Object => value.is_object(),
        }
    }
}

/// Expectation for a single field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub nullable: bool,
    pub required: bool,
}

/// Expected shape of one resource record. Unknown extra fields are always
/// tolerated (the upstream adds fields freely).
#[derive(Debug)]
pub struct RecordShape {
    pub resource: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn req(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        nullable: false,
        required: true,
    }
}

const fn req_nul(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        nullable: true,
        required: true,
    }
}

const fn opt(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        nullable: true,
        required: false,
    }
}

// ---------------------------------------------------------------------------
// Resource shapes
// ---------------------------------------------------------------------------

pub static AGENT: RecordShape = RecordShape {
    resource: "agent",
    fields: &[
        req("uuid", FieldKind::String),
        req("displayName", FieldKind::String),
        req("description", FieldKind::String),
        opt("developerName", FieldKind::String),
        opt("characterTags", FieldKind::Array),
        opt("displayIcon", FieldKind::String),
        opt("displayIconSmall", FieldKind::String),
        opt("bustPortrait", FieldKind::String),
        opt("fullPortrait", FieldKind::String),
        opt("fullPortraitV2", FieldKind::String),
        opt("killfeedPortrait", FieldKind::String),
        opt("background", FieldKind::String),
        opt("backgroundGradientColors", FieldKind::Array),
        opt("assetPath", FieldKind::String),
        opt("isPlayableCharacter", FieldKind::Bool),
        req_nul("role", FieldKind::Object),
        opt("abilities", FieldKind::Array),
        opt("voiceLine", FieldKind::Object),
    ],
};

pub static MAP: RecordShape = RecordShape {
    resource: "map",
    fields: &[
        req("uuid", FieldKind::String),
        req("displayName", FieldKind::String),
        opt("coordinates", FieldKind::String),
        opt("displayIcon", FieldKind::String),
        opt("listViewIcon", FieldKind::String),
        opt("splash", FieldKind::String),
        opt("assetPath", FieldKind::String),
        opt("mapUrl", FieldKind::String),
        opt("xMultiplier", FieldKind::Number),
        opt("yMultiplier", FieldKind::Number),
        opt("xScalarToAdd", FieldKind::Number),
        opt("yScalarToAdd", FieldKind::Number),
        opt("callouts", FieldKind::Array),
    ],
};

pub static WEAPON: RecordShape = RecordShape {
    resource: "weapon",
    fields: &[
        req("uuid", FieldKind::String),
        req("displayName", FieldKind::String),
        req("category", FieldKind::String),
        opt("displayIcon", FieldKind::String),
        opt("killStreamIcon", FieldKind::String),
        opt("assetPath", FieldKind::String),
        req_nul("weaponStats", FieldKind::Object),
        req_nul("shopData", FieldKind::Object),
        opt("skins", FieldKind::Array),
    ],
};

pub static WEAPON_SKIN: RecordShape = RecordShape {
    resource: "weapon skin",
    fields: &[
        req("uuid", FieldKind::String),
        req("displayName", FieldKind::String),
        opt("themeUuid", FieldKind::String),
        opt("contentTierUuid", FieldKind::String),
        opt("displayIcon", FieldKind::String),
        opt("wallpaper", FieldKind::String),
        opt("assetPath", FieldKind::String),
        opt("chromas", FieldKind::Array),
        opt("levels", FieldKind::Array),
    ],
};

pub static SPRAY: RecordShape = RecordShape {
    resource: "spray",
    fields: &[
        req("uuid", FieldKind::String),
        req("displayName", FieldKind::String),
        opt("category", FieldKind::String),
        opt("themeUuid", FieldKind::String),
        opt("displayIcon", FieldKind::String),
        opt("fullIcon", FieldKind::String),
        opt("fullTransparentIcon", FieldKind::String),
        opt("animationPng", FieldKind::String),
        opt("animationGif", FieldKind::String),
        opt("assetPath", FieldKind::String),
        opt("levels", FieldKind::Array),
        opt("isNullSpray", FieldKind::Bool),
    ],
};

pub static PLAYER_CARD: RecordShape = RecordShape {
    resource: "player card",
    fields: &[
        req("uuid", FieldKind::String),
        req("displayName", FieldKind::String),
        opt("isHiddenIfNotOwned", FieldKind::Bool),
        opt("themeUuid", FieldKind::String),
        opt("displayIcon", FieldKind::String),
        opt("smallArt", FieldKind::String),
        opt("wideArt", FieldKind::String),
        opt("largeArt", FieldKind::String),
        opt("assetPath", FieldKind::String),
    ],
};

pub static COMPETITIVE_SEASON: RecordShape = RecordShape {
    resource: "competitive season",
    fields: &[
        req("uuid", FieldKind::String),
        req("assetObjectName", FieldKind::String),
        req("tiers", FieldKind::Array),
        opt("assetPath", FieldKind::String),
    ],
};

pub static BUNDLE: RecordShape = RecordShape {
    resource: "bundle",
    fields: &[
        req("uuid", FieldKind::String),
        req("displayName", FieldKind::String),
        opt("displayNameSubText", FieldKind::String),
        opt("description", FieldKind::String),
        opt("extraDescription", FieldKind::String),
        opt("promoDescription", FieldKind::String),
        opt("useAdditionalContext", FieldKind::Bool),
        opt("displayIcon", FieldKind::String),
        opt("displayIcon2", FieldKind::String),
        opt("verticalPromoImage", FieldKind::String),
        opt("assetPath", FieldKind::String),
    ],
};

// ---------------------------------------------------------------------------
// Mismatch detection
// ---------------------------------------------------------------------------

/// Name of a JSON value's kind, for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check a single record against a shape. Pure; returns one entry per
/// offending field.
pub fn record_mismatches(record: &Value, shape: &RecordShape) -> Vec<String> {
    let Some(map) = record.as_object() else {
        return vec![format!(
            "{}: expected an object, got {}",
            shape.resource,
            json_kind(record)
        )];
    };

    let mut problems = Vec::new();
    for field in shape.fields {
        match map.get(field.name) {
            None if field.required => {
                problems.push(format!(
                    "{}.{}: missing required field",
                    shape.resource, field.name
                ));
            }
            None => {}
            Some(Value::Null) if !field.nullable => {
                problems.push(format!(
                    "{}.{}: unexpected null",
                    shape.resource, field.name
                ));
            }
            Some(Value::Null) => {}
            Some(value) if !field.kind.matches(value) => {
                problems.push(format!(
                    "{}.{}: expected {}, got {}",
                    shape.resource,
                    field.name,
                    field.kind.name(),
                    json_kind(value)
                ));
            }
            Some(_) => {}
        }
    }
    problems
}

/// Check every record of a collection, prefixing problems with the index.
pub fn collection_mismatches(records: &[Value], shape: &RecordShape) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .flat_map(|(index, record)| {
            record_mismatches(record, shape)
                .into_iter()
                .map(move |problem| format!("[{index}] {problem}"))
        })
        .collect()
}

/// Validate a raw response value against a shape. Never fails.
///
/// On drift, emits exactly one diagnostic event per call (detail capped to
/// the first [`MAX_REPORTED`] problems) and returns the raw value unchanged.
/// Callers must not turn this into a rejection.
pub fn validate<'a>(raw: &'a Value, shape: &RecordShape) -> &'a Value {
    let problems = match raw {
        Value::Array(records) => collection_mismatches(records, shape),
        record => record_mismatches(record, shape),
    };
    if !problems.is_empty() {
        let detail: Vec<&str> = problems
            .iter()
            .take(MAX_REPORTED)
            .map(String::as_str)
            .collect();
        warn!(
            resource = shape.resource,
            mismatches = problems.len(),
            ?detail,
            "response shape drifted from the expected schema; passing raw data through"
        );
    }
    raw
}
