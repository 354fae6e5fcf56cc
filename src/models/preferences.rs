//! Canonical preference types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open Graph settings carried on a preference record.
///
/// Declared for shape validation only; consumers own the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OgPreferences {
    #[serde(rename = "baseUrl", skip_serializing_if = "Option::is_none", default)]
    pub base_url: Option<String>,
    /// Unrecognized og keys, carried through unmodified
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The canonical, validated preference shape.
///
/// Constructed fresh by [`validate`](crate::validate::validate) and never
/// mutated after return. `chain_ids` holds only supported ids, insertion
/// order and duplicates preserved; `token_symbols` is always an array
/// regardless of the input encoding. Optional fields that were absent
/// stay absent in the serialized form rather than appearing as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub chain_ids: Vec<u64>,
    pub token_symbols: Vec<String>,
    /// Post-payment redirect target; any scheme, URL-validated
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub currency: Option<String>,
    /// Requested amount; kept as a JSON number so the lexical form
    /// survives round-trips
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub amount: Option<serde_json::Number>,
    /// Https callback URLs, at most [`MAX_WEBHOOKS`](crate::validate::MAX_WEBHOOKS)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub webhooks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub og: Option<OgPreferences>,
    /// Unrecognized top-level keys, carried through unmodified
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Preferences {
    /// Compact text-record encoding of these preferences.
    pub fn to_text_record(&self) -> String {
        crate::output::to_text_record(self)
    }
}
