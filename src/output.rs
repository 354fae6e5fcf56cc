//! Text-record serialization - the lossy inverse of validation.
//!
//! Arrays flatten to comma strings and chain ids map back to short names,
//! producing the compact form stored in a DNS/ENS-style text record.
//! Which of the legacy/current key pairs the original input used is not
//! recoverable from the output.

use serde_json::{Map, Value};

use crate::chains::chain_id_to_short_name;
use crate::models::{join_comma, Preferences};

/// Serialize an arbitrary preference-shaped object to the text-record form.
///
/// `tokenSymbols` joins under `tokens`; an explicitly empty list still
/// yields `tokens: ""`, only an absent key is omitted. `chainIds` entries
/// map through the short-name table - ids with no alias are dropped
/// silently - and join under `chains`, omitted entirely when nothing
/// resolves or the key is absent. Every other key is copied verbatim
/// after those two.
pub fn text_record(obj: &Map<String, Value>) -> String {
    let mut out = Map::new();

    if let Some(Value::Array(symbols)) = obj.get("tokenSymbols") {
        let symbols: Vec<String> =
            symbols.iter().filter_map(|s| s.as_str().map(str::to_string)).collect();
        out.insert("tokens".to_string(), Value::String(join_comma(&symbols)));
    }

    if let Some(Value::Array(ids)) = obj.get("chainIds") {
        let names: Vec<String> = ids
            .iter()
            .filter_map(Value::as_u64)
            .filter_map(chain_id_to_short_name)
            .map(str::to_string)
            .collect();
        if !names.is_empty() {
            out.insert("chains".to_string(), Value::String(join_comma(&names)));
        }
    }

    for (key, value) in obj {
        if key != "chainIds" && key != "tokenSymbols" {
            out.insert(key.clone(), value.clone());
        }
    }

    Value::Object(out).to_string()
}

/// Serialize canonical preferences to the text-record form.
///
/// ```
/// use payprefs::Preferences;
///
/// let prefs = Preferences {
///     chain_ids: vec![1, 10],
///     token_symbols: vec!["ETH".to_string(), "DAI".to_string()],
///     ..Default::default()
/// };
/// assert_eq!(
///     payprefs::to_text_record(&prefs),
///     r#"{"tokens":"ETH,DAI","chains":"eth,oeth"}"#,
/// );
/// ```
pub fn to_text_record(prefs: &Preferences) -> String {
    match serde_json::to_value(prefs) {
        Ok(Value::Object(map)) => text_record(&map),
        _ => String::from("{}"),
    }
}
