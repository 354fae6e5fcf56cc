//! Input-shape polymorphism for preference fields.
//!
//! Callers send chain and token lists either as JSON arrays or as a single
//! comma-separated string (the text-record encoding). Each shape is an
//! untagged union at the boundary, resolved to one canonical sequence
//! before any validation logic runs.

use serde::{Deserialize, Serialize};

use crate::chains;

/// Split a comma-separated string, trimming whitespace around each element.
///
/// Mirrors plain split semantics: an empty input yields one empty element,
/// not an empty vector.
pub fn split_comma(s: &str) -> Vec<String> {
    s.split(',').map(|part| part.trim().to_string()).collect()
}

/// Join elements into the comma-separated text-record form.
pub fn join_comma(items: &[String]) -> String {
    items.join(",")
}

/// A token list: an array of symbols, or one comma-separated string.
///
/// ```
/// use payprefs::models::StringList;
///
/// let array: StringList = serde_json::from_str(r#"["USDC","USDT"]"#).unwrap();
/// let csv: StringList = serde_json::from_str(r#""USDC, USDT""#).unwrap();
///
/// assert_eq!(array.into_vec(), vec!["USDC", "USDT"]);
/// assert_eq!(csv.into_vec(), vec!["USDC", "USDT"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    /// Already an array; elements are used verbatim
    List(Vec<String>),
    /// Comma-separated string, split and trimmed on resolution
    Csv(String),
}

impl StringList {
    /// Resolve to a canonical vector. No further constraints: arbitrary
    /// symbols are permitted, duplicates and casing preserved.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringList::List(items) => items,
            StringList::Csv(csv) => split_comma(&csv),
        }
    }
}

/// One element of a chain list: a numeric id or a short-name string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainRef {
    Id(i64),
    Name(String),
}

/// A chain list: an array of ids and/or short names, or one
/// comma-separated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainList {
    List(Vec<ChainRef>),
    Csv(String),
}

impl ChainList {
    /// Resolve to supported numeric chain ids, order and duplicates
    /// preserved.
    ///
    /// Csv elements are trimmed and numeric-parsed first (a parseable
    /// token becomes an id, anything else stays a name). Ids pass through
    /// unchanged; names go through the short-name table. Unresolvable
    /// names, the zero sentinel, and ids outside the supported registry
    /// are dropped silently rather than failing - a caller that asked for
    /// an unknown chain sees it vanish from the result.
    pub fn into_chain_ids(self) -> Vec<u64> {
        let refs = match self {
            ChainList::List(items) => items,
            ChainList::Csv(csv) => split_comma(&csv)
                .into_iter()
                .map(|part| match part.parse::<i64>() {
                    Ok(id) => ChainRef::Id(id),
                    Err(_) => ChainRef::Name(part),
                })
                .collect(),
        };
        refs.into_iter()
            .filter_map(|chain| match chain {
                ChainRef::Id(id) => u64::try_from(id).ok(),
                ChainRef::Name(name) => chains::resolve_chain_or_short_name(&name),
            })
            .filter(|id| *id != 0 && chains::is_supported(*id))
            .collect()
    }
}
