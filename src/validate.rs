//! Preference validation: field contracts, issue aggregation, and the
//! legacy/current merge transform.
//!
//! Every known field is checked independently so one pass reports every
//! violation instead of stopping at the first. Unrecognized keys are part
//! of the contract: they pass through to the canonical output untouched.

use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use crate::models::{ChainList, OgPreferences, Preferences, StringList};
use crate::parser;

/// Maximum number of webhook URLs a preference record may carry.
pub const MAX_WEBHOOKS: usize = 15;

/// Top-level keys with a declared contract; everything else passes through.
const KNOWN_KEYS: &[&str] = &[
    "chains",
    "chainIds",
    "tokens",
    "tokenSymbols",
    "redirectUrl",
    "currency",
    "amount",
    "webhooks",
    "og",
];

/// The rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Value does not match the field's expected shape
    InvalidType,
    /// String is not a syntactically valid URL
    InvalidUrl,
    /// Webhook URL does not use https
    InsecureWebhook,
    /// More than [`MAX_WEBHOOKS`] webhook entries
    TooManyWebhooks,
    /// Amount below zero
    NegativeAmount,
    /// Top-level input is not a key/value mapping
    NotAnObject,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::InvalidType => write!(f, "invalid_type"),
            IssueKind::InvalidUrl => write!(f, "invalid_url"),
            IssueKind::InsecureWebhook => write!(f, "insecure_webhook"),
            IssueKind::TooManyWebhooks => write!(f, "too_many_webhooks"),
            IssueKind::NegativeAmount => write!(f, "negative_amount"),
            IssueKind::NotAnObject => write!(f, "not_an_object"),
        }
    }
}

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationIssue {
    /// Field path, indexed for array entries (e.g. `webhooks[1]`)
    pub field: String,
    pub kind: IssueKind,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, kind: IssueKind, message: impl Into<String>) -> Self {
        Self { field: field.into(), kind, message: message.into() }
    }
}

/// Aggregate of every violation found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "preferences validation failed: ")?;
        for (index, issue) in self.issues.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationIssue> for ValidationError {
    fn from(issue: ValidationIssue) -> Self {
        Self { issues: vec![issue] }
    }
}

/// Collects issues while individual fields are checked.
struct Validator {
    issues: Vec<ValidationIssue>,
}

impl Validator {
    fn new() -> Self {
        Self { issues: Vec::new() }
    }

    fn push(&mut self, field: impl Into<String>, kind: IssueKind, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(field, kind, message));
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues: self.issues })
        }
    }

    /// Resolved chain ids for `key`, or `None` when the key is absent or
    /// malformed. Returning `Some` for a present-but-empty list matters:
    /// an empty `chains` still beats a populated `chainIds` on merge.
    fn chain_field(&mut self, obj: &Map<String, Value>, key: &str) -> Option<Vec<u64>> {
        let value = obj.get(key)?;
        match serde_json::from_value::<ChainList>(value.clone()) {
            Ok(list) => Some(list.into_chain_ids()),
            Err(_) => {
                self.push(
                    key,
                    IssueKind::InvalidType,
                    "must be an array of chain ids or short names, or a comma-separated string",
                );
                None
            }
        }
    }

    fn token_field(&mut self, obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
        let value = obj.get(key)?;
        match serde_json::from_value::<StringList>(value.clone()) {
            Ok(list) => Some(list.into_vec()),
            Err(_) => {
                self.push(
                    key,
                    IssueKind::InvalidType,
                    "must be an array of strings or a comma-separated string",
                );
                None
            }
        }
    }

    fn string_field(&mut self, obj: &Map<String, Value>, key: &str) -> Option<String> {
        let value = obj.get(key)?;
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.push(key, IssueKind::InvalidType, "must be a string");
                None
            }
        }
    }

    fn url_field(&mut self, obj: &Map<String, Value>, key: &str) -> Option<String> {
        let raw = self.string_field(obj, key)?;
        match Url::parse(&raw) {
            Ok(_) => Some(raw),
            Err(_) => {
                self.push(key, IssueKind::InvalidUrl, "must be a valid URL");
                None
            }
        }
    }

    fn amount_field(&mut self, obj: &Map<String, Value>, key: &str) -> Option<serde_json::Number> {
        let value = obj.get(key)?;
        let number = match value {
            Value::Number(n) => n.clone(),
            _ => {
                self.push(key, IssueKind::InvalidType, "must be a number");
                return None;
            }
        };
        if number.as_f64().is_some_and(|amount| amount < 0.0) {
            self.push(key, IssueKind::NegativeAmount, "must be greater than or equal to 0");
            return None;
        }
        Some(number)
    }

    fn webhooks_field(&mut self, obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
        let value = obj.get(key)?;
        let entries = match serde_json::from_value::<Vec<String>>(value.clone()) {
            Ok(entries) => entries,
            Err(_) => {
                self.push(key, IssueKind::InvalidType, "must be an array of URLs");
                return None;
            }
        };
        if entries.len() > MAX_WEBHOOKS {
            self.push(
                key,
                IssueKind::TooManyWebhooks,
                format!("at most {} entries allowed, got {}", MAX_WEBHOOKS, entries.len()),
            );
        }
        for (index, entry) in entries.iter().enumerate() {
            match Url::parse(entry) {
                Ok(parsed) if parsed.scheme() == "https" => {}
                Ok(_) => {
                    self.push(format!("{key}[{index}]"), IssueKind::InsecureWebhook, "must use https");
                }
                Err(_) => {
                    self.push(format!("{key}[{index}]"), IssueKind::InvalidUrl, "must be a valid URL");
                }
            }
        }
        Some(entries)
    }

    fn og_field(&mut self, obj: &Map<String, Value>, key: &str) -> Option<OgPreferences> {
        let value = obj.get(key)?;
        let map = match value.as_object() {
            Some(map) => map,
            None => {
                self.push(key, IssueKind::InvalidType, "must be an object");
                return None;
            }
        };
        let mut og = OgPreferences::default();
        for (og_key, og_value) in map {
            if og_key == "baseUrl" {
                match og_value.as_str() {
                    Some(s) => og.base_url = Some(s.to_string()),
                    None => self.push("og.baseUrl", IssueKind::InvalidType, "must be a string"),
                }
            } else {
                og.extra.insert(og_key.clone(), og_value.clone());
            }
        }
        Some(og)
    }
}

/// Validate raw preferences into the canonical shape.
///
/// The input may be a JSON object or a JSON string containing one (the
/// text-record form); see [`parser::coerce_object`] for how malformed
/// text recovers. When both a current key and its legacy counterpart are
/// present (`chains`/`chainIds`, `tokens`/`tokenSymbols`), the current
/// key wins and the legacy one is discarded. Chain entries that fail to
/// resolve are dropped silently, never an error.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let prefs = payprefs::validate(&json!({
///     "tokens": "USDC,USDT",
///     "chains": ["eth", "arb1"],
/// })).unwrap();
/// assert_eq!(prefs.chain_ids, vec![1, 42161]);
/// assert_eq!(prefs.token_symbols, vec!["USDC", "USDT"]);
/// ```
///
/// # Errors
///
/// Returns a [`ValidationError`] aggregating every field-level violation:
/// a non-https webhook, more than [`MAX_WEBHOOKS`] webhooks, an invalid
/// `redirectUrl`, a negative `amount`, or any field whose type does not
/// match its contract.
pub fn validate(input: &Value) -> Result<Preferences, ValidationError> {
    let obj = parser::coerce_object(input)?;
    let mut v = Validator::new();

    let chains = v.chain_field(&obj, "chains");
    let chain_ids = v.chain_field(&obj, "chainIds");
    let tokens = v.token_field(&obj, "tokens");
    let token_symbols = v.token_field(&obj, "tokenSymbols");
    let redirect_url = v.url_field(&obj, "redirectUrl");
    let currency = v.string_field(&obj, "currency");
    let amount = v.amount_field(&obj, "amount");
    let webhooks = v.webhooks_field(&obj, "webhooks");
    let og = v.og_field(&obj, "og");
    v.finish()?;

    let extra: Map<String, Value> =
        obj.into_iter().filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str())).collect();

    Ok(Preferences {
        chain_ids: chains.or(chain_ids).unwrap_or_default(),
        token_symbols: tokens.or(token_symbols).unwrap_or_default(),
        redirect_url,
        currency,
        amount,
        webhooks,
        og,
        extra,
    })
}

/// Validate a raw text record (JSON string input).
pub fn validate_str(input: &str) -> Result<Preferences, ValidationError> {
    validate(&Value::String(input.to_string()))
}
