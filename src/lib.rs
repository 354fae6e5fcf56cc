//! Payment preferences - normalization, validation, and text-record
//! encoding.
//!
//! This library provides functionality to:
//! - Normalize loosely-structured preference input (objects or JSON
//!   strings, arrays or comma-separated strings, legacy or current key
//!   names) into one canonical shape
//! - Validate constraints: URL syntax, https-only webhooks, non-negative
//!   amounts, supported-chain membership
//! - Serialize canonical preferences back to a compact text record
//!
//! The whole pipeline is pure and synchronous; the only process-wide
//! state is the immutable chain registry in [`chains`].

pub mod chains;
pub mod models;
pub mod output;
pub mod parser;
pub mod validate;

pub use chains::{chain_id_to_short_name, resolve_chain_or_short_name, SUPPORTED_CHAINS};
pub use models::{OgPreferences, Preferences};
pub use output::{text_record, to_text_record};
pub use validate::{validate, validate_str, IssueKind, ValidationError, ValidationIssue, MAX_WEBHOOKS};
