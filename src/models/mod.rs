//! Data models for preference records.

mod core;
mod preferences;

pub use core::{join_comma, split_comma, ChainList, ChainRef, StringList};
pub use preferences::{OgPreferences, Preferences};
