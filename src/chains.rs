//! Chain registry: the supported-chain allow-list and short-name aliases.
//!
//! Both tables are compile-time constants and never mutated. Declaration
//! order in [`SHORT_NAMES`] is observable: an id can carry several aliases
//! ("oeth" and "op" both name Optimism), and reverse lookup reports the
//! first one declared.

/// A supported chain: numeric id plus its canonical network label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub id: u64,
    pub name: &'static str,
}

/// Allow-list of chains a preference record may reference (single source
/// of truth for membership filtering).
pub const SUPPORTED_CHAINS: &[ChainInfo] = &[
    ChainInfo { id: 1, name: "mainnet" },
    ChainInfo { id: 137, name: "polygon" },
    ChainInfo { id: 42161, name: "arbitrum" },
    ChainInfo { id: 10, name: "optimism" },
    ChainInfo { id: 100, name: "gnosis" },
    ChainInfo { id: 8453, name: "base" },
];

/// Short-name alias table. First entry per id wins on reverse lookup.
pub const SHORT_NAMES: &[(&str, u64)] = &[
    ("eth", 1),
    ("oeth", 10),
    ("op", 10),
    ("pol", 137),
    ("gno", 100),
    ("arb1", 42161),
    ("base", 8453),
];

/// Returns true if `id` is in the supported-chain allow-list.
pub fn is_supported(id: u64) -> bool {
    SUPPORTED_CHAINS.iter().any(|chain| chain.id == id)
}

/// Reverse lookup: the first declared short name for `id`, or `None` if
/// the id has no alias.
pub fn chain_id_to_short_name(id: u64) -> Option<&'static str> {
    SHORT_NAMES.iter().find(|entry| entry.1 == id).map(|entry| entry.0)
}

/// Resolve a chain reference that may be a decimal id or a short name.
///
/// Numeric strings parse to their integer value even when that id is not
/// supported - membership filtering is a separate, later step. Short-name
/// lookup is case-insensitive. Unresolvable input yields `None`.
///
/// # Examples
///
/// ```
/// use payprefs::chains::resolve_chain_or_short_name;
///
/// assert_eq!(resolve_chain_or_short_name("137"), Some(137));
/// assert_eq!(resolve_chain_or_short_name("ETH"), Some(1));
/// assert_eq!(resolve_chain_or_short_name("unknown"), None);
/// ```
pub fn resolve_chain_or_short_name(input: &str) -> Option<u64> {
    if let Ok(id) = input.parse::<u64>() {
        return Some(id);
    }
    let lowered = input.to_ascii_lowercase();
    SHORT_NAMES.iter().find(|entry| entry.0 == lowered).map(|entry| entry.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_numeric_string() {
        assert_eq!(resolve_chain_or_short_name("1"), Some(1));
        assert_eq!(resolve_chain_or_short_name("8453"), Some(8453));
        // Unsupported ids still resolve; filtering happens downstream.
        assert_eq!(resolve_chain_or_short_name("999999"), Some(999999));
    }

    #[test]
    fn test_resolve_short_name() {
        assert_eq!(resolve_chain_or_short_name("eth"), Some(1));
        assert_eq!(resolve_chain_or_short_name("arb1"), Some(42161));
        assert_eq!(resolve_chain_or_short_name("base"), Some(8453));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve_chain_or_short_name("ETH"), Some(1));
        assert_eq!(resolve_chain_or_short_name("Gno"), Some(100));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve_chain_or_short_name("solana"), None);
        assert_eq!(resolve_chain_or_short_name(""), None);
        assert_eq!(resolve_chain_or_short_name("-5"), None);
    }

    #[test]
    fn test_reverse_lookup_first_declared_alias_wins() {
        // 10 has two aliases; "oeth" is declared before "op".
        assert_eq!(chain_id_to_short_name(10), Some("oeth"));
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(chain_id_to_short_name(1), Some("eth"));
        assert_eq!(chain_id_to_short_name(137), Some("pol"));
        assert_eq!(chain_id_to_short_name(42161), Some("arb1"));
        assert_eq!(chain_id_to_short_name(999999), None);
    }

    #[test]
    fn test_is_supported() {
        for chain in SUPPORTED_CHAINS {
            assert!(is_supported(chain.id));
        }
        assert!(!is_supported(0));
        assert!(!is_supported(999999));
    }

    #[test]
    fn test_every_alias_targets_a_supported_chain() {
        for (name, id) in SHORT_NAMES {
            assert!(is_supported(*id), "alias {} maps to unsupported id {}", name, id);
        }
    }
}
