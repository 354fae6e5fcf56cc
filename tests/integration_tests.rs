//! End-to-end pipeline tests: raw input through validation to the
//! text-record encoding and back.

use serde_json::json;

use payprefs::{to_text_record, validate, validate_str};

#[test]
fn full_record_normalizes_end_to_end() {
    let prefs = validate(&json!({
        "tokens": "USDC,USDT,USDGLO",
        "chains": "8453,137,10",
        "redirectUrl": "https://example.com/thanks",
        "currency": "USD",
        "amount": 25,
        "webhooks": ["https://example.com/hook"],
        "og": {"baseUrl": "https://og.example.com"},
        "partnerId": "abc-123",
    }))
    .unwrap();

    assert_eq!(prefs.token_symbols, vec!["USDC", "USDT", "USDGLO"]);
    assert_eq!(prefs.chain_ids, vec![8453, 137, 10]);
    assert_eq!(prefs.redirect_url.as_deref(), Some("https://example.com/thanks"));
    assert_eq!(prefs.currency.as_deref(), Some("USD"));
    assert_eq!(prefs.amount, Some(serde_json::Number::from(25)));
    assert_eq!(prefs.webhooks.as_deref(), Some(&["https://example.com/hook".to_string()][..]));
    assert_eq!(prefs.extra.get("partnerId"), Some(&json!("abc-123")));
}

#[test]
fn text_record_round_trip_reproduces_chain_ids() {
    let original = validate(&json!({"chains": [1, 10, 8453], "tokens": ["ETH"]})).unwrap();
    let record = to_text_record(&original);
    let reparsed = validate_str(&record).unwrap();
    assert_eq!(reparsed.chain_ids, original.chain_ids);
    assert_eq!(reparsed.token_symbols, original.token_symbols);
}

#[test]
fn stored_record_with_short_names_resolves() {
    let prefs = validate_str(r#"{"tokens":["USDC"],"chains":["eth","arb1"]}"#).unwrap();
    assert_eq!(prefs.token_symbols, vec!["USDC"]);
    assert_eq!(prefs.chain_ids, vec![1, 42161]);
}

#[test]
fn corrupt_stored_record_degrades_to_defaults() {
    let prefs = validate_str("{not valid").unwrap();
    assert!(prefs.chain_ids.is_empty());
    assert!(prefs.token_symbols.is_empty());
    assert!(prefs.extra.is_empty());
}

#[test]
fn canonical_output_revalidates_unchanged() {
    let first = validate(&json!({
        "chainIds": ["eth", 137],
        "tokenSymbols": "USDC, DAI",
        "webhooks": ["https://example.com/a", "https://example.com/b"],
        "theme": {"dark": true},
    }))
    .unwrap();
    let second = validate(&serde_json::to_value(&first).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mixed_legacy_and_current_keys_follow_precedence() {
    let prefs = validate(&json!({
        "chains": [1],
        "chainIds": [2, 137],
        "tokenSymbols": ["OLD"],
    }))
    .unwrap();
    // Current key wins for chains; tokens fall back to the legacy key.
    assert_eq!(prefs.chain_ids, vec![1]);
    assert_eq!(prefs.token_symbols, vec!["OLD"]);
}

#[test]
fn all_violations_reported_in_one_error() {
    let err = validate(&json!({
        "redirectUrl": "no scheme here",
        "amount": -3,
        "webhooks": ["http://insecure.example.com"],
    }))
    .unwrap_err();
    assert_eq!(err.issues.len(), 3);

    let fields: Vec<&str> = err.issues.iter().map(|issue| issue.field.as_str()).collect();
    assert!(fields.contains(&"redirectUrl"));
    assert!(fields.contains(&"amount"));
    assert!(fields.contains(&"webhooks[0]"));
}

#[test]
fn serializer_handles_partial_objects() {
    // The serializer accepts any object shape, not just canonical output.
    let record = match json!({"chainIds": [1, 10], "tokenSymbols": ["ETH", "DAI"]}) {
        serde_json::Value::Object(map) => payprefs::text_record(&map),
        _ => unreachable!(),
    };
    assert_eq!(record, r#"{"tokens":"ETH,DAI","chains":"eth,oeth"}"#);
}
