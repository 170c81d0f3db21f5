use super::*;
use std::collections::HashMap;

fn config(pairs: &[(&'static str, &'static str)]) -> Result<ServerConfig, ConfigError> {
    let mut vars: HashMap<&str, &str> = pairs.iter().copied().collect();
    vars.entry("DATABASE_URL").or_insert("postgres://localhost/gesture");
    ServerConfig::from_map(&vars)
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn defaults_apply_when_only_database_url_is_set() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/gesture");
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.session_ttl_hours, 720);
    assert_eq!(cfg.db_max_connections, 5);
    assert!(cfg.serve_ui);
    assert_eq!(cfg.cors_allowed_origins, vec!["http://localhost:5173", "http://localhost:5174"]);
}

#[test]
fn missing_database_url_is_an_error() {
    let err = ServerConfig::from_map(&HashMap::new()).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn blank_database_url_is_an_error() {
    let err = config(&[("DATABASE_URL", "   ")]).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn explicit_values_override_defaults() {
    let cfg = config(&[
        ("PORT", "3000"),
        ("SESSION_TTL_HOURS", "24"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("SERVE_UI", "off"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.session_ttl_hours, 24);
    assert_eq!(cfg.db_max_connections, 12);
    assert!(!cfg.serve_ui);
}

#[test]
fn blank_numeric_values_fall_back_to_defaults() {
    let cfg = config(&[("PORT", ""), ("DB_MAX_CONNECTIONS", " ")]).unwrap();
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.db_max_connections, 5);
}

#[test]
fn unparseable_port_is_reported_with_its_key() {
    let err = config(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".into() });
}

#[test]
fn non_positive_session_ttl_is_rejected() {
    assert!(matches!(config(&[("SESSION_TTL_HOURS", "0")]), Err(ConfigError::Invalid { key: "SESSION_TTL_HOURS", .. })));
    assert!(matches!(config(&[("SESSION_TTL_HOURS", "-4")]), Err(ConfigError::Invalid { key: "SESSION_TTL_HOURS", .. })));
}

#[test]
fn unparseable_serve_ui_is_rejected() {
    let err = config(&[("SERVE_UI", "maybe")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "SERVE_UI", value: "maybe".into() });
}

// =============================================================================
// parse_origins
// =============================================================================

#[test]
fn parse_origins_trims_and_drops_blanks() {
    assert_eq!(
        parse_origins(" https://a.example/ ,, http://b.example:8080 "),
        vec!["https://a.example", "http://b.example:8080"]
    );
}

#[test]
fn parse_origins_empty_is_empty() {
    assert!(parse_origins("").is_empty());
    assert!(parse_origins(" , ").is_empty());
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "Yes", "  on  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False", " NO "] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_other_values() {
    for val in ["", "maybe", "2", "enabled"] {
        assert_eq!(parse_bool(val), None, "expected None for {val:?}");
    }
}
