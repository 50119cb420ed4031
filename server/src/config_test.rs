use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM", "http://localhost:5000")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream, "http://localhost:5000");
    assert_eq!(cfg.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
    assert!(cfg.dist_dir.ends_with("client/dist"));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("API_UPSTREAM", "https://api.example.test/"),
        ("PORT", " 8080 "),
        ("DIST_DIR", "/srv/portal"),
        ("UPSTREAM_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream, "https://api.example.test");
    assert_eq!(cfg.dist_dir, PathBuf::from("/srv/portal"));
    assert_eq!(cfg.upstream_timeout_secs, 5);
}

#[test]
fn missing_upstream_errors() {
    let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("API_UPSTREAM"));
    assert_eq!(err.to_string(), "missing required env var API_UPSTREAM");
}

#[test]
fn upstream_without_scheme_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM", "localhost:5000")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "API_UPSTREAM", value: "localhost:5000".to_owned() });
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM", "http://x.test"), ("PORT", "eighty")])).unwrap_err();
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn out_of_range_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM", "http://x.test"), ("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "70000".to_owned() });
}
