use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    SiteConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.content_dir, PathBuf::from("content/work"));
    assert_eq!(cfg.assets_dir, PathBuf::from("public"));
    assert_eq!(cfg.site_name, "Techveda");
    assert_eq!(cfg.content_load_timeout_secs, DEFAULT_CONTENT_LOAD_TIMEOUT_SECS);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("CONTENT_DIR", "/srv/site/work"),
        ("ASSETS_DIR", "/srv/site/public"),
        ("SITE_NAME", "Studio"),
        ("CONTENT_LOAD_TIMEOUT_SECS", "12"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.content_dir, PathBuf::from("/srv/site/work"));
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/site/public"));
    assert_eq!(cfg.site_name, "Studio");
    assert_eq!(cfg.content_load_timeout_secs, 12);
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = config_from(&[("PORT", "http")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn from_lookup_port_out_of_range_errors() {
    assert!(config_from(&[("PORT", "70000")]).is_err());
}

#[test]
fn from_lookup_bad_timeout_falls_back() {
    let cfg = config_from(&[("CONTENT_LOAD_TIMEOUT_SECS", "soon")]).unwrap();
    assert_eq!(cfg.content_load_timeout_secs, DEFAULT_CONTENT_LOAD_TIMEOUT_SECS);

    let cfg = config_from(&[("CONTENT_LOAD_TIMEOUT_SECS", "0")]).unwrap();
    assert_eq!(cfg.content_load_timeout_secs, DEFAULT_CONTENT_LOAD_TIMEOUT_SECS);
}

#[test]
fn from_lookup_blank_site_name_falls_back() {
    let cfg = config_from(&[("SITE_NAME", "   ")]).unwrap();
    assert_eq!(cfg.site_name, DEFAULT_SITE_NAME);
}
