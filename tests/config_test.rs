//! Layered configuration loading. Kept to a single test: it mutates process env.

use std::env;
use std::fs;

use coffee_supply_client::{
    config::{load_config_from, run_env},
    display::Locale,
};
use tempfile::TempDir;

#[test]
fn profile_file_and_env_override_default_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "base_url = \"http://localhost:5077/\"\nlocale = \"vi\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("staging.toml"),
        "base_url = \"https://staging.coffee.example/\"\nrequest_timeout_secs = 20\n",
    )
    .unwrap();

    env::set_var("RUN_ENV", "staging");
    env::set_var("APP__LOCALE", "en");
    env::set_var("APP__ACCESS_TOKEN", "from-env");

    let loaded = load_config_from(dir.path());
    let profile = run_env();

    env::remove_var("RUN_ENV");
    env::remove_var("APP__LOCALE");
    env::remove_var("APP__ACCESS_TOKEN");

    assert_eq!(profile, "staging");
    let cfg = loaded.unwrap();
    assert_eq!(cfg.base_url, "https://staging.coffee.example/");
    assert_eq!(cfg.request_timeout_secs, Some(20));
    assert_eq!(cfg.locale, Locale::En);
    assert_eq!(cfg.access_token.as_deref(), Some("from-env"));
}
