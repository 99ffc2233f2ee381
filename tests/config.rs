mod common;

use common::setup_test_env;
use mod_vault::config::AppSettings;
use mod_vault::utils::log;

#[test]
fn default_settings_resolve_a_data_root() {
    let settings = AppSettings::default();
    assert_eq!(settings.version, 0);
    assert!(!settings.home.as_os_str().is_empty());
}

#[test]
fn log_init_is_reentrant() {
    let (_tmp, root) = setup_test_env();
    let _first = log::init(&root);
    // A second call must not panic; the existing subscriber stays in place.
    let _second = log::init(&root);
}
