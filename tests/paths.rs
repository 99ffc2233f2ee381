use camino::Utf8Path;
use mod_vault::models::paths::{self, VaultPathRules};

#[test]
fn recognized_patterns_match_supported_content() {
    assert!(paths::is_recognized("content/audio/wind.ogg"));
    assert!(paths::is_recognized("content/img/portrait.png"));
    assert!(paths::is_recognized("content/strings/ui.json"));
    assert!(paths::is_recognized("icons/abc123.jpg"));

    assert!(!paths::is_recognized("content/audio/wind.mp3"));
    assert!(!paths::is_recognized("content/video/intro.mp4"));
    assert!(!paths::is_recognized("audio/wind.ogg"));
    assert!(!paths::is_recognized("mod.txt"));
}

#[test]
fn content_prefix_strips_only_content_paths() {
    assert_eq!(
        paths::strip_content_prefix("content/audio/wind.ogg"),
        Some("audio/wind.ogg")
    );
    assert_eq!(paths::strip_content_prefix("icons/x.jpg"), None);
    assert_eq!(paths::strip_content_prefix("mod.txt"), None);
}

#[test]
fn layout_is_rooted_at_the_data_root() {
    let rules = VaultPathRules::new(Utf8Path::new("/srv/vault"));

    assert_eq!(rules.enabled, "/srv/vault/data/enabled.json");
    assert_eq!(rules.disabled, "/srv/vault/data/disabled-mods.json");
    assert_eq!(rules.transfer_marker, "/srv/vault/data/transfer.json");
    assert_eq!(rules.content, "/srv/vault/content");
    assert_eq!(rules.icon_file("abc"), "/srv/vault/icons/abc.jpg");
}
