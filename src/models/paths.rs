use camino::{Utf8Path, Utf8PathBuf};
use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

define_paths!(VaultPathRules {
    data: "data",
    enabled: "data/enabled.json",
    disabled: "data/disabled-mods.json",
    transfer_marker: "data/transfer.json",
    content: "content",
    icons: "icons",
});

impl VaultPathRules {
    /// Location of a mod's icon, derived from its id.
    pub fn icon_file(&self, id: &str) -> Utf8PathBuf {
        self.icons.join(format!("{id}.jpg"))
    }
}

/// Prefix under which all installable content lives inside a package.
/// Registry `files` lists are relative to it.
pub const CONTENT_PREFIX: &str = "content/";

static RECOGNIZED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^content/(?:audio/.+\.ogg|img/.+\.png|strings/.+\.json)$)|^icons/")
        .expect("recognized-file pattern is valid")
});

/// Whether an archive-relative path is one the application knows how to use:
/// audio, image or strings files under the content prefix, or an icon.
pub fn is_recognized(path: &str) -> bool {
    RECOGNIZED.is_match(path)
}

/// Strips the content prefix, yielding the content-relative path stored in
/// registry `files` lists. Returns None for paths outside the content tree.
pub fn strip_content_prefix(path: &str) -> Option<&str> {
    path.strip_prefix(CONTENT_PREFIX)
}
