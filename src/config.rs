use crate::assets::{AssetGroup, DEFAULT_ICON_SIZES};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "./assets/generated/png";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Everything a generation run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root that receives `app-icons/`, `backgrounds/` and `ui-elements/`.
    pub output: PathBuf,
    /// Where the desktop shell's bundle icons go; skipped when unset.
    pub tauri_icons: Option<PathBuf>,
    pub icon_sizes: Vec<u32>,
    /// Groups to generate, in order.
    pub groups: Vec<AssetGroup>,
    pub remote: RemoteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            tauri_icons: None,
            icon_sizes: DEFAULT_ICON_SIZES.to_vec(),
            groups: AssetGroup::ALL.to_vec(),
            remote: RemoteConfig::default(),
        }
    }
}

/// Settings of the optional remote image-generation API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Never contact the API, even with a key.
    pub offline: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            offline: false,
        }
    }
}
