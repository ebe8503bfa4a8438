use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/favgrab/config.toml`.
///
/// Every field has a default so a partial (or absent) file still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FavgrabConfig {
    /// JS file containing the `export const mockData = { ... }` assignment.
    pub input_file: PathBuf,
    /// Directory the `<domain>.ico` files are written to.
    pub output_dir: PathBuf,
    /// Response bodies smaller than this are rejected as error pages.
    pub min_icon_bytes: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Transport-level retries per request (connection/timeout failures only).
    pub max_retries: u32,
    /// Fixed delay inserted after every task, in milliseconds.
    pub delay_ms: u64,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Accept header sent with every request.
    pub accept: String,
}

impl Default for FavgrabConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("src/mock/mock_data.js"),
            output_dir: PathBuf::from("public/sitelogo"),
            min_icon_bytes: 100,
            timeout_secs: 10,
            max_retries: 3,
            delay_ms: 500,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            accept: "image/webp,image/apng,image/*,*/*;q=0.8".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("favgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FavgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FavgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FavgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
