use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Schema version written by this build. Files without a version are read
/// as this version; files claiming a later one are refused.
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

/// Desktop preferences. Transform results are never written here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn default_log_filter() -> String {
    "info".to_string()
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.textcase.desktop"))
}

/// Load the config from the platform config directory, writing the defaults
/// there first if no file exists yet.
pub fn load_or_init_config() -> eyre::Result<DesktopConfig> {
    let dir = config_dir()?;
    if !dir.join(CONFIG_FILE).exists() {
        let config = DesktopConfig::default();
        save_config_to(&dir, &config)?;
        return Ok(config);
    }
    load_config_from(&dir)
}

/// Like [`load_or_init_config`], but never fails: any problem with the file
/// or directory is reported on stderr and the defaults are used instead.
/// Runs before the subscriber is installed, hence no `tracing` here.
pub fn load_or_default() -> DesktopConfig {
    load_or_init_config().unwrap_or_else(|e| {
        eprintln!("textcase: using default config: {e:#}");
        DesktopConfig::default()
    })
}

pub fn load_config_from(dir: &Path) -> eyre::Result<DesktopConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> eyre::Result<DesktopConfig> {
    let config: DesktopConfig = serde_json::from_str(contents)?;
    if config.config_version > CURRENT_VERSION {
        eyre::bail!(
            "config_version {} is not supported (this build reads up to {CURRENT_VERSION})",
            config.config_version
        );
    }
    Ok(config)
}

/// Write `config` to `dir/config.json`, stamped with the current version.
///
/// The file is staged in a `tempfile::NamedTempFile` in the same directory
/// and persisted over the old one, so a crash never leaves half a file.
/// On Unix the staged file is already owner-only (0600).
pub fn save_config_to(dir: &Path, config: &DesktopConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    let stamped = DesktopConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    };

    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut staged, &stamped)?;
    staged.flush()?;

    let path = dir.join(CONFIG_FILE);
    staged
        .persist(&path)
        .map_err(|e| eyre::eyre!("failed to write config at {}: {}", path.display(), e.error))?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
