use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// `[html]`: the generated HTML API reference rewritten in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlConfig {
    pub path: PathBuf,
    /// Hide `Type:` paragraphs only inside `obj_`/`eqn_` definition cards.
    #[serde(default)]
    pub only_in_definitions: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("docs/index.html"),
            only_in_definitions: false,
        }
    }
}

/// `[markdown]`: scratch Markdown from the generator and the canonical file it becomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("docs/api_raw.md"),
            output: PathBuf::from("docs/api.md"),
        }
    }
}

/// `[audit]`: pages whose navigation region is link-checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Pages to audit, in order.
    pub sources: Vec<String>,
    /// `id` of the element whose links are checked.
    pub region_id: String,
    /// Page searched by the anchor check.
    pub reference_url: String,
    /// Also audit sub-folder pages linked from a source (one level).
    #[serde(default)]
    pub follow_folders: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                "https://github.com/airladon/FigureOne/tree/master/docs/examples".to_string(),
                "https://github.com/airladon/FigureOne/tree/master/docs/tutorials".to_string(),
            ],
            region_id: "readme".to_string(),
            reference_url: "https://airladon.github.io/FigureOne/api/".to_string(),
            follow_folders: false,
        }
    }
}

/// `[http]`: curl handle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
            user_agent: concat!("docsweep/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/docsweep/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocsweepConfig {
    #[serde(default)]
    pub html: HtmlConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docsweep")
        .map_err(|e| Error::Config(e.to_string()))?;
    xdg_dirs
        .place_config_file("config.toml")
        .map_err(|e| Error::io("config.toml", e))
}

/// Load configuration from the default location, creating a default file if none exists.
pub fn load_or_init() -> Result<DocsweepConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<DocsweepConfig> {
    if !path.exists() {
        let default_cfg = DocsweepConfig::default();
        let toml = toml::to_string_pretty(&default_cfg).map_err(|e| Error::Config(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(path, toml).map_err(|e| Error::io(path, e))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    toml::from_str(&data).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}
