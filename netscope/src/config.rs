use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Configuration for a search invocation.
///
/// # Configuration Locations
///
/// Values can be loaded from YAML files, in order of precedence:
/// 1. Custom config file specified via `--config`
/// 2. Local `.netscope.yaml` in the current directory
/// 3. Global `$HOME/.config/netscope/config.yaml`
///
/// CLI arguments take precedence over file values; the merging behavior is
/// defined in [`SearchConfig::merge_with_cli`].
///
/// # Configuration Format
///
/// ```yaml
/// # Term to search for (literal, case-insensitive)
/// term: "interface"
///
/// # Root directory to search in
/// root_path: "/etc/netconf"
///
/// # Glob patterns to exclude from the candidate set
/// ignore_patterns:
///   - "**/vendor/**"
///
/// # Show only statistics
/// stats_only: false
///
/// # Worker count for the search pool (default: 8)
/// worker_count: 8
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// The literal term to search for (matched case-insensitively)
    #[serde(default)]
    pub term: String,

    /// Root directory to start the search from
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,

    /// Glob patterns excluding files from the candidate set
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Whether to only show statistics instead of individual matches
    #[serde(default)]
    pub stats_only: bool,

    /// Number of workers searching files concurrently
    #[serde(default = "default_worker_count")]
    pub worker_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_root_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_worker_count() -> NonZeroUsize {
    NonZeroUsize::new(8).unwrap()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SearchConfig {
    /// Creates a configuration with default settings for a term and root.
    pub fn new(term: impl Into<String>, root_path: impl Into<PathBuf>) -> Self {
        Self {
            term: term.into(),
            root_path: root_path.into(),
            ignore_patterns: Vec::new(),
            stats_only: false,
            worker_count: default_worker_count(),
            log_level: default_log_level(),
        }
    }

    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("netscope/config.yaml")),
            // Local config
            Some(PathBuf::from(".netscope.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: SearchConfig) -> Self {
        if !cli_config.term.is_empty() {
            self.term = cli_config.term;
        }
        if cli_config.root_path != PathBuf::from(".") {
            self.root_path = cli_config.root_path;
        }
        if !cli_config.ignore_patterns.is_empty() {
            self.ignore_patterns = cli_config.ignore_patterns;
        }
        if cli_config.stats_only {
            self.stats_only = true;
        }
        // Always use CLI worker count if specified
        self.worker_count = cli_config.worker_count;
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }
}
