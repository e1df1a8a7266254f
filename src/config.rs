//! Configuration management for prisma-sort.
//!
//! This module provides the [`Config`] struct which controls sorting and formatting.
//! Configuration can be loaded from:
//! - TOML files (`prisma-sort.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the schema
//! file up to the filesystem root, plus the user's home directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::process::{FormatterCommand, DEFAULT_FORMATTER};
use crate::sort::{
    SortOptions, CREATED_AT_MARKER, DEFAULT_CREATED_AT_LINE, DEFAULT_UPDATED_AT_LINE,
    UPDATED_AT_MARKER,
};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["prisma-sort.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME environment variable first (works on Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_true() -> bool {
    true
}
fn default_formatter() -> String {
    DEFAULT_FORMATTER.to_string()
}
fn default_created_at_line() -> String {
    DEFAULT_CREATED_AT_LINE.to_string()
}
fn default_updated_at_line() -> String {
    DEFAULT_UPDATED_AT_LINE.to_string()
}

/// Main configuration struct for prisma-sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Run the external formatter after writing (default: true)
    #[serde(default = "default_true")]
    pub format: bool,

    /// Formatter command line (default: `npx prisma format`)
    #[serde(default = "default_formatter")]
    pub formatter: String,

    /// Append `--schema <path>` to the formatter command (default: true)
    #[serde(default = "default_true")]
    pub pass_schema: bool,

    /// Inject missing `createdAt`/`updatedAt` fields (default: true)
    #[serde(default = "default_true")]
    pub insert_timestamps: bool,

    /// Line injected for a missing `createdAt`
    #[serde(default = "default_created_at_line")]
    pub created_at_line: String,

    /// Line injected for a missing `updatedAt`
    #[serde(default = "default_updated_at_line")]
    pub updated_at_line: String,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub format: Option<bool>,
    pub formatter: Option<String>,
    pub pass_schema: Option<bool>,
    pub insert_timestamps: Option<bool>,
    pub created_at_line: Option<String>,
    pub updated_at_line: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: true,
            formatter: default_formatter(),
            pass_schema: true,
            insert_timestamps: true,
            created_at_line: default_created_at_line(),
            updated_at_line: default_updated_at_line(),
        }
    }
}

impl Config {
    /// Validate configuration values
    ///
    /// Returns an error message if validation fails, None if valid.
    /// Injected lines must carry their marker, otherwise a second run would
    /// inject them again.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.format && self.formatter.trim().is_empty() {
            return Some("formatter must not be empty when format is enabled".to_string());
        }
        if !self.created_at_line.contains(CREATED_AT_MARKER) {
            return Some(format!(
                "created_at_line {:?} must contain `{CREATED_AT_MARKER}`",
                self.created_at_line
            ));
        }
        if !self.updated_at_line.contains(UPDATED_AT_MARKER) {
            return Some(format!(
                "updated_at_line {:?} must contain `{UPDATED_AT_MARKER}`",
                self.updated_at_line
            ));
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let partial: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        let mut config = Self::default();
        config.apply_partial(partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: PartialConfig) {
        if let Some(v) = partial.format {
            self.format = v;
        }
        if let Some(v) = partial.formatter {
            self.formatter = v;
        }
        if let Some(v) = partial.pass_schema {
            self.pass_schema = v;
        }
        if let Some(v) = partial.insert_timestamps {
            self.insert_timestamps = v;
        }
        if let Some(v) = partial.created_at_line {
            self.created_at_line = v;
        }
        if let Some(v) = partial.updated_at_line {
            self.updated_at_line = v;
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the schema's directory up to the root, then adds home directory config.
    /// Returns list of config file paths in order of priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Add home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        // Start from the file's parent directory (or the path itself if it's a directory)
        let start_dir = if start_path.is_file() {
            // A bare file name has an empty parent; that means the current directory
            start_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .or_else(|| std::env::current_dir().ok())
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        // Collect config files from parent directories (from root to current)
        if let Some(dir) = start_dir {
            let dir = std::path::absolute(&dir).unwrap_or(dir);
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Reverse so we go from root to current (less specific to more specific)
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let config_files = Self::discover_config_files(start_path);

        let mut config = Self::default();
        for path in &config_files {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }

    /// Options for the reorder transform
    #[must_use]
    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            insert_timestamps: self.insert_timestamps,
            created_at_line: self.created_at_line.clone(),
            updated_at_line: self.updated_at_line.clone(),
        }
    }

    /// The configured formatter command
    pub fn formatter_command(&self) -> anyhow::Result<FormatterCommand> {
        FormatterCommand::parse(&self.formatter, self.pass_schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.format);
        assert_eq!(config.formatter, "npx prisma format");
        assert!(config.pass_schema);
        assert!(config.insert_timestamps);
        assert_eq!(config.created_at_line, "    createdAt DateTime @default(now())");
        assert_eq!(config.updated_at_line, "    updatedAt DateTime @updatedAt");
    }

    #[test]
    fn test_sort_options_from_config() {
        let config = Config {
            insert_timestamps: false,
            ..Default::default()
        };
        let options = config.sort_options();
        assert!(!options.insert_timestamps);
        assert_eq!(options.created_at_line, DEFAULT_CREATED_AT_LINE);
    }

    #[test]
    fn test_formatter_command_from_config() {
        let config = Config {
            formatter: "bunx prisma format".to_string(),
            pass_schema: false,
            ..Default::default()
        };
        let cmd = config.formatter_command().unwrap();
        assert_eq!(cmd.program, "bunx");
        assert_eq!(cmd.args, vec!["prisma", "format"]);
        assert!(!cmd.pass_schema);
    }

    #[test]
    fn test_config_apply_partial() {
        let mut base = Config::default();

        // Only set formatter and insert_timestamps, leave others as None
        let partial = PartialConfig {
            formatter: Some("pnpm prisma format".to_string()),
            insert_timestamps: Some(false),
            ..Default::default()
        };

        base.apply_partial(partial);
        assert_eq!(base.formatter, "pnpm prisma format");
        assert!(!base.insert_timestamps);
        // Other fields should remain at defaults
        assert!(base.format);
        assert!(base.pass_schema);
    }

    #[test]
    fn test_config_apply_partial_preserves_unset() {
        let mut base = Config::default();
        base.format = false; // Set a non-default value

        let partial = PartialConfig {
            pass_schema: Some(false),
            ..Default::default()
        };

        base.apply_partial(partial);
        // format should be preserved (not reset to default)
        assert!(!base.format);
        assert!(!base.pass_schema);
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prisma-sort.toml");
        std::fs::write(
            &path,
            "format = false\nupdated_at_line = \"  updatedAt DateTime @updatedAt @map(\\\"updated_at\\\")\"\n",
        )
        .unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        assert!(!config.format);
        assert_eq!(
            config.updated_at_line,
            "  updatedAt DateTime @updatedAt @map(\"updated_at\")"
        );
        assert_eq!(config.created_at_line, DEFAULT_CREATED_AT_LINE);
    }

    #[test]
    fn test_from_toml_file_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prisma-sort.toml");
        std::fs::write(&path, "format = \"yes please\"\n").unwrap();
        assert!(Config::from_toml_file(&path).is_err());
    }

    #[test]
    fn test_discover_config_files_order() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("app").join("prisma");
        std::fs::create_dir_all(&nested).unwrap();
        let outer = dir.path().join("prisma-sort.toml");
        let inner = nested.join("prisma-sort.toml");
        std::fs::write(&outer, "format = false\npass_schema = false\n").unwrap();
        std::fs::write(&inner, "format = true\n").unwrap();
        let schema = nested.join("schema.prisma");
        std::fs::write(&schema, "").unwrap();

        let files = Config::discover_config_files(&schema);
        let outer_pos = files.iter().position(|f| f == &outer);
        let inner_pos = files.iter().position(|f| f == &inner);
        assert!(outer_pos.unwrap() < inner_pos.unwrap());

        // Inner file wins for format, outer value survives for pass_schema
        let config = Config::from_discovered_files(&schema);
        assert!(config.format);
        assert!(!config.pass_schema);
    }

    #[test]
    fn test_discovered_invalid_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("prisma");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join("prisma-sort.toml"),
            "pass_schema = false\nformatter = \"pnpm prisma format\"\n",
        )
        .unwrap();
        std::fs::write(nested.join("prisma-sort.toml"), "format = [not toml\n").unwrap();
        let schema = nested.join("schema.prisma");
        std::fs::write(&schema, "").unwrap();

        let config = Config::from_discovered_files(&schema);
        assert!(!config.pass_schema);
        assert_eq!(config.formatter, "pnpm prisma format");
        // The broken file's key falls back to the default
        assert!(config.format);
    }

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(
            config.validate().is_none(),
            "Default config should be valid"
        );
    }

    #[test]
    fn test_validate_empty_formatter() {
        let config = Config {
            formatter: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("formatter"));

        // Empty formatter is fine when formatting is off
        let config = Config {
            formatter: String::new(),
            format: false,
            ..Default::default()
        };
        assert!(config.validate().is_none());
    }

    #[test]
    fn test_validate_timestamp_lines() {
        let config = Config {
            created_at_line: "  created DateTime".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("created_at_line"));

        let config = Config {
            updated_at_line: "  modified DateTime".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("updated_at_line"));
    }
}
