//! Site configuration management for `chronica.toml`.
//!
//! # Sections
//!
//! | Section           | Purpose                                       |
//! |-------------------|-----------------------------------------------|
//! | `[site.info]`     | Site metadata (title, author, url, language)  |
//! | `[[site.nav]]`    | Navigation entries for the listing page       |
//! | `[build]`         | Content/output paths, minify, drafts          |
//! | `[build.feed]`    | Feed generation (enable, path, format)        |
//! | `[build.listing]` | Listing page data (path, route)               |

mod error;
pub mod section;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{
    BuildSectionConfig, FeedConfig, FeedFormat, ListingConfig, NavEntry, SiteInfoConfig,
    SiteSectionConfig,
};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::cli::{BuildArgs, Cli, Commands};
use crate::log;

/// Root configuration structure representing chronica.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site configuration (info, nav)
    pub site: SiteSectionConfig,

    /// Build settings
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the project root
    /// is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(
                "config file '{}' not found (searched upward from the current directory)",
                cli.config.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Finalize configuration after loading: resolve the project root,
    /// apply CLI overrides, and anchor content/output paths at the root.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        // CLI path overrides first
        if let Some(content) = &cli.content {
            self.build.content = content.clone();
        }
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }

        self.build.content = resolve(&root, &self.build.content);
        self.build.output = resolve(&root, &self.build.output);
        self.root = root;
        // Note: feed.path and listing.path are kept as relative filenames.
        // They are resolved against the output directory at write time.

        if let Commands::Build { build_args } = &cli.command {
            self.apply_build_args(build_args);
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        // Set verbose mode globally
        crate::logger::set_verbose(args.verbose);

        if let Some(minify) = args.minify {
            self.build.minify = minify;
        }
        if let Some(feed) = args.feed {
            self.build.feed.enable = feed;
        }
        if args.drafts {
            self.build.include_drafts = true;
        }

        // Override site URL if provided via CLI
        if let Some(url) = &args.site_url {
            self.site.info.url = Some(url.clone());
        }
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.info.validate(self.build.feed.enable, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }
}

/// Anchor a relative path at the project root.
fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Search upward from cwd for the config file.
fn find_config_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}
