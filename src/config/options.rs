// src/config/options.rs
use std::env;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub server: ServerOptions,
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

/// Where to connect and as whom.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ServerOptions {
    pub url: String,
    pub user: String,
    pub password: String,
    pub project: String,
}

// Keep the password out of log lines.
impl std::fmt::Debug for ServerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerOptions")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"***")
            .field("project", &self.project)
            .finish()
    }
}

impl ServerOptions {
    /// Read connection details from the `XNAT_*` environment that XNAT sets
    /// for container-launched dashboards. The project id is only taken when
    /// the launch context is a project.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_project = get(ENV_XSI_TYPE).as_deref() == Some(PROJECT_XSI_TYPE);
        Self {
            url: get(ENV_HOST).unwrap_or_default(),
            user: get(ENV_USER).unwrap_or_default(),
            password: get(ENV_PASS).unwrap_or_default(),
            project: if is_project { get(ENV_ITEM_ID).unwrap_or_default() } else { s!() },
        }
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    pub fn is_complete(&self) -> bool {
        !self.base_url().is_empty() && !self.project.trim().is_empty()
    }
}

/// Filters applied per experiment before any scan is looked at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Label must contain this text. Empty means no filter.
    pub label_filter: Option<String>,
    /// Label must contain "split" (case-insensitive).
    pub split_only: bool,
}

impl ExtractOptions {
    pub fn new(label_filter: Option<String>, split_only: bool) -> Self {
        Self { label_filter, split_only }
    }

    /// Take the filter box text as-is; only an empty box clears the filter.
    pub fn set_filter_text(&mut self, text: &str) {
        self.label_filter = if text.is_empty() { None } else { Some(s!(text)) };
    }

    /// The filter text, or `None` when unset or empty.
    pub fn active_filter(&self) -> Option<&str> {
        self.label_filter.as_deref().filter(|f| !f.is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Parse GUI/CLI text into the output path. A trailing separator or an
    /// existing directory means "put the default file name in there".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = PathBuf::from(DEFAULT_OUT_FILE);
            return;
        }
        let p = PathBuf::from(crate::file::normalize_separators(s));
        self.out_path = if crate::file::looks_like_dir_hint(&p) || p.is_dir() {
            p.join(DEFAULT_OUT_FILE)
        } else {
            p
        };
    }
}
