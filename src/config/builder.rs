//! Builder for [`SiteConfig`] with build-time validation.
//!
//! Exclusion globs compile to regexes and custom selectors are checked
//! against the selector engine here, once, so that a bad pattern fails
//! configuration resolution instead of silently disabling minification
//! for every entry later.

use std::path::Path;

use regex::Regex;

use super::types::{MinifyOptions, MinifyPolicy, OptionalLink, SiteConfig, SiteConfigFile, TrailingSlash};
use crate::error::{GenerateError, GenerateResult};

/// Compile a glob pattern into a regex.
///
/// Converts glob patterns (where `*` matches any sequence) into anchored
/// regex patterns. Done once at config creation time.
///
/// # Errors
///
/// Returns an error if the resulting regex pattern is invalid.
fn compile_glob_pattern(pattern: &str) -> GenerateResult<Regex> {
    let regex_pattern = regex::escape(pattern).replace(r"\*", ".*");
    let anchored = format!("^{regex_pattern}$");
    Regex::new(&anchored)
        .map_err(|e| GenerateError::Config(format!("Invalid exclude pattern '{pattern}': {e}")))
}

/// Validate a structural selector string against the selector engine.
fn validate_selector(selector: &str) -> GenerateResult<()> {
    kuchiki::Selectors::compile(selector)
        .map(|_| ())
        .map_err(|()| GenerateError::Config(format!("Invalid custom selector '{selector}'")))
}

#[derive(Debug, Clone, Default)]
pub struct SiteConfigBuilder {
    title: Option<String>,
    description: Option<String>,
    details: Option<String>,
    site_url: Option<String>,
    base: Option<String>,
    trailing_slash: TrailingSlash,
    default_lang: Option<String>,
    exclude: Vec<String>,
    optional_links: Vec<OptionalLink>,
    minify: MinifyOptions,
}

impl SiteConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = Some(site_url.into());
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn trailing_slash(mut self, mode: TrailingSlash) -> Self {
        self.trailing_slash = mode;
        self
    }

    pub fn default_lang(mut self, lang: impl Into<String>) -> Self {
        self.default_lang = Some(lang.into());
        self
    }

    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn optional_links(mut self, links: Vec<OptionalLink>) -> Self {
        self.optional_links = links;
        self
    }

    pub fn minify(mut self, options: MinifyOptions) -> Self {
        self.minify = options;
        self
    }

    /// Validate and resolve the configuration.
    ///
    /// # Errors
    ///
    /// Fails on a missing/empty title, a site URL that does not parse as
    /// an absolute URL, an invalid exclusion glob, or an invalid custom
    /// selector. All of these are fatal: the config is shared by every
    /// conversion, so a bad pattern must not degrade into per-entry
    /// misbehavior.
    pub fn build(self) -> GenerateResult<SiteConfig> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| GenerateError::Config("Site title is required".to_string()))?;

        let site_url = self
            .site_url
            .ok_or_else(|| GenerateError::Config("Site URL is required".to_string()))?;
        url::Url::parse(&site_url)
            .map_err(|e| GenerateError::Config(format!("Invalid site URL '{site_url}': {e}")))?;

        let base = match self.base {
            Some(base) if !base.is_empty() => {
                if base.starts_with('/') {
                    base
                } else {
                    format!("/{base}")
                }
            }
            _ => "/".to_string(),
        };

        let exclude_compiled = self
            .exclude
            .iter()
            .map(|pattern| compile_glob_pattern(pattern))
            .collect::<GenerateResult<Vec<_>>>()?;

        let minify = MinifyPolicy::resolve(&self.minify);
        for selector in &minify.custom_selectors {
            validate_selector(selector)?;
        }

        Ok(SiteConfig {
            title,
            description: self.description,
            details: self.details,
            site_url,
            base,
            trailing_slash: self.trailing_slash,
            default_lang: self.default_lang.unwrap_or_else(|| "en".to_string()),
            exclude: self.exclude,
            exclude_compiled,
            optional_links: self.optional_links,
            minify,
        })
    }
}

impl SiteConfig {
    /// Load and resolve a configuration from a JSON file.
    ///
    /// Goes through the builder so every validation and compilation step
    /// applies to file-sourced configs too.
    pub fn from_json_file(path: &Path) -> GenerateResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: SiteConfigFile = serde_json::from_str(&raw).map_err(|e| {
            GenerateError::Config(format!("Invalid config file {}: {e}", path.display()))
        })?;

        let mut builder = Self::builder()
            .title(file.title)
            .site_url(file.site)
            .base(file.base)
            .trailing_slash(file.trailing_slash)
            .default_lang(file.default_lang)
            .exclude(file.exclude)
            .optional_links(file.optional_links)
            .minify(file.minify);
        if let Some(description) = file.description {
            builder = builder.description(description);
        }
        if let Some(details) = file.details {
            builder = builder.details(details);
        }
        builder.build()
    }
}
