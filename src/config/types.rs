//! Core configuration types for Markdown generation.

use serde::{Deserialize, Serialize};

use super::builder::SiteConfigBuilder;

/// User-supplied minification overrides, all optional.
///
/// Unset fields fall back to the defaults documented on [`MinifyPolicy`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyOptions {
    pub note: Option<bool>,
    pub tip: Option<bool>,
    pub caution: Option<bool>,
    pub danger: Option<bool>,
    pub details: Option<bool>,
    pub whitespace: Option<bool>,
    /// Structural selectors whose matches are removed from the abridged
    /// output. Validated at configuration-resolution time.
    pub custom_selectors: Option<Vec<String>>,
}

/// Resolved minification policy for the abridged representation.
///
/// Computed once per site build by merging [`MinifyOptions`] onto fixed
/// defaults; read-only thereafter. The full representation uses no policy
/// at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinifyPolicy {
    /// Remove note asides. Default: `true`.
    pub note: bool,
    /// Remove tip asides. Default: `true`.
    pub tip: bool,
    /// Remove caution asides. Default: `false`.
    pub caution: bool,
    /// Remove danger asides. Default: `false`.
    pub danger: bool,
    /// Remove `<details>` elements. Default: `true`.
    pub details: bool,
    /// Collapse whitespace in the serialized output. Default: `true`.
    pub whitespace: bool,
    /// Selector strings validated by the builder; evaluated in order
    /// against every tree node during the removal pass.
    pub custom_selectors: Vec<String>,
}

impl Default for MinifyPolicy {
    fn default() -> Self {
        Self {
            note: true,
            tip: true,
            caution: false,
            danger: false,
            details: true,
            whitespace: true,
            custom_selectors: Vec::new(),
        }
    }
}

impl MinifyPolicy {
    /// Merge user overrides onto the fixed defaults.
    pub fn resolve(options: &MinifyOptions) -> Self {
        let defaults = Self::default();
        Self {
            note: options.note.unwrap_or(defaults.note),
            tip: options.tip.unwrap_or(defaults.tip),
            caution: options.caution.unwrap_or(defaults.caution),
            danger: options.danger.unwrap_or(defaults.danger),
            details: options.details.unwrap_or(defaults.details),
            whitespace: options.whitespace.unwrap_or(defaults.whitespace),
            custom_selectors: options.custom_selectors.clone().unwrap_or_default(),
        }
    }
}

/// Trailing-slash mode for generated page URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    Always,
    Never,
    Ignore,
}

impl Default for TrailingSlash {
    fn default() -> Self {
        Self::Ignore
    }
}

/// One extra link advertised in the `## Optional` section of `llms.txt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionalLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Resolved site configuration, immutable for the process lifetime.
///
/// **INVARIANT:** `exclude_compiled` always mirrors `exclude` (compiled in
/// the builder); construct through [`SiteConfigBuilder`] or
/// [`SiteConfig::from_json_file`], never by deserializing directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) details: Option<String>,
    /// Absolute site origin used to build absolute links.
    pub(crate) site_url: String,
    /// Base path the site is served under, normalized to a leading slash.
    pub(crate) base: String,
    pub(crate) trailing_slash: TrailingSlash,
    pub(crate) default_lang: String,
    /// Glob patterns for entries excluded from the abridged outputs.
    pub(crate) exclude: Vec<String>,

    /// Compiled regex patterns from `exclude`.
    /// Pre-compiled at config creation to avoid per-entry compilation.
    #[serde(skip)]
    pub(crate) exclude_compiled: Vec<regex::Regex>,

    pub(crate) optional_links: Vec<OptionalLink>,
    pub(crate) minify: MinifyPolicy,
}

impl SiteConfig {
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::new()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn trailing_slash(&self) -> TrailingSlash {
        self.trailing_slash
    }

    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    pub fn optional_links(&self) -> &[OptionalLink] {
        &self.optional_links
    }

    pub fn minify(&self) -> &MinifyPolicy {
        &self.minify
    }

    /// Is an entry id excluded from the abridged outputs?
    pub fn is_excluded(&self, entry_id: &str) -> bool {
        self.exclude_compiled
            .iter()
            .any(|pattern| pattern.is_match(entry_id))
    }
}

/// Raw file shape for [`SiteConfig::from_json_file`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct SiteConfigFile {
    pub title: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub site: String,
    pub base: String,
    pub trailing_slash: TrailingSlash,
    pub default_lang: String,
    pub exclude: Vec<String>,
    pub optional_links: Vec<OptionalLink>,
    pub minify: MinifyOptions,
}

impl Default for SiteConfigFile {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            details: None,
            site: String::new(),
            base: "/".to_string(),
            trailing_slash: TrailingSlash::default(),
            default_lang: "en".to_string(),
            exclude: Vec::new(),
            optional_links: Vec::new(),
            minify: MinifyOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_defaults_match_documented_table() {
        let policy = MinifyPolicy::default();
        assert!(policy.note);
        assert!(policy.tip);
        assert!(!policy.caution);
        assert!(!policy.danger);
        assert!(policy.details);
        assert!(policy.whitespace);
        assert!(policy.custom_selectors.is_empty());
    }

    #[test]
    fn policy_merge_keeps_unset_defaults() {
        let options = MinifyOptions {
            note: Some(false),
            caution: Some(true),
            ..MinifyOptions::default()
        };
        let policy = MinifyPolicy::resolve(&options);
        assert!(!policy.note);
        assert!(policy.tip);
        assert!(policy.caution);
        assert!(!policy.danger);
        assert!(policy.details);
        assert!(policy.whitespace);
    }
}
