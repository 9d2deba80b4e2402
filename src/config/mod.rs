//! Site configuration and minification policy.
//!
//! Configuration is resolved once per site build through the builder,
//! which merges user overrides onto fixed defaults and pre-compiles
//! exclusion globs and custom selectors. The resolved structs are
//! immutable and shared read-only by every conversion.

pub mod builder;
pub mod types;

pub use builder::SiteConfigBuilder;
pub use types::{MinifyOptions, MinifyPolicy, OptionalLink, SiteConfig, TrailingSlash};
