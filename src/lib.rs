pub mod config;
pub mod entries;
pub mod error;
pub mod generate;
pub mod negotiate;
pub mod render;
pub mod rewrite;
pub mod simplify;
pub mod utils;

pub use config::{MinifyOptions, MinifyPolicy, OptionalLink, SiteConfig, TrailingSlash};
pub use entries::{markdown_routes, published_entries, DocEntry};
pub use error::{GenerateError, GenerateResult};
pub use generate::{generate_llms_txt, generate_page_markdown, llms_full, llms_small, page_markdown};
pub use negotiate::{parse_accept_header, prefers_markdown, MediaTypePreference};
pub use render::{DirRenderer, Renderer};
pub use rewrite::markdown_rewrite_target;
pub use simplify::simplify;
