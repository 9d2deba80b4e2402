pub mod paths;

pub use paths::{ensure_trailing_slash, has_file_extension, strip_trailing_slash};
