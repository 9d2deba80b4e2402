//! Rendering collaborator boundary.
//!
//! Producing the HTML body of an entry belongs to the site's rendering
//! engine; this crate only needs "entry in, HTML string out". The
//! directory-backed implementation serves the common offline case where
//! pages were already rendered to disk.

use std::path::PathBuf;

use crate::entries::DocEntry;
use crate::error::{GenerateError, GenerateResult};

/// Produces the fully rendered HTML body of an entry.
///
/// `Sync` so one renderer can serve concurrent batch conversions.
pub trait Renderer: Sync {
    fn render(&self, entry: &DocEntry) -> GenerateResult<String>;
}

/// Reads pre-rendered HTML fragments from `<root>/<entry id>.html`.
pub struct DirRenderer {
    root: PathBuf,
}

impl DirRenderer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Renderer for DirRenderer {
    fn render(&self, entry: &DocEntry) -> GenerateResult<String> {
        let path = self.root.join(format!("{}.html", entry.id));
        std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GenerateError::MissingEntry(entry.id.clone())
            } else {
                GenerateError::Io(e)
            }
        })
    }
}
