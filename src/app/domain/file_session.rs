use std::path::{Path, PathBuf};

use crate::app::services::text_ops::extract_filename;

/// Where the body of the current document is saved, if anywhere.
///
/// The path is set by Save As, Load and the first Compile, and only
/// cleared again by New.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileSession {
    #[default]
    NoFile,
    Bound(PathBuf),
}

impl FileSession {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NoFile => None,
            Self::Bound(path) => Some(path),
        }
    }

    pub fn bind(&mut self, path: PathBuf) {
        *self = Self::Bound(path);
    }

    pub fn clear(&mut self) {
        *self = Self::NoFile;
    }

    /// Name shown in the window title.
    pub fn display_name(&self) -> String {
        match self {
            Self::NoFile => "Untitled".to_string(),
            Self::Bound(path) => extract_filename(&path.to_string_lossy()),
        }
    }
}
