use std::path::{Path, PathBuf};

use crate::app::services::text_ops::extract_filename;

/// Output produced by a successful compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPdf {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pages: Option<usize>,
}

impl RenderedPdf {
    /// Parses the bytes once to count pages.
    pub fn new(path: PathBuf, bytes: Vec<u8>) -> Self {
        let pages = count_pages(&bytes);
        Self { path, bytes, pages }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of pages, or None when the bytes are not a readable PDF
    /// (e.g. an HTML export written to the `.pdf` path).
    pub fn page_count(&self) -> Option<usize> {
        self.pages
    }

    /// One-line description for the preview pane.
    pub fn summary(&self) -> String {
        let name = extract_filename(&self.path.to_string_lossy());
        let size = format_size(self.bytes.len());
        match self.page_count() {
            Some(1) => format!("{} - 1 page, {}", name, size),
            Some(pages) => format!("{} - {} pages, {}", name, pages, size),
            None => format!("{} - {}", name, size),
        }
    }
}

/// What the preview area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preview {
    #[default]
    Empty,
    Pdf(RenderedPdf),
}

impl Preview {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn pdf(&self) -> Option<&RenderedPdf> {
        match self {
            Self::Empty => None,
            Self::Pdf(pdf) => Some(pdf),
        }
    }
}

fn count_pages(bytes: &[u8]) -> Option<usize> {
    match lopdf::Document::load_mem(bytes) {
        Ok(doc) => Some(doc.get_pages().len()),
        Err(e) => {
            log::debug!("Output is not a readable PDF: {}", e);
            None
        }
    }
}

fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{} B", bytes)
    } else if b < KIB * KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / (KIB * KIB))
    }
}
