use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::controllers::session::PathPrompt;
use crate::app::file_filters::markdown_filter;

fn run_chooser(kind: FileDialogType, title: &str, directory: Option<&Path>, saving: bool) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(&markdown_filter());
    if saving {
        nfc.set_option(FileDialogOptions::SaveAsConfirm);
    }
    if let Some(dir) = directory {
        let _ = nfc.set_directory(&dir);
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() { None } else { Some(filename) }
}

pub fn native_open_dialog(directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, "Load Markdown", directory, false)
}

pub fn native_save_dialog(directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, "Save Markdown As", directory, true)
}

/// Native file dialogs restricted to markdown files. Each dialog opens in
/// the directory of the last chosen file.
#[derive(Debug, Default)]
pub struct NativePathPrompt {
    last_directory: Option<PathBuf>,
}

impl NativePathPrompt {
    fn remember(&mut self, path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(parent) = path.as_deref().and_then(Path::parent) {
            self.last_directory = Some(parent.to_path_buf());
        }
        path
    }
}

impl PathPrompt for NativePathPrompt {
    fn save_path(&mut self) -> Option<PathBuf> {
        let path = native_save_dialog(self.last_directory.as_deref());
        self.remember(path)
    }

    fn open_path(&mut self) -> Option<PathBuf> {
        let path = native_open_dialog(self.last_directory.as_deref());
        self.remember(path)
    }
}
