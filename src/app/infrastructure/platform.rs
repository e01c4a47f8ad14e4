use std::ffi::OsStr;

use super::error::{AppError, Result};

/// pandoc manual section listing the `+ext`/`-ext` toggles.
pub const EXTENSIONS_HELP_URL: &str = "https://pandoc.org/MANUAL.html#extensions";

/// Project home, opened from the Help menu.
pub const SOURCE_CODE_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// Hand a URL or file to the desktop's default handler.
pub fn open_external<T: AsRef<OsStr>>(target: T) -> Result<()> {
    let target = target.as_ref();
    log::debug!("Opening {}", target.to_string_lossy());
    open::that(target).map_err(|source| AppError::Open {
        target: target.to_string_lossy().to_string(),
        source,
    })
}
