use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Prefix every line of `text` with `indent`, including the first one.
///
/// Line breaks are kept as they are, so a trailing newline yields a final
/// line holding only the indent.
pub fn indent_lines(text: &str, indent: &str) -> String {
    let mut out = String::with_capacity(text.len() + indent.len());
    out.push_str(indent);
    out.push_str(&text.replace('\n', &format!("\n{}", indent)));
    out
}

/// Join pandoc's input format with a raw extension suffix such as `+smart-ea`.
///
/// The suffix is passed through untouched; each toggle must carry its own
/// `+` or `-` sign.
pub fn input_format(base: &str, extensions: &str) -> String {
    format!("{}{}", base, extensions)
}
