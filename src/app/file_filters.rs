pub const MARKDOWN_DESCRIPTION: &str = "Markdown";
pub const MARKDOWN_PATTERN: &str = "*.md";

/// Filter for the Save As and Load dialogs.
pub fn markdown_filter() -> String {
    get_platform_filter(MARKDOWN_DESCRIPTION, MARKDOWN_PATTERN)
}

/// Generate the filter string for native dialogs
///
/// FLTK accepts "Description\tPattern"; the description is what GTK and
/// Windows show in the filter dropdown.
pub fn get_platform_filter(description: &str, pattern: &str) -> String {
    format!("{}\t{}", description, pattern)
}
