use syntect::highlighting::{HighlightIterator, HighlightState, Highlighter, Theme};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use super::style_map::StyleMap;

/// Style the whole text, one style char per byte.
pub fn highlight_full(
    text: &str,
    syntax: &SyntaxReference,
    syntax_set: &SyntaxSet,
    theme: &Theme,
    style_map: &mut StyleMap,
) -> String {
    let highlighter = Highlighter::new(theme);
    let mut parse_state = ParseState::new(syntax);
    let mut highlight_state = HighlightState::new(&highlighter, ScopeStack::new());
    let mut style_string = String::with_capacity(text.len());

    for line in LinesWithEndings::from(text) {
        let ops = parse_state.parse_line(line, syntax_set).unwrap_or_default();
        let iter = HighlightIterator::new(&mut highlight_state, &ops, line, &highlighter);
        for (style, piece) in iter {
            let ch = style_map.get_or_insert(style.foreground);
            // One style char per byte (not per char) for UTF-8 correctness
            for _ in 0..piece.len() {
                style_string.push(ch);
            }
        }
    }

    style_string
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntect::highlighting::ThemeSet;

    #[test]
    fn test_one_style_char_per_byte() {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme = ThemeSet::load_defaults().themes["Solarized (dark)"].clone();
        let syntax = syntax_set.find_syntax_by_name("Markdown").unwrap();
        let mut style_map = StyleMap::new(fltk::enums::Font::Courier, 14, fltk::enums::Color::White);

        let text = "# Überschrift\n\n*ß* and `code`\nlast line without newline";
        let styles = highlight_full(text, syntax, &syntax_set, &theme, &mut style_map);

        assert_eq!(styles.len(), text.len());
        assert!(styles.is_ascii());
    }
}
