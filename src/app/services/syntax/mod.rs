mod highlighter;
mod style_map;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

use style_map::StyleMap;

use crate::app::domain::EditorBinding;

/// Dark theme the editor is drawn with.
pub const THEME_NAME: &str = "Solarized (dark)";

pub const FONT: Font = Font::Courier;
pub const FONT_SIZE: i32 = 14;

/// Styles the editor text with the grammar of the field being edited.
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
    style_map: StyleMap,
    mode: EditorBinding,
}

impl SyntaxHighlighter {
    pub fn new(mode: EditorBinding) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let mut theme_set = ThemeSet::load_defaults();
        let theme = theme_set
            .themes
            .remove(THEME_NAME)
            .unwrap_or_default();
        let style_map = StyleMap::new(FONT, FONT_SIZE, foreground(&theme));

        Self {
            syntax_set,
            theme,
            style_map,
            mode,
        }
    }

    pub fn mode(&self) -> EditorBinding {
        self.mode
    }

    /// Switch grammar: Markdown for the body, LaTeX for the preamble.
    pub fn set_mode(&mut self, mode: EditorBinding) {
        self.mode = mode;
    }

    /// Editor background taken from the theme.
    pub fn background(&self) -> Color {
        self.theme
            .settings
            .background
            .map(|c| Color::from_rgb(c.r, c.g, c.b))
            .unwrap_or(Color::Background2)
    }

    /// Style string for `text` (one char per byte) in the current mode.
    pub fn highlight(&mut self, text: &str) -> String {
        let syntax = match self.syntax_set.find_syntax_by_name(self.mode.syntax_name()) {
            Some(s) => s.clone(),
            None => {
                log::warn!("No {} grammar available", self.mode.syntax_name());
                return make_default_style(text);
            }
        };
        highlighter::highlight_full(
            text,
            &syntax,
            &self.syntax_set,
            &self.theme,
            &mut self.style_map,
        )
    }

    /// Get the style table for FLTK's set_highlight_data.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries().to_vec()
    }
}

fn foreground(theme: &Theme) -> Color {
    theme
        .settings
        .foreground
        .map(|c| Color::from_rgb(c.r, c.g, c.b))
        .unwrap_or(Color::Foreground)
}

fn make_default_style(text: &str) -> String {
    "A".repeat(text.len())
}
