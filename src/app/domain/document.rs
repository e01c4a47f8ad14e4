/// Which field of the live document the visible editor mirrors.
///
/// Exactly one binding is active at a time. The body is shown on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorBinding {
    Preamble,
    #[default]
    Body,
}

impl EditorBinding {
    /// Label used on the view toggle buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Preamble => "Preamble",
            Self::Body => "Body",
        }
    }

    /// Name of the syntect grammar used while this field is being edited.
    pub fn syntax_name(&self) -> &'static str {
        match self {
            Self::Preamble => "LaTeX",
            Self::Body => "Markdown",
        }
    }

    pub fn all() -> &'static [EditorBinding] {
        &[Self::Preamble, Self::Body]
    }
}

/// A preamble of LaTeX directives, a Markdown body and the pandoc
/// extension toggles used when compiling them.
///
/// Two of these live in a session: the one being edited and the defaults
/// template that New and Load start from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub preamble: String,
    pub body: String,
    pub extensions: String,
}

impl Document {
    pub fn new(
        preamble: impl Into<String>,
        body: impl Into<String>,
        extensions: impl Into<String>,
    ) -> Self {
        Self {
            preamble: preamble.into(),
            body: body.into(),
            extensions: extensions.into(),
        }
    }

    /// Copy of `defaults` with the body replaced by text read from disk.
    pub fn with_loaded_body(defaults: &Document, body: String) -> Self {
        Self {
            body,
            ..defaults.clone()
        }
    }

    pub fn field(&self, binding: EditorBinding) -> &str {
        match binding {
            EditorBinding::Preamble => &self.preamble,
            EditorBinding::Body => &self.body,
        }
    }

    pub fn field_mut(&mut self, binding: EditorBinding) -> &mut String {
        match binding {
            EditorBinding::Preamble => &mut self.preamble,
            EditorBinding::Body => &mut self.body,
        }
    }
}
