use fltk::{
    app::Sender,
    enums::CallbackTrigger,
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use crate::app::controllers::session::EditorAdapter;
use crate::app::domain::{EditorBinding, Message};
use crate::app::infrastructure::buffer::buffer_text_no_leak;
use crate::app::services::syntax::{FONT, FONT_SIZE, SyntaxHighlighter};

/// The FLTK text editor plus its style buffer, seen by the session as a
/// single text field with a highlighting mode.
pub struct FltkEditor {
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    highlighter: SyntaxHighlighter,
}

impl FltkEditor {
    /// Take over `editor`. Every user edit sends `Message::EditorChanged`;
    /// programmatic `replace_text` calls do not.
    pub fn new(mut editor: TextEditor, sender: Sender<Message>) -> Self {
        let buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let highlighter = SyntaxHighlighter::new(EditorBinding::default());

        editor.set_buffer(buffer.clone());
        editor.set_text_font(FONT);
        editor.set_text_size(FONT_SIZE);
        editor.set_color(highlighter.background());
        editor.set_trigger(CallbackTrigger::Changed);
        editor.set_callback(move |_| sender.send(Message::EditorChanged));

        let mut this = Self {
            editor,
            buffer,
            style_buffer,
            highlighter,
        };
        this.restyle();
        this
    }

    /// Re-highlight the whole buffer in the current mode.
    pub fn restyle(&mut self) {
        let text = buffer_text_no_leak(&self.buffer);
        let styles = self.highlighter.highlight(&text);
        self.style_buffer.set_text(&styles);
        self.editor
            .set_highlight_data(self.style_buffer.clone(), self.highlighter.style_table());
        self.editor.redraw();
    }
}

impl EditorAdapter for FltkEditor {
    fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    fn replace_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
        self.restyle();
    }

    fn set_mode(&mut self, binding: EditorBinding) {
        self.highlighter.set_mode(binding);
        self.restyle();
    }
}
