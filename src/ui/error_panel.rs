use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextBuffer, TextDisplay},
};

use super::theme::{BASE02, BASE03, BASE1, RED, paint_button};
use crate::app::domain::Message;

pub const ERROR_PANEL_HEIGHT: i32 = 160;

/// Dismissible panel showing converter errors verbatim.
pub struct ErrorPanel {
    pub group: Flex,
    buffer: TextBuffer,
    shown: Option<String>,
}

impl ErrorPanel {
    /// Must be created inside the parent flex. Starts hidden.
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut group = Flex::default();
        group.set_type(FlexType::Column);
        group.set_margin(4);

        let mut title = Frame::default().with_label("Compile failed");
        title.set_label_color(RED);
        title.set_label_font(Font::HelveticaBold);
        title.set_align(Align::Left | Align::Inside);
        group.fixed(&title, 20);

        let buffer = TextBuffer::default();
        let mut display = TextDisplay::default();
        display.set_buffer(buffer.clone());
        display.set_text_font(Font::Courier);
        display.set_color(BASE03);
        display.set_text_color(BASE1);

        let mut row = Flex::default();
        row.set_type(FlexType::Row);
        Frame::default();
        let mut close_button = Button::default().with_label("Close");
        paint_button(&mut close_button);
        let s = *sender;
        close_button.set_callback(move |_| s.send(Message::CloseError));
        row.fixed(&close_button, 90);
        row.end();
        group.fixed(&row, 28);

        group.set_color(BASE02);
        group.end();
        group.hide();

        Self {
            group,
            buffer,
            shown: None,
        }
    }

    /// Show `text`, or hide the panel when there is none. The parent flex
    /// gives the panel its height only while it is shown.
    pub fn show_error(&mut self, text: Option<&str>, parent: &mut Flex) {
        if self.shown.as_deref() == text {
            return;
        }
        match text {
            Some(text) => {
                self.buffer.set_text(text);
                self.group.show();
                parent.fixed(&self.group, ERROR_PANEL_HEIGHT);
            }
            None => {
                self.buffer.set_text("");
                self.group.hide();
                parent.fixed(&self.group, 0);
            }
        }
        self.shown = text.map(str::to_string);
        parent.layout();
        parent.redraw();
    }
}
