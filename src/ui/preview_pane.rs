use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use super::theme::{BASE01, BASE02, BASE1, paint_button};
use crate::app::domain::{Message, Preview};

const EMPTY_LABEL: &str = "Compile to see the rendered document here";

/// Right-hand pane describing the last compiled output.
pub struct PreviewPane {
    pub group: Flex,
    summary: Frame,
    open_button: Button,
    /// Label currently on screen.
    shown: String,
}

impl PreviewPane {
    /// Must be created inside the parent group it belongs to.
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut group = Flex::default();
        group.set_type(FlexType::Column);
        group.set_margin(8);
        group.set_frame(FrameType::FlatBox);
        group.set_color(BASE02);

        let mut summary = Frame::default();
        summary.set_label_color(BASE1);
        summary.set_align(Align::Center | Align::Inside | Align::Wrap);

        let mut open_button = Button::default().with_label("Open in Viewer");
        paint_button(&mut open_button);
        let s = *sender;
        open_button.set_callback(move |_| s.send(Message::OpenOutput));
        group.fixed(&open_button, 30);

        group.end();

        let mut pane = Self {
            group,
            summary,
            open_button,
            shown: String::new(),
        };
        pane.show_preview(&Preview::Empty);
        pane
    }

    pub fn show_preview(&mut self, preview: &Preview) {
        let label = match preview.pdf() {
            Some(pdf) => pdf.summary(),
            None => EMPTY_LABEL.to_string(),
        };
        if self.shown == label {
            return;
        }

        self.summary.set_label(&label);
        if preview.is_empty() {
            self.summary.set_label_color(BASE01);
            self.open_button.deactivate();
        } else {
            self.summary.set_label_color(BASE1);
            self.open_button.activate();
        }
        self.shown = label;
        self.group.redraw();
    }
}
