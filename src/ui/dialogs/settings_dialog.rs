use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    input::{Input, MultilineInput},
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::Document;

fn section_label(flex: &mut Flex, text: &str) {
    let label = Frame::default()
        .with_label(text)
        .with_align(Align::Left | Align::Inside);
    flex.fixed(&label, 22);
}

/// Show the default-document form and return the new defaults if the user
/// clicked Save.
pub fn show_settings_dialog(defaults: &Document) -> Option<Document> {
    let mut dialog = Window::default()
        .with_size(560, 560)
        .with_label("Settings")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(15, 15, 530, 530, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(6);

    section_label(&mut flex, "Default preamble:");
    let mut preamble = MultilineInput::default();
    preamble.set_text_font(Font::Courier);
    preamble.set_value(&defaults.preamble);

    section_label(&mut flex, "Default body:");
    let mut body = MultilineInput::default();
    body.set_text_font(Font::Courier);
    body.set_value(&defaults.body);

    section_label(&mut flex, "Default extensions:");
    let mut extensions = Input::default();
    extensions.set_value(&defaults.extensions);
    flex.fixed(&extensions, 28);

    // Buttons at bottom
    let mut buttons = Flex::default();
    buttons.set_type(FlexType::Row);
    buttons.set_spacing(10);
    Frame::default();
    let mut save_btn = Button::default().with_label("Save");
    buttons.fixed(&save_btn, 90);
    let mut close_btn = Button::default().with_label("Close");
    buttons.fixed(&close_btn, 90);
    buttons.end();
    flex.fixed(&buttons, 30);

    flex.end();
    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));

    let result_save = result.clone();
    let dialog_save = dialog.clone();
    save_btn.set_callback(move |_| {
        *result_save.borrow_mut() = Some(Document::new(
            preamble.value(),
            body.value(),
            extensions.value(),
        ));
        dialog_save.clone().hide();
    });

    let dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    super::run_dialog(&dialog);

    result.take()
}
