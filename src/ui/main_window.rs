use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, CallbackTrigger, Event},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    menu::{Choice, MenuBar},
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::error_panel::ErrorPanel;
use super::preview_pane::PreviewPane;
use super::theme::{BASE1, apply_theme, paint_button};
use crate::app::domain::Message;
use crate::app::services::compiler::EXPORT_FORMATS;

const TOOLBAR_HEIGHT: i32 = 32;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub preamble_button: Button,
    pub body_button: Button,
    pub extensions_input: Input,
    pub export_choice: Choice,
    pub compile_button: Button,
    pub error_panel: ErrorPanel,
    pub text_editor: TextEditor,
    pub preview: PreviewPane,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1100, 720, "Untitled - mdTeX");
    wind.set_xclass("mdTeX");

    let mut flex = Flex::new(0, 0, 1100, 720, None);
    flex.set_type(FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Toolbar: view toggles, extensions, export format, compile
    let mut toolbar = Flex::default();
    toolbar.set_type(FlexType::Row);
    toolbar.set_margin(2);
    toolbar.set_spacing(4);

    let mut preamble_button = Button::default().with_label("Preamble");
    preamble_button.set_callback({ let s = *sender; move |_| s.send(Message::ShowPreamble) });
    toolbar.fixed(&preamble_button, 90);

    let mut body_button = Button::default().with_label("Body");
    body_button.set_callback({ let s = *sender; move |_| s.send(Message::ShowBody) });
    toolbar.fixed(&body_button, 90);

    let mut extensions_label = Frame::default().with_label("Extensions");
    extensions_label.set_label_color(BASE1);
    extensions_label.set_align(Align::Right | Align::Inside);
    toolbar.fixed(&extensions_label, 80);

    let mut extensions_input = Input::default();
    extensions_input.set_tooltip("pandoc extension toggles, e.g. +smart-ea");
    extensions_input.set_trigger(CallbackTrigger::Changed);
    extensions_input.set_callback({ let s = *sender; move |_| s.send(Message::ExtensionsChanged) });

    let mut extensions_link = Button::default().with_label("?");
    extensions_link.set_tooltip("Open the pandoc extensions reference");
    paint_button(&mut extensions_link);
    extensions_link.set_callback({ let s = *sender; move |_| s.send(Message::ShowExtensionsHelp) });
    toolbar.fixed(&extensions_link, 28);

    let mut export_choice = Choice::default();
    export_choice.set_tooltip("pandoc output format");
    for format in EXPORT_FORMATS {
        export_choice.add_choice(format);
    }
    export_choice.set_value(0);
    toolbar.fixed(&export_choice, 110);

    let mut compile_button = Button::default().with_label("Compile");
    paint_button(&mut compile_button);
    compile_button.set_callback({ let s = *sender; move |_| s.send(Message::Compile) });
    toolbar.fixed(&compile_button, 100);

    toolbar.end();
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    let error_panel = ErrorPanel::new(sender);
    flex.fixed(&error_panel.group, 0);

    // Editor on the left, preview on the right
    let mut content = Flex::default();
    content.set_type(FlexType::Row);
    let text_editor = TextEditor::new(0, 0, 0, 0, "");
    let preview = PreviewPane::new(sender);
    content.fixed(&preview.group, 360);
    content.end();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Route the close button through the dispatch loop; Escape does nothing.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::FileQuit);
            }
        }
    });

    apply_theme(&mut wind, &mut menu);

    MainWidgets {
        wind,
        flex,
        menu,
        preamble_button,
        body_button,
        extensions_input,
        export_choice,
        compile_button,
        error_panel,
        text_editor,
        preview,
    }
}
