use fltk::{
    button::Button,
    enums::{Color, FrameType},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

// Solarized palette, matching the editor's syntax theme.
pub const BASE03: Color = Color::from_rgb(0, 43, 54);
pub const BASE02: Color = Color::from_rgb(7, 54, 66);
pub const BASE01: Color = Color::from_rgb(88, 110, 117);
pub const BASE1: Color = Color::from_rgb(147, 161, 161);
pub const BLUE: Color = Color::from_rgb(38, 139, 210);
pub const RED: Color = Color::from_rgb(220, 50, 47);

pub fn apply_theme(window: &mut Window, menu: &mut MenuBar) {
    window.set_color(BASE03);
    window.set_label_color(BASE1);
    menu.set_color(BASE02);
    menu.set_text_color(BASE1);
    menu.set_selection_color(BASE01); // Hover color

    window.redraw();
    menu.redraw();
}

/// Style a view toggle. The button for the field not being edited gets the
/// muted look; exactly one of the pair is muted at any time.
pub fn paint_toggle(button: &mut Button, active: bool) {
    button.set_frame(FrameType::FlatBox);
    if active {
        button.set_color(BLUE);
        button.set_label_color(Color::White);
    } else {
        button.set_color(BASE02);
        button.set_label_color(BASE01);
    }
    button.redraw();
}

pub fn paint_button(button: &mut Button) {
    button.set_frame(FrameType::FlatBox);
    button.set_color(BASE02);
    button.set_label_color(BASE1);
}
