pub mod settings_dialog;

use fltk::{app, prelude::*, window::Window};

/// Block on a modal dialog until it is hidden. If the main window is closed
/// while the dialog is up, the dialog is closed too so mdTeX can exit.
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}
