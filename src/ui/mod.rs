//! FLTK widgets and dialogs. Everything here is built once in `main` and
//! driven by `app::state::AppState`.

pub mod dialogs;
pub mod editor;
pub mod error_panel;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod preview_pane;
pub mod theme;
