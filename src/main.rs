use fltk::{app, dialog, prelude::*};

use mdtex::app::domain::Message;
use mdtex::app::services::settings_store::JsonSettingsStore;
use mdtex::app::state::AppState;
use mdtex::ui::main_window::build_main_window;
use mdtex::ui::menu::build_menu;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender);

    let store = JsonSettingsStore::open(JsonSettingsStore::default_path());
    let mut state = AppState::new(widgets, store, sender);
    if let Err(e) = state.initialize() {
        log::error!("Failed to initialize settings: {}", e);
        dialog::alert_default(&format!("Error loading settings: {}", e));
    }

    state.window.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if let Err(e) = state.dispatch(msg) {
                log::error!("{}", e);
                dialog::alert_default(&e.to_string());
            }
        }
    }

    if let Err(e) = state.shutdown() {
        log::error!("Failed to clean up compile: {}", e);
    }
}
