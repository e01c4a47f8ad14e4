use fltk::{
    app::Sender,
    button::Button,
    group::Flex,
    input::Input,
    menu::Choice,
    prelude::*,
    window::Window,
};

use super::controllers::session::SessionController;
use super::domain::{EditorBinding, Message};
use super::infrastructure::error::Result;
use super::infrastructure::platform::{EXTENSIONS_HELP_URL, SOURCE_CODE_URL, open_external};
use super::services::compiler::{EXPORT_FORMATS, PandocConverter};
use super::services::settings_store::JsonSettingsStore;
use crate::ui::dialogs::settings_dialog::show_settings_dialog;
use crate::ui::editor::FltkEditor;
use crate::ui::error_panel::ErrorPanel;
use crate::ui::file_dialogs::NativePathPrompt;
use crate::ui::main_window::MainWidgets;
use crate::ui::preview_pane::PreviewPane;
use crate::ui::theme::paint_toggle;

pub struct AppState {
    pub window: Window,
    pub flex: Flex,
    pub preamble_button: Button,
    pub body_button: Button,
    pub extensions_input: Input,
    pub export_choice: Choice,
    pub compile_button: Button,
    pub error_panel: ErrorPanel,
    pub preview: PreviewPane,
    pub session: SessionController<FltkEditor, NativePathPrompt>,
    pub store: JsonSettingsStore,
    pub sender: Sender<Message>,
    converter: PandocConverter,
}

impl AppState {
    pub fn new(widgets: MainWidgets, store: JsonSettingsStore, sender: Sender<Message>) -> Self {
        let editor = FltkEditor::new(widgets.text_editor, sender);
        let session = SessionController::new(editor, NativePathPrompt::default());

        Self {
            window: widgets.wind,
            flex: widgets.flex,
            preamble_button: widgets.preamble_button,
            body_button: widgets.body_button,
            extensions_input: widgets.extensions_input,
            export_choice: widgets.export_choice,
            compile_button: widgets.compile_button,
            error_panel: widgets.error_panel,
            preview: widgets.preview,
            session,
            store,
            sender,
            converter: PandocConverter::new(),
        }
    }

    /// Create the settings file if there is none, then start editing the defaults.
    pub fn initialize(&mut self) -> Result<()> {
        self.store.ensure_exists()?;
        self.session.initialize(&self.store);
        self.sync_view();
        Ok(())
    }

    /// Run the handler for `msg`, then bring the widgets in line with the session.
    pub fn dispatch(&mut self, msg: Message) -> Result<()> {
        let result = match msg {
            Message::FileNew => {
                self.session.new_document();
                Ok(())
            }
            Message::FileSave => self.session.save(),
            Message::FileSaveAs => self.session.save_as(),
            Message::FileLoad => self.session.load(),
            Message::FileQuit => {
                self.window.hide();
                Ok(())
            }
            Message::OpenSettings => self.open_settings(),
            Message::ShowSourceCode => open_external(SOURCE_CODE_URL),
            Message::ShowExtensionsHelp => open_external(EXTENSIONS_HELP_URL),
            Message::ShowPreamble => {
                self.session.bind(EditorBinding::Preamble);
                Ok(())
            }
            Message::ShowBody => {
                self.session.bind(EditorBinding::Body);
                Ok(())
            }
            Message::EditorChanged => {
                self.session.editor_changed();
                self.session.editor_mut().restyle();
                Ok(())
            }
            Message::ExtensionsChanged => {
                let extensions = self.extensions_input.value();
                self.session.set_extensions(&extensions);
                Ok(())
            }
            Message::Compile => self.compile(),
            Message::CompileFinished(outcome) => self.session.finish_compile(outcome),
            Message::OpenOutput => match self.session.preview().pdf() {
                Some(pdf) => open_external(pdf.path()),
                None => Ok(()),
            },
            Message::CloseError => {
                self.session.dismiss_error();
                Ok(())
            }
        };

        self.sync_view();
        result
    }

    /// Called once the event loop has ended. A worker still running pandoc
    /// is left to finish on its own, but its metadata file is removed now.
    pub fn shutdown(&mut self) -> Result<()> {
        self.session.abandon_compile()
    }

    fn open_settings(&mut self) -> Result<()> {
        match show_settings_dialog(self.session.defaults()) {
            Some(defaults) => self.session.save_settings(defaults, &mut self.store),
            None => Ok(()),
        }
    }

    fn export_format(&self) -> String {
        self.export_choice
            .choice()
            .unwrap_or_else(|| EXPORT_FORMATS[0].to_string())
    }

    /// Write the inputs here, run pandoc on a worker thread and deliver the
    /// outcome back through the channel.
    fn compile(&mut self) -> Result<()> {
        let format = self.export_format();
        let job = match self.session.prepare_compile(&format)? {
            Some(job) => job,
            None => return Ok(()),
        };

        let converter = self.converter.clone();
        let sender = self.sender;
        std::thread::spawn(move || {
            let outcome = job.run(&converter);
            sender.send(Message::CompileFinished(outcome));
        });
        Ok(())
    }

    fn sync_view(&mut self) {
        let binding = self.session.binding();
        paint_toggle(&mut self.preamble_button, binding == EditorBinding::Preamble);
        paint_toggle(&mut self.body_button, binding == EditorBinding::Body);

        let extensions = &self.session.current().extensions;
        if self.extensions_input.value() != *extensions {
            self.extensions_input.set_value(extensions);
        }

        if self.session.is_compiling() {
            self.compile_button.deactivate();
            self.compile_button.set_label("Compiling...");
        } else {
            self.compile_button.activate();
            self.compile_button.set_label("Compile");
        }

        self.preview.show_preview(self.session.preview());
        self.error_panel.show_error(self.session.error(), &mut self.flex);

        self.window.set_label(&format!(
            "{} - mdTeX",
            self.session.file().display_name()
        ));
    }
}
