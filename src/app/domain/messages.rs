use crate::app::services::compiler::CompileOutcome;

/// All messages that can be sent through the FLTK channel.
/// Each menu item, button and input callback sends one of these; `AppState::dispatch`
/// maps every variant to exactly one handler.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileSave,
    FileSaveAs,
    FileLoad,
    FileQuit,

    // Settings & Help
    OpenSettings,
    ShowSourceCode,
    ShowExtensionsHelp,

    // Editor
    ShowPreamble,
    ShowBody,
    EditorChanged,
    ExtensionsChanged,

    // Compile
    Compile,
    CompileFinished(CompileOutcome),
    OpenOutput,
    CloseError,
}
