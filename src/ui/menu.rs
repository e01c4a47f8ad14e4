use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Load...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileLoad) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Settings...", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::OpenSettings) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Document
    menu.add("Document/Edit Preamble", Shortcut::Ctrl | '1', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowPreamble) });
    menu.add("Document/Edit Body", Shortcut::Ctrl | '2', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::ShowBody) });
    menu.add("Document/Compile", Shortcut::Ctrl | 'r', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Compile) });

    // Help
    menu.add("Help/Pandoc Extensions...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowExtensionsHelp) });
    menu.add("Help/Source Code", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowSourceCode) });
}
