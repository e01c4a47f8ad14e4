//! The document session: two editable fields, the file they are saved to,
//! and the compile that turns them into a preview.
//!
//! The controller owns the editor and path prompt behind two small traits so
//! the whole state machine runs without a display.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::app::domain::{Document, EditorBinding, FileSession, Preview, RenderedPdf};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::compiler::{CompileJob, CompileOutcome, Converter};
use crate::app::services::settings_store::{SettingsKey, SettingsStore};

/// The text widget showing one field of the document at a time.
pub trait EditorAdapter {
    /// Full current text, however the widget stores it internally.
    fn text(&self) -> String;

    /// Replace the whole contents.
    fn replace_text(&mut self, text: &str);

    /// Switch the highlighting grammar to the one for `binding`.
    fn set_mode(&mut self, binding: EditorBinding);
}

/// Asks the user for a markdown file. `None` means the dialog was cancelled.
pub trait PathPrompt {
    fn save_path(&mut self) -> Option<PathBuf>;
    fn open_path(&mut self) -> Option<PathBuf>;
}

pub struct SessionController<E, P> {
    editor: E,
    prompt: P,
    current: Document,
    defaults: Document,
    file: FileSession,
    binding: EditorBinding,
    preview: Preview,
    error: Option<String>,
    in_flight: Option<CompileJob>,
    /// The document was replaced under the running compile; drop its result.
    detached: bool,
}

impl<E: EditorAdapter, P: PathPrompt> SessionController<E, P> {
    pub fn new(mut editor: E, prompt: P) -> Self {
        let binding = EditorBinding::default();
        editor.set_mode(binding);
        Self {
            editor,
            prompt,
            current: Document::default(),
            defaults: Document::default(),
            file: FileSession::default(),
            binding,
            preview: Preview::default(),
            error: None,
            in_flight: None,
            detached: false,
        }
    }

    pub fn current(&self) -> &Document {
        &self.current
    }

    pub fn defaults(&self) -> &Document {
        &self.defaults
    }

    pub fn file(&self) -> &FileSession {
        &self.file
    }

    pub fn binding(&self) -> EditorBinding {
        self.binding
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_compiling(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    // --- Settings ---

    /// Load the template from the store and start editing a copy of it.
    pub fn initialize(&mut self, store: &dyn SettingsStore) {
        self.defaults = store.load_defaults();
        self.current = self.defaults.clone();
        self.push_active_field();
        log::debug!("Session initialized from settings");
    }

    /// Replace the template and persist each field.
    pub fn save_settings(&mut self, defaults: Document, store: &mut dyn SettingsStore) -> Result<()> {
        store.set(SettingsKey::Preamble, defaults.preamble.clone());
        store.set(SettingsKey::Body, defaults.body.clone());
        store.set(SettingsKey::Extensions, defaults.extensions.clone());
        self.defaults = defaults;
        store.save()?;
        log::info!("Default document saved");
        Ok(())
    }

    // --- Editor binding ---

    /// Copy the editor's full text into the bound field.
    pub fn editor_changed(&mut self) {
        let text = self.editor.text();
        *self.current.field_mut(self.binding) = text;
    }

    pub fn set_extensions(&mut self, extensions: &str) {
        self.current.extensions = extensions.to_string();
    }

    /// Show another field in the editor. Returns false if it was already shown.
    pub fn bind(&mut self, binding: EditorBinding) -> bool {
        if binding == self.binding {
            return false;
        }
        self.binding = binding;
        self.editor.set_mode(binding);
        self.push_active_field();
        log::debug!("Editor bound to {}", binding.label());
        true
    }

    fn push_active_field(&mut self) {
        let text = self.current.field(self.binding).to_string();
        self.editor.replace_text(&text);
    }

    // --- File session ---

    pub fn new_document(&mut self) {
        self.detach_compile();
        self.file.clear();
        self.current = self.defaults.clone();
        self.push_active_field();
        self.preview = Preview::Empty;
        log::debug!("New document");
    }

    pub fn save(&mut self) -> Result<()> {
        match self.file.path() {
            Some(path) => {
                fs::write(path, &self.current.body)?;
                log::info!("Saved {}", path.display());
                Ok(())
            }
            None => self.save_as(),
        }
    }

    pub fn save_as(&mut self) -> Result<()> {
        let path = match self.prompt.save_path() {
            Some(path) => path,
            None => return Ok(()),
        };
        self.file.bind(path.clone());
        fs::write(&path, &self.current.body)?;
        log::info!("Saved {}", path.display());
        Ok(())
    }

    pub fn load(&mut self) -> Result<()> {
        let path = match self.prompt.open_path() {
            Some(path) => path,
            None => return Ok(()),
        };
        self.detach_compile();
        self.file.bind(path.clone());
        let content = fs::read_to_string(&path)?;
        self.current = Document::with_loaded_body(&self.defaults, content);
        self.push_active_field();
        self.preview = Preview::Empty;
        log::info!("Loaded {}", path.display());
        Ok(())
    }

    // --- Compile ---

    /// Write the inputs and register the compile as in flight.
    ///
    /// Returns `None` when the user cancelled the path prompt or another
    /// compile is still running; nothing is written in either case.
    pub fn prepare_compile(&mut self, export_format: &str) -> Result<Option<CompileJob>> {
        if self.in_flight.is_some() {
            log::debug!("Compile already running, ignoring request");
            return Ok(None);
        }

        let markdown = match self.file.path() {
            Some(path) => path.to_path_buf(),
            None => match self.prompt.save_path() {
                Some(path) => {
                    self.file.bind(path.clone());
                    path
                }
                None => return Ok(None),
            },
        };

        let job = CompileJob::prepare(
            &markdown,
            &self.current.body,
            &self.current.preamble,
            &self.current.extensions,
            export_format,
        )?;
        self.preview = Preview::Empty;
        self.error = None;
        self.in_flight = Some(job.clone());
        Ok(Some(job))
    }

    /// Route the converter's result to the preview or the error panel, then
    /// remove the metadata file.
    pub fn finish_compile(&mut self, outcome: CompileOutcome) -> Result<()> {
        let job = match self.in_flight.take() {
            Some(job) => job,
            None => {
                log::debug!("Compile result with no compile in flight");
                return Ok(());
            }
        };

        if std::mem::take(&mut self.detached) {
            log::info!(
                "Discarding compile of {}, the document was replaced",
                job.paths.markdown.display()
            );
            return job.cleanup();
        }

        let routed = match outcome.failure_text() {
            Some(text) => {
                log::error!("{}", text);
                self.error = Some(text.to_string());
                Ok(())
            }
            None => match fs::read(&job.paths.output) {
                Ok(bytes) => {
                    log::info!("Compiled {}", job.paths.output.display());
                    self.preview = Preview::Pdf(RenderedPdf::new(job.paths.output.clone(), bytes));
                    Ok(())
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    Err(AppError::MissingOutput(job.paths.output.clone()))
                }
                Err(e) => Err(e.into()),
            },
        };

        let cleaned = job.cleanup();
        routed?;
        cleaned
    }

    /// Run a whole compile on the calling thread.
    pub fn compile(&mut self, export_format: &str, converter: &dyn Converter) -> Result<()> {
        match self.prepare_compile(export_format)? {
            Some(job) => {
                let outcome = job.run(converter);
                self.finish_compile(outcome)
            }
            None => Ok(()),
        }
    }

    /// Forget the running compile and remove its metadata file. Used on
    /// shutdown, when the worker's result will never be delivered.
    pub fn abandon_compile(&mut self) -> Result<()> {
        self.detached = false;
        match self.in_flight.take() {
            Some(job) => {
                log::info!("Abandoning compile of {}", job.paths.markdown.display());
                job.cleanup()
            }
            None => Ok(()),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn detach_compile(&mut self) {
        if self.in_flight.is_some() {
            log::debug!("Document replaced while compiling");
            self.detached = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::compiler::{ConversionRequest, ConverterOutput};
    use crate::app::services::settings_store::JsonSettingsStore;
    use std::collections::VecDeque;
    use std::path::Path;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeEditor {
        text: String,
        mode: Option<EditorBinding>,
        replacements: usize,
    }

    impl FakeEditor {
        fn type_text(&mut self, text: &str) {
            self.text = text.to_string();
        }
    }

    impl EditorAdapter for FakeEditor {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn replace_text(&mut self, text: &str) {
            self.text = text.to_string();
            self.replacements += 1;
        }

        fn set_mode(&mut self, binding: EditorBinding) {
            self.mode = Some(binding);
        }
    }

    #[derive(Default)]
    struct FakePrompt {
        answers: VecDeque<Option<PathBuf>>,
        asked: usize,
    }

    impl FakePrompt {
        fn answering(answers: Vec<Option<PathBuf>>) -> Self {
            Self {
                answers: answers.into(),
                asked: 0,
            }
        }

        fn next(&mut self) -> Option<PathBuf> {
            self.asked += 1;
            self.answers.pop_front().flatten()
        }
    }

    impl PathPrompt for FakePrompt {
        fn save_path(&mut self) -> Option<PathBuf> {
            self.next()
        }

        fn open_path(&mut self) -> Option<PathBuf> {
            self.next()
        }
    }

    /// Records requests and answers with a fixed stderr, writing `output` to
    /// the requested pdf path when stderr is empty.
    struct FakeConverter {
        stderr: String,
        output: Vec<u8>,
        requests: Mutex<Vec<ConversionRequest>>,
        saw_metadata: Mutex<Option<String>>,
    }

    impl FakeConverter {
        fn succeeding(output: &[u8]) -> Self {
            Self {
                stderr: String::new(),
                output: output.to_vec(),
                requests: Mutex::new(Vec::new()),
                saw_metadata: Mutex::new(None),
            }
        }

        fn failing(stderr: &str) -> Self {
            Self {
                stderr: stderr.to_string(),
                ..Self::succeeding(b"")
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl Converter for FakeConverter {
        fn convert(&self, request: &ConversionRequest) -> Result<ConverterOutput> {
            *self.saw_metadata.lock().unwrap() = fs::read_to_string(&request.inputs[0]).ok();
            self.requests.lock().unwrap().push(request.clone());
            if self.stderr.is_empty() {
                fs::write(&request.output, &self.output)?;
            }
            Ok(ConverterOutput {
                stderr: self.stderr.clone(),
            })
        }
    }

    struct MissingConverter;

    impl Converter for MissingConverter {
        fn convert(&self, _request: &ConversionRequest) -> Result<ConverterOutput> {
            Err(AppError::ConverterNotFound {
                program: "pandoc".to_string(),
            })
        }
    }

    fn controller(answers: Vec<Option<PathBuf>>) -> SessionController<FakeEditor, FakePrompt> {
        SessionController::new(FakeEditor::default(), FakePrompt::answering(answers))
    }

    fn with_defaults(
        answers: Vec<Option<PathBuf>>,
        defaults: Document,
    ) -> SessionController<FakeEditor, FakePrompt> {
        let mut c = controller(answers);
        c.defaults = defaults;
        c.new_document();
        c
    }

    fn type_into(c: &mut SessionController<FakeEditor, FakePrompt>, text: &str) {
        c.editor_mut().type_text(text);
        c.editor_changed();
    }

    // --- Binding ---

    #[test]
    fn test_starts_bound_to_body_with_markdown_mode() {
        let c = controller(vec![]);
        assert_eq!(c.binding(), EditorBinding::Body);
        assert_eq!(c.editor().mode, Some(EditorBinding::Body));
    }

    #[test]
    fn test_edits_go_to_bound_field() {
        let mut c = controller(vec![]);
        type_into(&mut c, "Hello");
        assert_eq!(c.current().body, "Hello");
        assert_eq!(c.current().preamble, "");

        c.bind(EditorBinding::Preamble);
        type_into(&mut c, "\\usepackage{x}");
        assert_eq!(c.current().preamble, "\\usepackage{x}");
        assert_eq!(c.current().body, "Hello");
    }

    #[test]
    fn test_rebind_pushes_field_and_mode() {
        let mut c = controller(vec![]);
        type_into(&mut c, "# Title");
        c.current.preamble = "\\usepackage{x}".to_string();

        assert!(c.bind(EditorBinding::Preamble));
        assert_eq!(c.editor().text(), "\\usepackage{x}");
        assert_eq!(c.editor().mode, Some(EditorBinding::Preamble));

        assert!(c.bind(EditorBinding::Body));
        assert_eq!(c.editor().text(), "# Title");
        assert_eq!(c.editor().mode, Some(EditorBinding::Body));
    }

    #[test]
    fn test_bind_to_active_field_is_noop() {
        let mut c = controller(vec![]);
        c.editor_mut().type_text("unsynced");
        let before = c.editor().replacements;

        assert!(!c.bind(EditorBinding::Body));
        assert_eq!(c.binding(), EditorBinding::Body);
        assert_eq!(c.editor().text(), "unsynced");
        assert_eq!(c.editor().replacements, before);
    }

    #[test]
    fn test_editor_matches_bound_field_after_every_step() {
        let mut c = controller(vec![]);
        for (binding, text) in [
            (EditorBinding::Preamble, "\\usepackage{a}"),
            (EditorBinding::Body, "body text"),
            (EditorBinding::Preamble, "\\usepackage{b}"),
        ] {
            c.bind(binding);
            assert_eq!(c.editor().text(), c.current().field(c.binding()));
            type_into(&mut c, text);
            assert_eq!(c.editor().text(), c.current().field(c.binding()));
        }
    }

    // --- Settings ---

    #[test]
    fn test_initialize_loads_defaults_into_current_and_editor() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonSettingsStore::open(dir.path().join("settings.json"));
        store.set(SettingsKey::Preamble, "\\usepackage{x}".to_string());
        store.set(SettingsKey::Body, "# Template".to_string());
        store.set(SettingsKey::Extensions, "+smart".to_string());

        let mut c = controller(vec![]);
        c.initialize(&store);

        let expected = Document::new("\\usepackage{x}", "# Template", "+smart");
        assert_eq!(c.defaults(), &expected);
        assert_eq!(c.current(), &expected);
        assert_eq!(c.editor().text(), "# Template");
    }

    #[test]
    fn test_save_settings_persists_and_updates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut store = JsonSettingsStore::open(&path);

        let mut c = controller(vec![]);
        type_into(&mut c, "work in progress");
        let defaults = Document::new("\\usepackage{y}", "", "-ea");
        c.save_settings(defaults.clone(), &mut store).unwrap();

        assert_eq!(c.defaults(), &defaults);
        // The document being edited is left alone.
        assert_eq!(c.current().body, "work in progress");
        assert_eq!(JsonSettingsStore::open(&path).load_defaults(), defaults);
    }

    // --- File session ---

    #[test]
    fn test_new_resets_to_defaults_and_unbinds() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("doc.md");
        let defaults = Document::new("pre", "template", "+smart");
        let mut c = with_defaults(vec![Some(doc)], defaults.clone());

        type_into(&mut c, "edited");
        c.set_extensions("-ea");
        c.save_as().unwrap();
        c.preview = Preview::Pdf(RenderedPdf::new(PathBuf::from("x.pdf"), vec![1]));

        c.new_document();
        assert_eq!(c.file(), &FileSession::NoFile);
        assert_eq!(c.current(), &defaults);
        assert_eq!(c.editor().text(), "template");
        assert!(c.preview().is_empty());
    }

    #[test]
    fn test_new_pushes_preamble_when_preamble_is_shown() {
        let defaults = Document::new("\\usepackage{x}", "template", "");
        let mut c = with_defaults(vec![], defaults);
        c.bind(EditorBinding::Preamble);
        type_into(&mut c, "changed");

        c.new_document();
        assert_eq!(c.binding(), EditorBinding::Preamble);
        assert_eq!(c.editor().text(), "\\usepackage{x}");
    }

    #[test]
    fn test_scenario_save_as_writes_body() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("doc.md");
        let mut c = controller(vec![Some(doc.clone())]);

        type_into(&mut c, "Hello");
        c.save_as().unwrap();

        assert_eq!(fs::read_to_string(&doc).unwrap(), "Hello");
        assert_eq!(c.file().path(), Some(doc.as_path()));
    }

    #[test]
    fn test_save_without_path_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("doc.md");
        let mut c = controller(vec![Some(doc.clone())]);

        type_into(&mut c, "Hello");
        c.save().unwrap();
        assert_eq!(c.prompt_mut().asked, 1);
        assert_eq!(fs::read_to_string(&doc).unwrap(), "Hello");

        type_into(&mut c, "Hello again");
        c.save().unwrap();
        assert_eq!(c.prompt_mut().asked, 1);
        assert_eq!(fs::read_to_string(&doc).unwrap(), "Hello again");
    }

    #[test]
    fn test_save_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("doc.md");
        let mut c = controller(vec![Some(doc.clone())]);
        type_into(&mut c, "# Same\n\nbytes");

        c.save().unwrap();
        let first = fs::read(&doc).unwrap();
        c.save().unwrap();
        let second = fs::read(&doc).unwrap();

        assert_eq!(first, second);
        assert_eq!(c.file().path(), Some(doc.as_path()));
    }

    #[test]
    fn test_cancelled_save_as_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("doc.md");
        let mut c = controller(vec![Some(doc.clone()), None]);
        type_into(&mut c, "kept");
        c.save_as().unwrap();

        type_into(&mut c, "not written");
        c.save_as().unwrap();

        assert_eq!(c.file().path(), Some(doc.as_path()));
        assert_eq!(fs::read_to_string(&doc).unwrap(), "kept");
    }

    #[test]
    fn test_load_then_save_round_trips_body() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("notes.md");
        let original = "# Notes\r\n\n- tabs\tand trailing space \n";
        fs::write(&doc, original).unwrap();

        let defaults = Document::new("\\usepackage{x}", "template", "+smart");
        let mut c = with_defaults(vec![Some(doc.clone())], defaults);
        c.set_extensions("-ea");
        c.current.preamble = "edited preamble".to_string();

        c.load().unwrap();
        assert_eq!(c.current().body, original);
        assert_eq!(c.current().preamble, "\\usepackage{x}");
        assert_eq!(c.current().extensions, "+smart");
        assert_eq!(c.editor().text(), original);

        c.save().unwrap();
        assert_eq!(fs::read_to_string(&doc).unwrap(), original);
    }

    #[test]
    fn test_cancelled_load_changes_nothing() {
        let mut c = controller(vec![None]);
        type_into(&mut c, "unsaved");
        c.load().unwrap();
        assert_eq!(c.current().body, "unsaved");
        assert_eq!(c.file(), &FileSession::NoFile);
    }

    #[test]
    fn test_load_missing_file_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = controller(vec![Some(dir.path().join("gone.md"))]);
        let err = c.load().unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    // --- Compile ---

    fn bound_controller(dir: &Path) -> (SessionController<FakeEditor, FakePrompt>, PathBuf) {
        let doc = dir.join("doc.md");
        let mut c = controller(vec![Some(doc.clone())]);
        c.save_as().unwrap();
        c.current.preamble = "\\usepackage{x}".to_string();
        type_into(&mut c, "# Title");
        c.set_extensions("+smart");
        (c, doc)
    }

    #[test]
    fn test_scenario_compile_invocation_and_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, doc) = bound_controller(dir.path());
        let converter = FakeConverter::succeeding(b"%PDF-1.5 fake");

        c.compile("pdf", &converter).unwrap();

        let requests = converter.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.from, "markdown+smart");
        assert_eq!(request.to, "pdf");
        assert_eq!(request.output, dir.path().join("doc.pdf"));
        assert_eq!(
            request.inputs,
            vec![dir.path().join("doc.yaml"), doc.clone()]
        );
        assert_eq!(
            converter.saw_metadata.lock().unwrap().as_deref(),
            Some("---\nheader-includes: |\n\t\\usepackage{x}\n...")
        );

        assert!(!dir.path().join("doc.yaml").exists());
        assert_eq!(fs::read_to_string(&doc).unwrap(), "# Title");
        let pdf = c.preview().pdf().expect("preview");
        assert_eq!(pdf.bytes, b"%PDF-1.5 fake");
        assert_eq!(pdf.path, dir.path().join("doc.pdf"));
        assert!(!c.is_compiling());
    }

    #[test]
    fn test_scenario_compile_cancelled_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = controller(vec![None]);
        type_into(&mut c, "# Title");
        c.preview = Preview::Pdf(RenderedPdf::new(dir.path().join("old.pdf"), vec![7]));
        c.error = Some("old error".to_string());
        let converter = FakeConverter::succeeding(b"pdf");

        c.compile("latex", &converter).unwrap();

        assert_eq!(converter.calls(), 0);
        assert_eq!(c.file(), &FileSession::NoFile);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
        assert_eq!(c.preview().pdf().map(|p| p.bytes.clone()), Some(vec![7]));
        assert_eq!(c.error(), Some("old error"));
    }

    #[test]
    fn test_compile_without_file_binds_chosen_path() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("fresh.md");
        let mut c = controller(vec![Some(doc.clone())]);
        type_into(&mut c, "text");

        c.compile("latex", &FakeConverter::succeeding(b"out")).unwrap();

        assert_eq!(c.file().path(), Some(doc.as_path()));
        assert_eq!(fs::read_to_string(&doc).unwrap(), "text");
        assert!(dir.path().join("fresh.pdf").exists());
    }

    #[test]
    fn test_scenario_converter_failure() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, doc) = bound_controller(dir.path());

        c.compile("latex", &FakeConverter::succeeding(b"first")).unwrap();
        assert!(c.preview().pdf().is_some());

        let stderr = "Error producing PDF.\n! Undefined control sequence.";
        c.compile("latex", &FakeConverter::failing(stderr)).unwrap();

        assert_eq!(c.error(), Some(stderr));
        assert!(c.preview().is_empty());
        assert!(!dir.path().join("doc.yaml").exists());
        assert!(doc.exists());
        // Output of the earlier run is never deleted.
        assert!(dir.path().join("doc.pdf").exists());
    }

    #[test]
    fn test_launch_failure_is_shown_and_cleaned_up() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, doc) = bound_controller(dir.path());

        c.compile("latex", &MissingConverter).unwrap();

        assert!(c.error().unwrap().contains("pandoc was not found"));
        assert!(c.preview().is_empty());
        assert!(!dir.path().join("doc.yaml").exists());
        assert!(doc.exists());
    }

    #[test]
    fn test_missing_output_still_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, _doc) = bound_controller(dir.path());

        let job = c.prepare_compile("latex").unwrap().unwrap();
        let err = c
            .finish_compile(CompileOutcome::Finished { stderr: String::new() })
            .unwrap_err();

        assert!(matches!(err, AppError::MissingOutput(ref p) if p == &job.paths.output));
        assert!(!job.paths.metadata.exists());
        assert!(!c.is_compiling());
    }

    #[test]
    fn test_overlapping_compile_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, _doc) = bound_controller(dir.path());

        let job = c.prepare_compile("latex").unwrap();
        assert!(job.is_some());
        assert!(c.is_compiling());

        assert!(c.prepare_compile("latex").unwrap().is_none());

        let job = job.unwrap();
        let outcome = job.run(&FakeConverter::succeeding(b"done"));
        c.finish_compile(outcome).unwrap();
        assert!(!c.is_compiling());
        assert!(c.prepare_compile("latex").unwrap().is_some());
    }

    #[test]
    fn test_new_during_compile_drops_the_result() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, _doc) = bound_controller(dir.path());

        let job = c.prepare_compile("latex").unwrap().unwrap();
        c.new_document();
        assert!(c.preview().is_empty());

        let outcome = job.run(&FakeConverter::succeeding(b"%PDF old"));
        c.finish_compile(outcome).unwrap();

        assert_eq!(c.file(), &FileSession::NoFile);
        assert!(c.preview().is_empty());
        assert_eq!(c.error(), None);
        assert!(!job.paths.metadata.exists());
        assert!(!c.is_compiling());
    }

    #[test]
    fn test_load_during_compile_drops_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let other = dir.path().join("other.md");
        fs::write(&other, "# Other").unwrap();
        let mut c = controller(vec![Some(dir.path().join("doc.md")), Some(other.clone())]);
        type_into(&mut c, "# Title");
        c.save_as().unwrap();

        let job = c.prepare_compile("latex").unwrap().unwrap();
        c.load().unwrap();

        let outcome = job.run(&FakeConverter::failing("! LaTeX Error"));
        c.finish_compile(outcome).unwrap();

        assert_eq!(c.file().path(), Some(other.as_path()));
        assert_eq!(c.error(), None);
        assert!(!job.paths.metadata.exists());

        // The next compile is routed normally.
        c.compile("latex", &FakeConverter::failing("boom")).unwrap();
        assert_eq!(c.error(), Some("boom"));
    }

    #[test]
    fn test_cancelled_load_during_compile_keeps_the_result() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("doc.md");
        let mut c = controller(vec![Some(doc), None]);
        c.save_as().unwrap();

        let job = c.prepare_compile("latex").unwrap().unwrap();
        c.load().unwrap();

        let outcome = job.run(&FakeConverter::succeeding(b"%PDF"));
        c.finish_compile(outcome).unwrap();
        assert!(c.preview().pdf().is_some());
    }

    #[test]
    fn test_abandon_compile_removes_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, doc) = bound_controller(dir.path());

        let job = c.prepare_compile("latex").unwrap().unwrap();
        assert!(job.paths.metadata.exists());

        c.abandon_compile().unwrap();
        assert!(!job.paths.metadata.exists());
        assert!(!c.is_compiling());
        assert!(doc.exists());

        // A result arriving afterwards is ignored.
        c.finish_compile(CompileOutcome::Finished { stderr: String::new() })
            .unwrap();
        assert!(c.preview().is_empty());

        // Nothing in flight is fine too.
        c.abandon_compile().unwrap();
    }

    #[test]
    fn test_finish_without_job_is_ignored() {
        let mut c = controller(vec![]);
        c.finish_compile(CompileOutcome::Finished { stderr: "late".to_string() })
            .unwrap();
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_dismiss_error() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, _doc) = bound_controller(dir.path());
        c.compile("latex", &FakeConverter::failing("boom")).unwrap();
        assert_eq!(c.error(), Some("boom"));

        c.dismiss_error();
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_compile_uses_extensions_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let (mut c, _doc) = bound_controller(dir.path());
        c.set_extensions("+smart-ea+pipe_tables");
        let converter = FakeConverter::succeeding(b"x");

        c.compile("beamer", &converter).unwrap();

        let requests = converter.requests.lock().unwrap();
        assert_eq!(requests[0].from, "markdown+smart-ea+pipe_tables");
        assert_eq!(requests[0].to, "beamer");
    }
}
