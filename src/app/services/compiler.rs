//! Compiler driver: everything between "the body is on disk" and
//! "pandoc has exited".
//!
//! A compile writes the body to its markdown file, writes the preamble into a
//! sibling metadata file as `header-includes`, then runs
//!
//! ```text
//! pandoc --from markdown<extensions> --to <format> --output <name>.pdf <name>.yaml <name>.md
//! ```
//!
//! The pieces here are free of UI state so the same [`CompileJob`] can run
//! inline or on a worker thread.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::text_ops::{indent_lines, input_format};
use crate::app::infrastructure::error::{AppError, Result};

pub const CONVERTER_PROGRAM: &str = "pandoc";

/// Base input format; the user's extension toggles are appended to it.
pub const INPUT_FORMAT: &str = "markdown";

/// Output formats offered in the export selector. The first one is selected on startup.
pub const EXPORT_FORMATS: &[&str] = &["latex", "beamer", "context", "ms", "html5", "typst"];

/// The markdown file and the two files derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilePaths {
    pub markdown: PathBuf,
    pub metadata: PathBuf,
    pub output: PathBuf,
}

impl CompilePaths {
    /// `<dir>/<name>.md` gives `<dir>/<name>.yaml` and `<dir>/<name>.pdf`.
    pub fn derive(markdown: &Path) -> Self {
        Self {
            markdown: markdown.to_path_buf(),
            metadata: markdown.with_extension("yaml"),
            output: markdown.with_extension("pdf"),
        }
    }
}

/// Metadata document carrying the preamble as a literal block under
/// `header-includes`, each line indented by one tab.
pub fn render_metadata(preamble: &str) -> String {
    format!("---\nheader-includes: |\n{}\n...", indent_lines(preamble, "\t"))
}

/// Arguments for one converter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub output: PathBuf,
    /// Positional inputs in order: metadata first, then markdown.
    pub inputs: Vec<PathBuf>,
}

impl ConversionRequest {
    pub fn new(extensions: &str, export_format: &str, paths: &CompilePaths) -> Self {
        Self {
            from: input_format(INPUT_FORMAT, extensions),
            to: export_format.to_string(),
            output: paths.output.clone(),
            inputs: vec![paths.metadata.clone(), paths.markdown.clone()],
        }
    }

    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--from".into(),
            self.from.clone().into(),
            "--to".into(),
            self.to.clone().into(),
            "--output".into(),
            self.output.clone().into(),
        ];
        args.extend(self.inputs.iter().map(|p| p.clone().into_os_string()));
        args
    }
}

/// What the converter reported once it exited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConverterOutput {
    pub stderr: String,
}

/// Runs the external document converter.
pub trait Converter: Send + Sync {
    fn convert(&self, request: &ConversionRequest) -> Result<ConverterOutput>;
}

/// Converter backed by a `pandoc` executable.
#[derive(Debug, Clone)]
pub struct PandocConverter {
    program: PathBuf,
}

impl PandocConverter {
    pub fn new() -> Self {
        Self::with_program(CONVERTER_PROGRAM)
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }
}

impl Default for PandocConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for PandocConverter {
    fn convert(&self, request: &ConversionRequest) -> Result<ConverterOutput> {
        log::info!(
            "Running {} --from {} --to {} --output {}",
            self.program_name(),
            request.from,
            request.to,
            request.output.display()
        );

        let output = Command::new(&self.program)
            .args(request.args())
            .output()
            .map_err(|source| {
                if source.kind() == ErrorKind::NotFound {
                    AppError::ConverterNotFound {
                        program: self.program_name(),
                    }
                } else {
                    AppError::ConverterLaunch {
                        program: self.program_name(),
                        source,
                    }
                }
            })?;

        log::debug!("{} exited with {}", self.program_name(), output.status);
        Ok(ConverterOutput {
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of running a job, in a form that can cross the UI channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    /// The converter ran to completion. Non-empty stderr means the compile failed.
    Finished { stderr: String },
    /// The converter could not be started at all.
    LaunchFailed(String),
}

impl CompileOutcome {
    /// Text for the error panel, or None if the output should be read.
    pub fn failure_text(&self) -> Option<&str> {
        match self {
            Self::Finished { stderr } if stderr.is_empty() => None,
            Self::Finished { stderr } => Some(stderr),
            Self::LaunchFailed(message) => Some(message),
        }
    }
}

/// A compile whose inputs are already on disk and only needs the converter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileJob {
    pub paths: CompilePaths,
    pub request: ConversionRequest,
}

impl CompileJob {
    /// Write the markdown and metadata files and describe the converter run.
    pub fn prepare(
        markdown: &Path,
        body: &str,
        preamble: &str,
        extensions: &str,
        export_format: &str,
    ) -> Result<Self> {
        let paths = CompilePaths::derive(markdown);
        fs::write(&paths.markdown, body)?;
        fs::write(&paths.metadata, render_metadata(preamble))?;
        let request = ConversionRequest::new(extensions, export_format, &paths);
        Ok(Self { paths, request })
    }

    pub fn run(&self, converter: &dyn Converter) -> CompileOutcome {
        match converter.convert(&self.request) {
            Ok(output) => CompileOutcome::Finished {
                stderr: output.stderr,
            },
            Err(e) => CompileOutcome::LaunchFailed(e.to_string()),
        }
    }

    /// Remove the metadata file. The markdown and output files are kept.
    pub fn cleanup(&self) -> Result<()> {
        fs::remove_file(&self.paths.metadata)?;
        Ok(())
    }
}
