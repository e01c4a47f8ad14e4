//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, FileSession, Preview, Messages)
//! - `controllers/` - Orchestration (the document/compile session)
//! - `services/` - Business operations (compiler driver, settings store, syntax)
//! - `infrastructure/` - External integrations (FLTK buffer, URL opening, error)
//! - `state.rs` - Main application coordinator and message dispatch

pub mod controllers;
pub mod domain;
pub mod file_filters;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::session::{EditorAdapter, PathPrompt, SessionController};
pub use domain::{Document, EditorBinding, FileSession, Message, Preview, RenderedPdf};
pub use infrastructure::buffer::buffer_text_no_leak;
pub use infrastructure::error::{AppError, Result};
pub use services::compiler::{CompileJob, CompileOutcome, Converter, PandocConverter};
pub use services::settings_store::{JsonSettingsStore, SettingsKey, SettingsStore};
