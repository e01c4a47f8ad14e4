//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The editable Document and which field the editor mirrors
//! - The file session (where the body is saved)
//! - The compile preview
//! - Message types for the event system

pub mod document;
pub mod file_session;
pub mod messages;
pub mod preview;

pub use document::{Document, EditorBinding};
pub use file_session::FileSession;
pub use messages::Message;
pub use preview::{Preview, RenderedPdf};
