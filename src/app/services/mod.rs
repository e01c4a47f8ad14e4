//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Compiling documents through pandoc
//! - Settings persistence
//! - Text operations
//! - Syntax highlighting

pub mod compiler;
pub mod settings_store;
pub mod syntax;
pub mod text_ops;
