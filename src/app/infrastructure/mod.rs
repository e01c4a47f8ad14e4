//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK buffer utilities
//! - Opening URLs and files with the system handler
//! - Error types

pub mod buffer;
pub mod error;
pub mod platform;
