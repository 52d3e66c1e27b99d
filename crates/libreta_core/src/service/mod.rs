//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep hosts (CLI/FFI) decoupled from storage details.

pub mod note_store;
pub mod theme_service;
