//! View controller and view-model projection.
//!
//! # Responsibility
//! - Hold transient selection state and route user events.
//! - Derive a render-ready view model after every mutation.

pub mod controller;
pub mod view_model;
