//! formal-forge library
//!
//! Core functionality for generating print-ready school HR documents:
//! the teacher roster store, document data models, pure preview renderers,
//! and the amount-in-words formatter.

pub mod config;
pub mod documents;
pub mod roster;
