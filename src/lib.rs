//! # `todos`
//!
//! A small command-line to-do list: add, toggle, edit, delete, and filter
//! short text tasks, persisted across invocations as a single JSON file.

pub mod cli;
pub mod config;
pub mod error;
pub mod paths;
pub mod render;
pub mod storage;
pub mod todos;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
