//! Domain types shared by the task board server, store backends and client.
//!
//! This crate performs no I/O. The document types here are the exact JSON
//! shapes exchanged over the HTTP API (camelCase field names).

pub mod error;
pub mod project;
pub mod resource;
pub mod status;
pub mod task;
pub mod types;
pub mod validation;
