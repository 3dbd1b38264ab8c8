//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Every
//! handler performs a single store operation and maps failures via
//! [`AppError`](crate::error::AppError).

pub mod fallback;
pub mod project;
pub mod resource;
pub mod task;
