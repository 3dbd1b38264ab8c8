//! Database row structs.
//!
//! Each submodule holds a `FromRow` struct matching one table and the
//! conversion into the corresponding `taskboard_core` document.

pub mod project;
pub mod resource;
pub mod task;
