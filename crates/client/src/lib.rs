//! Client side of the task board.
//!
//! [`BoardApi`] is the typed HTTP data-access layer. The remaining modules
//! hold client state (session, board columns, resource list) and the form
//! validation that runs before any request is sent. UI rendering is out of
//! scope; every user-visible outcome is reported as a [`Notice`].

pub mod api;
pub mod board;
pub mod error;
pub mod forms;
pub mod notify;
pub mod resources;
pub mod session;

#[cfg(test)]
mod testing;

pub use api::{BoardApi, BoardGateway};
pub use board::Board;
pub use error::ClientError;
pub use notify::{Notice, NoticeKind};
pub use resources::ResourceManager;
pub use session::Session;
