//! Room relay server for the chat application.
//!
//! Connections join named rooms; messages sent to a room are broadcast to
//! every connection that joined it.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
