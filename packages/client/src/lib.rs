//! Chat room client.
//!
//! A [`ChatSession`] bridges the form fields of a [`ChatView`] to events on a
//! [`Transport`], and renders `message` events delivered back by the server.

pub mod error;
mod formatter;
pub mod input;
mod runner;
pub mod session;
pub mod transport;
pub mod view;
pub mod websocket;

pub use runner::{ClientConfig, apply_command, run_client};
pub use session::{ChatSession, SessionPhase, Subscription};
pub use transport::{Transport, TransportError};
pub use view::{ChatView, ConsoleView, Field};
