//! # Editor Host
//!
//! An in-process stand-in for the editor the conveniences plug into.
//!
//! - **`events`**: `HostEvent` notifications, `ContentChange`, `Key`
//! - **`session`**: `Session` (open documents, active editor, context keys,
//!   commands, keybindings, event queue) and `HostError`
//! - **`workbench`**: `Workbench`, which owns a session plus one
//!   [`Extension`] and pumps queued events to it
//!
//! Everything is synchronous. A mutation queues events; the workbench
//! delivers them in order after each user action, including any events the
//! extension's own edits queue along the way.

pub mod events;
pub mod session;
pub mod workbench;

pub use events::{ContentChange, DocumentId, HostEvent, Key, TextDocumentChangeEvent};
pub use session::{CommandFn, HostError, Keybinding, Session};
pub use workbench::{Extension, Workbench};
