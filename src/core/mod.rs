//! Core abstractions shared by the kernel and the frontends:
//! - Command: semantic user actions
//! - Event: frontend-neutral input events

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
