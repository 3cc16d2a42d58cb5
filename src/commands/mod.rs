// Command pattern for call simulator operations
// This module defines commands sent from the UI to the call coroutine

pub mod call_commands;

pub use call_commands::{CallCommand, EndReason};
