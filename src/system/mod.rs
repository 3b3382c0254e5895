//! System-level modules
//!
//! Logging initialization lives here; the TUI owns the terminal, so
//! tracing output goes to a file by default.

pub mod logging;
