//! Shortly - a terminal front-end for a mock URL shortener
//!
//! This library provides the pieces behind the `shortly` binary: the
//! in-memory links model, the TUI, and the remote log collector client.
//! There is deliberately no storage, no redirect server and no real
//! shortening algorithm — short codes are random, session-local strings.
//!
//! # Architecture
//! - `links`: data model and the mock shorten operation
//! - `collector`: fire-and-forget HTTP client for the remote log collector
//! - `interfaces`: the terminal user interface
//! - `config`: configuration management (TOML + env overrides)
//! - `system`: logging initialization
//! - `errors`: crate-wide error type

pub mod collector;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod links;
pub mod system;
pub mod utils;
