//! tdl - To-Do List Library
//!
//! This library provides the core functionality for the tdl CLI tool, a
//! single-user task list with time-based reminders.
//!
//! # Core Concepts
//!
//! - **Task Store**: the ordered, authoritative task list, mirrored to a
//!   JSON file on every mutation
//! - **Reminder Scheduler**: a fixed-interval scan that fires at most one
//!   notification per task per deadline
//! - **Notification Delivery**: best-effort desktop notification with a
//!   terminal fallback
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `config.toml`
//! - `error`: Error types and result aliases
//! - `i18n`: Arabic/English label tables
//! - `notify`: Notification delivery collaborator
//! - `output`: Human/JSON output envelopes
//! - `prefs`: Theme and language preferences
//! - `render`: Pure task list rendering
//! - `scheduler`: Reminder scanning and the watch loop
//! - `storage`: File storage and atomic writes
//! - `task`: Task model and store

pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod notify;
pub mod output;
pub mod prefs;
pub mod render;
pub mod scheduler;
pub mod storage;
pub mod task;

pub use error::{Error, Result};
