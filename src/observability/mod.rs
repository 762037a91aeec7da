//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile (lorekeeper.log)
//! ```
//!
//! Plugin output goes to the terminal pane, so logs cannot go to stdout. They
//! are written to `~/.local/share/zellij/lorekeeper/lorekeeper.log`, rotated at
//! 10 MB with three backups.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`file_writer`]: the rotating file and its `MakeWriter` impl

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFile;
pub use init::{build_filter, init_tracing, LOG_FILE};
