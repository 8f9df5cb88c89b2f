//! CLI Commands
//!
//! One module per subcommand; each exposes a `run` (or equivalent) entry
//! point invoked from `main`.

pub mod check;
pub mod config;
pub mod generate;
pub mod init;
