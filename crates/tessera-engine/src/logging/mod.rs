//! Logging setup.
//!
//! The crate logs through the `log` facade only; this module offers an
//! `env_logger` initializer for binaries and tests that want output.

mod init;

pub use init::{LoggingConfig, init_logging};
