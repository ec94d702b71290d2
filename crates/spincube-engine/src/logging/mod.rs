//! Logger bootstrap.
//!
//! Small wrapper over the `log` facade + `env_logger`; the binary calls
//! [`init_logging`] once at the top of `main`.

mod init;

pub use init::init_logging;
