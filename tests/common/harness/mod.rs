//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic export documents,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod export;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::HoardCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use export::{TestExport, TestNote};
