//! CLI Commands
//!
//! All stackgen CLI commands organized as separate modules.

mod generate;

pub use generate::generate;
