//! Stackgen CLI
//!
//! Synthetic stack-machine program generator for performance testing.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::generate;
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "stackgen")]
#[command(about = "Generate synthetic stack-machine test programs", long_about = None)]
#[command(version)]
struct Cli {
    /// Instruction blocks per generated function body
    #[arg(short, long, value_name = "N", default_value_t = 100)]
    blocks: usize,

    /// Number of generated functions
    #[arg(short, long, value_name = "N", default_value_t = 100)]
    funcs: usize,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    generate(cli.blocks, cli.funcs, cli.output.as_deref())
}
