//! Generate Command
//!
//! Emit the corpus to stdout or a file, streamed through a buffered writer.

use anyhow::{Context, Result};
use stackgen::Corpus;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Generate the corpus and write it out.
pub fn generate(blocks: usize, funcs: usize, output: Option<&Path>) -> Result<()> {
    let corpus = Corpus::new(blocks, funcs);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            let mut writer = BufWriter::new(file);

            corpus
                .write_to(&mut writer)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("Failed to write: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());

            corpus
                .write_to(&mut writer)
                .context("Failed to write to stdout")?;
            writer.flush().context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
