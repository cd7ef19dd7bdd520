//! # stackgen
//!
//! Deterministic generator of synthetic stack-machine instruction listings.
//! The output is a text corpus — one fixed `main` function followed by a
//! configurable number of `large<i>` functions, each repeating the same
//! four-instruction block — used as a performance fixture for a downstream
//! compiler/VM.

//! # Usage
//! ```rust
//! use stackgen::Corpus;
//!
//! // 1. One-shot generation
//! let text = stackgen::generate(1, 1);
//! assert!(text.starts_with("func main() Int\n"));
//!
//! // 2. Sized corpus with streaming output
//! let corpus = Corpus::new(100, 100);
//! let mut buf = Vec::with_capacity(corpus.output_len());
//! corpus.write_to(&mut buf)?;
//! assert_eq!(buf.len(), corpus.output_len());
//! # Ok::<(), std::io::Error>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod corpus;
pub(crate) mod template;

// =============================================================================
// EXPORTS
// =============================================================================

pub use corpus::{generate, Corpus};
