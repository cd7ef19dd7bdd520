//! Fixed text fragments of the instruction-listing format.
//!
//! Everything the generator emits is assembled from these fragments plus an
//! ascending function index. Line terminator is `\n`; body lines carry
//! exactly one tab of indentation, signature and brace lines none. The
//! fragments are byte-exact: downstream consumers may depend on spacing.

// =============================================================================
// PREAMBLE
// =============================================================================

/// The fixed `main` function, always emitted first, followed by one blank
/// line. Invariant to corpus parameters.
pub(crate) const PREAMBLE: &str = "func main() Int\n{\n\tLDINT 1337\n\tRET\n}\n\n";

// =============================================================================
// GENERATED FUNCTIONS
// =============================================================================

/// Signature prefix; the function index and [`SIG_SUFFIX`] complete the line.
pub(crate) const SIG_PREFIX: &str = "func large";

/// Signature tail after the function index.
pub(crate) const SIG_SUFFIX: &str = "() Void\n";

/// Opening brace line of a function body.
pub(crate) const BODY_OPEN: &str = "{\n";

/// One block: the four-instruction sequence repeated `num_blocks` times
/// inside every generated body.
pub(crate) const BLOCK: &str = "\tLDINT 1\n\tLDINT 2\n\tADD\n\tPOP\n";

/// Body tail: the trailing `RET` and the closing brace line.
pub(crate) const BODY_CLOSE: &str = "\tRET\n}\n";

/// Blank separator line after every function, including the last one.
pub(crate) const SEPARATOR: &str = "\n";
