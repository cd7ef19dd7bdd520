//! Corpus construction and rendering.
//!
//! A [`Corpus`] is a pure function of its two size parameters: rendering the
//! same parameters twice produces byte-identical output. The shared function
//! body is materialized once and reused for every generated function, so the
//! templating step is O(`num_blocks` + `num_funcs`) even though the output
//! itself grows as their product.

use std::io::{self, Write};

use crate::template;

// =============================================================================
// CORPUS
// =============================================================================

/// Shape of a generated corpus.
///
/// `num_blocks` controls the instruction blocks per generated function body;
/// `num_funcs` controls how many `large<i>` functions follow the fixed
/// preamble. Zero is valid for either: the output degenerates (empty bodies,
/// or preamble only) but stays well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corpus {
    num_blocks: usize,
    num_funcs: usize,
}

impl Corpus {
    /// Create a corpus shape from the two size parameters.
    #[must_use]
    pub const fn new(num_blocks: usize, num_funcs: usize) -> Self {
        Self {
            num_blocks,
            num_funcs,
        }
    }

    /// Exact byte length of the output, computed without rendering.
    ///
    /// Equals `self.render().len()` for every parameter pair. Used to
    /// pre-size buffers and for throughput accounting.
    #[must_use]
    pub const fn output_len(&self) -> usize {
        let body_len = template::BODY_OPEN.len()
            + self.num_blocks * template::BLOCK.len()
            + template::BODY_CLOSE.len();
        let per_func = template::SIG_PREFIX.len()
            + template::SIG_SUFFIX.len()
            + body_len
            + template::SEPARATOR.len();

        let mut len = template::PREAMBLE.len();
        let mut i = 0;
        while i < self.num_funcs {
            len += per_func + decimal_width(i);
            i += 1;
        }
        len
    }

    /// Stream the corpus into `writer` in output order: preamble, then
    /// functions `large0..large<num_funcs-1>` ascending.
    ///
    /// # Errors
    /// Propagates any I/O error from `writer`; generation itself cannot
    /// fail.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let body = self.body();

        writer.write_all(template::PREAMBLE.as_bytes())?;
        for i in 0..self.num_funcs {
            writer.write_all(template::SIG_PREFIX.as_bytes())?;
            write!(writer, "{i}")?;
            writer.write_all(template::SIG_SUFFIX.as_bytes())?;
            writer.write_all(body.as_bytes())?;
            writer.write_all(template::SEPARATOR.as_bytes())?;
        }
        Ok(())
    }

    /// Render the corpus into a pre-sized `String`.
    #[must_use]
    pub fn render(&self) -> String {
        let body = self.body();
        let mut out = String::with_capacity(self.output_len());

        out.push_str(template::PREAMBLE);
        for i in 0..self.num_funcs {
            out.push_str(template::SIG_PREFIX);
            out.push_str(&i.to_string());
            out.push_str(template::SIG_SUFFIX);
            out.push_str(&body);
            out.push_str(template::SEPARATOR);
        }
        out
    }

    /// Build the shared function body once: `{`, `num_blocks` repeated
    /// blocks, `RET`, `}`.
    fn body(&self) -> String {
        let mut body = String::with_capacity(
            template::BODY_OPEN.len()
                + self.num_blocks * template::BLOCK.len()
                + template::BODY_CLOSE.len(),
        );
        body.push_str(template::BODY_OPEN);
        for _ in 0..self.num_blocks {
            body.push_str(template::BLOCK);
        }
        body.push_str(template::BODY_CLOSE);
        body
    }
}

impl Default for Corpus {
    /// The reference shape: 100 blocks per body, 100 functions.
    fn default() -> Self {
        Self::new(100, 100)
    }
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Generate a corpus in one call.
///
/// # Example
/// ```rust
/// let text = stackgen::generate(100, 100);
/// assert!(text.ends_with("}\n\n"));
/// ```
#[must_use]
#[inline]
pub fn generate(num_blocks: usize, num_funcs: usize) -> String {
    Corpus::new(num_blocks, num_funcs).render()
}

// =============================================================================
// HELPERS
// =============================================================================

/// Width of `n` in decimal digits.
const fn decimal_width(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
