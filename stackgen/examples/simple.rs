//! Stackgen Basic Example
//!
//! Minimal usage: `let text = stackgen::generate(blocks, funcs);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    // Zero boilerplate:
    let text = stackgen::generate(2, 3);

    println!("{text}");
    eprintln!("({} bytes)", text.len());
}
