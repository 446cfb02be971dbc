//! Compiles near-natural-language drawing commands into SVG.
//!
//! ```text
//! "draw a circle at one hundred comma fifty radius 25 color red"
//!     -> normalize -> "draw circle at (100, 50) radius 25 color red"
//!     -> tokenize  -> [KEYWORD 'draw', KEYWORD 'circle', ...]
//!     -> parse     -> Command::Circle { .. }
//!     -> generate  -> <svg width="800" height="600" ...>
//! ```

pub mod compiler;
pub mod constants;
pub mod render;

pub use compiler::{Compilation, CompileError, Outcome, compile, compile_canonical, process_canonical_command, process_command};
