/// Pattern module for file-based route patterns
///
/// Contains pure functional components for segment classification and
/// pattern compilation:
/// - Pure functions (same input → same output)
/// - Borrowed segment variants (no allocation until rendering)
/// - Pattern matching for precedence rules

pub mod compiler;
pub mod segment;

// Re-export commonly used types
pub use compiler::{compile, compile_with, CompileOptions, CompiledPattern, Compiler};
pub use segment::{classify_segment, Param, ParamKind, Segment};
