//! # fsroute Router
//!
//! Compiles file-based route patterns into the pattern syntax of a
//! segment router:
//! - Named parameters (`[id]` → `:id`)
//! - Typed parameters (`[id:number]` → `:id(\d+)`)
//! - Optional parameters (`[[slug]]` → `:slug?`)
//! - Wildcards (`[all]`, `[...]` → `*`)
//! - Catch-alls (`[...all]` → `**`, `[...path]` → `**:path`)
//!
//! ## Path Normalization
//!
//! Patterns are cleaned up before translation:
//! - Surrounding whitespace is trimmed
//! - Double slashes and backslashes: `/api//users\\[id]` → `/api/users/[id]`
//! - Dot segments: `/api/./users/../users` → `/api/users`
//! - Trailing slashes: `/api/users/` → `/api/users`
//!
//! ## Strict Mode
//!
//! With [`CompileOptions::strict`] the compiled pattern is also checked for
//! structural problems (several catch-alls, a catch-all that is not last, a
//! wildcard after a catch-all, `*` inside a static segment). Non-strict
//! compilation never fails.
//!
//! ## Example
//!
//! ```
//! use fsroute_router::{compile, CompileOptions};
//!
//! let pattern = compile("/users/[id:number]/posts/[[slug]]", &CompileOptions::default()).unwrap();
//! assert_eq!(pattern, r"/users/:id(\d+)/posts/:slug?");
//!
//! let strict = CompileOptions::strict();
//! assert!(compile("/api/[...path]/users", &strict).is_err());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
pub mod file;
pub mod path;
pub mod pattern;
pub mod types;
pub mod validate;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::ValidationError;
pub use file::{middleware_key, normalize_prefix, plugin_key, Method, RouteFile};
pub use path::{is_canonical, normalize_pattern};
pub use pattern::{
    classify_segment, compile, CompileOptions, CompiledPattern, Compiler, Param, ParamKind,
    Segment,
};
pub use types::{type_regex, TypeRegistry};
pub use validate::{validate, violations};
