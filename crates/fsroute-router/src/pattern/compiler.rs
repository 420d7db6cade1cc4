/// Pattern compilation
///
/// Turns an authored route pattern into the router's pattern string.
/// Compilation is a pure function of `(pattern, options, registry)`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::segment::{classify_segment, Param, Segment};
use crate::error::ValidationError;
use crate::path::normalize_pattern;
use crate::types::TypeRegistry;
use crate::validate;

/// Compilation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Reject `*` in static segments and run structural validation
    #[serde(default)]
    pub strict: bool,
}

impl CompileOptions {
    /// Options with strict validation enabled
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Result of compiling a pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledPattern {
    /// Router pattern like `/users/:id(\d+)`
    pub pattern: String,
    /// Named parameters, in segment order
    pub params: Vec<Param>,
}

impl CompiledPattern {
    /// Parameters that carry a regex constraint
    pub fn constraints(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter_map(|p| p.regex.as_deref().map(|re| (p.name.as_str(), re)))
    }
}

/// Internal accumulator for fold-based compilation
///
/// All mutations are local to the fold; each step returns the state.
#[derive(Default)]
struct CompileState {
    compiled: CompiledPattern,
    /// Segments pushed so far; the leading segment of `/a` is empty, so the
    /// pattern buffer alone cannot tell whether a `/` is due
    segments: usize,
}

impl CompileState {
    fn with_segment(mut self, segment: Segment<'_>, registry: &TypeRegistry) -> Self {
        if self.segments > 0 {
            self.compiled.pattern.push('/');
        }
        segment.push_onto(&mut self.compiled.pattern, registry);
        self.compiled.params.extend(segment.param(registry));
        self.segments += 1;
        self
    }

    fn finish(self) -> CompiledPattern {
        self.compiled
    }
}

/// Route pattern compiler bound to a type registry
///
/// # Examples
///
/// ```
/// use fsroute_router::{Compiler, CompileOptions, TypeRegistry};
///
/// let compiler = Compiler::new(TypeRegistry::builtin().with_type("hex", "[0-9a-f]+"));
/// assert_eq!(compiler.compile("/blobs/[sha:hex]").unwrap(), "/blobs/:sha([0-9a-f]+)");
///
/// let strict = compiler.clone().with_options(CompileOptions::strict());
/// assert!(strict.compile("/api/*/users").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    registry: TypeRegistry,
    options: CompileOptions,
}

impl Compiler {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry,
            options: CompileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn strict(self, strict: bool) -> Self {
        self.with_options(CompileOptions { strict })
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// Compiles a pattern to its router string
    pub fn compile(&self, pattern: &str) -> Result<String, ValidationError> {
        self.compile_pattern(pattern).map(|c| c.pattern)
    }

    /// Compiles a pattern, keeping parameter metadata
    pub fn compile_pattern(&self, pattern: &str) -> Result<CompiledPattern, ValidationError> {
        compile_with(pattern, &self.options, &self.registry)
    }

    /// Lists every strict-mode violation of a pattern
    ///
    /// Unlike [`Compiler::compile`] in strict mode, this does not stop at
    /// the first problem. An empty list means the pattern passes strict mode.
    ///
    /// ```
    /// use fsroute_router::{Compiler, ValidationError};
    ///
    /// let problems = Compiler::default().diagnose("/a*/[...x]/[...y]/b");
    /// assert_eq!(problems, vec![
    ///     ValidationError::WildcardInStaticSegment { segment: "a*".to_string() },
    ///     ValidationError::MultipleCatchAll,
    /// ]);
    /// ```
    pub fn diagnose(&self, pattern: &str) -> Vec<ValidationError> {
        let normalized = normalize_pattern(pattern);

        let static_errors = normalized
            .split('/')
            .map(classify_segment)
            .filter_map(|segment| match segment {
                Segment::Static(text) if text.contains('*') => {
                    Some(ValidationError::WildcardInStaticSegment {
                        segment: text.to_string(),
                    })
                }
                _ => None,
            });

        let lenient = compile_with(pattern, &CompileOptions::default(), &self.registry)
            .map(|c| c.pattern)
            .unwrap_or_default();

        static_errors
            .chain(validate::violations(&lenient))
            .collect()
    }
}

/// Compiles a route pattern with the built-in type registry
///
/// **Pure function**: same `(pattern, options)` → same result.
///
/// # Steps
///
/// 1. Normalize (trim, collapse separators, resolve dot segments, drop trailing `/`)
/// 2. Translate each segment (see [`classify_segment`])
/// 3. In strict mode, reject `*` in static segments and validate the structure
///
/// # Errors
///
/// Only in strict mode; see [`ValidationError`].
///
/// # Examples
///
/// ```
/// use fsroute_router::{compile, CompileOptions};
///
/// let opts = CompileOptions::default();
/// assert_eq!(compile("/api//users//[id]", &opts).unwrap(), "/api/users/:id");
/// assert_eq!(compile("/files/[...path:slug]", &opts).unwrap(), "/files/**:path([a-z0-9-]+)");
/// assert_eq!(compile("   ", &opts).unwrap(), "");
/// assert_eq!(compile("/", &opts).unwrap(), "/");
/// ```
pub fn compile(pattern: &str, options: &CompileOptions) -> Result<String, ValidationError> {
    compile_with(pattern, options, TypeRegistry::shared()).map(|c| c.pattern)
}

/// Compiles a route pattern against an explicit registry
pub fn compile_with(
    pattern: &str,
    options: &CompileOptions,
    registry: &TypeRegistry,
) -> Result<CompiledPattern, ValidationError> {
    let normalized = normalize_pattern(pattern);
    if normalized.is_empty() {
        return Ok(CompiledPattern::default());
    }

    let compiled = normalized
        .split('/')
        .map(classify_segment)
        .try_fold(CompileState::default(), |state, segment| {
            match segment {
                Segment::Static(text) if options.strict && text.contains('*') => {
                    Err(ValidationError::WildcardInStaticSegment {
                        segment: text.to_string(),
                    })
                }
                _ => Ok(state.with_segment(segment, registry)),
            }
        })?
        .finish();

    debug!(
        pattern = %pattern,
        compiled = %compiled.pattern,
        params = compiled.params.len(),
        "compiled route pattern"
    );

    if options.strict {
        validate::validate(&compiled.pattern)?;
    }

    Ok(compiled)
}
