/// Type registry for typed route parameters
///
/// Maps the type name in `[name:type]` to the regex placed in the compiled
/// pattern (`:name(regex)`). Names the registry does not know are treated as
/// inline regex and passed through unchanged.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Built-in type names and their regex fragments
pub const BUILTIN_TYPES: &[(&str, &str)] = &[
    ("number", r"\d+"),
    ("int", r"\d+"),
    ("float", r"\d+\.\d+"),
    (
        "uuid",
        "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
    ),
    ("slug", "[a-z0-9-]+"),
    ("alpha", "[a-zA-Z]+"),
    ("alphanumeric", "[a-zA-Z0-9]+"),
    ("email", r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"),
    ("date", r"\d{4}-\d{2}-\d{2}"),
    ("year", r"\d{4}"),
    ("month", r"\d{1,2}"),
    ("day", r"\d{1,2}"),
];

static BUILTIN: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::builtin);

/// Immutable lookup table from type name to regex fragment
///
/// Built once and handed to a [`Compiler`](crate::Compiler); there is no
/// global mutable registry. Extend it with the builder methods before use.
///
/// # Examples
///
/// ```
/// use fsroute_router::TypeRegistry;
///
/// let registry = TypeRegistry::builtin().with_type("hex", "[0-9a-f]+");
///
/// assert_eq!(registry.resolve("number"), r"\d+");
/// assert_eq!(registry.resolve("hex"), "[0-9a-f]+");
/// // Unknown names are inline regex
/// assert_eq!(registry.resolve("[a-z]{3}"), "[a-z]{3}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRegistry {
    types: HashMap<String, String>,
}

impl TypeRegistry {
    /// Registry holding only [`BUILTIN_TYPES`]
    pub fn builtin() -> Self {
        Self::empty().extend(
            BUILTIN_TYPES
                .iter()
                .map(|(name, regex)| (name.to_string(), regex.to_string())),
        )
    }

    /// Registry with no entries: every type is passed through as regex
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Shared built-in registry
    pub fn shared() -> &'static TypeRegistry {
        &BUILTIN
    }

    /// Adds or replaces one type
    pub fn with_type(mut self, name: impl Into<String>, regex: impl Into<String>) -> Self {
        self.types.insert(name.into(), regex.into());
        self
    }

    /// Adds or replaces several types
    pub fn extend<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.types
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Looks up a registered type
    pub fn get(&self, name: &str) -> Option<&str> {
        self.types.get(name).map(String::as_str)
    }

    /// Resolves a type to its regex, passing unknown names through
    pub fn resolve<'a>(&'a self, ty: &'a str) -> &'a str {
        self.get(ty).unwrap_or(ty)
    }

    /// Registered type names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolves a type name against the built-in registry
///
/// # Examples
///
/// ```
/// use fsroute_router::type_regex;
///
/// assert_eq!(type_regex("slug"), "[a-z0-9-]+");
/// assert_eq!(type_regex("year"), r"\d{4}");
/// assert_eq!(type_regex("[0-9]{3}"), "[0-9]{3}");
/// ```
pub fn type_regex(ty: &str) -> &str {
    TypeRegistry::shared().resolve(ty)
}
