/// Segment classification
///
/// Pure functional parsing of bracketed route segments into typed variants.
/// All functions are **pure**: same input → same output, no side effects.

use serde::Serialize;

use crate::types::TypeRegistry;

/// One `/`-delimited unit of a route pattern
///
/// Functional sum type: each variant borrows its name and type from the
/// source segment. Types are kept as written and resolved only when the
/// segment is rendered.
///
/// # Examples
///
/// ```
/// use fsroute_router::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("about"), Segment::Static("about"));
/// assert_eq!(classify_segment("[id]"), Segment::Param("id"));
/// assert_eq!(classify_segment("[id:number]"), Segment::TypedParam("id", "number"));
/// assert_eq!(classify_segment("[[slug]]"), Segment::OptionalParam("slug"));
/// assert_eq!(classify_segment("[...]"), Segment::Wildcard);
/// assert_eq!(classify_segment("[...all]"), Segment::CatchAll);
/// assert_eq!(classify_segment("[...path]"), Segment::NamedCatchAll("path"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text, copied through: `users`
    Static(&'a str),
    /// `[id]` → `:id`
    Param(&'a str),
    /// `[id:number]` → `:id(\d+)`
    TypedParam(&'a str, &'a str),
    /// `[[id]]` → `:id?`
    OptionalParam(&'a str),
    /// `[[id:number]]` → `:id(\d+)?`
    OptionalTypedParam(&'a str, &'a str),
    /// `[all]` or `[...]` → `*`
    Wildcard,
    /// `[...all]` → `**`
    CatchAll,
    /// `[...path]` → `**:path`
    NamedCatchAll(&'a str),
    /// `[...path:slug]` → `**:path([a-z0-9-]+)`
    TypedCatchAll(&'a str, &'a str),
    /// `[[...path]]` → `**:path?`
    OptionalCatchAll(&'a str),
    /// `[[...path:slug]]` → `**:path([a-z0-9-]+)?`
    OptionalTypedCatchAll(&'a str, &'a str),
}

/// How a named parameter binds at match time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Required,
    Optional,
    CatchAll,
    OptionalCatchAll,
}

/// A named parameter of a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
    /// Resolved regex constraint, if the parameter was typed
    pub regex: Option<String>,
}

/// Classifies a segment into a [`Segment`] (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// A segment is bracketed only if it starts with `[` **and** ends with `]`;
/// anything else is static, including unbalanced brackets.
///
/// 1. **Double brackets** `[[inner]]`:
///    `...name:type`, `...name`, `name:type`, `name`
/// 2. **Single brackets** `[inner]`:
///    - contains `:` → split on the first `:`; a `...` name is a typed catch-all
///    - `all` / `...` → wildcard
///    - `...all` → anonymous catch-all
///    - `...name` → named catch-all
///    - otherwise a named parameter (possibly empty)
/// 3. **Static**: any other text
///
/// # Examples
///
/// ```
/// use fsroute_router::pattern::{classify_segment, Segment};
///
/// // Unbalanced brackets are static
/// assert_eq!(classify_segment("[id"), Segment::Static("[id"));
/// assert_eq!(classify_segment("id]"), Segment::Static("id]"));
///
/// // Empty brackets give an empty name
/// assert_eq!(classify_segment("[]"), Segment::Param(""));
///
/// // Inline regex types keep their brackets
/// assert_eq!(
///     classify_segment("[name:[a-z]+]"),
///     Segment::TypedParam("name", "[a-z]+")
/// );
/// ```
pub fn classify_segment(segment: &str) -> Segment<'_> {
    let Some(inner) = strip_brackets(segment) else {
        return Segment::Static(segment);
    };

    if let Some(optional) = strip_brackets(inner) {
        return classify_optional(optional);
    }

    if let Some((name, ty)) = inner.split_once(':') {
        return match name.strip_prefix("...") {
            Some(name) => Segment::TypedCatchAll(name, ty),
            None => Segment::TypedParam(name, ty),
        };
    }

    match inner {
        "all" | "..." => Segment::Wildcard,
        "...all" => Segment::CatchAll,
        _ => inner
            .strip_prefix("...")
            .map_or(Segment::Param(inner), Segment::NamedCatchAll),
    }
}

/// Classifies the inside of a `[[...]]` segment
fn classify_optional(inner: &str) -> Segment<'_> {
    match inner.strip_prefix("...") {
        Some(rest) => match rest.split_once(':') {
            Some((name, ty)) => Segment::OptionalTypedCatchAll(name, ty),
            None => Segment::OptionalCatchAll(rest),
        },
        None => match inner.split_once(':') {
            Some((name, ty)) => Segment::OptionalTypedParam(name, ty),
            None => Segment::OptionalParam(inner),
        },
    }
}

/// Strips one level of `[` `]`, if both are present
fn strip_brackets(s: &str) -> Option<&str> {
    s.strip_prefix('[').and_then(|s| s.strip_suffix(']'))
}

impl<'a> Segment<'a> {
    /// Appends the router token for this segment
    pub fn push_onto(&self, out: &mut String, registry: &TypeRegistry) {
        match *self {
            Segment::Static(text) => out.push_str(text),
            Segment::Param(name) => {
                out.push(':');
                out.push_str(name);
            }
            Segment::TypedParam(name, ty) => {
                out.push(':');
                push_constrained(out, name, registry.resolve(ty));
            }
            Segment::OptionalParam(name) => {
                out.push(':');
                out.push_str(name);
                out.push('?');
            }
            Segment::OptionalTypedParam(name, ty) => {
                out.push(':');
                push_constrained(out, name, registry.resolve(ty));
                out.push('?');
            }
            Segment::Wildcard => out.push('*'),
            Segment::CatchAll => out.push_str("**"),
            Segment::NamedCatchAll(name) => {
                out.push_str("**:");
                out.push_str(name);
            }
            Segment::TypedCatchAll(name, ty) => {
                out.push_str("**:");
                push_constrained(out, name, registry.resolve(ty));
            }
            Segment::OptionalCatchAll(name) => {
                out.push_str("**:");
                out.push_str(name);
                out.push('?');
            }
            Segment::OptionalTypedCatchAll(name, ty) => {
                out.push_str("**:");
                push_constrained(out, name, registry.resolve(ty));
                out.push('?');
            }
        }
    }

    /// Renders the router token for this segment
    ///
    /// ```
    /// use fsroute_router::{classify_segment, TypeRegistry};
    ///
    /// let registry = TypeRegistry::builtin();
    /// assert_eq!(classify_segment("[[id:number]]").render(&registry), r":id(\d+)?");
    /// assert_eq!(classify_segment("[...all]").render(&registry), "**");
    /// ```
    pub fn render(&self, registry: &TypeRegistry) -> String {
        let mut out = String::new();
        self.push_onto(&mut out, registry);
        out
    }

    /// The named parameter this segment binds, if any
    pub fn param(&self, registry: &TypeRegistry) -> Option<Param> {
        let (name, kind, ty) = match *self {
            Segment::Static(_) | Segment::Wildcard | Segment::CatchAll => return None,
            Segment::Param(name) => (name, ParamKind::Required, None),
            Segment::TypedParam(name, ty) => (name, ParamKind::Required, Some(ty)),
            Segment::OptionalParam(name) => (name, ParamKind::Optional, None),
            Segment::OptionalTypedParam(name, ty) => (name, ParamKind::Optional, Some(ty)),
            Segment::NamedCatchAll(name) => (name, ParamKind::CatchAll, None),
            Segment::TypedCatchAll(name, ty) => (name, ParamKind::CatchAll, Some(ty)),
            Segment::OptionalCatchAll(name) => (name, ParamKind::OptionalCatchAll, None),
            Segment::OptionalTypedCatchAll(name, ty) => {
                (name, ParamKind::OptionalCatchAll, Some(ty))
            }
        };

        Some(Param {
            name: name.to_string(),
            kind,
            regex: ty.map(|ty| registry.resolve(ty).to_string()),
        })
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Segment::Static(_))
    }
}

fn push_constrained(out: &mut String, name: &str, regex: &str) {
    out.push_str(name);
    out.push('(');
    out.push_str(regex);
    out.push(')');
}
