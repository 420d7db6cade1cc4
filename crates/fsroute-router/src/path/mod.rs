/// Pattern normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Separator predicate for the leading character
fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Splits a pattern into raw segments
///
/// `/` always separates. `\` separates only outside `[...]`, so inline
/// regex types like `[id:\d{3}]` keep their escapes.
fn split_segments(pattern: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in pattern.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '/' => {
                segments.push(&pattern[start..i]);
                start = i + 1;
                depth = 0;
            }
            '\\' if depth == 0 => {
                segments.push(&pattern[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    segments.push(&pattern[start..]);
    segments
}

/// Checks if a pattern is already in normalized form
///
/// **Pure function**: No side effects, deterministic output.
///
/// # Rules
///
/// - Must not be empty
/// - Must not contain `//` or a `\` outside brackets
/// - Must not end with `/` (except root `/`)
/// - Must not contain `.` or `..` segments
///
/// Leading `/` is optional: `[id]` is a valid relative pattern.
///
/// # Examples
///
/// ```
/// use fsroute_router::path::is_canonical;
///
/// assert!(is_canonical("/"));
/// assert!(is_canonical("/api/users/[id]"));
/// assert!(is_canonical("[id]"));
///
/// assert!(!is_canonical(""));
/// assert!(!is_canonical("/api/")); // Trailing /
/// assert!(!is_canonical("/api//users")); // Double //
/// assert!(!is_canonical("/api\\users")); // Backslash
/// assert!(!is_canonical("/api/./users")); // Dot segment
///
/// assert!(is_canonical(r"/codes/[id:\d{3}]")); // Escape inside brackets
/// ```
pub fn is_canonical(path: &str) -> bool {
    if path == "/" {
        return true;
    }

    let segments = split_segments(path);

    !path.is_empty()
        // a `\` separator adds a segment that `/` alone would not
        && segments.len() == path.matches('/').count() + 1
        && !segments.iter().skip(1).any(|s| s.is_empty())
        && !segments.iter().any(|s| *s == "." || *s == "..")
}

/// Normalizes a route pattern before segment translation
///
/// **Pure function** with zero-copy fast path using `Cow<'_, str>`.
///
/// Returns `Cow::Borrowed` when the trimmed input is already canonical.
///
/// # Handles
///
/// - Surrounding whitespace: `  /api  ` → `/api`
/// - Trailing slashes: `/path/` → `/path`
/// - Slash runs: `/path//to` → `/path/to`
/// - Backslashes outside brackets: `\path\to` → `/path/to`
/// - Dot segments: `/a/./b/../c` → `/a/c`
///
/// A `..` that would climb above the root of an absolute pattern is dropped;
/// on a relative pattern it is kept. Whitespace-only input becomes `""`.
///
/// # Examples
///
/// ```
/// use fsroute_router::path::normalize_pattern;
/// use std::borrow::Cow;
///
/// let path = normalize_pattern("/api/users");
/// assert!(matches!(path, Cow::Borrowed("/api/users")));
///
/// assert_eq!(normalize_pattern("/api//users//[id]/"), "/api/users/[id]");
/// assert_eq!(normalize_pattern("\\api\\users"), "/api/users");
/// assert_eq!(normalize_pattern("/api/./users/../users/[id]"), "/api/users/[id]");
/// assert_eq!(normalize_pattern("   "), "");
/// assert_eq!(normalize_pattern("///"), "/");
/// ```
pub fn normalize_pattern(pattern: &str) -> Cow<'_, str> {
    let trimmed = pattern.trim();

    // Fast path: already canonical, borrow the trimmed slice
    if trimmed.is_empty() || is_canonical(trimmed) {
        return Cow::Borrowed(trimmed);
    }

    let absolute = trimmed.starts_with(is_separator);

    let segments = split_segments(trimmed)
        .into_iter()
        .fold(Vec::new(), |mut stack: Vec<&str>, segment| {
            match segment {
                "" | "." => {}
                ".." => match stack.last() {
                    Some(&last) if last != ".." => {
                        stack.pop();
                    }
                    _ if absolute => {}
                    _ => stack.push(".."),
                },
                _ => stack.push(segment),
            }
            stack
        });

    let joined = segments.join("/");

    match (absolute, joined.is_empty()) {
        (true, true) => Cow::Borrowed("/"),
        (true, false) => Cow::Owned(format!("/{}", joined)),
        (false, _) => Cow::Owned(joined),
    }
}
