/// Route-file naming rules
///
/// Pure mapping from a file path (relative to a `routes/` directory) to the
/// route it defines. File names follow `<name>[.<method>].<ext>`:
///
/// - `users/[id].ts` → `GET /users/[id]`
/// - `users/[id].delete.ts` → `DELETE /users/[id]`
/// - `users/index.post.ts` → `POST /users`
///
/// No I/O happens here; scanning directories is the caller's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::path::normalize_pattern;
use crate::pattern::{CompiledPattern, Compiler};

/// Default URL prefix for routes
pub const DEFAULT_PREFIX: &str = "/api";

/// HTTP method encoded in a route file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Head,
        Method::Options,
    ];

    /// Parses the lowercase method word used in file names
    ///
    /// ```
    /// use fsroute_router::Method;
    ///
    /// assert_eq!(Method::from_name("post"), Some(Method::Post));
    /// assert_eq!(Method::from_name("POST"), None);
    /// assert_eq!(Method::from_name("ts"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Lowercase file-name form
    pub fn name(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::Patch => "patch",
            Method::Head => "head",
            Method::Options => "options",
        }
    }

    /// Uppercase wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route defined by one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteFile {
    /// File path relative to the routes directory, `/`-separated
    pub file: String,
    pub method: Method,
    /// Authored pattern rooted at `/`, e.g. `/users/[id]`
    pub route_path: String,
    /// Authored pattern rooted at the URL prefix, e.g. `/api/users/[id]`
    pub log_path: String,
    /// Identity of the registration, `route:<METHOD>:<file>`
    pub key: String,
}

impl RouteFile {
    /// Derives the route for a file
    ///
    /// Returns `None` when the base name has no `.`-separated part after the
    /// route name (there is no extension to strip).
    ///
    /// # Examples
    ///
    /// ```
    /// use fsroute_router::{Method, RouteFile};
    ///
    /// let route = RouteFile::from_relative("users/[id].delete.ts", "/api").unwrap();
    /// assert_eq!(route.method, Method::Delete);
    /// assert_eq!(route.route_path, "/users/[id]");
    /// assert_eq!(route.log_path, "/api/users/[id]");
    /// assert_eq!(route.key, "route:DELETE:users/[id].delete.ts");
    ///
    /// let index = RouteFile::from_relative("index.ts", "/api").unwrap();
    /// assert_eq!(index.route_path, "/");
    /// assert_eq!(index.log_path, "/api");
    ///
    /// assert!(RouteFile::from_relative("README", "/api").is_none());
    /// ```
    pub fn from_relative(file: &str, prefix: &str) -> Option<Self> {
        // `\` is a directory separator only outside brackets
        let file = split_outside_brackets(file, '\\').join("/");

        let (dir, base) = match file.rsplit_once('/') {
            Some((dir, base)) => (dir, base),
            None => ("", file.as_str()),
        };
        let dir = if dir == "." { "" } else { dir };

        let parts = split_outside_brackets(base, '.');
        if parts.len() < 2 {
            return None;
        }

        let name = match parts[0] {
            "index" => "",
            name => name,
        };
        let method = Method::from_name(parts[1]).unwrap_or(Method::Get);

        let route_path = join_route("/", dir, name);
        let log_path = join_route(prefix, dir, name);
        let key = format!("route:{}:{}", method, file);

        Some(Self {
            file,
            method,
            route_path,
            log_path,
            key,
        })
    }

    /// Compiles the route path (without prefix)
    pub fn compile(&self, compiler: &Compiler) -> Result<CompiledPattern, ValidationError> {
        compiler.compile_pattern(&self.route_path)
    }

    /// Compiles the prefixed path
    pub fn compile_with_prefix(
        &self,
        compiler: &Compiler,
    ) -> Result<CompiledPattern, ValidationError> {
        compiler.compile_pattern(&self.log_path)
    }
}

/// Registration identity of a middleware file
pub fn middleware_key(file: &str) -> String {
    format!("middleware:{}", file)
}

/// Registration identity of a plugin file
pub fn plugin_key(file: &str) -> String {
    format!("plugin:{}", file)
}

/// Ensures a URL prefix starts with `/`; empty means [`DEFAULT_PREFIX`]
///
/// ```
/// use fsroute_router::normalize_prefix;
///
/// assert_eq!(normalize_prefix("api"), "/api");
/// assert_eq!(normalize_prefix("/mock"), "/mock");
/// assert_eq!(normalize_prefix(""), "/api");
/// ```
pub fn normalize_prefix(prefix: &str) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        DEFAULT_PREFIX.to_string()
    } else if prefix.starts_with('/') {
        prefix.to_string()
    } else {
        format!("/{}", prefix)
    }
}

/// POSIX-style join of root, directory and name
fn join_route(root: &str, dir: &str, name: &str) -> String {
    let joined = [root, dir, name]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    match normalize_pattern(&joined).as_ref() {
        "" => "/".to_string(),
        path if path.starts_with('/') => path.to_string(),
        path => format!("/{}", path),
    }
}

/// Splits on `sep`, ignoring separators inside `[...]`
fn split_outside_brackets(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}
