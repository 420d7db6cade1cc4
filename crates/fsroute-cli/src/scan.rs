use anyhow::{Context, Result};
use glob::Pattern;
use std::fmt;
use std::path::Path;
use walkdir::WalkDir;

/// Source files that can define a route, middleware or plugin
const INCLUDE: &[&str] = &["*.ts", "*.js"];

/// Test and declaration files living next to sources
const IGNORE: &[&str] = &[
    "*.spec.ts",
    "*.spec.js",
    "*.test.ts",
    "*.test.js",
    "*.d.ts",
    "*.d.js",
];

/// Sub-directory of the source dir, in load order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Plugins,
    Middleware,
    Routes,
}

impl FileKind {
    pub const LOAD_ORDER: [FileKind; 3] = [FileKind::Plugins, FileKind::Middleware, FileKind::Routes];

    pub fn dir_name(&self) -> &'static str {
        match self {
            FileKind::Plugins => "plugins",
            FileKind::Middleware => "middleware",
            FileKind::Routes => "routes",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Compiled include/ignore globs, matched against file names
struct FileFilter {
    include: Vec<Pattern>,
    ignore: Vec<Pattern>,
}

impl FileFilter {
    fn new() -> Result<Self> {
        let compile = |globs: &[&str]| -> Result<Vec<Pattern>> {
            globs
                .iter()
                .map(|g| Pattern::new(g).with_context(|| format!("Invalid glob: {}", g)))
                .collect()
        };

        Ok(Self {
            include: compile(INCLUDE)?,
            ignore: compile(IGNORE)?,
        })
    }

    fn accepts(&self, file_name: &str) -> bool {
        self.include.iter().any(|p| p.matches(file_name))
            && !self.ignore.iter().any(|p| p.matches(file_name))
    }
}

/// Lists source files of one kind under `src_dir`
///
/// Returns paths relative to `<src_dir>/<kind>`, `/`-separated and sorted.
/// A missing directory yields an empty list.
pub fn scan_dir(src_dir: &Path, kind: FileKind) -> Result<Vec<String>> {
    let dir = src_dir.join(kind.dir_name());
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "scan directory missing, skipping");
        return Ok(Vec::new());
    }

    let filter = FileFilter::new()?;
    let mut files = Vec::new();

    for entry in WalkDir::new(&dir).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !filter.accepts(&file_name) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&dir)
            .with_context(|| format!("{} is outside {}", entry.path().display(), dir.display()))?;

        files.push(
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
        );
    }

    files.sort();
    tracing::debug!(kind = %kind, count = files.len(), "scanned source files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export default () => ({})\n").unwrap();
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "routes/users/[id].get.ts");
        touch(dir.path(), "routes/users/index.post.js");
        touch(dir.path(), "routes/about.ts");
        touch(dir.path(), "routes/about.test.ts");
        touch(dir.path(), "routes/about.spec.js");
        touch(dir.path(), "routes/types.d.ts");
        touch(dir.path(), "routes/README.md");

        let files = scan_dir(dir.path(), FileKind::Routes).unwrap();
        assert_eq!(
            files,
            vec!["about.ts", "users/[id].get.ts", "users/index.post.js"]
        );
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_dir(dir.path(), FileKind::Plugins).unwrap().is_empty());
    }

    #[test]
    fn test_delete_method_is_not_declaration() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "routes/[id].delete.ts");
        assert_eq!(
            scan_dir(dir.path(), FileKind::Routes).unwrap(),
            vec!["[id].delete.ts"]
        );
    }

    #[test]
    fn test_load_order() {
        let names: Vec<&str> = FileKind::LOAD_ORDER.iter().map(|k| k.dir_name()).collect();
        assert_eq!(names, vec!["plugins", "middleware", "routes"]);
    }
}
