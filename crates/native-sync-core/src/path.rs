//! Root-relative path templates
//!
//! Source and target locations are declared as segment lists and only turned
//! into platform-native paths when resolved against a root directory.

use std::path::{Path, PathBuf};

/// A path fixed relative to the sync root, stored as ordered segments.
///
/// Displayed with forward slashes regardless of platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath {
    segments: Vec<String>,
}

impl RelativePath {
    /// Create a path from individual segments.
    ///
    /// Empty and `.` segments are dropped.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(Into::into)
            .filter(|s| !s.is_empty() && s != ".")
            .collect();
        Self { segments }
    }

    /// Parse a slash-separated template such as `"src-tauri/target/debug"`.
    ///
    /// Both `/` and `\` are accepted as separators.
    pub fn parse(template: &str) -> Self {
        Self::new(template.split(['/', '\\']))
    }

    /// Append a segment, returning the extended path.
    pub fn join(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(
            segment
                .split(['/', '\\'])
                .filter(|s| !s.is_empty() && *s != ".")
                .map(str::to_string),
        );
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The path without its last segment.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    /// Resolve against `root` into a platform-native path.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        path.extend(&self.segments);
        path
    }
}

impl std::fmt::Display for RelativePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Format `path` for output relative to `root`.
///
/// Falls back to the full path when `path` does not live under `root` or is
/// the root itself.
pub fn display_relative(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_drops_empty_and_dot_segments() {
        let path = RelativePath::parse("./src-tauri//resources/");
        assert_eq!(path.segments(), ["src-tauri", "resources"]);
    }

    #[test]
    fn parse_accepts_backslashes() {
        let path = RelativePath::parse(r"src-tauri\target\debug");
        assert_eq!(path.to_string(), "src-tauri/target/debug");
    }

    #[test]
    fn join_and_file_name() {
        let path = RelativePath::parse("src-tauri").join("target/release");
        assert_eq!(path.file_name(), Some("release"));
        assert_eq!(path.parent().unwrap().to_string(), "src-tauri/target");
    }

    #[test]
    fn resolve_appends_segments_to_root() {
        let path = RelativePath::parse("a/b/lib.dll");
        let resolved = path.resolve(Path::new("/tmp/root"));
        assert_eq!(resolved, Path::new("/tmp/root").join("a").join("b").join("lib.dll"));
    }

    #[test]
    fn display_relative_strips_root() {
        let root = Path::new("/work/app");
        let target = root.join("src-tauri").join("target").join("debug");
        assert_eq!(display_relative(root, &target), "src-tauri/target/debug");
    }

    #[test]
    fn display_relative_falls_back_to_full_path() {
        let root = Path::new("/work/app");
        let outside = Path::new("/elsewhere/lib.dll");
        assert_eq!(display_relative(root, outside), outside.display().to_string());
        assert_eq!(display_relative(root, root), root.display().to_string());
    }
}
