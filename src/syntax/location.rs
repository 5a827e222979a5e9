//! Stat-resolved locations.
//! A Location is a fact sheet about one argument: what the user typed, what the
//! stat collaborator found there, and a normalized form for containment checks.

use super::url::ClientUrl;

/// What exists at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Missing,
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    raw: String,
    kind: Kind,
    separator: char,
    normalized: String,
}

impl Location {
    /// Build from the raw argument; the separator follows the URL form.
    pub fn new(raw: impl Into<String>, kind: Kind) -> Self {
        let raw = raw.into();
        let url = ClientUrl::parse(&raw);
        let separator = url.separator();
        let normalized = match &url {
            ClientUrl::Local { path } => normalize(path, separator),
            ClientUrl::Remote { scheme, host, path } => {
                let path = if path.is_empty() { "/" } else { path.as_str() };
                format!("{scheme}://{host}{}", normalize(path, '/'))
            }
        };
        Self {
            raw,
            kind,
            separator,
            normalized,
        }
    }

    /// Build with an explicit separator (object stores with custom delimiters, tests).
    pub fn with_separator(raw: impl Into<String>, kind: Kind, separator: char) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw, separator);
        Self {
            raw,
            kind,
            separator,
            normalized,
        }
    }

    /// Replace the lexical normalization with a resolved one (e.g. a canonical path).
    pub fn with_normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized = normalized.into();
        self
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn exists(&self) -> bool {
        self.kind != Kind::Missing
    }

    pub fn is_dir(&self) -> bool {
        self.kind == Kind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == Kind::File
    }
}

/// Lexically clean a separator-delimited path: collapse repeated separators, drop `.`
/// segments and resolve `..` against the preceding segment. Never pops past the root.
/// Relative results keep a leading `.` segment so every relative path shares the
/// current directory as a common base (`sub` and `./sub` both become `./sub`).
pub fn normalize(path: &str, separator: char) -> String {
    let path = if separator != '/' {
        path.replace('/', &separator.to_string())
    } else {
        path.to_string()
    };
    let absolute = path.starts_with(separator);
    // `C:\...` is rooted at its drive.
    let drive = separator == '\\'
        && path
            .split(separator)
            .next()
            .is_some_and(|first| first.len() == 2 && first.ends_with(':'));

    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split(separator) {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." && !(drive && parts.len() == 1) => {
                    parts.pop();
                }
                _ if absolute || drive => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let sep = separator.to_string();
    let joined = parts.join(&sep);
    if absolute {
        format!("{separator}{joined}")
    } else if drive || parts.first() == Some(&"..") {
        joined
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        format!(".{separator}{joined}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_and_resolves() {
        assert_eq!(normalize("/a//b/./c/", '/'), "/a/b/c");
        assert_eq!(normalize("/a/b/../c", '/'), "/a/c");
        assert_eq!(normalize("/../a", '/'), "/a");
        assert_eq!(normalize("../a/..", '/'), "..");
        assert_eq!(normalize("./", '/'), ".");
        assert_eq!(normalize("/", '/'), "/");
    }

    #[test]
    fn relative_paths_share_the_current_directory_base() {
        assert_eq!(normalize(".", '/'), ".");
        assert_eq!(normalize("./sub", '/'), "./sub");
        assert_eq!(normalize("sub", '/'), "./sub");
        assert_eq!(normalize("a/../b/", '/'), "./b");
        assert_eq!(normalize("../x", '/'), "../x");
        assert_eq!(normalize(r"dir\x", '\\'), r".\dir\x");
    }

    #[test]
    fn normalize_with_backslash_separator() {
        assert_eq!(normalize(r"C:\data\.\logs\", '\\'), r"C:\data\logs");
        assert_eq!(normalize("C:/data/logs", '\\'), r"C:\data\logs");
        assert_eq!(normalize(r"C:\..\data", '\\'), r"C:\data");
    }

    #[test]
    fn remote_location_keeps_scheme_intact() {
        let loc = Location::new("s3://host/bucket//dir/./obj", Kind::File);
        assert_eq!(loc.normalized(), "s3://host/bucket/dir/obj");
        assert_eq!(loc.separator(), '/');
        assert!(loc.exists());
    }

    #[test]
    fn missing_location_does_not_exist() {
        let loc = Location::with_separator("/nowhere", Kind::Missing, '/');
        assert!(!loc.exists());
        assert!(!loc.is_dir());
        assert!(!loc.is_file());
    }
}
