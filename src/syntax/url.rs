//! Minimal URL shape recognition.
//! `scheme://host/path` is a remote object URL (always `/`-separated); anything
//! else is a local filesystem path using the platform separator.

use std::path::MAIN_SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientUrl {
    Local {
        path: String,
    },
    Remote {
        scheme: String,
        host: String,
        /// Everything after the host, including the leading `/` (may be empty).
        path: String,
    },
}

impl ClientUrl {
    pub fn parse(raw: &str) -> Self {
        if let Some((scheme, rest)) = raw.split_once("://")
            && !scheme.is_empty()
            && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        {
            let (host, path) = match rest.find('/') {
                Some(idx) => (&rest[..idx], &rest[idx..]),
                None => (rest, ""),
            };
            return ClientUrl::Remote {
                scheme: scheme.to_string(),
                host: host.to_string(),
                path: path.to_string(),
            };
        }
        ClientUrl::Local {
            path: raw.to_string(),
        }
    }

    pub fn separator(&self) -> char {
        match self {
            ClientUrl::Local { .. } => MAIN_SEPARATOR,
            ClientUrl::Remote { .. } => '/',
        }
    }

    /// A remote URL must name at least a bucket after the host. Local paths always pass.
    pub fn names_bucket(&self) -> bool {
        match self {
            ClientUrl::Local { .. } => true,
            ClientUrl::Remote { host, path, .. } => {
                host.is_empty() || !path.trim_matches('/').is_empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_url_splits_host_and_path() {
        let u = ClientUrl::parse("https://play.example.com/bucket/dir/obj");
        assert_eq!(
            u,
            ClientUrl::Remote {
                scheme: "https".into(),
                host: "play.example.com".into(),
                path: "/bucket/dir/obj".into(),
            }
        );
        assert_eq!(u.separator(), '/');
    }

    #[test]
    fn plain_path_is_local() {
        let u = ClientUrl::parse("/var/data/file.txt");
        assert!(matches!(u, ClientUrl::Local { .. }));
        assert!(u.names_bucket());
    }

    #[test]
    fn remote_without_bucket() {
        assert!(!ClientUrl::parse("s3://host").names_bucket());
        assert!(!ClientUrl::parse("s3://host/").names_bucket());
        assert!(ClientUrl::parse("s3://host/bucket").names_bucket());
    }

    #[test]
    fn colon_in_local_path_is_not_a_scheme() {
        assert!(matches!(ClientUrl::parse("weird name://x"), ClientUrl::Local { .. }));
    }
}
