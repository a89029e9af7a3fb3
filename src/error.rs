use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Every way the posts document can fail to load. The controller treats all of
/// them as the same "load failed" outcome; the variants only feed the logs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("GET {url} failed")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} failed with status {status}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error("read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse posts document")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid page size `{0}`: expected a positive integer or `all`")]
pub struct ParsePageSizeError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_display() {
        let url = Url::parse("https://blog.example.com/blog-posts.json").unwrap();
        let err = LoadError::Status {
            url,
            status: reqwest::StatusCode::NOT_FOUND,
        };
        let display = err.to_string();
        assert!(display.contains("blog-posts.json"));
        assert!(display.contains("404"));

        let err = LoadError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "read missing.json");
    }
}
