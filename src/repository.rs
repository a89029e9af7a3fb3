use std::path::PathBuf;

use url::Url;

use crate::error::LoadError;
use crate::fetcher::Fetcher;
use crate::post::{PostSummary, PostsDocument};

#[derive(Debug, Clone)]
pub enum PostSource {
    Remote(Url),
    Local(PathBuf),
}

impl PostSource {
    /// `http(s)://` URLs are fetched; anything else names a file.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            if let Ok(url) = Url::parse(raw.trim()) {
                return PostSource::Remote(url);
            }
        }
        PostSource::Local(PathBuf::from(raw))
    }

    /// Storage scope for preferences: the URL origin, or the directory holding
    /// the local file.
    pub fn origin(&self) -> String {
        match self {
            PostSource::Remote(url) => url.origin().ascii_serialization(),
            PostSource::Local(path) => {
                let dir = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."));
                let dir = dir.canonicalize().unwrap_or(dir);
                format!("file://{}", dir.display())
            }
        }
    }
}

pub struct PostRepository {
    source: PostSource,
    fetcher: Fetcher,
}

impl PostRepository {
    pub fn new(source: PostSource, fetcher: Fetcher) -> Self {
        Self { source, fetcher }
    }

    /// Loads the whole posts document once. No caching; each call reads again.
    pub async fn fetch_all(&self) -> Result<Vec<PostSummary>, LoadError> {
        let bytes = match &self.source {
            PostSource::Remote(url) => self.fetcher.get_bytes(url.clone()).await?.to_vec(),
            PostSource::Local(path) => std::fs::read(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?,
        };
        let document: PostsDocument = serde_json::from_slice(&bytes)?;
        tracing::debug!(count = document.posts.len(), "parsed posts document");
        Ok(document.posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kinds() {
        assert!(matches!(
            PostSource::parse("https://blog.example.com/blog-posts.json"),
            PostSource::Remote(_)
        ));
        assert!(matches!(
            PostSource::parse("blog-posts.json"),
            PostSource::Local(_)
        ));
    }

    #[test]
    fn remote_origin_drops_path() {
        let source = PostSource::parse("https://blog.example.com:8443/data/blog-posts.json");
        assert_eq!(source.origin(), "https://blog.example.com:8443");
    }

    #[tokio::test]
    async fn local_file_parse_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("blog-posts.json");
        std::fs::write(&path, "{ \"posts\": [ { \"title\": 1 } ] }").unwrap();

        let repo = PostRepository::new(PostSource::Local(path), Fetcher::new("test").unwrap());
        let err = repo.fetch_all().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn missing_local_file() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = PostRepository::new(
            PostSource::Local(tmp.path().join("nope.json")),
            Fetcher::new("test").unwrap(),
        );
        assert!(matches!(repo.fetch_all().await, Err(LoadError::Io { .. })));
    }
}
