use serde::{Deserialize, Serialize};

/// One entry of the posts document. Identity is the slug.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostSummary {
    pub title: String,
    /// Already formatted for display.
    pub date: String,
    pub excerpt: String,
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct PostsDocument {
    pub posts: Vec<PostSummary>,
}
