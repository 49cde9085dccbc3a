use serde::{Deserialize, Serialize};

/// Number of body characters kept in list views before the `...` marker.
pub const BODY_PREVIEW_LEN: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// All three fields are required; a payload missing any of them is
/// rejected at deserialization before the handler runs.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            tags: post.tags,
        }
    }
}

impl PostResponse {
    /// List-view shape: the body is cut at [`BODY_PREVIEW_LEN`] characters
    /// with a trailing `...`. Bodies at or under the limit come back
    /// verbatim. Counts characters, not bytes, so multi-byte text never
    /// splits mid-character.
    pub fn summarized(post: Post) -> Self {
        let body = if post.body.chars().count() <= BODY_PREVIEW_LEN {
            post.body
        } else {
            let mut preview: String = post.body.chars().take(BODY_PREVIEW_LEN).collect();
            preview.push_str("...");
            preview
        };

        Self {
            id: post.id,
            title: post.title,
            body,
            tags: post.tags,
        }
    }
}
