use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use std::sync::Mutex;

use super::post_repository::PostRepository;

/// In-memory [`PostRepository`] used by the test suite. Ids come from a
/// counter that only moves forward, so a deleted id is never handed out
/// again, matching the Postgres sequence behavior.
pub struct MemoryPostRepository {
    state: Mutex<State>,
}

struct State {
    posts: Vec<Post>,
    next_id: i64,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, State>, DomainError> {
        self.state
            .lock()
            .map_err(|_| DomainError::InternalError("post store lock poisoned".to_string()))
    }
}

impl Default for MemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn create(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let mut state = self.lock()?;
        let post = Post {
            id: state.next_id,
            title: req.title,
            body: req.body,
            tags: req.tags,
        };
        state.next_id += 1;
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        let state = self.lock()?;
        state
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(DomainError::PostNotFound)
    }

    async fn update(&self, id: i64, req: UpdatePostRequest) -> Result<Post, DomainError> {
        let mut state = self.lock()?;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::PostNotFound)?;

        if let Some(title) = req.title {
            post.title = title;
        }
        if let Some(body) = req.body {
            post.body = body;
        }
        if let Some(tags) = req.tags {
            post.tags = tags;
        }

        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut state = self.lock()?;
        state.posts.retain(|p| p.id != id);
        Ok(())
    }

    async fn list(
        &self,
        limit: i64,
        offset: i64,
        tag: Option<&str>,
    ) -> Result<(Vec<Post>, i64), DomainError> {
        let state = self.lock()?;

        let mut matching: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| tag.map_or(true, |t| p.tags.iter().any(|pt| pt == t)))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.id.cmp(&a.id));

        let total = matching.len() as i64;
        let page: Vec<Post> = matching
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();

        Ok((page, total))
    }
}
