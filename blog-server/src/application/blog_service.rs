use crate::data::post_repository::PostRepository;
use crate::domain::post::{CreatePostRequest, PostResponse, UpdatePostRequest};
use crate::domain::DomainError;
use std::sync::Arc;

pub const POSTS_PER_PAGE: i64 = 10;

pub struct BlogService {
    post_repo: Arc<dyn PostRepository + Send + Sync>,
}

impl BlogService {
    pub fn new(post_repo: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { post_repo }
    }

    pub async fn create_post(&self, req: CreatePostRequest) -> Result<PostResponse, DomainError> {
        if req.title.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if req.body.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Body cannot be empty".to_string(),
            ));
        }

        let post = self.post_repo.create(req).await?;

        tracing::info!("Post created: id={}", post.id);

        Ok(PostResponse::from(post))
    }

    pub async fn get_post(&self, id: i64) -> Result<PostResponse, DomainError> {
        let post = self.post_repo.find_by_id(id).await?;
        Ok(PostResponse::from(post))
    }

    pub async fn update_post(
        &self,
        id: i64,
        req: UpdatePostRequest,
    ) -> Result<PostResponse, DomainError> {
        let updated = self.post_repo.update(id, req).await?;

        tracing::info!("Post updated: id={}", id);

        Ok(PostResponse::from(updated))
    }

    /// No existence check by design: deleting an already-deleted id is
    /// still a success, so the operation is idempotent for clients.
    pub async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        self.post_repo.delete(id).await?;

        tracing::info!("Post deleted: id={}", id);

        Ok(())
    }

    /// Returns one page of summarized posts (bodies truncated for the
    /// list view) together with the number of the last page,
    /// `ceil(total / 10)`.
    pub async fn list_posts(
        &self,
        page: i64,
        tag: Option<&str>,
    ) -> Result<(Vec<PostResponse>, i64), DomainError> {
        if page < 1 {
            return Err(DomainError::ValidationError(
                "Page must be 1 or greater".to_string(),
            ));
        }

        // Huge page numbers are well-formed input; on offset overflow the
        // page is simply past the end, so clamp instead of wrapping.
        let offset = (page - 1)
            .checked_mul(POSTS_PER_PAGE)
            .unwrap_or(i64::MAX);
        let (posts, total) = self.post_repo.list(POSTS_PER_PAGE, offset, tag).await?;

        let last_page = (total + POSTS_PER_PAGE - 1) / POSTS_PER_PAGE;
        let summaries = posts.into_iter().map(PostResponse::summarized).collect();

        Ok((summaries, last_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory_repository::MemoryPostRepository;

    fn service() -> BlogService {
        BlogService::new(Arc::new(MemoryPostRepository::new()))
    }

    fn create_req(title: &str, body: &str, tags: &[&str]) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            body: body.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_the_same_post() {
        let service = service();

        let created = service
            .create_post(create_req("A", "B", &["x"]))
            .await
            .unwrap();

        let fetched = service.get_post(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "A");
        assert_eq!(fetched.body, "B");
        assert_eq!(fetched.tags, vec!["x".to_string()]);
    }

    #[tokio::test]
    async fn create_rejects_blank_title_and_persists_nothing() {
        let service = service();

        let err = service
            .create_post(create_req("   ", "body", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));

        let (posts, last_page) = service.list_posts(1, None).await.unwrap();
        assert!(posts.is_empty());
        assert_eq!(last_page, 0);
    }

    #[tokio::test]
    async fn create_rejects_blank_body() {
        let service = service();

        let err = service
            .create_post(create_req("title", "", &["x"]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn create_allows_an_empty_tag_list() {
        let service = service();

        let created = service
            .create_post(create_req("title", "body", &[]))
            .await
            .unwrap();
        assert!(created.tags.is_empty());
    }

    #[tokio::test]
    async fn list_paginates_ten_per_page_newest_first() {
        let service = service();
        for i in 1..=25 {
            service
                .create_post(create_req(&format!("post {}", i), "body", &[]))
                .await
                .unwrap();
        }

        let (page1, last_page) = service.list_posts(1, None).await.unwrap();
        assert_eq!(last_page, 3);
        assert_eq!(page1.len(), 10);
        let ids: Vec<i64> = page1.iter().map(|p| p.id).collect();
        assert_eq!(ids, (16..=25).rev().collect::<Vec<i64>>());

        let (page2, _) = service.list_posts(2, None).await.unwrap();
        let ids: Vec<i64> = page2.iter().map(|p| p.id).collect();
        assert_eq!(ids, (6..=15).rev().collect::<Vec<i64>>());

        let (page3, _) = service.list_posts(3, None).await.unwrap();
        assert_eq!(page3.len(), 5);
    }

    #[tokio::test]
    async fn list_returns_an_empty_page_for_extreme_page_values() {
        let service = service();
        service
            .create_post(create_req("only", "body", &[]))
            .await
            .unwrap();

        let (posts, last_page) = service.list_posts(i64::MAX, None).await.unwrap();
        assert!(posts.is_empty());
        assert_eq!(last_page, 1);
    }

    #[tokio::test]
    async fn list_rejects_page_below_one() {
        let service = service();

        let err = service.list_posts(0, None).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));

        let err = service.list_posts(-3, None).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn list_truncates_long_bodies_only() {
        let service = service();
        service
            .create_post(create_req("long", &"x".repeat(300), &[]))
            .await
            .unwrap();
        service
            .create_post(create_req("short", &"y".repeat(200), &[]))
            .await
            .unwrap();

        let (posts, _) = service.list_posts(1, None).await.unwrap();

        // Newest first: the short post was created second.
        assert_eq!(posts[0].title, "short");
        assert_eq!(posts[0].body, "y".repeat(200));

        assert_eq!(posts[1].title, "long");
        assert_eq!(posts[1].body, format!("{}...", "x".repeat(200)));
    }

    #[tokio::test]
    async fn list_filters_by_tag() {
        let service = service();
        service
            .create_post(create_req("rust post", "body", &["rust", "web"]))
            .await
            .unwrap();
        service
            .create_post(create_req("cooking post", "body", &["cooking"]))
            .await
            .unwrap();

        let (posts, last_page) = service.list_posts(1, Some("rust")).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "rust post");
        assert_eq!(last_page, 1);

        let (posts, _) = service.list_posts(1, Some("missing")).await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let service = service();

        let err = service.get_post(999).await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound));
    }

    #[tokio::test]
    async fn update_merges_fields_and_returns_new_state() {
        let service = service();
        let created = service
            .create_post(create_req("old title", "old body", &["a"]))
            .await
            .unwrap();

        let updated = service
            .update_post(
                created.id,
                UpdatePostRequest {
                    title: Some("new title".to_string()),
                    body: None,
                    tags: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "new title");
        assert_eq!(updated.body, "old body");
        assert_eq!(updated.tags, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let service = service();

        let err = service
            .update_post(
                42,
                UpdatePostRequest {
                    title: Some("t".to_string()),
                    body: None,
                    tags: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let service = service();
        let created = service
            .create_post(create_req("t", "b", &[]))
            .await
            .unwrap();

        service.delete_post(created.id).await.unwrap();
        let err = service.get_post(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound));

        // Second delete of the same id still succeeds.
        service.delete_post(created.id).await.unwrap();
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let service = service();
        service.create_post(create_req("a", "b", &[])).await.unwrap();
        let second = service.create_post(create_req("c", "d", &[])).await.unwrap();

        service.delete_post(second.id).await.unwrap();
        let third = service.create_post(create_req("e", "f", &[])).await.unwrap();

        assert!(third.id > second.id);
    }
}
