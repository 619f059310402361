// tests/support/mocks/post_repo.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use recruit_admin_core::domain::catalog::{EntityId, EntitySlug};
use recruit_admin_core::domain::errors::{DomainError, DomainResult};
use recruit_admin_core::domain::recruitment::{
    NewRecruitmentPost, PostContent, RecruitmentPost, RecruitmentPostRepository,
    RecruitmentPostUpdate,
};

#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<RecruitmentPost>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    inserts: AtomicUsize,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, slug: &str, content: PostContent) -> RecruitmentPost {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let post = RecruitmentPost {
            id: EntityId::new(id.to_string()).unwrap(),
            slug: EntitySlug::from_remote(slug).unwrap(),
            content,
            location_name: None,
            job_category_name: None,
            job_type_name: None,
            created_at: None,
            updated_at: None,
        };
        self.posts.lock().unwrap().push(post.clone());
        post
    }

    pub fn posts(&self) -> Vec<RecruitmentPost> {
        self.posts.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecruitmentPostRepository for InMemoryPostRepo {
    async fn list(&self) -> DomainResult<Vec<RecruitmentPost>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts())
    }

    async fn find_by_slug(&self, slug: &EntitySlug) -> DomainResult<Option<RecruitmentPost>> {
        Ok(self.posts().into_iter().find(|post| &post.slug == slug))
    }

    async fn insert(&self, post: NewRecruitmentPost) -> DomainResult<RecruitmentPost> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let slug = post.slug.as_str().to_string();
        Ok(self.seed(&slug, post.content))
    }

    async fn update(&self, update: RecruitmentPostUpdate) -> DomainResult<RecruitmentPost> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|post| post.id == update.id)
            .ok_or_else(|| DomainError::NotFound(format!("post {}", update.id)))?;
        post.slug = update.slug;
        post.content = update.content;
        Ok(post.clone())
    }

    async fn delete(&self, slug: &EntitySlug) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|post| &post.slug != slug);
        if posts.len() == before {
            return Err(DomainError::NotFound(format!("post '{slug}'")));
        }
        Ok(())
    }
}
