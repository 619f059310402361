// src/domain/slug/mod.rs
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::util::SlugGenerator;
use crate::domain::catalog::{CatalogKind, CatalogRepository, EntitySlug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::recruitment::RecruitmentPostRepository;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

/// Used when a name normalises to nothing (punctuation only, emoji, ...).
const FALLBACK_BASE: &str = "item";

/// Answers "is this slug already taken?" against some collection.
#[async_trait]
pub trait SlugProbe: Send + Sync {
    async fn slug_exists(&self, candidate: &EntitySlug) -> DomainResult<bool>;
}

/// Adapts an async closure into a [`SlugProbe`].
pub struct ProbeFn<F>(pub F);

#[async_trait]
impl<F, Fut> SlugProbe for ProbeFn<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = DomainResult<bool>> + Send,
{
    async fn slug_exists(&self, candidate: &EntitySlug) -> DomainResult<bool> {
        (self.0)(candidate.as_str().to_string()).await
    }
}

/// Probes one catalog collection through its repository.
pub struct CatalogSlugProbe<'a> {
    repo: &'a dyn CatalogRepository,
    kind: CatalogKind,
}

impl<'a> CatalogSlugProbe<'a> {
    pub fn new(repo: &'a dyn CatalogRepository, kind: CatalogKind) -> Self {
        Self { repo, kind }
    }
}

#[async_trait]
impl SlugProbe for CatalogSlugProbe<'_> {
    async fn slug_exists(&self, candidate: &EntitySlug) -> DomainResult<bool> {
        self.repo.slug_exists(self.kind, candidate).await
    }
}

/// Probes the recruitment post collection.
pub struct PostSlugProbe<'a> {
    repo: &'a dyn RecruitmentPostRepository,
}

impl<'a> PostSlugProbe<'a> {
    pub fn new(repo: &'a dyn RecruitmentPostRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SlugProbe for PostSlugProbe<'_> {
    async fn slug_exists(&self, candidate: &EntitySlug) -> DomainResult<bool> {
        Ok(self.repo.find_by_slug(candidate).await?.is_some())
    }
}

struct ExceptOwnSlug<'a> {
    inner: &'a dyn SlugProbe,
    own: &'a EntitySlug,
}

#[async_trait]
impl SlugProbe for ExceptOwnSlug<'_> {
    async fn slug_exists(&self, candidate: &EntitySlug) -> DomainResult<bool> {
        if candidate == self.own {
            return Ok(false);
        }
        self.inner.slug_exists(candidate).await
    }
}

/// Domain service producing collision-free slugs.
///
/// Candidates are `base`, `base-2`, `base-3`, ... and the search stops after
/// `max_attempts` probes. Uniqueness is best effort: two concurrent callers
/// can both see a candidate as free.
pub struct SlugService {
    generator: Arc<dyn SlugGenerator>,
    max_attempts: u32,
}

impl SlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, max_attempts: u32) -> Self {
        Self {
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_slug(&self, name: &str) -> DomainResult<EntitySlug> {
        let normalised = self.generator.slugify(name);
        EntitySlug::new(normalised).or_else(|_| EntitySlug::new(FALLBACK_BASE))
    }

    pub async fn generate_unique_slug(
        &self,
        name: &str,
        probe: &dyn SlugProbe,
    ) -> DomainResult<EntitySlug> {
        let base = self.base_slug(name)?;

        for attempt in 1..=self.max_attempts {
            let candidate = if attempt == 1 {
                base.clone()
            } else {
                EntitySlug::new(format!("{base}-{attempt}"))?
            };

            let taken = probe
                .slug_exists(&candidate)
                .await
                .map_err(|err| DomainError::SlugProbe(err.to_string()))?;

            if !taken {
                return Ok(candidate);
            }
            tracing::debug!(candidate = %candidate, attempt, "slug taken");
        }

        tracing::warn!(base = %base, attempts = self.max_attempts, "slug candidates exhausted");
        Err(DomainError::SlugExhausted {
            base: base.into(),
            attempts: self.max_attempts,
        })
    }

    /// Keeps `current_slug` when the display name is unchanged, otherwise
    /// probes for a new one. The record's own slug never counts as taken.
    pub async fn slug_for_rename(
        &self,
        current_name: &str,
        current_slug: &EntitySlug,
        new_name: &str,
        probe: &dyn SlugProbe,
    ) -> DomainResult<EntitySlug> {
        if current_name.trim() == new_name.trim() {
            return Ok(current_slug.clone());
        }
        let probe = ExceptOwnSlug {
            inner: probe,
            own: current_slug,
        };
        self.generate_unique_slug(new_name, &probe).await
    }
}
