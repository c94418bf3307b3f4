use crate::data;
use portfolio_common::model::{
    Id,
    certification::Certification,
    post::{Post, PostMarker},
};
use tracing::debug;

pub const RELATED_POSTS_LIMIT: usize = 3;

/// Read-only post and certification catalog, built once at startup.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Catalog {
    posts: Vec<Post>,
    certifications: Vec<Certification>,
}

impl Catalog {
    #[must_use]
    pub fn new(posts: Vec<Post>, certifications: Vec<Certification>) -> Self {
        Self {
            posts,
            certifications,
        }
    }

    /// The catalog that ships with the site.
    #[must_use]
    pub fn builtin() -> Self {
        let catalog = Self::new(data::posts(), data::certifications());
        debug!(
            posts = catalog.posts.len(),
            certifications = catalog.certifications.len(),
            "Loaded catalog"
        );

        catalog
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    #[must_use]
    pub fn fetch_post(&self, post_id: Id<PostMarker>) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == post_id)
    }

    /// Up to [`RELATED_POSTS_LIMIT`] other posts of the same category, in catalog order.
    #[must_use]
    pub fn related_posts(&self, post: &Post) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|other| other.category == post.category && other.id != post.id)
            .take(RELATED_POSTS_LIMIT)
            .collect()
    }
}
