use chrono::Utc;

use crate::domain::blog::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::domain::types::{BlogPostId, BlogPostSlug};
use crate::repository::store::Store;
use crate::repository::{
    BlogPostListQuery, BlogPostReader, BlogPostWriter, MemoryRepository, RepositoryError,
    RepositoryResult, contains_ignore_case,
};

fn ensure_slug_available(
    store: &Store,
    slug: &BlogPostSlug,
    except: Option<BlogPostId>,
) -> RepositoryResult<()> {
    let taken = store
        .blog_posts
        .find(|p| p.slug == *slug && Some(p.id) != except)
        .is_some();
    if taken {
        return Err(RepositoryError::Conflict(format!("blog post slug '{slug}'")));
    }
    Ok(())
}

impl BlogPostReader for MemoryRepository {
    fn list_blog_posts(&self, query: BlogPostListQuery) -> RepositoryResult<Vec<BlogPost>> {
        let store = self.read()?;
        let category = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase);
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        Ok(store
            .blog_posts
            .values()
            .filter(|p| {
                category
                    .as_deref()
                    .is_none_or(|c| p.category.to_lowercase() == c)
            })
            .filter(|p| {
                search.as_deref().is_none_or(|s| {
                    contains_ignore_case(p.title.as_str(), s) || contains_ignore_case(&p.excerpt, s)
                })
            })
            .cloned()
            .collect())
    }

    fn get_blog_post_by_id(&self, id: BlogPostId) -> RepositoryResult<Option<BlogPost>> {
        let store = self.read()?;
        Ok(store.blog_posts.get(id.get()).cloned())
    }

    fn get_blog_post_by_slug(&self, slug: &str) -> RepositoryResult<Option<BlogPost>> {
        let store = self.read()?;
        Ok(store.blog_posts.find(|p| p.slug == slug).cloned())
    }
}

impl BlogPostWriter for MemoryRepository {
    fn create_blog_post(&self, post: &NewBlogPost) -> RepositoryResult<BlogPost> {
        let mut store = self.write()?;
        ensure_slug_available(&store, &post.slug, None)?;
        let published_at = Utc::now().naive_utc();
        store
            .blog_posts
            .insert_with(|id| Ok(post.clone().into_blog_post(BlogPostId::new(id)?, published_at)))
    }

    fn update_blog_post(
        &self,
        id: BlogPostId,
        patch: BlogPostPatch,
    ) -> RepositoryResult<Option<BlogPost>> {
        let mut store = self.write()?;
        if !store.blog_posts.contains(id.get()) {
            return Ok(None);
        }
        if let Some(slug) = &patch.slug {
            ensure_slug_available(&store, slug, Some(id))?;
        }
        let Some(post) = store.blog_posts.get_mut(id.get()) else {
            return Ok(None);
        };
        patch.apply_to(post);
        Ok(Some(post.clone()))
    }

    fn delete_blog_post(&self, id: BlogPostId) -> RepositoryResult<bool> {
        let mut store = self.write()?;
        Ok(store.blog_posts.remove(id.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::BlogPostTitle;

    fn new_post(title: &str, slug: &str, category: &str) -> NewBlogPost {
        NewBlogPost {
            title: BlogPostTitle::new(title).unwrap(),
            slug: BlogPostSlug::new(slug).unwrap(),
            content: "Body".into(),
            excerpt: format!("About {title}"),
            image_url: String::new(),
            author: "Staff".into(),
            category: category.into(),
            tags: vec!["news".into()],
        }
    }

    #[test]
    fn filters_by_category_and_search() {
        let repo = MemoryRepository::new();
        repo.create_blog_post(&new_post("Design trends", "design-trends", "Design"))
            .unwrap();
        repo.create_blog_post(&new_post("SEO basics", "seo-basics", "Marketing"))
            .unwrap();

        let design = repo
            .list_blog_posts(BlogPostListQuery::default().category("design"))
            .unwrap();
        assert_eq!(design.len(), 1);
        assert_eq!(design[0].slug, "design-trends");

        let seo = repo
            .list_blog_posts(BlogPostListQuery::default().search("SEO"))
            .unwrap();
        assert_eq!(seo.len(), 1);
        assert_eq!(seo[0].title, "SEO basics");
    }

    #[test]
    fn category_filter_folds_non_ascii_case() {
        let repo = MemoryRepository::new();
        repo.create_blog_post(&new_post("Cafe notes", "cafe-notes", "Éclairs"))
            .unwrap();
        repo.create_blog_post(&new_post("Straße", "strasse", "Öffnungszeiten"))
            .unwrap();

        let posts = repo
            .list_blog_posts(BlogPostListQuery::default().category("éCLAIRS"))
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "cafe-notes");

        let posts = repo
            .list_blog_posts(BlogPostListQuery::default().category(" ÖFFNUNGSZEITEN "))
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "strasse");
    }

    #[test]
    fn published_at_survives_updates() {
        let repo = MemoryRepository::new();
        let post = repo
            .create_blog_post(&new_post("Design trends", "design-trends", "Design"))
            .unwrap();

        let updated = repo
            .update_blog_post(
                post.id,
                BlogPostPatch {
                    content: Some("Rewritten".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.published_at, post.published_at);
        assert_eq!(updated.content, "Rewritten");
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let repo = MemoryRepository::new();
        repo.create_blog_post(&new_post("One", "same", "Design"))
            .unwrap();
        assert!(matches!(
            repo.create_blog_post(&new_post("Two", "same", "Design")),
            Err(RepositoryError::Conflict(_))
        ));
    }
}
