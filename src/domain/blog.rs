use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BlogPostId, BlogPostSlug, BlogPostTitle};

/// Blog article. `published_at` is stamped by the store on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: BlogPostTitle,
    pub slug: BlogPostSlug,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub published_at: NaiveDateTime,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: BlogPostTitle,
    pub slug: BlogPostSlug,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl NewBlogPost {
    pub fn into_blog_post(self, id: BlogPostId, published_at: NaiveDateTime) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            excerpt: self.excerpt,
            image_url: self.image_url,
            published_at,
            author: self.author,
            category: self.category,
            tags: self.tags,
        }
    }
}

/// Partial update for a [`BlogPost`]. `published_at` is not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostPatch {
    pub title: Option<BlogPostTitle>,
    pub slug: Option<BlogPostSlug>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl BlogPostPatch {
    pub fn apply_to(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(slug) = self.slug {
            post.slug = slug;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(image_url) = self.image_url {
            post.image_url = image_url;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
    }
}
