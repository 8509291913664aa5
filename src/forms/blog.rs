use serde::Deserialize;
use validator::Validate;

use crate::domain::blog::{BlogPostPatch, NewBlogPost};
use crate::domain::types::{BlogPostSlug, BlogPostTitle};
use crate::forms::{FormError, map_opt};

/// Trim tags and drop the empty ones.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddBlogPostForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TryFrom<AddBlogPostForm> for NewBlogPost {
    type Error = FormError;

    fn try_from(value: AddBlogPostForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: BlogPostTitle::new(value.title)?,
            slug: BlogPostSlug::new(value.slug)?,
            content: value.content,
            excerpt: value.excerpt,
            image_url: value.image_url,
            author: value.author,
            category: value.category.trim().to_string(),
            tags: normalize_tags(value.tags),
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBlogPostForm {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub slug: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    #[validate(length(min = 1))]
    pub author: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl TryFrom<UpdateBlogPostForm> for BlogPostPatch {
    type Error = FormError;

    fn try_from(value: UpdateBlogPostForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: map_opt(value.title, BlogPostTitle::new)?,
            slug: map_opt(value.slug, BlogPostSlug::new)?,
            content: value.content,
            excerpt: value.excerpt,
            image_url: value.image_url,
            author: value.author,
            category: value.category.map(|c| c.trim().to_string()),
            tags: value.tags.map(normalize_tags),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_trimmed_and_blank_ones_dropped() {
        let form: AddBlogPostForm = serde_json::from_str(
            r#"{"title":"Hello","slug":"hello","content":"c","excerpt":"e","imageUrl":"",
                "author":"Staff","category":"News","tags":[" rust ",""," web"]}"#,
        )
        .unwrap();
        let post: NewBlogPost = form.try_into().unwrap();
        assert_eq!(post.tags, vec!["rust".to_string(), "web".to_string()]);
    }

    #[test]
    fn tags_default_to_empty() {
        let form: AddBlogPostForm = serde_json::from_str(
            r#"{"title":"Hello","slug":"hello","content":"c","excerpt":"e","imageUrl":"",
                "author":"Staff","category":"News"}"#,
        )
        .unwrap();
        let post: NewBlogPost = form.try_into().unwrap();
        assert!(post.tags.is_empty());
    }
}
