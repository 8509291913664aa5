use crate::domain::auth::AuthenticatedUser;
use crate::domain::blog::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::domain::types::BlogPostId;
use crate::repository::{BlogPostListQuery, BlogPostReader, BlogPostWriter};

use super::{ServiceError, ServiceResult, deleted_or_not_found, ensure_admin};

pub fn list_blog_posts<R>(query: BlogPostListQuery, repo: &R) -> ServiceResult<Vec<BlogPost>>
where
    R: BlogPostReader,
{
    Ok(repo.list_blog_posts(query)?)
}

pub fn get_blog_post<R>(id: BlogPostId, repo: &R) -> ServiceResult<BlogPost>
where
    R: BlogPostReader,
{
    repo.get_blog_post_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn get_blog_post_by_slug<R>(slug: &str, repo: &R) -> ServiceResult<BlogPost>
where
    R: BlogPostReader,
{
    repo.get_blog_post_by_slug(slug)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_blog_post<R>(
    payload: NewBlogPost,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<BlogPost>
where
    R: BlogPostWriter,
{
    ensure_admin(user)?;
    let post = repo.create_blog_post(&payload)?;
    log::info!("Blog post '{}' published by {}", post.slug, user.username);
    Ok(post)
}

pub fn update_blog_post<R>(
    id: BlogPostId,
    patch: BlogPostPatch,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<BlogPost>
where
    R: BlogPostWriter,
{
    ensure_admin(user)?;
    repo.update_blog_post(id, patch)?
        .ok_or(ServiceError::NotFound)
}

pub fn delete_blog_post<R>(id: BlogPostId, user: &AuthenticatedUser, repo: &R) -> ServiceResult<()>
where
    R: BlogPostWriter,
{
    ensure_admin(user)?;
    deleted_or_not_found(repo.delete_blog_post(id)?)
}
