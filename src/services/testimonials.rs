use crate::domain::auth::AuthenticatedUser;
use crate::domain::testimonial::{NewTestimonial, Testimonial, TestimonialPatch};
use crate::domain::types::TestimonialId;
use crate::repository::{TestimonialReader, TestimonialWriter};

use super::{ServiceError, ServiceResult, deleted_or_not_found, ensure_admin};

pub fn list_testimonials<R>(repo: &R) -> ServiceResult<Vec<Testimonial>>
where
    R: TestimonialReader,
{
    Ok(repo.list_testimonials()?)
}

pub fn get_testimonial<R>(id: TestimonialId, repo: &R) -> ServiceResult<Testimonial>
where
    R: TestimonialReader,
{
    repo.get_testimonial_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_testimonial<R>(
    payload: NewTestimonial,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Testimonial>
where
    R: TestimonialWriter,
{
    ensure_admin(user)?;
    Ok(repo.create_testimonial(&payload)?)
}

pub fn update_testimonial<R>(
    id: TestimonialId,
    patch: TestimonialPatch,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Testimonial>
where
    R: TestimonialWriter,
{
    ensure_admin(user)?;
    repo.update_testimonial(id, patch)?
        .ok_or(ServiceError::NotFound)
}

pub fn delete_testimonial<R>(
    id: TestimonialId,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<()>
where
    R: TestimonialWriter,
{
    ensure_admin(user)?;
    deleted_or_not_found(repo.delete_testimonial(id)?)
}
