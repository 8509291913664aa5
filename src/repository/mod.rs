use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::blog::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::domain::category::{Category, CategoryPatch, NewCategory};
use crate::domain::class::{Class, ClassPatch, ClassWithDetails, NewClass};
use crate::domain::location::{Location, LocationPatch, NewLocation};
use crate::domain::message::{Message, NewMessage};
use crate::domain::portfolio::{NewPortfolioItem, PortfolioItem, PortfolioItemPatch, PortfolioItemWithService};
use crate::domain::service::{NewService, Service, ServicePatch};
use crate::domain::team::{NewTeamMember, TeamMember, TeamMemberPatch};
use crate::domain::testimonial::{NewTestimonial, Testimonial, TestimonialPatch};
use crate::domain::types::{
    BlogPostId, CategoryId, ClassId, LocationId, MessageId, PortfolioItemId, ServiceId,
    SpotCount, TeamMemberId, TestimonialId, UserId,
};
use crate::domain::user::{NewUser, User};

pub mod blog;
pub mod category;
pub mod class;
mod enrich;
pub mod errors;
pub mod location;
pub mod message;
pub mod portfolio;
pub mod service;
mod store;
pub mod team;
pub mod testimonial;
pub mod user;

pub use errors::{RepositoryError, RepositoryResult};

use store::Store;

/// In-memory repository holding every table of the site.
///
/// Cloning is cheap and every clone shares the same tables, so one instance
/// built at startup can be handed to all HTTP workers. Each trait method takes
/// the lock once for its whole duration, which makes a single call atomic with
/// respect to other requests.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl MemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Store>> {
        self.store.read().map_err(|_| RepositoryError::LockPoisoned)
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Store>> {
        self.store.write().map_err(|_| RepositoryError::LockPoisoned)
    }
}

/// Case-insensitive substring match used by the text searches.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lowercase: &str) -> bool {
    haystack.to_lowercase().contains(needle_lowercase)
}

/// Query parameters used when listing classes.
///
/// Every filter is optional; the ones that are set must all match.
#[derive(Debug, Clone, Default)]
pub struct ClassListQuery {
    /// Only classes in this category.
    pub category_id: Option<CategoryId>,
    /// Only classes held at this location.
    pub location_id: Option<LocationId>,
    /// Case-insensitive substring of the title or description.
    pub search: Option<String>,
}

impl ClassListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn location(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Query parameters used when listing portfolio items.
#[derive(Debug, Clone, Default)]
pub struct PortfolioListQuery {
    /// Only items showcasing this service.
    pub service_id: Option<ServiceId>,
}

impl PortfolioListQuery {
    pub fn service(mut self, service_id: ServiceId) -> Self {
        self.service_id = Some(service_id);
        self
    }
}

/// Query parameters used when listing blog posts.
#[derive(Debug, Clone, Default)]
pub struct BlogPostListQuery {
    /// Case-insensitive category name.
    pub category: Option<String>,
    /// Case-insensitive substring of the title or excerpt.
    pub search: Option<String>,
}

impl BlogPostListQuery {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Read-only operations for user accounts.
pub trait UserReader {
    /// Retrieve a user by id.
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    /// Retrieve a user by exact username.
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations for user accounts.
pub trait UserWriter {
    /// Persist a new user. Usernames are unique.
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User>;
}

/// Read-only operations for class categories.
pub trait CategoryReader {
    /// List all categories in insertion order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by id.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for class categories.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Merge `patch` onto the stored category.
    fn update_category(
        &self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> RepositoryResult<Option<Category>>;
    /// Delete a category. Classes that still reference it are left untouched.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<bool>;
}

/// Read-only operations for class locations.
pub trait LocationReader {
    fn list_locations(&self) -> RepositoryResult<Vec<Location>>;
    fn get_location_by_id(&self, id: LocationId) -> RepositoryResult<Option<Location>>;
}

/// Write operations for class locations.
pub trait LocationWriter {
    fn create_location(&self, location: &NewLocation) -> RepositoryResult<Location>;
    fn update_location(
        &self,
        id: LocationId,
        patch: LocationPatch,
    ) -> RepositoryResult<Option<Location>>;
    fn delete_location(&self, id: LocationId) -> RepositoryResult<bool>;
}

/// Read-only operations for classes. Results carry their category and location.
pub trait ClassReader {
    /// List classes matching the supplied query.
    fn list_classes(&self, query: ClassListQuery) -> RepositoryResult<Vec<ClassWithDetails>>;
    /// Retrieve a class by id.
    fn get_class_by_id(&self, id: ClassId) -> RepositoryResult<Option<ClassWithDetails>>;
}

/// Write operations for classes.
pub trait ClassWriter {
    /// Persist a new class. Its category and location must exist.
    fn create_class(&self, class: &NewClass) -> RepositoryResult<Class>;
    /// Merge `patch` onto the stored class.
    fn update_class(&self, id: ClassId, patch: ClassPatch) -> RepositoryResult<Option<Class>>;
    /// Overwrite only the number of available spots.
    fn update_class_availability(
        &self,
        id: ClassId,
        available_spots: SpotCount,
    ) -> RepositoryResult<Option<Class>>;
    /// Delete a class.
    fn delete_class(&self, id: ClassId) -> RepositoryResult<bool>;
}

/// Read-only operations for services.
pub trait ServiceReader {
    fn list_services(&self) -> RepositoryResult<Vec<Service>>;
    fn get_service_by_id(&self, id: ServiceId) -> RepositoryResult<Option<Service>>;
    /// Retrieve a service by its slug.
    fn get_service_by_slug(&self, slug: &str) -> RepositoryResult<Option<Service>>;
}

/// Write operations for services. Slugs are unique.
pub trait ServiceWriter {
    fn create_service(&self, service: &NewService) -> RepositoryResult<Service>;
    fn update_service(
        &self,
        id: ServiceId,
        patch: ServicePatch,
    ) -> RepositoryResult<Option<Service>>;
    fn delete_service(&self, id: ServiceId) -> RepositoryResult<bool>;
}

/// Read-only operations for portfolio items. Results carry their service.
pub trait PortfolioReader {
    fn list_portfolio_items(
        &self,
        query: PortfolioListQuery,
    ) -> RepositoryResult<Vec<PortfolioItemWithService>>;
    fn get_portfolio_item_by_id(
        &self,
        id: PortfolioItemId,
    ) -> RepositoryResult<Option<PortfolioItemWithService>>;
}

/// Write operations for portfolio items.
pub trait PortfolioWriter {
    fn create_portfolio_item(&self, item: &NewPortfolioItem) -> RepositoryResult<PortfolioItem>;
    fn update_portfolio_item(
        &self,
        id: PortfolioItemId,
        patch: PortfolioItemPatch,
    ) -> RepositoryResult<Option<PortfolioItem>>;
    fn delete_portfolio_item(&self, id: PortfolioItemId) -> RepositoryResult<bool>;
}

pub trait TeamMemberReader {
    fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>>;
    fn get_team_member_by_id(&self, id: TeamMemberId) -> RepositoryResult<Option<TeamMember>>;
}

pub trait TeamMemberWriter {
    fn create_team_member(&self, member: &NewTeamMember) -> RepositoryResult<TeamMember>;
    fn update_team_member(
        &self,
        id: TeamMemberId,
        patch: TeamMemberPatch,
    ) -> RepositoryResult<Option<TeamMember>>;
    fn delete_team_member(&self, id: TeamMemberId) -> RepositoryResult<bool>;
}

pub trait TestimonialReader {
    fn list_testimonials(&self) -> RepositoryResult<Vec<Testimonial>>;
    fn get_testimonial_by_id(&self, id: TestimonialId)
    -> RepositoryResult<Option<Testimonial>>;
}

pub trait TestimonialWriter {
    fn create_testimonial(&self, testimonial: &NewTestimonial) -> RepositoryResult<Testimonial>;
    fn update_testimonial(
        &self,
        id: TestimonialId,
        patch: TestimonialPatch,
    ) -> RepositoryResult<Option<Testimonial>>;
    fn delete_testimonial(&self, id: TestimonialId) -> RepositoryResult<bool>;
}

/// Read-only operations for contact messages.
pub trait MessageReader {
    fn list_messages(&self) -> RepositoryResult<Vec<Message>>;
    fn get_message_by_id(&self, id: MessageId) -> RepositoryResult<Option<Message>>;
}

/// Write operations for contact messages. There is no update path.
pub trait MessageWriter {
    /// Persist a new message stamped with the current time.
    fn create_message(&self, message: &NewMessage) -> RepositoryResult<Message>;
    fn delete_message(&self, id: MessageId) -> RepositoryResult<bool>;
}

/// Read-only operations for blog posts.
pub trait BlogPostReader {
    fn list_blog_posts(&self, query: BlogPostListQuery) -> RepositoryResult<Vec<BlogPost>>;
    fn get_blog_post_by_id(&self, id: BlogPostId) -> RepositoryResult<Option<BlogPost>>;
    fn get_blog_post_by_slug(&self, slug: &str) -> RepositoryResult<Option<BlogPost>>;
}

/// Write operations for blog posts. Slugs are unique.
pub trait BlogPostWriter {
    /// Persist a new post stamped with the current time.
    fn create_blog_post(&self, post: &NewBlogPost) -> RepositoryResult<BlogPost>;
    fn update_blog_post(
        &self,
        id: BlogPostId,
        patch: BlogPostPatch,
    ) -> RepositoryResult<Option<BlogPost>>;
    fn delete_blog_post(&self, id: BlogPostId) -> RepositoryResult<bool>;
}
