//! Domain entities and value objects shared by every layer.

pub mod auth;
pub mod blog;
pub mod category;
pub mod class;
pub mod location;
pub mod message;
pub mod portfolio;
pub mod service;
pub mod team;
pub mod testimonial;
pub mod types;
pub mod user;
