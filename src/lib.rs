//! Core library exports for the studio booking site.
//!
//! The `data` feature exposes the domain model, request forms and the
//! in-memory repository. The default `server` feature adds the services,
//! JSON routes, session auth, configuration and sample data used by the
//! binary.

pub mod domain;
mod error_conversions;
pub mod forms;
pub mod repository;

#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod seed;
#[cfg(feature = "server")]
pub mod services;
