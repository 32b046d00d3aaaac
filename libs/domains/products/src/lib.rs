//! Products Domain
//!
//! HTTP endpoints for catalog products, written against an injected
//! application-service interface. Mirrors the categories domain, with a
//! quantity and a category reference on the entity and a configurable
//! edit policy (see [`models::UpdatePolicy`]).
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductService, UpdatePolicy};
//!
//! let service = InMemoryProductService::new();
//! let router = handlers::router(service, UpdatePolicy::default());
//! ```

pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use models::{Product, ProductData, UpdatePolicy};
pub use service::{InMemoryProductService, ProductApplicationService};
