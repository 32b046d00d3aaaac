//! Categories Domain
//!
//! HTTP endpoints for catalog categories, written against an injected
//! application-service interface.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │       Handlers       │  ← HTTP endpoints (validation, status codes)
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ Application service  │  ← trait + implementations (persistence, ids)
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │        Models        │  ← entity, payload
//! └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_categories::{handlers, InMemoryCategoryService};
//!
//! let service = InMemoryCategoryService::new();
//! let router = handlers::router(service);
//! ```

pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use models::{Category, CategoryData};
pub use service::{CategoryApplicationService, InMemoryCategoryService};
