//! Application state management.
//!
//! The state holds the configuration and the application services the
//! domain routers are built over. The in-memory services share their
//! stores across clones, so cloning the state is cheap.

use crate::config::Config;
use domain_categories::InMemoryCategoryService;
use domain_products::InMemoryProductService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub categories: InMemoryCategoryService,
    pub products: InMemoryProductService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            categories: InMemoryCategoryService::new(),
            products: InMemoryProductService::new(),
        }
    }
}
