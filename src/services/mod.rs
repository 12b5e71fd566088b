//! Business logic services

pub mod blog;
pub mod trips;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub trips: trips::TripsService,
    pub blog: blog::BlogService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            trips: trips::TripsService::new(repository.clone()),
            blog: blog::BlogService::new(repository),
        }
    }
}
