//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept any `PgExecutor` as the first argument, so the same query runs
//! on the pool or inside an open transaction.

pub mod event_repo;
pub mod incident_type_repo;
pub mod user_repo;

pub use event_repo::EventRepo;
pub use incident_type_repo::IncidentTypeRepo;
pub use user_repo::UserRepo;
