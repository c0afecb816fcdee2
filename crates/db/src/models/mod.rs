//! Row structs for the tables the seeder reads and the DTO it writes.

pub mod event;
pub mod incident_type;
pub mod user;
