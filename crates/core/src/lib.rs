//! Shared types and pure data generators for the `olay` seeder.
//!
//! Nothing in this crate touches the database or the console; every
//! generator takes its randomness source as a parameter.

pub mod description;
pub mod error;
pub mod geo;
pub mod timestamps;
pub mod types;
