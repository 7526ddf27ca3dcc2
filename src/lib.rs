//! rptlog - load a travel trip log JSON document into a normalized
//! SQLite database.
//!
//! The library defines five record kinds (trips, airports, aircraft
//! types, aircraft, flights) and a loader that ingests a parsed JSON
//! document with get-or-create deduplication on natural keys, all inside
//! a single transaction.

pub mod aircraft;
pub mod aircraft_repo;
pub mod aircraft_types;
pub mod aircraft_types_repo;
pub mod airports;
pub mod airports_repo;
pub mod db;
pub mod error;
pub mod flights;
pub mod flights_repo;
pub mod itinerary;
pub mod loader;
pub mod schema;
pub mod trips;
pub mod trips_repo;

pub use error::{LoadError, ObjectKind};
pub use loader::{LoadSummary, load};
