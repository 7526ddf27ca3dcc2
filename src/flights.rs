use diesel::prelude::*;

/// A flight row linking a trip to its route, times, and optional aircraft.
///
/// `start` and `end` hold ISO-8601 text with the document's original UTC
/// offset preserved. Deduplication covers the full tuple of fields below
/// (minus `id`), with NULL-aware matching on `aircraft_id` and `notes`.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::flights)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FlightModel {
    pub id: i32,
    pub trip_id: i32,
    pub flight: String,
    pub origin_airport_id: i32,
    pub start: String,
    pub destination_airport_id: i32,
    pub end: String,
    pub aircraft_id: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::flights)]
pub struct NewFlight {
    pub trip_id: i32,
    pub flight: String,
    pub origin_airport_id: i32,
    pub start: String,
    pub destination_airport_id: i32,
    pub end: String,
    pub aircraft_id: Option<i32>,
    pub notes: Option<String>,
}
