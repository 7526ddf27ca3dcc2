use diesel::prelude::*;

/// An aircraft row. Neither field is unique on its own: the loader
/// deduplicates by the exact (registration, aircraft_type_id) pair,
/// so the same registration with a different type is a distinct row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::aircraft)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AircraftModel {
    pub id: i32,
    pub registration: Option<String>,
    pub aircraft_type_id: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::aircraft)]
pub struct NewAircraft {
    pub registration: Option<String>,
    pub aircraft_type_id: Option<i32>,
}
