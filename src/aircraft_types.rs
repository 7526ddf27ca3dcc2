use diesel::prelude::*;

/// An aircraft type row, keyed by its name (unique natural key).
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::aircraft_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AircraftTypeModel {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::aircraft_types)]
pub struct NewAircraftType {
    pub name: String,
}
