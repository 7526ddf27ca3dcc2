use diesel::prelude::*;

/// An airport row, keyed by its IATA code (unique natural key).
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::airports)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AirportModel {
    pub id: i32,
    pub iata: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::airports)]
pub struct NewAirport {
    pub iata: String,
}
