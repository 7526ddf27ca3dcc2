use diesel::prelude::*;

use crate::aircraft_types::{AircraftTypeModel, NewAircraftType};
use crate::schema::aircraft_types;

/// Get-or-create an aircraft type by name (unique natural key).
pub fn get_or_create(conn: &mut SqliteConnection, name: &str) -> QueryResult<AircraftTypeModel> {
    let existing = aircraft_types::table
        .filter(aircraft_types::name.eq(name))
        .select(AircraftTypeModel::as_select())
        .first(conn)
        .optional()?;

    if let Some(aircraft_type) = existing {
        return Ok(aircraft_type);
    }

    diesel::insert_into(aircraft_types::table)
        .values(NewAircraftType {
            name: name.to_string(),
        })
        .returning(AircraftTypeModel::as_returning())
        .get_result(conn)
}

pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
    aircraft_types::table.count().get_result(conn)
}
