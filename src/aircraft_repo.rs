use diesel::prelude::*;

use crate::aircraft::{AircraftModel, NewAircraft};
use crate::schema::aircraft;

/// Get-or-create an aircraft by the exact (registration, type) pair.
///
/// Either side of the key may be NULL, and `= NULL` never matches in SQL,
/// so the lookup is built as a boxed query that switches to `IS NULL`
/// filters for absent fields. Two aircraft sharing a registration but
/// differing in type remain distinct rows.
pub fn get_or_create(
    conn: &mut SqliteConnection,
    registration: Option<&str>,
    aircraft_type_id: Option<i32>,
) -> QueryResult<AircraftModel> {
    let mut query = aircraft::table
        .select(AircraftModel::as_select())
        .into_boxed();
    query = match registration {
        Some(registration) => query.filter(aircraft::registration.eq(registration)),
        None => query.filter(aircraft::registration.is_null()),
    };
    query = match aircraft_type_id {
        Some(type_id) => query.filter(aircraft::aircraft_type_id.eq(type_id)),
        None => query.filter(aircraft::aircraft_type_id.is_null()),
    };

    let existing = query.first(conn).optional()?;

    if let Some(found) = existing {
        return Ok(found);
    }

    diesel::insert_into(aircraft::table)
        .values(NewAircraft {
            registration: registration.map(str::to_string),
            aircraft_type_id,
        })
        .returning(AircraftModel::as_returning())
        .get_result(conn)
}

pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
    aircraft::table.count().get_result(conn)
}
