use diesel::prelude::*;

use crate::airports::{AirportModel, NewAirport};
use crate::schema::airports;

/// Get-or-create an airport by IATA code. The code is globally unique,
/// so every flight referencing it resolves to the same row.
pub fn get_or_create(conn: &mut SqliteConnection, iata: &str) -> QueryResult<AirportModel> {
    let existing = airports::table
        .filter(airports::iata.eq(iata))
        .select(AirportModel::as_select())
        .first(conn)
        .optional()?;

    if let Some(airport) = existing {
        return Ok(airport);
    }

    diesel::insert_into(airports::table)
        .values(NewAirport {
            iata: iata.to_string(),
        })
        .returning(AirportModel::as_returning())
        .get_result(conn)
}

pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
    airports::table.count().get_result(conn)
}
