use diesel::prelude::*;

use crate::flights::{FlightModel, NewFlight};
use crate::schema::flights;

/// Get-or-create a flight by the full tuple of its fields.
///
/// The whole candidate row is the key: trip, designator, both airports,
/// both timestamps, aircraft, and notes. The two nullable fields use
/// `IS NULL` filters when absent so that a flight without an aircraft
/// only matches other flights without an aircraft.
pub fn get_or_create(conn: &mut SqliteConnection, new: NewFlight) -> QueryResult<FlightModel> {
    let mut query = flights::table
        .select(FlightModel::as_select())
        .into_boxed()
        .filter(flights::trip_id.eq(new.trip_id))
        .filter(flights::flight.eq(new.flight.clone()))
        .filter(flights::origin_airport_id.eq(new.origin_airport_id))
        .filter(flights::start.eq(new.start.clone()))
        .filter(flights::destination_airport_id.eq(new.destination_airport_id))
        .filter(flights::end.eq(new.end.clone()));
    query = match new.aircraft_id {
        Some(aircraft_id) => query.filter(flights::aircraft_id.eq(aircraft_id)),
        None => query.filter(flights::aircraft_id.is_null()),
    };
    query = match new.notes.clone() {
        Some(notes) => query.filter(flights::notes.eq(notes)),
        None => query.filter(flights::notes.is_null()),
    };

    let existing = query.first(conn).optional()?;

    if let Some(found) = existing {
        return Ok(found);
    }

    diesel::insert_into(flights::table)
        .values(new)
        .returning(FlightModel::as_returning())
        .get_result(conn)
}

pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
    flights::table.count().get_result(conn)
}
