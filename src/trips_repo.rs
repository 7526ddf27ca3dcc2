use diesel::prelude::*;

use crate::schema::trips;
use crate::trips::{NewTrip, TripModel};

/// Get-or-create pattern: returns the existing trip with this title or
/// inserts a new row. Title is the only field that participates in the
/// match, so a repeated title reuses the first row and pools its flights.
pub fn get_or_create(conn: &mut SqliteConnection, title: &str) -> QueryResult<TripModel> {
    let existing = trips::table
        .filter(trips::title.eq(title))
        .select(TripModel::as_select())
        .first(conn)
        .optional()?;

    if let Some(trip) = existing {
        return Ok(trip);
    }

    diesel::insert_into(trips::table)
        .values(NewTrip {
            title: title.to_string(),
        })
        .returning(TripModel::as_returning())
        .get_result(conn)
}

pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
    trips::table.count().get_result(conn)
}
