//! The loader: walks a parsed trip log document and persists it through
//! the per-table get-or-create repositories, all inside one transaction.

use diesel::prelude::*;
use serde_json::Value;
use tracing::info;

use crate::error::{LoadError, ObjectKind};
use crate::flights::NewFlight;
use crate::itinerary::{FlightDoc, TripDoc};
use crate::{aircraft_repo, aircraft_types_repo, airports_repo, flights_repo, trips_repo};

/// Row counts per table after a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub trips: i64,
    pub airports: i64,
    pub aircraft_types: i64,
    pub aircraft: i64,
    pub flights: i64,
}

/// Load a trip log document into the database.
///
/// Trips and their flights are processed in document order. Referenced
/// rows are created before the rows that point at them: airports and
/// aircraft types first, then aircraft, then the flight. The whole
/// document runs in a single transaction, so any validation or storage
/// error rolls everything back and the store keeps zero rows.
pub fn load(document: &Value, conn: &mut SqliteConnection) -> Result<LoadSummary, LoadError> {
    let trip_values = document
        .get("trips")
        .ok_or(LoadError::MissingField {
            kind: ObjectKind::Document,
            field: "trips",
        })?
        .as_array()
        .ok_or_else(|| LoadError::Malformed {
            kind: ObjectKind::Document,
            detail: "trips must be an array".to_string(),
        })?;

    conn.transaction::<_, LoadError, _>(|conn| {
        for trip_value in trip_values {
            load_trip(trip_value, conn)?;
        }
        Ok(())
    })?;

    let summary = LoadSummary {
        trips: trips_repo::count(conn)?,
        airports: airports_repo::count(conn)?,
        aircraft_types: aircraft_types_repo::count(conn)?,
        aircraft: aircraft_repo::count(conn)?,
        flights: flights_repo::count(conn)?,
    };
    Ok(summary)
}

fn load_trip(trip_value: &Value, conn: &mut SqliteConnection) -> Result<(), LoadError> {
    let trip_doc = TripDoc::from_value(trip_value)?;
    let title = trip_doc.title()?;
    info!("Adding trip '{}'", title);

    let trip = trips_repo::get_or_create(conn, title)?;

    for flight_value in trip_doc.flights()? {
        load_flight(flight_value, trip.id, conn)?;
    }
    Ok(())
}

fn load_flight(
    flight_value: &Value,
    trip_id: i32,
    conn: &mut SqliteConnection,
) -> Result<(), LoadError> {
    let flight_doc = FlightDoc::from_value(flight_value)?;

    let origin = airports_repo::get_or_create(conn, flight_doc.origin()?)?;
    let destination = airports_repo::get_or_create(conn, flight_doc.destination()?)?;

    let aircraft_id = match flight_doc.aircraft() {
        Some(info) => {
            let type_id = match info.type_name.as_deref() {
                Some(name) => Some(aircraft_types_repo::get_or_create(conn, name)?.id),
                None => None,
            };
            let aircraft = aircraft_repo::get_or_create(conn, info.registration.as_deref(), type_id)?;
            Some(aircraft.id)
        }
        None => None,
    };

    flights_repo::get_or_create(
        conn,
        NewFlight {
            trip_id,
            flight: flight_doc.designator()?.to_string(),
            origin_airport_id: origin.id,
            start: flight_doc.departure()?.to_rfc3339(),
            destination_airport_id: destination.id,
            end: flight_doc.arrival()?.to_rfc3339(),
            aircraft_id,
            notes: flight_doc.notes().map(str::to_string),
        },
    )?;
    Ok(())
}
