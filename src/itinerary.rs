//! Typed view of the input JSON document.
//!
//! Trip and flight objects are validated against a key allow-list before
//! anything else touches them, in document order, matching the loader's
//! one-object-at-a-time processing. Several allow-listed flight keys
//! (`purpose`, `seat`, the confirmation numbers, `cost`, `class`) are
//! recognized but have no column yet: they are accepted and discarded.
//! That tolerance is intentional, not an omission.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{LoadError, ObjectKind};

/// Keys a trip object may carry.
const TRIP_KEYS: &[&str] = &["title", "flights"];

/// Keys a flight object may carry. Only `flight`, `route`, `time`,
/// `aircraft`, and `notes` are persisted; the rest are tolerated.
const FLIGHT_KEYS: &[&str] = &[
    "flight",
    "route",
    "time",
    "purpose",
    "aircraft",
    "seat",
    "supplierconfirmationnumber",
    "bookingsiteconfirmationnumber",
    "agencyconfirmationnumber",
    "ticketnumber",
    "cost",
    "notes",
    "class",
];

/// Reject any key outside `allowed`, reporting the first offender.
fn check_keys(value: &Value, kind: ObjectKind, allowed: &[&str]) -> Result<(), LoadError> {
    let object = value.as_object().ok_or_else(|| LoadError::Malformed {
        kind,
        detail: "expected a JSON object".to_string(),
    })?;
    for key in object.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(LoadError::Schema {
                kind,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct TripDoc {
    title: Option<String>,
    flights: Option<Vec<Value>>,
}

impl TripDoc {
    pub fn from_value(value: &Value) -> Result<Self, LoadError> {
        check_keys(value, ObjectKind::Trip, TRIP_KEYS)?;
        serde_json::from_value(value.clone()).map_err(|e| LoadError::Malformed {
            kind: ObjectKind::Trip,
            detail: e.to_string(),
        })
    }

    pub fn title(&self) -> Result<&str, LoadError> {
        self.title.as_deref().ok_or(LoadError::MissingField {
            kind: ObjectKind::Trip,
            field: "title",
        })
    }

    pub fn flights(&self) -> Result<&[Value], LoadError> {
        self.flights
            .as_deref()
            .ok_or(LoadError::MissingField {
                kind: ObjectKind::Trip,
                field: "flights",
            })
    }
}

#[derive(Debug, Deserialize)]
pub struct Route {
    origin: Option<String>,
    destination: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TimeWindow {
    departure: Option<DateTime<FixedOffset>>,
    arrival: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Deserialize)]
pub struct AircraftInfo {
    pub registration: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FlightDoc {
    flight: Option<String>,
    route: Option<Route>,
    time: Option<TimeWindow>,
    aircraft: Option<AircraftInfo>,
    notes: Option<String>,
}

impl FlightDoc {
    pub fn from_value(value: &Value) -> Result<Self, LoadError> {
        check_keys(value, ObjectKind::Flight, FLIGHT_KEYS)?;
        let mut doc: FlightDoc =
            serde_json::from_value(value.clone()).map_err(|e| LoadError::Malformed {
                kind: ObjectKind::Flight,
                detail: e.to_string(),
            })?;
        // An aircraft block without any keys says nothing; drop it here so
        // presence below means "the object carried at least one key".
        if let Some(Value::Object(block)) = value.get("aircraft")
            && block.is_empty()
        {
            doc.aircraft = None;
        }
        Ok(doc)
    }

    pub fn designator(&self) -> Result<&str, LoadError> {
        self.flight.as_deref().ok_or(LoadError::MissingField {
            kind: ObjectKind::Flight,
            field: "flight",
        })
    }

    fn route(&self) -> Result<&Route, LoadError> {
        self.route.as_ref().ok_or(LoadError::MissingField {
            kind: ObjectKind::Flight,
            field: "route",
        })
    }

    pub fn origin(&self) -> Result<&str, LoadError> {
        self.route()?
            .origin
            .as_deref()
            .ok_or(LoadError::MissingField {
                kind: ObjectKind::Flight,
                field: "route.origin",
            })
    }

    pub fn destination(&self) -> Result<&str, LoadError> {
        self.route()?
            .destination
            .as_deref()
            .ok_or(LoadError::MissingField {
                kind: ObjectKind::Flight,
                field: "route.destination",
            })
    }

    fn time(&self) -> Result<&TimeWindow, LoadError> {
        self.time.as_ref().ok_or(LoadError::MissingField {
            kind: ObjectKind::Flight,
            field: "time",
        })
    }

    pub fn departure(&self) -> Result<&DateTime<FixedOffset>, LoadError> {
        self.time()?
            .departure
            .as_ref()
            .ok_or(LoadError::MissingField {
                kind: ObjectKind::Flight,
                field: "time.departure",
            })
    }

    pub fn arrival(&self) -> Result<&DateTime<FixedOffset>, LoadError> {
        self.time()?.arrival.as_ref().ok_or(LoadError::MissingField {
            kind: ObjectKind::Flight,
            field: "time.arrival",
        })
    }

    /// The aircraft block, if present. A missing key, a JSON null, or an
    /// empty object all count as absent; an object is present as soon as
    /// it carries a key, even when every value is null.
    pub fn aircraft(&self) -> Option<&AircraftInfo> {
        self.aircraft.as_ref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
