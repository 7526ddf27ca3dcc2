use diesel::prelude::*;

/// A trip row. Titles are deliberately not unique at the schema level;
/// deduplication happens in the loader via get-or-create by title.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::trips)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TripModel {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::trips)]
pub struct NewTrip {
    pub title: String,
}
