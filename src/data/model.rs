use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// UserType – rider category
// ---------------------------------------------------------------------------

/// Rider category as it appears in the `usertype` column. The set is closed:
/// any other string in the source file fails the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UserType {
    Subscriber,
    Customer,
}

impl UserType {
    pub const ALL: [UserType; 2] = [UserType::Subscriber, UserType::Customer];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Subscriber => "Subscriber",
            UserType::Customer => "Customer",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TripRecord – one row of the transformed dataset
// ---------------------------------------------------------------------------

/// Display order of the transformed columns. Field order in [`TripRecord`]
/// and the table header both follow this list.
pub const COLUMNS: [&str; 15] = [
    "wday", "hour", "dur", "id_i", "sta_i", "lat_i", "lon_i", "id_f", "sta_f",
    "lat_f", "lon_f", "bike", "user_type", "birth", "gender",
];

/// A single bike-share trip after renaming, derivation, and projection.
///
/// `wday` is 0 = Monday … 6 = Sunday; `hour` is 0–23; both are derived from
/// the raw start time parsed as a naive timestamp. `dur` is the raw trip
/// duration converted from seconds to minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub wday: u8,
    pub hour: u8,
    pub dur: f64,
    pub id_i: u32,
    pub sta_i: String,
    pub lat_i: f64,
    pub lon_i: f64,
    pub id_f: u32,
    pub sta_f: String,
    pub lat_f: f64,
    pub lon_f: f64,
    pub bike: u32,
    pub user_type: UserType,
    /// Rider birth year; blank in the source for some rows.
    pub birth: Option<i32>,
    /// Rider gender code; blank in the source for some rows.
    pub gender: Option<u8>,
}

impl TripRecord {
    /// Cell text for the table display, indexed per [`COLUMNS`].
    pub fn column_text(&self, column: usize) -> String {
        match column {
            0 => self.wday.to_string(),
            1 => self.hour.to_string(),
            2 => format!("{:.2}", self.dur),
            3 => self.id_i.to_string(),
            4 => self.sta_i.clone(),
            5 => format!("{:.5}", self.lat_i),
            6 => format!("{:.5}", self.lon_i),
            7 => self.id_f.to_string(),
            8 => self.sta_f.clone(),
            9 => format!("{:.5}", self.lat_f),
            10 => format!("{:.5}", self.lon_f),
            11 => self.bike.to_string(),
            12 => self.user_type.to_string(),
            13 => self.birth.map(|y| y.to_string()).unwrap_or_default(),
            14 => self.gender.map(|g| g.to_string()).unwrap_or_default(),
            _ => String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// TripDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full transformed dataset. Immutable after load; user interactions
/// only ever produce filtered index views over it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripDataset {
    pub trips: Vec<TripRecord>,
}

impl TripDataset {
    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Number of trips with the given rider category.
    pub fn count_of(&self, user_type: UserType) -> usize {
        self.trips
            .iter()
            .filter(|trip| trip.user_type == user_type)
            .count()
    }
}
