use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

use super::model::{TripDataset, TripRecord, UserType};
use super::LoadError;

/// Default source path, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data.csv";

// ---------------------------------------------------------------------------
// Raw schema
// ---------------------------------------------------------------------------

/// Raw header names the loader consumes. Case-sensitive; any extra columns
/// in the file (e.g. `stoptime`) are ignored and dropped by the projection.
pub const EXPECTED_COLUMNS: [&str; 14] = [
    "tripduration",
    "starttime",
    "start.station.id",
    "start.station.name",
    "start.station.latitude",
    "start.station.longitude",
    "end.station.id",
    "end.station.name",
    "end.station.latitude",
    "end.station.longitude",
    "bikeid",
    "usertype",
    "birth.year",
    "gender",
];

/// One row of the source CSV before transformation.
#[derive(Debug, Deserialize)]
struct RawTrip {
    /// Trip duration in seconds.
    #[serde(rename = "tripduration")]
    trip_duration: f64,
    #[serde(rename = "starttime")]
    start_time: String,
    #[serde(rename = "start.station.id")]
    start_station_id: u32,
    #[serde(rename = "start.station.name")]
    start_station_name: String,
    #[serde(rename = "start.station.latitude")]
    start_station_latitude: f64,
    #[serde(rename = "start.station.longitude")]
    start_station_longitude: f64,
    #[serde(rename = "end.station.id")]
    end_station_id: u32,
    #[serde(rename = "end.station.name")]
    end_station_name: String,
    #[serde(rename = "end.station.latitude")]
    end_station_latitude: f64,
    #[serde(rename = "end.station.longitude")]
    end_station_longitude: f64,
    #[serde(rename = "bikeid")]
    bike_id: u32,
    #[serde(rename = "usertype")]
    user_type: UserType,
    #[serde(rename = "birth.year")]
    birth_year: Option<i32>,
    gender: Option<u8>,
}

// ---------------------------------------------------------------------------
// Timestamp parsing
// ---------------------------------------------------------------------------

/// Start times are parsed as naive timestamps exactly as written: no
/// timezone conversion, no locale handling. Fractional seconds are optional.
const START_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
}

// ---------------------------------------------------------------------------
// Transformation pass
// ---------------------------------------------------------------------------

/// Turn a raw row into a [`TripRecord`]: derive weekday (0 = Monday) and
/// hour from the start time, convert the duration to minutes, rename the
/// station and rider fields.
fn transform(row: usize, raw: RawTrip) -> Result<TripRecord, LoadError> {
    let start = parse_start_time(&raw.start_time).ok_or_else(|| LoadError::BadStartTime {
        row,
        value: raw.start_time.clone(),
    })?;

    Ok(TripRecord {
        wday: start.weekday().num_days_from_monday() as u8,
        hour: start.hour() as u8,
        dur: raw.trip_duration / 60.0,
        id_i: raw.start_station_id,
        sta_i: raw.start_station_name,
        lat_i: raw.start_station_latitude,
        lon_i: raw.start_station_longitude,
        id_f: raw.end_station_id,
        sta_f: raw.end_station_name,
        lat_f: raw.end_station_latitude,
        lon_f: raw.end_station_longitude,
        bike: raw.bike_id,
        user_type: raw.user_type,
        birth: raw.birth_year,
        gender: raw.gender,
    })
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load and transform a trip CSV. Any missing expected header, unreadable
/// file, or malformed row fails the whole load.
pub fn load_file(path: &Path) -> Result<TripDataset, LoadError> {
    let file = fs::File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for expected in EXPECTED_COLUMNS {
        if !headers.iter().any(|header| header == expected) {
            return Err(LoadError::MissingColumn(expected.to_string()));
        }
    }

    let mut trips = Vec::new();
    for (row, result) in reader.deserialize::<RawTrip>().enumerate() {
        trips.push(transform(row, result?)?);
    }
    Ok(TripDataset { trips })
}

// ---------------------------------------------------------------------------
// DatasetCache – explicit, process-scoped memoization
// ---------------------------------------------------------------------------

/// Identity of a source file's contents as far as the cache is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    modified: SystemTime,
    len: u64,
}

impl Fingerprint {
    fn probe(path: &Path) -> Result<Self, LoadError> {
        let meta = fs::metadata(path)?;
        Ok(Self {
            modified: meta.modified()?,
            len: meta.len(),
        })
    }
}

/// Memoizing handle around [`load_file`].
///
/// Invalidation rule: a cached dataset is served while the source file's
/// `(modified time, byte length)` fingerprint is unchanged. A changed
/// fingerprint, a retarget to another path, or an explicit [`invalidate`]
/// triggers a re-read. Repeated hits return the same `Arc` allocation, so
/// callers share one parsed dataset per process.
///
/// [`invalidate`]: DatasetCache::invalidate
#[derive(Debug, Default)]
pub struct DatasetCache {
    path: PathBuf,
    entry: Option<(Fingerprint, Arc<TripDataset>)>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entry: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point the cache at a different source file, dropping any cached data.
    pub fn retarget(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
        self.entry = None;
    }

    /// Drop the cached dataset so the next [`load`](DatasetCache::load)
    /// re-reads the file regardless of its fingerprint.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Return the dataset for the current source path, re-reading only when
    /// the file fingerprint has changed since the last load.
    pub fn load(&mut self) -> Result<Arc<TripDataset>, LoadError> {
        let fingerprint = Fingerprint::probe(&self.path)?;

        if let Some((cached, dataset)) = &self.entry {
            if *cached == fingerprint {
                log::debug!("cache hit for {}", self.path.display());
                return Ok(Arc::clone(dataset));
            }
            log::info!("{} changed on disk, reloading", self.path.display());
        }

        let dataset = Arc::new(load_file(&self.path)?);
        log::info!(
            "loaded {} trips from {}",
            dataset.len(),
            self.path.display()
        );
        self.entry = Some((fingerprint, Arc::clone(&dataset)));
        Ok(dataset)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
