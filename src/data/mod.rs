//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!     data.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse + transform raw rows → TripDataset
//!   │           │  (DatasetCache memoizes by file fingerprint)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │  TripDataset  │  Vec<TripRecord>, immutable after load
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  user-type predicate → visible indices
//!   └──────────┘
//! ```

use std::io;

use thiserror::Error;

pub mod filter;
pub mod loader;
pub mod model;

/// A failed dataset load. Every variant is fatal for the load in progress:
/// the dashboard cannot show partial data, so the caller either aborts
/// startup or keeps the previously loaded dataset on screen.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("source file is missing column {0:?}")]
    MissingColumn(String),
    #[error("row {row}: unparseable start time {value:?}")]
    BadStartTime { row: usize, value: String },
}
