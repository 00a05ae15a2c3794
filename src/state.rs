use std::path::Path;
use std::sync::Arc;

use crate::color::UserTypeColors;
use crate::data::filter::{filtered_indices, UserTypeFilter};
use crate::data::loader::DatasetCache;
use crate::data::model::TripDataset;
use crate::data::LoadError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Memoizing handle on the source file.
    pub cache: DatasetCache,

    /// Loaded dataset. `None` only after a startup path was never loadable.
    pub dataset: Option<Arc<TripDataset>>,

    /// Current dropdown selection.
    pub filter: UserTypeFilter,

    /// Indices of trips passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// Colours for the user-type column.
    pub colors: UserTypeColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load the source file once at startup. A failure here is fatal for
    /// the process: the dashboard cannot start without data.
    pub fn startup(path: &Path) -> Result<Self, LoadError> {
        let mut cache = DatasetCache::new(path);
        let dataset = cache.load()?;
        let visible_indices = (0..dataset.len()).collect();
        Ok(Self {
            cache,
            dataset: Some(dataset),
            filter: UserTypeFilter::default(),
            visible_indices,
            colors: UserTypeColors::default(),
            status_message: None,
        })
    }

    /// Change the dropdown selection and recompute the view.
    pub fn set_filter(&mut self, filter: UserTypeFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.refilter();
        }
    }

    /// Recompute `visible_indices` after a filter or dataset change.
    pub fn refilter(&mut self) {
        if let Some(dataset) = &self.dataset {
            self.visible_indices = filtered_indices(dataset, self.filter);
        } else {
            self.visible_indices.clear();
        }
    }

    /// Re-read through the cache (a no-op re-parse while the file is
    /// unchanged). On failure the previous dataset stays on screen and the
    /// error is surfaced as a status message.
    pub fn reload(&mut self) {
        match self.cache.load() {
            Ok(dataset) => {
                self.dataset = Some(dataset);
                self.status_message = None;
                self.refilter();
            }
            Err(err) => {
                log::error!("failed to load {}: {err}", self.cache.path().display());
                self.status_message = Some(format!("Error: {err}"));
            }
        }
    }

    /// Force a re-read of the current source file.
    pub fn force_reload(&mut self) {
        self.cache.invalidate();
        self.reload();
    }

    /// Switch to another source file.
    pub fn open_source(&mut self, path: &Path) {
        self.cache.retarget(path);
        self.reload();
    }
}
