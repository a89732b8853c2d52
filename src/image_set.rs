use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Deduplicated, insert-only collection of absolute image urls
///
/// shared by reference between every pattern rule while they run; writers only need the lock
/// for the duration of a single insert, and nothing reads until all writers are done
#[derive(Debug, Default)]
pub struct ImageSet {
    inner: Mutex<HashSet<String>>,
}

impl ImageSet {
    /// add `url` if it's not already present; returns whether it was new
    pub fn insert(&self, url: String) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url)
    }

    /// number of unique urls collected so far
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// whether nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// consume the set, handing back its members in no particular order
    pub fn into_vec(self) -> Vec<String> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_iter()
            .collect()
    }
}
