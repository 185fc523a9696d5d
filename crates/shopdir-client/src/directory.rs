//! Application state for a browsing session.
//!
//! [`Directory`] owns the loaded collection and its derived filter options.
//! Reloads swap both in one step; a failed reload leaves the previous state in
//! place. A reload requested while another is running is ignored rather than
//! queued or raced.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use shopdir_core::engine::run_view;
use shopdir_core::{
    derive_filter_options, FilterOptions, RegionSummary, Shop, ShopCollection, ViewCriteria,
};

use crate::client::{LoadReport, ShopClient};
use crate::error::LoadError;

#[derive(Debug)]
pub enum ReloadOutcome {
    Loaded(LoadReport),
    /// Another reload was running; nothing was fetched.
    AlreadyInFlight,
}

/// Everything a presentation layer needs after one recomputation.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryView {
    pub shops: Vec<Shop>,
    pub summary: RegionSummary,
    pub options: FilterOptions,
}

#[derive(Debug, Default)]
struct Snapshot {
    collection: ShopCollection,
    options: FilterOptions,
    last_report: Option<LoadReport>,
}

pub struct Directory {
    client: ShopClient,
    state: RwLock<Snapshot>,
    loading: AtomicBool,
}

/// Clears the in-flight flag when the reload future completes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Directory {
    /// An empty directory; call [`Directory::reload`] to populate it.
    #[must_use]
    pub fn new(client: ShopClient) -> Self {
        Self {
            client,
            state: RwLock::new(Snapshot::default()),
            loading: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Fetches a fresh collection and replaces the current one wholesale.
    ///
    /// # Errors
    ///
    /// Returns the loader's [`LoadError`] (normally
    /// [`LoadError::DataUnavailable`]); the existing collection is kept.
    pub async fn reload(&self) -> Result<ReloadOutcome, LoadError> {
        let Some(_in_flight) = InFlight::acquire(&self.loading) else {
            tracing::info!("reload already in flight; ignoring request");
            return Ok(ReloadOutcome::AlreadyInFlight);
        };

        let loaded = self.client.load().await?;
        let options = derive_filter_options(&loaded.collection);

        let mut state = self.write_state();
        *state = Snapshot {
            collection: loaded.collection,
            options,
            last_report: Some(loaded.report.clone()),
        };

        Ok(ReloadOutcome::Loaded(loaded.report))
    }

    /// Runs the filter/sort/aggregate engine over the current collection.
    #[must_use]
    pub fn view(&self, criteria: &ViewCriteria) -> DirectoryView {
        let (collection, options) = {
            let state = self.read_state();
            (state.collection.clone(), state.options.clone())
        };
        let filtered = run_view(&collection, criteria);
        DirectoryView {
            shops: filtered.shops,
            summary: filtered.summary,
            options,
        }
    }

    #[must_use]
    pub fn collection(&self) -> ShopCollection {
        self.read_state().collection.clone()
    }

    /// Region/state options as of the last successful load.
    #[must_use]
    pub fn options(&self) -> FilterOptions {
        self.read_state().options.clone()
    }

    #[must_use]
    pub fn last_report(&self) -> Option<LoadReport> {
        self.read_state().last_report.clone()
    }

    // Snapshot writes are a single assignment, so a poisoned lock still holds
    // a consistent value.
    fn read_state(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
