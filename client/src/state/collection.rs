//! Server-filtered list shared by the user and project admin pages.
//!
//! DESIGN
//! ======
//! Filtering and sorting happen on the backend. Every filter change bumps a
//! generation counter and leaves one pending [`FetchRequest`]; several
//! changes before the fetch driver runs coalesce into a single request.
//! Responses tagged with an older generation are dropped, so a slow reply
//! can never overwrite a newer one.
//!
//! CSV export works on the rows currently loaded, never a refetch.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::net::endpoints::ApiRequest;
use crate::net::error::ApiError;
use crate::state::session::SessionState;
use crate::util::csv::CsvTable;
use crate::util::request::Generation;

/// Debounce for free-text search input.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Filter state that serializes to query parameters.
pub trait ListFilters: Clone + Default + PartialEq {
    fn to_query(&self) -> Vec<(String, String)>;
}

/// A row that can be exported.
pub trait ListEntity: Clone {
    fn csv_headers() -> &'static [&'static str];
    fn csv_row(&self) -> Vec<String>;
}

/// Active / inactive filter shared by users and projects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    /// `<option>` value; also the `status` query value when filtering.
    pub fn key(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Active => "true",
            Self::Inactive => "false",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.key() == key).unwrap_or_default()
    }

    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            other => Some(other.key()),
        }
    }
}

/// A fetch the driver should perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: Vec<(String, String)>,
}

#[derive(Clone, Debug)]
pub struct RemoteCollection<T, F> {
    pub items: Vec<T>,
    pub filters: F,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
    pending: Option<FetchRequest>,
}

impl<T: ListEntity, F: ListFilters> Default for RemoteCollection<T, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListEntity, F: ListFilters> RemoteCollection<T, F> {
    /// Starts with the unfiltered fetch pending.
    pub fn new() -> Self {
        let mut collection =
            Self { items: Vec::new(), filters: F::default(), loading: false, error: None, generation: 0, pending: None };
        collection.schedule();
        collection
    }

    fn schedule(&mut self) {
        self.generation += 1;
        self.loading = true;
        self.pending = Some(FetchRequest { generation: self.generation, query: self.filters.to_query() });
    }

    /// Edit the filters. Schedules a fetch only if they actually changed.
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut F)) -> bool {
        let before = self.filters.clone();
        edit(&mut self.filters);
        if self.filters == before {
            return false;
        }
        self.schedule();
        true
    }

    /// Apply a debounced filter edit unless `ticket` has been superseded
    /// (by newer input, a reset, or a picked suggestion).
    pub fn apply_debounced(&mut self, debounce: &Generation, ticket: u64, edit: impl FnOnce(&mut F)) -> bool {
        debounce.is_current(ticket) && self.update_filters(edit)
    }

    pub fn reset_filters(&mut self) -> bool {
        self.update_filters(|f| *f = F::default())
    }

    /// Refetch with the current filters (after a mutation).
    pub fn refresh(&mut self) {
        self.schedule();
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn take_pending(&mut self) -> Option<FetchRequest> {
        self.pending.take()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Store a response. Returns `false` when it was superseded.
    pub fn apply_response(&mut self, generation: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message()),
        }
        true
    }

    pub fn to_csv_table(&self) -> CsvTable {
        let mut table = CsvTable::new(T::csv_headers());
        for item in &self.items {
            table.push(item.csv_row());
        }
        table
    }

    pub fn export_csv(&self) -> String {
        self.to_csv_table().render()
    }
}

/// Run pending fetches for `collection` whenever one is scheduled.
///
/// `request` builds the list request from the query and bearer token. A
/// 401 clears the session so the route guard sends the user to sign in.
pub fn install_fetcher<T, F>(
    collection: RwSignal<RemoteCollection<T, F>>,
    session: RwSignal<SessionState>,
    request: fn(&[(String, String)], Option<&str>) -> ApiRequest,
) where
    T: ListEntity + DeserializeOwned + Send + Sync + 'static,
    F: ListFilters + Send + Sync + 'static,
{
    let scope = crate::util::request::TaskScope::for_current_owner();
    Effect::new(move || {
        if !collection.with(RemoteCollection::has_pending) {
            return;
        }
        let Some(pending) = collection.try_update(RemoteCollection::take_pending).flatten() else {
            return;
        };
        let token = session.get_untracked().token;
        let req = request(&pending.query, token.as_deref());
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send::<Vec<T>>(&req).await;
            if !scope.is_alive() {
                return;
            }
            if matches!(result, Err(ApiError::Unauthorized { .. })) {
                session.update(SessionState::clear_credentials);
            }
            collection.update(|c| {
                c.apply_response(pending.generation, result);
            });
        });
    });
}
