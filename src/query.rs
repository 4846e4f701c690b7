//! Request Cache
//!
//! Results of list and lookup reads cached per query, keyed by the JSON form
//! of the parameters that produced them. Each fetch holds a ticket; only the
//! most recent ticket may publish to the view, so a slow response for an old
//! filter state can never replace the rows of a newer one.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

use crate::error::ApiError;

/// Claim on one in-flight fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: u64,
    key: String,
    version: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// Cached value for the key
    Hit(T),
    /// The latest fetch is already for this key
    Pending,
    /// Nothing cached: fetch and report back with the ticket
    Fetch(Ticket),
}

#[derive(Debug)]
pub struct QueryCache<T> {
    entries: HashMap<String, T>,
    version: u32,
    next_id: u64,
    latest: Option<Ticket>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            version: 0,
            next_id: 0,
            latest: None,
        }
    }
}

impl<T: Clone> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything cached under an older scope version
    pub fn sync_version(&mut self, version: u32) {
        if version != self.version {
            self.clear();
            self.version = version;
        }
    }

    pub fn resolve(&mut self, key: &str) -> Lookup<T> {
        if let Some(value) = self.entries.get(key) {
            // a cached answer supersedes any fetch still in flight
            self.latest = None;
            return Lookup::Hit(value.clone());
        }
        if self.latest.as_ref().is_some_and(|t| t.key == key) {
            return Lookup::Pending;
        }
        self.next_id += 1;
        let ticket = Ticket {
            id: self.next_id,
            key: key.to_string(),
            version: self.version,
        };
        self.latest = Some(ticket.clone());
        Lookup::Fetch(ticket)
    }

    /// Store a fetched value. Returns whether `ticket` is still the latest
    /// and the value may be shown.
    pub fn complete(&mut self, ticket: &Ticket, value: T) -> bool {
        if ticket.version == self.version {
            self.entries.insert(ticket.key.clone(), value);
        }
        self.settle(ticket)
    }

    /// Record a failed fetch; same return as [`QueryCache::complete`]
    pub fn fail(&mut self, ticket: &Ticket) -> bool {
        self.settle(ticket)
    }

    fn settle(&mut self, ticket: &Ticket) -> bool {
        if self.latest.as_ref().is_some_and(|t| t.id == ticket.id) {
            self.latest = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.latest = None;
    }
}

// ========================
// Invalidation
// ========================

/// Group of queries invalidated together after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryScope {
    Departments,
    Employees,
    Statistics,
    EmployeeLookups,
}

/// Version counter per scope; queries read it reactively and refetch when
/// it moves
#[derive(Clone, Copy)]
pub struct QueryClient {
    departments: RwSignal<u32>,
    employees: RwSignal<u32>,
    statistics: RwSignal<u32>,
    lookups: RwSignal<u32>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            departments: RwSignal::new(0),
            employees: RwSignal::new(0),
            statistics: RwSignal::new(0),
            lookups: RwSignal::new(0),
        }
    }

    fn signal(&self, scope: QueryScope) -> RwSignal<u32> {
        match scope {
            QueryScope::Departments => self.departments,
            QueryScope::Employees => self.employees,
            QueryScope::Statistics => self.statistics,
            QueryScope::EmployeeLookups => self.lookups,
        }
    }

    pub fn version(&self, scope: QueryScope) -> u32 {
        self.signal(scope).get()
    }

    pub fn invalidate(&self, scope: QueryScope) {
        log::debug!("[QUERY] invalidate {:?}", scope);
        self.signal(scope).update(|v| *v = v.wrapping_add(1));
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

// ========================
// Reactive Glue
// ========================

/// Latest published result of a query
pub struct QueryState<T: 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
}

impl<T: 'static> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for QueryState<T> {}

/// Run `fetch` whenever `key` or the scope `version` changes, serving
/// repeated keys from the cache. Failed reads keep the last published data.
pub fn use_query<K, T, Fut>(
    label: &'static str,
    version: impl Fn() -> u32 + 'static,
    key: impl Fn() -> K + 'static,
    fetch: impl Fn(K) -> Fut + 'static,
) -> QueryState<T>
where
    K: Serialize + 'static,
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = QueryState {
        data: RwSignal::new(None),
        loading: RwSignal::new(false),
    };
    let cache = Rc::new(RefCell::new(QueryCache::<T>::new()));

    Effect::new(move |_| {
        let version = version();
        let params = key();
        let cache_key = serde_json::to_string(&params).unwrap_or_else(|e| {
            log::warn!("[QUERY] {}: unserializable key ({})", label, e);
            String::new()
        });

        let lookup = {
            let mut cache = cache.borrow_mut();
            cache.sync_version(version);
            cache.resolve(&cache_key)
        };

        match lookup {
            Lookup::Hit(value) => {
                state.data.set(Some(value));
                state.loading.set(false);
            }
            Lookup::Pending => {}
            Lookup::Fetch(ticket) => {
                state.loading.set(true);
                let request = fetch(params);
                let cache = Rc::clone(&cache);
                spawn_local(async move {
                    let result = request.await;
                    match result {
                        Ok(value) => {
                            let publish = cache.borrow_mut().complete(&ticket, value.clone());
                            if publish {
                                state.data.set(Some(value));
                                state.loading.set(false);
                            }
                        }
                        Err(err) => {
                            log::error!("[QUERY] {} failed: {}", label, err);
                            if cache.borrow_mut().fail(&ticket) {
                                state.loading.set(false);
                            }
                        }
                    }
                });
            }
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(lookup: Lookup<u32>) -> Ticket {
        match lookup {
            Lookup::Fetch(ticket) => ticket,
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_then_hit() {
        let mut cache = QueryCache::new();
        let t = ticket(cache.resolve("page=1"));
        assert!(cache.complete(&t, 10));
        assert_eq!(cache.resolve("page=1"), Lookup::Hit(10));
        assert!(matches!(cache.resolve("page=2"), Lookup::Fetch(_)));
    }

    #[test]
    fn test_same_key_in_flight_is_pending() {
        let mut cache = QueryCache::<u32>::new();
        let _t = ticket(cache.resolve("a"));
        assert_eq!(cache.resolve("a"), Lookup::Pending);
    }

    #[test]
    fn test_stale_response_never_publishes() {
        let mut cache = QueryCache::new();
        let old = ticket(cache.resolve("page=1"));
        let new = ticket(cache.resolve("page=2"));

        // page 2 answers first, then the slow page 1 response arrives
        assert!(cache.complete(&new, 2));
        assert!(!cache.complete(&old, 1));

        // the stale value is still cached under its own key
        assert_eq!(cache.resolve("page=1"), Lookup::Hit(1));
    }

    #[test]
    fn test_hit_supersedes_in_flight_fetch() {
        let mut cache = QueryCache::new();
        let first = ticket(cache.resolve("a"));
        assert!(cache.complete(&first, 1));

        let slow = ticket(cache.resolve("b"));
        assert_eq!(cache.resolve("a"), Lookup::Hit(1));
        assert!(!cache.complete(&slow, 2));
    }

    #[test]
    fn test_invalidation_drops_entries_and_late_results() {
        let mut cache = QueryCache::new();
        let t = ticket(cache.resolve("a"));
        assert!(cache.complete(&t, 1));

        let in_flight = ticket(cache.resolve("b"));
        cache.sync_version(1);
        assert!(matches!(cache.resolve("a"), Lookup::Fetch(_)));

        // response fetched before the mutation is neither cached nor shown
        assert!(!cache.complete(&in_flight, 2));
        assert!(matches!(cache.resolve("b"), Lookup::Fetch(_)));
    }

    #[test]
    fn test_failure_settles_latest_only() {
        let mut cache = QueryCache::<u32>::new();
        let old = ticket(cache.resolve("a"));
        let new = ticket(cache.resolve("b"));
        assert!(!cache.fail(&old));
        assert!(cache.fail(&new));
        assert!(matches!(cache.resolve("b"), Lookup::Fetch(_)));
    }

    #[test]
    fn test_same_version_is_noop() {
        let mut cache = QueryCache::new();
        let t = ticket(cache.resolve("a"));
        cache.complete(&t, 5);
        cache.sync_version(0);
        assert_eq!(cache.resolve("a"), Lookup::Hit(5));
    }
}
