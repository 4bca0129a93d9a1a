use crate::reducer::{reduce, Action};
use crate::search_url::extract_term;
use crate::view_model::AppViewModel;
use crate::{Effect, PersistedTerm, RequestHistory, RequestId, SearchEndpoint, SortKey, SortState};

pub type ItemId = u64;

/// One search hit. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: i64,
}

/// Result list plus fetch lifecycle flags. `is_loading` and `is_error` are
/// never both set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub items: Vec<Item>,
    pub is_loading: bool,
    pub is_error: bool,
    pub current_page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    endpoint: SearchEndpoint,
    term: PersistedTerm,
    history: RequestHistory,
    query: QueryState,
    sort: SortState,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new(endpoint: SearchEndpoint, term: PersistedTerm) -> Self {
        Self {
            endpoint,
            term,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search_term: self.term.value().to_string(),
            items: self.sort.apply(&self.query.items),
            is_loading: self.query.is_loading,
            is_error: self.query.is_error,
            show_more: !self.query.is_loading && !self.query.is_error,
            current_page: self.query.current_page,
            recent_searches: self.history.recent_terms(),
            sort: self.sort,
            dirty: self.dirty,
        }
    }

    pub fn term(&self) -> &str {
        self.term.value()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn history(&self) -> &RequestHistory {
        &self.history
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.history.recent_terms()
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn dispatch(&mut self, action: Action) {
        let query = std::mem::take(&mut self.query);
        self.query = reduce(query, action);
        self.dirty = true;
    }

    pub(crate) fn set_term(&mut self, value: String) -> Option<Effect> {
        let write = self.term.set(value);
        if write.is_some() {
            self.dirty = true;
        }
        write
    }

    /// Makes `(term, page)` the current target and starts its fetch.
    pub(crate) fn request(&mut self, term: &str, page: u32) -> Effect {
        let url = self.endpoint.build_url(term, page);
        self.history.push(url.clone());
        self.dispatch(Action::FetchInit);
        self.last_request_id += 1;
        Effect::Fetch {
            request_id: self.last_request_id,
            url,
        }
    }

    /// Term of the current target, which can differ from the input box.
    pub(crate) fn current_search_term(&self) -> Option<String> {
        self.history
            .current()
            .and_then(|url| extract_term(url).ok())
    }

    pub(crate) fn find_item(&self, id: ItemId) -> Option<Item> {
        self.query.items.iter().find(|item| item.id == id).cloned()
    }

    pub(crate) fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggle(key);
        self.dirty = true;
    }
}
