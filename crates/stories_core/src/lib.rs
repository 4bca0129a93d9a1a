//! Stories core: pure search state machine, request history and view-model helpers.
mod effect;
mod history;
mod msg;
mod reducer;
mod search_url;
mod sort;
mod state;
mod term;
mod update;
mod view_model;

pub use effect::{Effect, RequestId};
pub use history::{derive_recent, RequestHistory, RECENT_SEARCH_LIMIT};
pub use msg::{FetchedPage, Msg};
pub use reducer::{reduce, Action};
pub use search_url::{
    build_url, extract_page, extract_term, SearchEndpoint, UrlError, DEFAULT_API_BASE,
};
pub use sort::{SortKey, SortState};
pub use state::{AppState, Item, ItemId, QueryState};
pub use term::{PersistedTerm, DEFAULT_SEARCH_TERM, SEARCH_TERM_KEY};
pub use update::update;
pub use view_model::AppViewModel;
