use crate::{Item, SortState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_term: String,
    /// Result list in display order.
    pub items: Vec<Item>,
    pub is_loading: bool,
    pub is_error: bool,
    pub show_more: bool,
    pub current_page: u32,
    pub recent_searches: Vec<String>,
    pub sort: SortState,
    pub dirty: bool,
}
