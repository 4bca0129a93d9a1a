use crate::{Item, QueryState};

/// Fetch lifecycle and list edits. The set is closed: there is no way to
/// hand the reducer an action it does not understand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchInit,
    FetchSuccess { list: Vec<Item>, page: u32 },
    FetchFailure,
    RemoveItem(Item),
}

/// Pure reducer: consumes the previous state and returns the next one.
///
/// A successful fetch of page 0 replaces the list; any other page is appended
/// to it.
pub fn reduce(state: QueryState, action: Action) -> QueryState {
    match action {
        Action::FetchInit => QueryState {
            is_loading: true,
            is_error: false,
            ..state
        },
        Action::FetchSuccess { list, page } => {
            let items = if page == 0 {
                list
            } else {
                let mut items = state.items;
                items.extend(list);
                items
            };
            QueryState {
                items,
                is_loading: false,
                is_error: false,
                current_page: page,
            }
        }
        Action::FetchFailure => QueryState {
            is_loading: false,
            is_error: true,
            ..state
        },
        Action::RemoveItem(removed) => {
            let mut state = state;
            state.items.retain(|item| item.id != removed.id);
            state
        }
    }
}
