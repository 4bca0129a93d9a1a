use crate::reducer::Action;
use crate::search_url::extract_page;
use crate::{AppState, Effect, FetchedPage, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let term = state.term().to_string();
            vec![state.request(&term, 0)]
        }
        // Submitting is disabled while the input is empty.
        Msg::SearchSubmitted if state.term().is_empty() => Vec::new(),
        Msg::SearchSubmitted => {
            let term = state.term().to_string();
            vec![state.request(&term, 0)]
        }
        Msg::InputChanged(value) => state.set_term(value).into_iter().collect(),
        Msg::LastSearchSelected(term) => {
            let mut effects: Vec<Effect> = state.set_term(term.clone()).into_iter().collect();
            effects.push(state.request(&term, 0));
            effects
        }
        Msg::MoreClicked => match state.current_search_term() {
            Some(term) => {
                let next_page = state.query().current_page + 1;
                vec![state.request(&term, next_page)]
            }
            None => Vec::new(),
        },
        Msg::RemoveClicked(id) => {
            if let Some(item) = state.find_item(id) {
                state.dispatch(Action::RemoveItem(item));
            }
            Vec::new()
        }
        Msg::SortClicked(key) => {
            state.toggle_sort(key);
            Vec::new()
        }
        Msg::FetchCompleted { url, result, .. } => {
            // No staleness check: a late response applies to whatever is current.
            let action = match result {
                Ok(fetched) => success_action(&url, fetched),
                Err(_) => Action::FetchFailure,
            };
            state.dispatch(action);
            Vec::new()
        }
    };

    (state, effects)
}

// A response without `page` is treated as the page that was requested, so a
// page-0 answer still replaces the list (see "Absent `page`" in DESIGN.md).
fn success_action(url: &str, fetched: FetchedPage) -> Action {
    let page = fetched
        .page
        .or_else(|| extract_page(url).ok())
        .unwrap_or(0);
    Action::FetchSuccess {
        list: fetched.hits,
        page,
    }
}
