use pretty_assertions::assert_eq;
use stories_core::{reduce, Action, Item, QueryState};

fn item(id: u64, title: &str, author: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        url: format!("https://example.com/{id}"),
        author: author.to_string(),
        num_comments: 0,
        points: 0,
    }
}

fn loaded(items: Vec<Item>) -> QueryState {
    QueryState {
        items,
        ..QueryState::default()
    }
}

#[test]
fn remove_item_drops_every_matching_id_and_keeps_order() {
    let react = item(0, "React", "Jordan Walke");
    let redux = item(1, "Redux", "Dan Abramov, Andrew Clark");
    let dup = item(0, "React again", "Someone");
    let vue = item(2, "Vue", "Evan You");
    let state = loaded(vec![react.clone(), redux.clone(), dup, vue.clone()]);

    let next = reduce(state, Action::RemoveItem(react));

    assert_eq!(next.items, vec![redux, vue]);
    assert!(!next.is_loading);
    assert!(!next.is_error);
    assert_eq!(next.current_page, 0);
}

#[test]
fn remove_item_leaves_input_state_untouched() {
    let react = item(0, "React", "Jordan Walke");
    let state = loaded(vec![react.clone()]);
    let before = state.clone();

    let next = reduce(state.clone(), Action::RemoveItem(react));

    assert!(next.items.is_empty());
    assert_eq!(state, before);
}

#[test]
fn fetch_init_sets_loading_and_clears_error() {
    let state = QueryState {
        is_error: true,
        current_page: 3,
        ..loaded(vec![item(1, "a", "b")])
    };

    let next = reduce(state, Action::FetchInit);

    assert!(next.is_loading);
    assert!(!next.is_error);
    assert_eq!(next.items.len(), 1);
    assert_eq!(next.current_page, 3);
}

#[test]
fn page_zero_success_replaces_items() {
    let a = item(1, "A", "x");
    let b = item(2, "B", "x");
    let c = item(3, "C", "x");

    let next = reduce(
        loaded(vec![a, b]),
        Action::FetchSuccess {
            list: vec![c.clone()],
            page: 0,
        },
    );

    assert_eq!(next.items, vec![c]);
    assert_eq!(next.current_page, 0);
}

#[test]
fn later_page_success_appends_items() {
    let a = item(1, "A", "x");
    let b = item(2, "B", "x");
    let state = reduce(loaded(vec![a.clone()]), Action::FetchInit);

    let next = reduce(
        state,
        Action::FetchSuccess {
            list: vec![b.clone()],
            page: 1,
        },
    );

    assert_eq!(next.items, vec![a, b]);
    assert_eq!(next.current_page, 1);
    assert!(!next.is_loading);
    assert!(!next.is_error);
}

#[test]
fn init_then_failure_keeps_items() {
    let items = vec![item(1, "A", "x"), item(2, "B", "y")];
    let state = QueryState {
        current_page: 2,
        ..loaded(items.clone())
    };

    let state = reduce(state, Action::FetchInit);
    let state = reduce(state, Action::FetchFailure);

    assert!(!state.is_loading);
    assert!(state.is_error);
    assert_eq!(state.items, items);
    assert_eq!(state.current_page, 2);
}
