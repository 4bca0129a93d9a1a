use crate::{Item, ItemId, RequestId, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial mount: search page 0 for the restored term.
    Started,
    /// User edited the search input.
    InputChanged(String),
    /// User submitted the search form with the current input.
    SearchSubmitted,
    /// User picked one of the recent searches.
    LastSearchSelected(String),
    /// User asked for the next page of the current search.
    MoreClicked,
    /// User dismissed an item from the result list.
    RemoveClicked(ItemId),
    /// User clicked a column header.
    SortClicked(SortKey),
    /// The fetch issued for `url` resolved. The error text is diagnostic only.
    FetchCompleted {
        request_id: RequestId,
        url: String,
        result: Result<FetchedPage, String>,
    },
}

/// Successful payload of a search request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchedPage {
    pub hits: Vec<Item>,
    /// The API may omit the page number.
    pub page: Option<u32>,
}
