pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET for `url`; the result comes back as `Msg::FetchCompleted`.
    Fetch { request_id: RequestId, url: String },
    /// Write the working search term to the key-value store.
    PersistTerm { key: String, value: String },
}
