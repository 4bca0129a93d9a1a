//! Stories engine: search API client, background fetch execution and key-value persistence.
mod engine;
mod fetch;
mod persist;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{
    ensure_state_dir, AtomicFileWriter, KeyValueStore, MemoryKeyValueStore, PersistError,
};
pub use types::{EngineEvent, FailureKind, FetchError, Hit, RequestId, SearchResponse};
