use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_error, engine_info};
use stories_core::{Effect, FetchedPage, Item, Msg};
use stories_engine::{EngineEvent, EngineHandle, Hit, KeyValueStore};

const EVENT_POLL: Duration = Duration::from_millis(50);

/// Executes effects produced by `update` and feeds engine results back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Box<dyn KeyValueStore + Send>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        store: Box<dyn KeyValueStore + Send>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        let runner = Self { engine, store };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { request_id, url } => {
                    engine_info!("EnqueueFetch request_id={} url={}", request_id, url);
                    self.engine.enqueue(request_id, url);
                }
                Effect::PersistTerm { key, value } => {
                    engine_debug!("PersistTerm key={} value_len={}", key, value.len());
                    // The working term stays in memory either way.
                    if let Err(err) = self.store.set(&key, &value) {
                        engine_error!("Failed to persist `{}`: {}", key, err);
                    }
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || {
            forward_events(|timeout| engine.recv_timeout(timeout), &msg_tx);
        });
    }
}

/// Forwards engine events as messages until either side goes away.
fn forward_events(
    recv: impl Fn(Duration) -> Result<EngineEvent, RecvTimeoutError>,
    msg_tx: &mpsc::Sender<Msg>,
) {
    loop {
        match recv(EVENT_POLL) {
            Ok(event) => {
                if msg_tx.send(map_event(event)).is_err() {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                engine_error!("Fetch engine stopped; no further results will arrive");
                break;
            }
        }
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted {
            request_id,
            url,
            result,
        } => Msg::FetchCompleted {
            request_id,
            url,
            result: result
                .map(|response| FetchedPage {
                    hits: response.hits.into_iter().map(map_hit).collect(),
                    page: response.page,
                })
                .map_err(|err| err.to_string()),
        },
    }
}

fn map_hit(hit: Hit) -> Item {
    Item {
        id: hit.object_id,
        title: hit.title,
        url: hit.url,
        author: hit.author,
        num_comments: hit.num_comments,
        points: hit.points,
    }
}
