use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use stories_core::{update, AppState, Msg, PersistedTerm};
use stories_engine::{EngineHandle, KeyValueStore};

use super::commands::{parse_command, Command, HELP};
use super::config;
use super::effects::EffectRunner;
use super::persistence::FileKeyValueStore;
use super::render::render;

const INPUT_POLL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    let config = config::load()?;
    engine_logging::initialize(
        config.log_destination()?,
        config.log_level()?,
        &config.log_file,
    );
    engine_info!("Starting stories_app api_base={}", config.api_base);

    let endpoint = config.endpoint()?;
    let store = FileKeyValueStore::open(&config.state_dir);
    let term = PersistedTerm::restore(
        config.term_key.clone(),
        store.get(&config.term_key),
        &config.default_term,
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let engine = EngineHandle::new(config.fetch_settings());
    let runner = EffectRunner::new(engine.clone(), Box::new(store), msg_tx);
    let mut app = App {
        state: AppState::new(endpoint, term),
        runner,
    };

    let line_rx = spawn_stdin_reader();
    let mut out = io::stdout();
    writeln!(out, "type `help` for commands")?;

    app.dispatch(Msg::Started);
    loop {
        while let Ok(msg) = msg_rx.try_recv() {
            app.dispatch(msg);
        }

        match line_rx.recv_timeout(INPUT_POLL) {
            Ok(line) => match parse_command(&line, &app.state.recent_searches()) {
                Ok(Command::Send(msgs)) => {
                    for msg in msgs {
                        app.dispatch(msg);
                    }
                }
                Ok(Command::Help) => writeln!(out, "{HELP}")?,
                Ok(Command::Quit) => break,
                Err(message) => writeln!(out, "{message}")?,
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        app.render_if_dirty(&mut out)?;
    }

    engine.shutdown();
    engine_info!("Exiting stories_app");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }

    fn render_if_dirty(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.state.consume_dirty() {
            write!(out, "{}", render(&self.state.view()))?;
            out.flush()?;
        }
        Ok(())
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    engine_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
    });
    line_rx
}
