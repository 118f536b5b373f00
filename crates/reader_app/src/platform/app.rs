use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::{Context, Result};
use reader_core::{update, FeedState, Msg};
use reader_engine::EngineHandle;
use reader_logging::reader_info;

use super::config::{config_path_from_args, load_config};
use super::effects::EffectRunner;
use super::input::{spawn_stdin_reader, InputEvent};
use super::logging::{self, LOG_FILENAME};
use super::ui::render::TextRenderer;

/// How long the loop waits for input before checking the engine again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> Result<()> {
    let config_path = config_path_from_args(std::env::args());
    let config = load_config(config_path.as_deref())?;
    logging::initialize(config.log_destination, Path::new(LOG_FILENAME));
    reader_info!("Starting reader against {}", config.base_url);

    let engine = EngineHandle::hacker_news(config.source_settings(), config.scan_settings())
        .context("failed to set up the item source")?;
    let runner = EffectRunner::new(engine);

    let (input_tx, input_rx) = mpsc::channel();
    spawn_stdin_reader(input_tx);

    let mut session = Session {
        state: FeedState::new(config.feed_settings()),
        runner,
        renderer: TextRenderer::new(),
    };
    session.dispatch(Msg::Started)?;

    loop {
        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(InputEvent::LoadMore) => session.dispatch(Msg::NearBottom)?,
            Ok(InputEvent::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
        for msg in session.runner.poll() {
            session.dispatch(msg)?;
        }
        session.dispatch(Msg::Tick)?;
    }

    reader_info!("Reader closed after {} stories", session.state.story_count());
    Ok(())
}

struct Session {
    state: FeedState,
    runner: EffectRunner,
    renderer: TextRenderer,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.runner.enqueue(effects);
        if was_dirty {
            let mut stdout = io::stdout().lock();
            for line in self.renderer.render(&view) {
                writeln!(stdout, "{line}")?;
            }
            stdout.flush()?;
        }
        Ok(())
    }
}
