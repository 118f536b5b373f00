use std::sync::{mpsc, Arc};
use std::thread;

use reader_logging::{reader_error, reader_info};

use crate::{
    BackwardScanner, EngineEvent, HackerNewsClient, ItemSource, ScanError, ScanSettings,
    SourceError, SourceSettings,
};

enum EngineCommand {
    LoadStories { count: usize },
}

/// Runs one [`BackwardScanner`] on a background thread.
///
/// Commands are handled strictly in order, so the scanner never sees two
/// overlapping requests.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(source: Arc<dyn ItemSource>, settings: ScanSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let scanner = BackwardScanner::new(source).with_settings(settings);

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    reader_error!("failed to start engine runtime: {}", err);
                    let _ = event_tx.send(EngineEvent::Failed(ScanError::Source(
                        SourceError::transport(err.to_string()),
                    )));
                    return;
                }
            };
            let mut scanner = scanner;
            while let Ok(command) = cmd_rx.recv() {
                runtime.block_on(handle_command(&mut scanner, command, &event_tx));
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Engine reading from the Hacker News API.
    pub fn hacker_news(
        source_settings: SourceSettings,
        scan_settings: ScanSettings,
    ) -> Result<Self, SourceError> {
        let client = HackerNewsClient::new(source_settings)?;
        Ok(Self::new(Arc::new(client), scan_settings))
    }

    pub fn load_stories(&self, count: usize) {
        let _ = self.cmd_tx.send(EngineCommand::LoadStories { count });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Block until the next event. `None` once the worker has gone away.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    scanner: &mut BackwardScanner,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadStories { count } => {
            let event = load_stories(scanner, count, event_tx).await;
            let _ = event_tx.send(event);
        }
    }
}

async fn load_stories(
    scanner: &mut BackwardScanner,
    count: usize,
    event_tx: &mpsc::Sender<EngineEvent>,
) -> EngineEvent {
    let mut loaded = 0;
    while loaded < count {
        match scanner.next_story().await {
            Ok(Some(story)) => {
                loaded += 1;
                let _ = event_tx.send(EngineEvent::StoryLoaded(story));
            }
            Ok(None) => {
                reader_info!("feed exhausted after {} stories in this batch", loaded);
                return EngineEvent::Exhausted { loaded };
            }
            Err(err) => return EngineEvent::Failed(err),
        }
    }
    EngineEvent::BatchFinished {
        requested: count,
        loaded,
    }
}
