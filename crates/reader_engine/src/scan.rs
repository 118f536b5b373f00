//! Backward scan over the item id space.
//!
//! A [`BackwardScanner`] starts at the store's current maximum id and walks
//! down one id at a time. Each call to [`BackwardScanner::next_story`] keeps
//! fetching until it finds a displayable story, reaches the floor id, or hits
//! a fatal error. Between calls the scanner is passive: no fetch happens
//! until the caller asks for the next story.
//!
//! ```text
//! Uninitialized --max id--> Scanning --story--> Scanning (returns)
//!                              |  \--skip--> Scanning (loops)
//!                              |---cursor at floor--> Exhausted
//!                              \---fatal error------> Failed
//! ```

use std::sync::Arc;

use futures_util::stream::{self, Stream};
use reader_logging::{reader_debug, reader_error, reader_warn};

use crate::{ItemId, ItemSource, ScanError, SourceError, Story};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    /// Lowest id the scan will fetch. The Hacker News id space starts at 1.
    pub floor_id: ItemId,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self { floor_id: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Uninitialized,
    Scanning,
    Exhausted,
    Failed,
}

/// Notifications about recoverable conditions inside a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    Started { max_item_id: ItemId },
    ItemAbsent { id: ItemId },
}

pub trait ScanSink: Send + Sync {
    fn emit(&self, event: ScanEvent);
}

struct NullSink;

impl ScanSink for NullSink {
    fn emit(&self, _event: ScanEvent) {}
}

pub struct BackwardScanner {
    source: Arc<dyn ItemSource>,
    settings: ScanSettings,
    sink: Arc<dyn ScanSink>,
    cursor: Option<ItemId>,
    state: ScanState,
}

impl BackwardScanner {
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self {
            source,
            settings: ScanSettings::default(),
            sink: Arc::new(NullSink),
            cursor: None,
            state: ScanState::Uninitialized,
        }
    }

    pub fn with_settings(mut self, settings: ScanSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn ScanSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Last id the scan attempted, `None` before the max id is known.
    pub fn cursor(&self) -> Option<ItemId> {
        self.cursor
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Produce the next displayable story below the previous one.
    ///
    /// Returns `Ok(None)` once the floor id has been scanned, and keeps doing
    /// so without fetching. Absent and invalid items are skipped inside the
    /// call. Any other source error is returned as is and leaves the scanner
    /// in [`ScanState::Failed`]; later calls answer [`ScanError::Halted`].
    pub async fn next_story(&mut self) -> Result<Option<Story>, ScanError> {
        loop {
            let id = match self.state {
                ScanState::Exhausted => return Ok(None),
                ScanState::Failed => return Err(ScanError::Halted { at: self.cursor }),
                ScanState::Uninitialized => match self.source.max_item_id().await {
                    Ok(max_item_id) => {
                        reader_debug!("scan starting at max item id {}", max_item_id);
                        self.sink.emit(ScanEvent::Started { max_item_id });
                        if max_item_id < self.settings.floor_id {
                            self.state = ScanState::Exhausted;
                            return Ok(None);
                        }
                        self.state = ScanState::Scanning;
                        max_item_id
                    }
                    Err(err) => return Err(self.fail(None, err)),
                },
                ScanState::Scanning => match self.cursor {
                    Some(cursor) if cursor > self.settings.floor_id => cursor - 1,
                    _ => {
                        reader_debug!("scan reached floor id {}", self.settings.floor_id);
                        self.state = ScanState::Exhausted;
                        return Ok(None);
                    }
                },
            };

            self.cursor = Some(id);
            match self.source.item(id).await {
                Ok(item) => {
                    // Non-stories and incomplete items are routine; skip quietly.
                    if let Ok(story) = Story::try_from(item) {
                        return Ok(Some(story));
                    }
                }
                Err(err) if err.is_absent() => {
                    reader_warn!("item with id {} was not found, skipping", id);
                    self.sink.emit(ScanEvent::ItemAbsent { id });
                }
                Err(err) => return Err(self.fail(Some(id), err)),
            }
        }
    }

    /// Adapt the scanner into a stream of stories. The stream ends at the
    /// floor, or right after yielding the first fatal error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Story, ScanError>> + Send {
        stream::unfold(Some(self), |scanner| async move {
            let mut scanner = scanner?;
            match scanner.next_story().await {
                Ok(Some(story)) => Some((Ok(story), Some(scanner))),
                Ok(None) => None,
                Err(err) => Some((Err(err), None)),
            }
        })
    }

    fn fail(&mut self, id: Option<ItemId>, err: SourceError) -> ScanError {
        self.state = ScanState::Failed;
        let target = id.map_or_else(|| "max item id".to_string(), |id| id.to_string());
        if err.is_transport() {
            reader_debug!("{} while trying to get {}", err, target);
        } else {
            reader_error!(
                "{}: \"{}\" while trying to get {}",
                err.kind,
                err.message,
                target
            );
        }
        ScanError::Source(err)
    }
}
