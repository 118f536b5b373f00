//! Reader engine: item source, story validation and the backward scan.
mod engine;
mod memory;
mod scan;
mod source;
mod story;
mod types;
mod validate;

pub use engine::EngineHandle;
pub use memory::{MemorySource, SourceRequest};
pub use scan::{BackwardScanner, ScanEvent, ScanSettings, ScanSink, ScanState};
pub use source::{HackerNewsClient, ItemSource, SourceSettings, HACKER_NEWS_BASE_URL};
pub use story::{DateTimeFormat, Story};
pub use types::{EngineEvent, ItemId, RawItem, ScanError, SourceError, SourceErrorKind};
pub use validate::is_displayable_story;
