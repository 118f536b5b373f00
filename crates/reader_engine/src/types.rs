use std::fmt;

use serde::Deserialize;

use crate::Story;

/// Identifier of an item in the remote store. Ids are positive and dense-ish,
/// but any id below the current maximum may still be missing.
pub type ItemId = u64;

/// Untyped item payload as served by the store. Every field except `id` may
/// be missing, whatever the item kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawItem {
    pub id: ItemId,
    #[serde(default)]
    pub by: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub dead: Option<bool>,
    #[serde(default)]
    pub deleted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    StoryLoaded(Story),
    BatchFinished { requested: usize, loaded: usize },
    Exhausted { loaded: usize },
    Failed(ScanError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SourceError {
    pub kind: SourceErrorKind,
    pub message: String,
}

impl SourceError {
    pub(crate) fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The store answered successfully but holds nothing at `id`.
    pub fn absent(id: ItemId) -> Self {
        Self::new(
            SourceErrorKind::ItemAbsent { id },
            format!("Unable to load item {id}"),
        )
    }

    /// The request never completed.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Transport, message)
    }

    /// The store answered with a non-success status.
    pub fn request_failed(status: u16, reason: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::RequestFailed { status }, reason)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Malformed, message)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self.kind, SourceErrorKind::ItemAbsent { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            SourceErrorKind::Transport | SourceErrorKind::Timeout
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceErrorKind {
    Transport,
    Timeout,
    RequestFailed { status: u16 },
    ItemAbsent { id: ItemId },
    Malformed,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    InvalidUrl,
}

impl fmt::Display for SourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceErrorKind::Transport => write!(f, "transport error"),
            SourceErrorKind::Timeout => write!(f, "timeout"),
            SourceErrorKind::RequestFailed { status } => write!(f, "request failed ({status})"),
            SourceErrorKind::ItemAbsent { id } => write!(f, "item {id} absent"),
            SourceErrorKind::Malformed => write!(f, "malformed response"),
            SourceErrorKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            SourceErrorKind::InvalidUrl => write!(f, "invalid url"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("scan halted after an earlier failure at item {at:?}")]
    Halted { at: Option<ItemId> },
}

impl ScanError {
    /// The source error that stopped the scan, if this is not a `Halted` echo.
    pub fn source_error(&self) -> Option<&SourceError> {
        match self {
            ScanError::Source(err) => Some(err),
            ScanError::Halted { .. } => None,
        }
    }
}
