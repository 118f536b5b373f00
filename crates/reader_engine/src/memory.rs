//! In-memory item source for tests and offline demos.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::{ItemId, ItemSource, RawItem, SourceError};

/// One request observed by a [`MemorySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRequest {
    MaxItemId,
    Item(ItemId),
}

#[derive(Debug, Clone)]
enum Entry {
    Item(RawItem),
    Failure(SourceError),
}

/// Scriptable [`ItemSource`].
///
/// Ids without an entry answer as absent, the same way the real API answers
/// `null`. Every request is recorded so tests can assert on the exact fetch
/// sequence.
#[derive(Debug, Default)]
pub struct MemorySource {
    max_item_id: Option<ItemId>,
    max_item_failure: Option<SourceError>,
    entries: HashMap<ItemId, Entry>,
    requests: Mutex<Vec<SourceRequest>>,
}

impl MemorySource {
    pub fn new(max_item_id: ItemId) -> Self {
        Self {
            max_item_id: Some(max_item_id),
            ..Self::default()
        }
    }

    pub fn with_item(mut self, item: RawItem) -> Self {
        self.entries.insert(item.id, Entry::Item(item));
        self
    }

    pub fn with_items(self, items: impl IntoIterator<Item = RawItem>) -> Self {
        items.into_iter().fold(self, Self::with_item)
    }

    /// Fetching `id` fails with `error`.
    pub fn with_failure(mut self, id: ItemId, error: SourceError) -> Self {
        self.entries.insert(id, Entry::Failure(error));
        self
    }

    /// Fetching the max id fails with `error`.
    pub fn with_max_item_failure(mut self, error: SourceError) -> Self {
        self.max_item_failure = Some(error);
        self
    }

    pub fn requests(&self) -> Vec<SourceRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Ids fetched so far, in request order.
    pub fn fetched_ids(&self) -> Vec<ItemId> {
        self.requests()
            .into_iter()
            .filter_map(|request| match request {
                SourceRequest::Item(id) => Some(id),
                SourceRequest::MaxItemId => None,
            })
            .collect()
    }

    fn record(&self, request: SourceRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }
}

#[async_trait::async_trait]
impl ItemSource for MemorySource {
    async fn max_item_id(&self) -> Result<ItemId, SourceError> {
        self.record(SourceRequest::MaxItemId);
        if let Some(err) = &self.max_item_failure {
            return Err(err.clone());
        }
        self.max_item_id
            .ok_or_else(|| SourceError::transport("no max item id configured"))
    }

    async fn item(&self, id: ItemId) -> Result<RawItem, SourceError> {
        self.record(SourceRequest::Item(id));
        match self.entries.get(&id) {
            Some(Entry::Item(item)) => Ok(item.clone()),
            Some(Entry::Failure(err)) => Err(err.clone()),
            None => Err(SourceError::absent(id)),
        }
    }
}
