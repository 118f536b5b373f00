use crate::view_model::{FeedViewModel, StoryRowView, GENERIC_FAILURE_MESSAGE, LIST_TITLE};

pub type StoryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    pub initial_stories: usize,
    pub batch_size: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            initial_stories: 30,
            batch_size: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Exhausted,
    Failed,
}

/// A story as the feed shows it, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedStory {
    pub id: StoryId,
    pub title: String,
    pub url: String,
    pub author: String,
    pub submitted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedState {
    settings: FeedSettings,
    phase: FeedPhase,
    stories: Vec<FeedStory>,
    error: Option<String>,
    dirty: bool,
}

impl FeedState {
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn view(&self) -> FeedViewModel {
        FeedViewModel {
            title: LIST_TITLE.to_string(),
            stories: self
                .stories
                .iter()
                .map(|story| StoryRowView {
                    id: story.id,
                    title: story.title.clone(),
                    url: story.url.clone(),
                    byline: format!("submitted on {} by {}", story.submitted, story.author),
                })
                .collect(),
            loading: self.phase == FeedPhase::Loading,
            end_of_feed: self.phase == FeedPhase::Exhausted,
            error: self
                .error
                .as_ref()
                .map(|detail| format!("{GENERIC_FAILURE_MESSAGE} {detail}")),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn settings(&self) -> FeedSettings {
        self.settings
    }

    pub fn story_count(&self) -> usize {
        self.stories.len()
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_loading(&mut self) {
        self.phase = FeedPhase::Loading;
        self.dirty = true;
    }

    pub(crate) fn push_story(&mut self, story: FeedStory) {
        self.stories.push(story);
        self.dirty = true;
    }

    pub(crate) fn set_phase(&mut self, phase: FeedPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.dirty = true;
        }
    }

    pub(crate) fn fail(&mut self, detail: String) {
        self.phase = FeedPhase::Failed;
        self.error = Some(detail);
        self.dirty = true;
    }
}
