use crate::StoryId;

pub const LIST_TITLE: &str = "# Hacker News Story List";
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to load more stories.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedViewModel {
    pub title: String,
    pub stories: Vec<StoryRowView>,
    pub loading: bool,
    pub end_of_feed: bool,
    pub error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRowView {
    pub id: StoryId,
    pub title: String,
    pub url: String,
    pub byline: String,
}
