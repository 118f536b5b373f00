//! Reader core: pure feed state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{FeedPhase, FeedSettings, FeedState, FeedStory, StoryId};
pub use update::update;
pub use view_model::{FeedViewModel, StoryRowView, GENERIC_FAILURE_MESSAGE, LIST_TITLE};
