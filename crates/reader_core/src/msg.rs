#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The reader opened; load the first page.
    Started,
    /// The user scrolled close to the end of the list.
    NearBottom,
    /// Engine delivered one story.
    StoryLoaded(crate::FeedStory),
    /// Engine finished the requested batch.
    BatchFinished,
    /// Engine has nothing below the last story.
    Exhausted,
    /// Engine hit a fatal error.
    LoadFailed { message: String },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
