#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the engine for up to `count` more stories.
    LoadStories { count: usize },
}
