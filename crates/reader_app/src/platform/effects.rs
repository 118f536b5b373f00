use reader_core::{Effect, FeedStory, Msg};
use reader_engine::{DateTimeFormat, EngineEvent, EngineHandle, Story};
use reader_logging::{reader_info, reader_warn};

/// Executes core effects against the engine and turns engine events back
/// into core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadStories { count } => {
                    reader_info!("LoadStories count={}", count);
                    self.engine.load_stories(count);
                }
            }
        }
    }

    /// Drain every engine event that has arrived so far.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::StoryLoaded(story) => Msg::StoryLoaded(map_story(&story)),
        EngineEvent::BatchFinished { requested, loaded } => {
            reader_info!("Batch finished: {}/{} stories", loaded, requested);
            Msg::BatchFinished
        }
        EngineEvent::Exhausted { loaded } => {
            reader_info!("Feed exhausted after {} more stories", loaded);
            Msg::Exhausted
        }
        EngineEvent::Failed(err) => {
            reader_warn!("Loading stories failed: {}", err);
            Msg::LoadFailed {
                message: err.to_string(),
            }
        }
    }
}

fn map_story(story: &Story) -> FeedStory {
    FeedStory {
        id: story.id(),
        title: story.title().to_string(),
        url: story.url().to_string(),
        author: story.author().to_string(),
        submitted: story.created_at_date(DateTimeFormat::Locale),
    }
}
