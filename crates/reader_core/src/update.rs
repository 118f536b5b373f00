use crate::{Effect, FeedPhase, FeedState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FeedState, msg: Msg) -> (FeedState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.phase() == FeedPhase::Idle {
                state.begin_loading();
                vec![Effect::LoadStories {
                    count: state.settings().initial_stories,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::NearBottom => {
            // Only one batch in flight; the engine must never see overlapping pulls.
            if state.phase() == FeedPhase::Ready {
                state.begin_loading();
                vec![Effect::LoadStories {
                    count: state.settings().batch_size,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::StoryLoaded(story) => {
            state.push_story(story);
            Vec::new()
        }
        Msg::BatchFinished => {
            if state.phase() == FeedPhase::Loading {
                state.set_phase(FeedPhase::Ready);
            }
            Vec::new()
        }
        Msg::Exhausted => {
            state.set_phase(FeedPhase::Exhausted);
            Vec::new()
        }
        Msg::LoadFailed { message } => {
            state.fail(message);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
