use reader_core::{FeedViewModel, StoryRowView};

const LOADING_TEXT: &str = "Loading...";
const END_OF_FEED_TEXT: &str = "-- no more stories --";
const PROMPT_TEXT: &str = "[Enter] load more  [q] quit";
const ERROR_HEADER: &str = "An error has occurred:";

/// Append-only text renderer. Stories already printed are never printed
/// again; the status line is repeated only when it changes.
#[derive(Debug, Default)]
pub struct TextRenderer {
    title_printed: bool,
    printed_stories: usize,
    last_status: Option<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, view: &FeedViewModel) -> Vec<String> {
        let mut lines = Vec::new();

        if !self.title_printed {
            lines.push(view.title.clone());
            lines.push(String::new());
            self.title_printed = true;
        }

        for (index, row) in view.stories.iter().enumerate().skip(self.printed_stories) {
            lines.extend(render_story(index + 1, row));
        }
        self.printed_stories = self.printed_stories.max(view.stories.len());

        let status = status_text(view);
        if self.last_status.as_deref() != Some(status.as_str()) {
            lines.push(status.clone());
            self.last_status = Some(status);
        }

        lines
    }
}

fn render_story(position: usize, row: &StoryRowView) -> [String; 3] {
    [
        format!("{position:>3}. {}", row.title),
        format!("     {}", row.url),
        format!("     {}", row.byline),
    ]
}

fn status_text(view: &FeedViewModel) -> String {
    if let Some(error) = &view.error {
        return format!("{ERROR_HEADER}\n{error}");
    }
    if view.loading {
        return LOADING_TEXT.to_string();
    }
    if view.end_of_feed {
        return END_OF_FEED_TEXT.to_string();
    }
    PROMPT_TEXT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64) -> StoryRowView {
        StoryRowView {
            id,
            title: format!("title {id}"),
            url: "http://url-to-story.com".to_string(),
            byline: "submitted on 2020-07-28 10:11 by author".to_string(),
        }
    }

    fn view(ids: &[u64], loading: bool) -> FeedViewModel {
        FeedViewModel {
            title: "# Hacker News Story List".to_string(),
            stories: ids.iter().copied().map(row).collect(),
            loading,
            ..FeedViewModel::default()
        }
    }

    #[test]
    fn first_frame_has_title_and_loading() {
        let mut renderer = TextRenderer::new();
        let lines = renderer.render(&view(&[], true));

        assert_eq!(lines, vec!["# Hacker News Story List", "", LOADING_TEXT]);
    }

    #[test]
    fn only_new_stories_are_printed() {
        let mut renderer = TextRenderer::new();
        renderer.render(&view(&[9, 7], true));

        let lines = renderer.render(&view(&[9, 7, 6], true));

        assert_eq!(
            lines,
            vec![
                "  3. title 6",
                "     http://url-to-story.com",
                "     submitted on 2020-07-28 10:11 by author",
            ]
        );
    }

    #[test]
    fn status_changes_are_printed_once() {
        let mut renderer = TextRenderer::new();
        renderer.render(&view(&[9], true));

        assert_eq!(renderer.render(&view(&[9], false)), vec![PROMPT_TEXT]);
        assert!(renderer.render(&view(&[9], false)).is_empty());
    }

    #[test]
    fn error_is_shown_below_existing_stories() {
        let mut renderer = TextRenderer::new();
        renderer.render(&view(&[9], false));

        let failed = FeedViewModel {
            error: Some("Unable to load more stories. timeout: slow".to_string()),
            ..view(&[9], false)
        };
        assert_eq!(
            renderer.render(&failed),
            vec![format!(
                "{ERROR_HEADER}\nUnable to load more stories. timeout: slow"
            )]
        );
    }

    #[test]
    fn end_of_feed_notice() {
        let mut renderer = TextRenderer::new();
        let done = FeedViewModel {
            end_of_feed: true,
            ..view(&[], false)
        };
        let lines = renderer.render(&done);
        assert_eq!(lines.last().map(String::as_str), Some(END_OF_FEED_TEXT));
    }
}
