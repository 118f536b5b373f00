use crate::{RawItem, Story};

const STORY_KIND: &str = "story";

/// True when `item` is a live story carrying every field a [`Story`] needs.
/// Nothing beyond `dead`, `deleted`, `type`, `by`, `time`, `title` and `url`
/// is inspected.
pub fn is_displayable_story(item: &RawItem) -> bool {
    item.dead != Some(true)
        && item.deleted != Some(true)
        && item.kind.as_deref() == Some(STORY_KIND)
        && item.by.is_some()
        && item.time.is_some()
        && item.title.is_some()
        && item.url.is_some()
}

impl TryFrom<RawItem> for Story {
    /// The rejected item is handed back untouched.
    type Error = RawItem;

    fn try_from(item: RawItem) -> Result<Self, Self::Error> {
        if !is_displayable_story(&item) {
            return Err(item);
        }
        match item {
            RawItem {
                id,
                by: Some(author),
                time: Some(created_at),
                title: Some(title),
                url: Some(url),
                ..
            } => Ok(Story {
                id,
                title,
                url,
                author,
                created_at,
            }),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story_item(id: u64) -> RawItem {
        RawItem {
            id,
            by: Some("dhouston".into()),
            time: Some(1_175_714_200),
            title: Some("My YC app: Dropbox - Throw away your USB drive".into()),
            url: Some("http://www.getdropbox.com/u/2/screencast.html".into()),
            kind: Some("story".into()),
            dead: None,
            deleted: None,
        }
    }

    #[test]
    fn accepts_complete_story() {
        assert!(is_displayable_story(&story_item(8863)));
    }

    #[test]
    fn explicit_false_flags_are_fine() {
        let item = RawItem {
            dead: Some(false),
            deleted: Some(false),
            ..story_item(1)
        };
        assert!(is_displayable_story(&item));
    }

    #[test]
    fn rejects_dead_and_deleted() {
        let dead = RawItem {
            dead: Some(true),
            ..story_item(1)
        };
        let deleted = RawItem {
            deleted: Some(true),
            ..story_item(1)
        };
        assert!(!is_displayable_story(&dead));
        assert!(!is_displayable_story(&deleted));
    }

    #[test]
    fn rejects_other_kinds() {
        for kind in ["comment", "job", "poll", "pollopt"] {
            let item = RawItem {
                kind: Some(kind.into()),
                ..story_item(1)
            };
            assert!(!is_displayable_story(&item), "{kind} accepted");
        }
        let untyped = RawItem {
            kind: None,
            ..story_item(1)
        };
        assert!(!is_displayable_story(&untyped));
    }

    #[test]
    fn rejects_missing_fields() {
        let base = story_item(1);
        let missing = [
            RawItem { by: None, ..base.clone() },
            RawItem { time: None, ..base.clone() },
            RawItem { title: None, ..base.clone() },
            RawItem { url: None, ..base.clone() },
        ];
        for item in missing {
            assert!(!is_displayable_story(&item), "{item:?} accepted");
        }
    }

    #[test]
    fn converts_valid_item_into_story() {
        let story = Story::try_from(story_item(8863)).unwrap();
        assert_eq!(story.id(), 8863);
        assert_eq!(story.author(), "dhouston");
        assert_eq!(story.created_at(), 1_175_714_200);
        assert_eq!(story.url(), "http://www.getdropbox.com/u/2/screencast.html");
    }

    #[test]
    fn conversion_hands_back_rejected_item() {
        let poll = RawItem {
            id: 3,
            kind: Some("poll".into()),
            ..RawItem::default()
        };
        assert_eq!(Story::try_from(poll.clone()), Err(poll));
    }

    #[test]
    fn iso_date_uses_utc_millis() {
        let story = Story::try_from(RawItem {
            time: Some(1_595_931_102),
            ..story_item(1)
        })
        .unwrap();
        assert_eq!(
            story.created_at_date(crate::DateTimeFormat::Iso),
            "2020-07-28T10:11:42.000Z"
        );
    }
}
