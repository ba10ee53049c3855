//! Blog post records and list selection.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Category the filter toggle narrows the list to by default.
pub const PRESENTATION_CATEGORY: &str = "プレゼン資料";

/// A single blog post.
///
/// Posts have no identity beyond their position in the list; two posts with
/// identical fields are still shown twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Publication timestamp (local time, no zone).
    pub publish_date: NaiveDateTime,
    /// Author handle.
    pub author: String,
    /// Category shown as a badge; also the filter key.
    pub category: String,
    /// Short description, shown clipped to a few lines.
    pub summary: String,
    /// Free-form tags rendered as a wrapping chip cluster.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Publication date formatted as `yyyy-mm-dd`.
    pub fn date_label(&self) -> String {
        self.publish_date.format("%Y-%m-%d").to_string()
    }
}

/// Which posts the list shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostFilter {
    /// Every post.
    #[default]
    All,
    /// Only posts whose category equals the given name exactly.
    Category(String),
}

impl PostFilter {
    /// Whether `post` passes this filter.
    pub fn matches(&self, post: &BlogPost) -> bool {
        match self {
            PostFilter::All => true,
            PostFilter::Category(name) => post.category == *name,
        }
    }
}

/// Apply `filter` and order newest first.
///
/// The sort is stable: posts published at the same instant keep their
/// source order.
pub fn select_posts<'a>(posts: &'a [BlogPost], filter: &PostFilter) -> Vec<&'a BlogPost> {
    let mut selected: Vec<&BlogPost> = posts.iter().filter(|p| filter.matches(p)).collect();
    selected.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(date: (i32, u32, u32), category: &str, summary: &str) -> BlogPost {
        BlogPost {
            publish_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            author: "notoroid".to_string(),
            category: category.to_string(),
            summary: summary.to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn select_all_sorts_newest_first() {
        let posts = vec![
            post((2022, 1, 1), "a", "old"),
            post((2024, 1, 1), "b", "new"),
            post((2023, 1, 1), "a", "mid"),
        ];

        let summaries: Vec<&str> = select_posts(&posts, &PostFilter::All)
            .iter()
            .map(|p| p.summary.as_str())
            .collect();

        assert_eq!(summaries, vec!["new", "mid", "old"]);
    }

    #[test]
    fn category_filter_keeps_exact_matches_only() {
        let posts = vec![
            post((2022, 1, 1), PRESENTATION_CATEGORY, "keep"),
            post((2024, 1, 1), "技術メモ", "drop"),
            post((2023, 1, 1), "プレゼン", "drop too"),
        ];

        let filter = PostFilter::Category(PRESENTATION_CATEGORY.to_string());
        let selected = select_posts(&posts, &filter);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].summary, "keep");
    }

    #[test]
    fn equal_dates_keep_source_order() {
        let posts = vec![
            post((2023, 5, 5), "a", "first"),
            post((2023, 5, 5), "a", "second"),
        ];

        let selected = select_posts(&posts, &PostFilter::All);

        assert_eq!(selected[0].summary, "first");
        assert_eq!(selected[1].summary, "second");
    }

    #[test]
    fn date_label_is_iso_day() {
        assert_eq!(post((2023, 12, 9), "a", "s").date_label(), "2023-12-09");
    }

    #[test]
    fn tags_default_to_empty_when_missing() {
        let json = r#"{
            "publish_date": "2023-12-09T14:30:00",
            "author": "notoroid",
            "category": "プレゼン資料",
            "summary": "s"
        }"#;

        let parsed: BlogPost = serde_json::from_str(json).unwrap();

        assert!(parsed.tags.is_empty());
        assert_eq!(parsed.date_label(), "2023-12-09");
    }
}
