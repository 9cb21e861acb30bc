// src/formatting/highlights.rs
//! Renders a bookmark's annotations as a markdown highlights block.

use crate::model::{Annotation, Bookmark};
use crate::types::ApiUrl;

/// Formats annotations into a single `## Highlights` block.
///
/// The heading is always emitted, even with no annotations to render.
/// Each annotation becomes a callout keyed by its color, dated to the UTC
/// calendar day it was created, with a deep link back to the highlight on
/// the Readeck instance. Input order is preserved; blocks are separated by
/// blank lines.
pub fn format_highlights(
    api_url: &ApiUrl,
    bookmark: &Bookmark,
    annotations: Option<&[Annotation]>,
) -> String {
    let mut content = String::from("## Highlights\n\n");

    if let Some(annotations) = annotations {
        let blocks: Vec<String> = annotations
            .iter()
            .map(|ann| {
                format!(
                    "> [!{}]+ {} [⤴️]({}/bookmarks/{}#annotation-{}) \n> {}",
                    ann.color,
                    ann.created.format("%Y-%m-%d"),
                    api_url.as_str(),
                    bookmark.id,
                    ann.id,
                    ann.text,
                )
            })
            .collect();
        content.push_str(&blocks.join("\n\n"));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bookmark() -> Bookmark {
        Bookmark {
            id: "b1".to_string(),
            title: "A Title".to_string(),
            url: "https://example.com/a".to_string(),
            href: "https://r.example/bookmarks/b1".to_string(),
            kind: "article".to_string(),
            created: "2024-01-02T10:00:00Z".parse().unwrap(),
            published: None,
            description: String::new(),
            authors: vec![],
        }
    }

    fn annotation(id: &str, color: &str, text: &str, created: &str) -> Annotation {
        Annotation {
            id: id.to_string(),
            color: color.to_string(),
            text: text.to_string(),
            created: created.parse().unwrap(),
        }
    }

    #[test]
    fn renders_callout_with_day_precision_date_and_deep_link() {
        let api_url = ApiUrl::parse("https://r.example").unwrap();
        let annotations = [annotation("a1", "yellow", "foo", "2024-01-02T10:00:00Z")];

        let block = format_highlights(&api_url, &bookmark(), Some(&annotations));

        assert!(block.contains(
            "[!yellow]+ 2024-01-02 [⤴️](https://r.example/bookmarks/b1#annotation-a1)"
        ));
        assert!(block.contains("\n> foo"));
    }

    #[test]
    fn exact_block_shape() {
        let api_url = ApiUrl::parse("https://r.example").unwrap();
        let annotations = [annotation("a1", "yellow", "foo", "2024-01-02T10:00:00Z")];

        let block = format_highlights(&api_url, &bookmark(), Some(&annotations));
        assert_eq!(
            block,
            "## Highlights\n\n\
             > [!yellow]+ 2024-01-02 [⤴️](https://r.example/bookmarks/b1#annotation-a1) \n\
             > foo"
        );
    }

    #[test]
    fn blocks_join_with_blank_line_in_input_order() {
        let api_url = ApiUrl::parse("https://r.example").unwrap();
        let annotations = [
            annotation("a2", "blue", "second saved first", "2024-03-05T23:59:59Z"),
            annotation("a1", "red", "first saved last", "2024-03-04T00:00:00Z"),
        ];

        let block = format_highlights(&api_url, &bookmark(), Some(&annotations));

        let a2 = block.find("#annotation-a2").unwrap();
        let a1 = block.find("#annotation-a1").unwrap();
        assert!(a2 < a1, "input order must be preserved");
        assert!(block.contains("> second saved first\n\n> [!red]+"));
    }

    #[test]
    fn heading_alone_when_annotations_empty_or_absent() {
        let api_url = ApiUrl::parse("https://r.example").unwrap();
        assert_eq!(
            format_highlights(&api_url, &bookmark(), Some(&[])),
            "## Highlights\n\n"
        );
        assert_eq!(
            format_highlights(&api_url, &bookmark(), None),
            "## Highlights\n\n"
        );
    }

    #[test]
    fn date_is_truncated_in_utc() {
        let api_url = ApiUrl::parse("https://r.example").unwrap();
        // 23:30 UTC stays on the same UTC day regardless of local zone.
        let annotations = [annotation("a1", "green", "late", "2024-06-30T23:30:00Z")];
        let block = format_highlights(&api_url, &bookmark(), Some(&annotations));
        assert!(block.contains("]+ 2024-06-30 ["));
    }
}
