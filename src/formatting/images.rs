// src/formatting/images.rs
//! Rewrites image links in article markdown to the images subdirectory.

use crate::constants::IMAGES_DIR_NAME;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches markdown image links whose target is in the document's own
/// directory: `![alt](./name)`. Plain links and absolute or parent-relative
/// targets do not match.
static SAME_DIR_IMAGE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(\./([^)]+)\)").expect("image link pattern is valid"));

/// Rewrites same-directory image references to the images subdirectory.
///
/// Multipart articles reference their bundled images as `./<name>`; on disk
/// those images land under `<folder>/imgs/`, so note text must point at
/// `./imgs/<name>`. Every other link form is left untouched.
pub fn rewrite_image_paths(markdown: &str) -> String {
    SAME_DIR_IMAGE_LINK
        .replace_all(markdown, |caps: &Captures<'_>| {
            format!("![{}](./{}/{})", &caps[1], IMAGES_DIR_NAME, &caps[2])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rewrites_same_directory_image_link() {
        assert_eq!(
            rewrite_image_paths("![alt](./pic.png)"),
            "![alt](./imgs/pic.png)"
        );
    }

    #[test]
    fn leaves_plain_links_untouched() {
        assert_eq!(
            rewrite_image_paths("[text](https://example.com)"),
            "[text](https://example.com)"
        );
        assert_eq!(rewrite_image_paths("[text](./local.md)"), "[text](./local.md)");
    }

    #[test]
    fn leaves_absolute_image_links_untouched() {
        assert_eq!(
            rewrite_image_paths("![alt](https://cdn.example.com/pic.png)"),
            "![alt](https://cdn.example.com/pic.png)"
        );
        assert_eq!(rewrite_image_paths("![alt](../pic.png)"), "![alt](../pic.png)");
    }

    #[test]
    fn rewrites_all_occurrences_inside_prose() {
        let input = "Intro ![a](./one.png) middle ![b](./two.jpg) end";
        assert_eq!(
            rewrite_image_paths(input),
            "Intro ![a](./imgs/one.png) middle ![b](./imgs/two.jpg) end"
        );
    }

    #[test]
    fn empty_alt_text_is_preserved() {
        assert_eq!(rewrite_image_paths("![](./p.gif)"), "![](./imgs/p.gif)");
    }
}
