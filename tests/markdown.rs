//! Markdown widget behavior over realistic rendered pages.

use peekdoc::viewer::markdown::{MarkdownView, slugify};
use peekdoc::welcome::welcome_markdown;
use pretty_assertions::assert_eq;

/// A page shaped like the renderer's output for a struct.
const STRUCT_PAGE: &str = "\
# regex.Regex

*struct*

```rust
pub struct Regex { /* private fields */ }
```

A compiled regular expression.

## Implementations

- [`new`](#regex.Regex.new): Compiles a regular expression.
- [`is_match`](#regex.Regex.is_match): Returns true if the haystack matches.

## Trait Implementations

- [`Clone`](#regex.Regex.Clone)
";

#[test]
fn member_links_target_dotted_paths() {
	let view = MarkdownView::new(STRUCT_PAGE);
	assert_eq!(
		view.link_targets(),
		vec![
			"#regex.Regex.new",
			"#regex.Regex.is_match",
			"#regex.Regex.Clone"
		]
	);
}

#[test]
fn page_headings_are_anchorable() {
	let mut view = MarkdownView::new(STRUCT_PAGE);
	assert_eq!(
		view.toc_slugs(),
		vec!["regexregex", "implementations", "trait-implementations"]
	);
	assert!(view.goto_anchor("trait-implementations"));
}

#[test]
fn anchor_slugs_match_heading_slugs_for_dotted_paths() {
	// A link `#pkg.mod.Item` and a heading `# pkg.mod.Item` must meet at
	// the same slug, which is why dots are dropped rather than hyphenated.
	assert_eq!(slugify("regex.Regex.new"), slugify("regex.Regex.new "));
	assert_eq!(slugify("serde.de.Deserialize"), "serdededeserialize");
}

#[test]
fn welcome_page_links_every_package() {
	let markdown = welcome_markdown(&[
		"anyhow".to_string(),
		"serde".to_string(),
		"tokio".to_string(),
	]);
	let mut view = MarkdownView::new(&markdown);
	assert_eq!(view.link_targets(), vec!["#anyhow", "#serde", "#tokio"]);
	// The package anchors have no matching headings, so activation falls
	// through to path resolution instead of an in-page jump.
	assert!(!view.goto_anchor(&slugify("serde")));
}

#[test]
fn show_resets_scroll_but_update_preserves_it() {
	let long_page: String = (0..100).map(|i| format!("line {i}\n")).collect();
	let mut view = MarkdownView::new(&long_page);
	view.scroll_down(40);

	// A link-driven replacement keeps the reading position.
	let updated: String = (0..100).map(|i| format!("updated {i}\n")).collect();
	view.update(&updated);
	assert_eq!(view.scroll(), 40);

	// A fresh submission starts from the top.
	view.show(STRUCT_PAGE);
	assert_eq!(view.scroll(), 0);
}

#[test]
fn link_selection_survives_a_full_cycle() {
	let mut view = MarkdownView::new(STRUCT_PAGE);
	for _ in 0..view.link_count() {
		view.select_next_link();
	}
	assert_eq!(view.selected_target(), Some("#regex.Regex.Clone"));
	view.select_next_link();
	assert_eq!(view.selected_target(), Some("#regex.Regex.new"));
}

#[test]
fn code_fences_render_as_block_lines() {
	let view = MarkdownView::new("```rust\npub fn f() {}\n```\n");
	// Fence markers are dropped; only the code line remains.
	assert_eq!(view.line_count(), 1);
}
