//! Markdown display widget: parses rendered pages into styled lines,
//! tracks link positions and heading anchors, and draws a scrollable
//! body with an optional table of contents.

use once_cell::sync::Lazy;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use regex::Regex;

use super::theme::Theme;

static LINK_RE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link pattern is valid")
});

/// Kind of a styled span within a parsed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
	Text,
	Emphasis,
	Strong,
	Code,
	CodeBlock,
	Heading(u8),
	/// Index into the widget's link table.
	Link(usize),
	Rule,
}

/// One styled fragment of a display line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MdSpan {
	content: String,
	kind: SpanKind,
}

/// One display line of the parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct MdLine {
	spans: Vec<MdSpan>,
}

/// A link occurrence with its display position, for mouse hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LinkSpot {
	/// Display line index.
	line: usize,
	/// First display column of the link text (char units).
	start: usize,
	/// One past the last display column.
	end: usize,
	/// Raw link target, e.g. `#serde.de` or `https://...`.
	target: String,
}

/// A heading recorded for the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TocEntry {
	level: u8,
	title: String,
	slug: String,
	/// Display line the heading starts on.
	line: usize,
}

/// Scrollable Markdown viewer with link navigation and a TOC sidebar.
#[derive(Debug, Default)]
pub struct MarkdownView {
	lines: Vec<MdLine>,
	links: Vec<LinkSpot>,
	toc: Vec<TocEntry>,
	scroll: usize,
	selected: Option<usize>,
	/// Inner body area from the last draw.
	body_inner: Rect,
	/// Inner TOC area from the last draw (zero-sized when hidden).
	toc_inner: Rect,
	last_height: usize,
}

impl MarkdownView {
	/// Parse a document into a fresh view, scrolled to the top.
	pub fn new(markdown: &str) -> Self {
		let mut view = Self::default();
		view.show(markdown);
		view
	}

	/// Replace the document and jump to the top.
	pub fn show(&mut self, markdown: &str) {
		self.update(markdown);
		self.scroll = 0;
	}

	/// Replace the document but keep the scroll offset where it was,
	/// clamped to the new document's length.
	pub fn update(&mut self, markdown: &str) {
		let (lines, links, toc) = parse(markdown);
		self.lines = lines;
		self.links = links;
		self.toc = toc;
		self.selected = None;
		self.scroll = self.scroll.min(self.max_scroll());
	}

	/// Number of display lines in the current document.
	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	/// Current scroll offset in display lines.
	pub fn scroll(&self) -> usize {
		self.scroll
	}

	/// Number of links in the current document.
	pub fn link_count(&self) -> usize {
		self.links.len()
	}

	/// Targets of every link in document order.
	pub fn link_targets(&self) -> Vec<&str> {
		self.links.iter().map(|link| link.target.as_str()).collect()
	}

	/// Slugs of every heading in document order.
	pub fn toc_slugs(&self) -> Vec<&str> {
		self.toc.iter().map(|entry| entry.slug.as_str()).collect()
	}

	/// Scroll to the heading whose slug matches, if one exists.
	pub fn goto_anchor(&mut self, slug: &str) -> bool {
		if let Some(entry) = self.toc.iter().find(|entry| entry.slug == slug) {
			self.scroll = entry.line.min(self.max_scroll());
			true
		} else {
			false
		}
	}

	fn max_scroll(&self) -> usize {
		self.lines.len().saturating_sub(self.last_height.max(1))
	}

	/// Scroll up by `amount` lines.
	pub fn scroll_up(&mut self, amount: usize) {
		self.scroll = self.scroll.saturating_sub(amount);
	}

	/// Scroll down by `amount` lines.
	pub fn scroll_down(&mut self, amount: usize) {
		self.scroll = (self.scroll + amount).min(self.max_scroll());
	}

	/// Scroll up by one viewport.
	pub fn page_up(&mut self) {
		self.scroll_up(self.last_height.max(1));
	}

	/// Scroll down by one viewport.
	pub fn page_down(&mut self) {
		self.scroll_down(self.last_height.max(1));
	}

	/// Jump to the top of the document.
	pub fn scroll_home(&mut self) {
		self.scroll = 0;
	}

	/// Jump to the bottom of the document.
	pub fn scroll_end(&mut self) {
		self.scroll = self.max_scroll();
	}

	/// Select the next link, wrapping, and scroll it into view.
	pub fn select_next_link(&mut self) {
		if self.links.is_empty() {
			return;
		}
		let next = match self.selected {
			Some(index) => (index + 1) % self.links.len(),
			None => self
				.links
				.iter()
				.position(|link| link.line >= self.scroll)
				.unwrap_or(0),
		};
		self.selected = Some(next);
		self.scroll_link_into_view(next);
	}

	/// Select the previous link, wrapping, and scroll it into view.
	pub fn select_prev_link(&mut self) {
		if self.links.is_empty() {
			return;
		}
		let prev = match self.selected {
			Some(0) | None => self.links.len() - 1,
			Some(index) => index - 1,
		};
		self.selected = Some(prev);
		self.scroll_link_into_view(prev);
	}

	fn scroll_link_into_view(&mut self, index: usize) {
		let Some(link) = self.links.get(index) else {
			return;
		};
		let height = self.last_height.max(1);
		if link.line < self.scroll {
			self.scroll = link.line;
		} else if link.line >= self.scroll + height {
			self.scroll = link.line + 1 - height;
		}
	}

	/// Target of the currently selected link, if any.
	pub fn selected_target(&self) -> Option<&str> {
		self.selected
			.and_then(|index| self.links.get(index))
			.map(|link| link.target.as_str())
	}

	/// Link target under a screen position, if the click landed on one.
	pub fn link_at(&self, column: u16, row: u16) -> Option<&str> {
		let inner = self.body_inner;
		if column < inner.x
			|| column >= inner.x + inner.width
			|| row < inner.y
			|| row >= inner.y + inner.height
		{
			return None;
		}
		let line = self.scroll + (row - inner.y) as usize;
		let col = (column - inner.x) as usize;
		self.links
			.iter()
			.find(|link| link.line == line && col >= link.start && col < link.end)
			.map(|link| link.target.as_str())
	}

	/// Whether a screen position lands inside the TOC pane.
	pub fn toc_contains(&self, column: u16, row: u16) -> bool {
		let inner = self.toc_inner;
		inner.width > 0
			&& column >= inner.x
			&& column < inner.x + inner.width
			&& row >= inner.y
			&& row < inner.y + inner.height
	}

	/// Jump to the TOC entry rendered on the clicked row.
	pub fn toc_jump(&mut self, row: u16) {
		let inner = self.toc_inner;
		if row < inner.y {
			return;
		}
		let index = (row - inner.y) as usize;
		if let Some(entry) = self.toc.get(index) {
			self.scroll = entry.line.min(self.max_scroll());
		}
	}

	/// Draw the body and, when requested, the TOC sidebar.
	pub fn render(
		&mut self,
		frame: &mut Frame,
		area: Rect,
		theme: &Theme,
		focused: bool,
		show_toc: bool,
	) {
		let (body_area, toc_area) = if show_toc && area.width >= 60 {
			let chunks = Layout::default()
				.direction(Direction::Horizontal)
				.constraints([Constraint::Min(0), Constraint::Length(28)])
				.split(area);
			(chunks[0], Some(chunks[1]))
		} else {
			(area, None)
		};

		let border_color = if focused {
			theme.border_focused
		} else {
			theme.border
		};
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(border_color));
		let inner = block.inner(body_area);
		self.body_inner = inner;
		self.last_height = inner.height as usize;
		self.scroll = self.scroll.min(self.max_scroll());

		let text = Text::from(
			self.lines
				.iter()
				.enumerate()
				.map(|(index, line)| self.style_line(index, line, theme))
				.collect::<Vec<_>>(),
		);
		let paragraph = Paragraph::new(text)
			.block(block)
			.style(Style::default().fg(theme.text).bg(theme.background))
			.scroll((self.scroll as u16, 0));
		frame.render_widget(paragraph, body_area);

		match toc_area {
			Some(toc_area) => self.render_toc(frame, toc_area, theme),
			None => self.toc_inner = Rect::default(),
		}
	}

	fn render_toc(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(theme.border))
			.title("Contents");
		self.toc_inner = block.inner(area);

		let lines: Vec<Line> = self
			.toc
			.iter()
			.map(|entry| {
				let indent = "  ".repeat(entry.level.saturating_sub(1) as usize);
				Line::from(Span::styled(
					format!("{indent}{}", entry.title),
					Style::default().fg(theme.link),
				))
			})
			.collect();
		let paragraph = Paragraph::new(Text::from(lines))
			.block(block)
			.style(Style::default().fg(theme.text).bg(theme.background));
		frame.render_widget(paragraph, area);
	}

	fn style_line(&self, index: usize, line: &MdLine, theme: &Theme) -> Line<'_> {
		let spans = line
			.spans
			.iter()
			.map(|span| {
				let style = match span.kind {
					SpanKind::Text => Style::default().fg(theme.text),
					SpanKind::Emphasis => Style::default()
						.fg(theme.text)
						.add_modifier(Modifier::ITALIC),
					SpanKind::Strong => {
						Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
					}
					SpanKind::Code | SpanKind::CodeBlock => Style::default().fg(theme.code),
					SpanKind::Heading(_) => Style::default()
						.fg(theme.heading)
						.add_modifier(Modifier::BOLD),
					SpanKind::Link(link_index) => {
						let mut style = Style::default()
							.fg(theme.link)
							.add_modifier(Modifier::UNDERLINED);
						if self.selected == Some(link_index)
							&& self
								.links
								.get(link_index)
								.is_some_and(|link| link.line == index)
						{
							style = style.bg(theme.link_selected);
						}
						style
					}
					SpanKind::Rule => Style::default().fg(theme.border),
				};
				Span::styled(span.content.clone(), style)
			})
			.collect::<Vec<_>>();
		Line::from(spans)
	}
}

/// Turn a heading title into its anchor slug.
///
/// Lowercases, removes dots, maps whitespace to hyphens, and keeps only
/// alphanumerics, hyphens, and underscores. Dots are removed rather than
/// replaced so that `pkg.mod.Item` headings and `#pkg.mod.Item` link
/// anchors slugify identically.
pub fn slugify(title: &str) -> String {
	let mut slug = String::with_capacity(title.len());
	for c in title.trim().chars() {
		if c == '.' {
			continue;
		}
		if c.is_whitespace() {
			slug.push('-');
		} else if c.is_alphanumeric() || c == '-' || c == '_' {
			for lower in c.to_lowercase() {
				slug.push(lower);
			}
		}
	}
	slug
}

fn parse(markdown: &str) -> (Vec<MdLine>, Vec<LinkSpot>, Vec<TocEntry>) {
	let mut lines = Vec::new();
	let mut links = Vec::new();
	let mut toc = Vec::new();
	let mut in_code_block = false;

	for raw in markdown.lines() {
		if raw.trim_start().starts_with("```") {
			in_code_block = !in_code_block;
			continue;
		}
		if in_code_block {
			lines.push(MdLine {
				spans: vec![MdSpan {
					content: format!("  {raw}"),
					kind: SpanKind::CodeBlock,
				}],
			});
			continue;
		}

		let trimmed = raw.trim_start();
		if let Some(heading) = parse_heading(trimmed) {
			let (level, title) = heading;
			toc.push(TocEntry {
				level,
				title: title.to_string(),
				slug: slugify(title),
				line: lines.len(),
			});
			let marker = "#".repeat(level as usize);
			lines.push(MdLine {
				spans: vec![MdSpan {
					content: format!("{marker} {title}"),
					kind: SpanKind::Heading(level),
				}],
			});
			continue;
		}
		if trimmed == "---" {
			lines.push(MdLine {
				spans: vec![MdSpan {
					content: "─".repeat(40),
					kind: SpanKind::Rule,
				}],
			});
			continue;
		}

		let line_index = lines.len();
		let mut line = MdLine::default();
		let mut column = 0usize;

		let (prefix, rest) = if let Some(rest) = trimmed.strip_prefix("- ") {
			let indent = raw.len() - trimmed.len();
			(format!("{}• ", " ".repeat(indent)), rest)
		} else {
			(String::new(), raw)
		};
		if !prefix.is_empty() {
			column += prefix.chars().count();
			line.spans.push(MdSpan {
				content: prefix,
				kind: SpanKind::Text,
			});
		}

		parse_inline(rest, line_index, &mut column, &mut line, &mut links);
		lines.push(line);
	}

	(lines, links, toc)
}

fn parse_heading(line: &str) -> Option<(u8, &str)> {
	let level = line.bytes().take_while(|b| *b == b'#').count();
	if level == 0 || level > 6 {
		return None;
	}
	let title = line[level..].strip_prefix(' ')?;
	Some((level as u8, title.trim()))
}

/// Scan inline Markdown, appending styled spans and recording links.
fn parse_inline(
	text: &str,
	line_index: usize,
	column: &mut usize,
	line: &mut MdLine,
	links: &mut Vec<LinkSpot>,
) {
	let mut cursor = 0;
	while cursor < text.len() {
		let rest = &text[cursor..];
		if let Some(found) = LINK_RE.find(rest)
			&& found.start() == 0
		{
			if let Some(captures) = LINK_RE.captures(rest) {
				let label = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
				let target = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
				let display = strip_inline_markers(label);
				let start = *column;
				let width = display.chars().count();
				links.push(LinkSpot {
					line: line_index,
					start,
					end: start + width,
					target: target.to_string(),
				});
				line.spans.push(MdSpan {
					content: display,
					kind: SpanKind::Link(links.len() - 1),
				});
				*column += width;
			}
			cursor += found.end();
			continue;
		}

		if rest.starts_with('`')
			&& let Some(close) = rest[1..].find('`')
		{
			let content = &rest[1..1 + close];
			push_span(line, column, content, SpanKind::Code);
			cursor += close + 2;
			continue;
		}
		if rest.starts_with("**")
			&& let Some(close) = rest[2..].find("**")
		{
			let content = &rest[2..2 + close];
			push_span(line, column, content, SpanKind::Strong);
			cursor += close + 4;
			continue;
		}
		if rest.starts_with('*')
			&& !rest.starts_with("**")
			&& let Some(close) = rest[1..].find('*')
		{
			let content = &rest[1..1 + close];
			push_span(line, column, content, SpanKind::Emphasis);
			cursor += close + 2;
			continue;
		}

		// Plain text up to the next potential marker.
		let next_marker = rest
			.char_indices()
			.skip(1)
			.find(|(_, c)| matches!(c, '[' | '`' | '*'))
			.map(|(offset, _)| offset)
			.unwrap_or(rest.len());
		push_span(line, column, &rest[..next_marker], SpanKind::Text);
		cursor += next_marker;
	}
}

fn push_span(line: &mut MdLine, column: &mut usize, content: &str, kind: SpanKind) {
	if content.is_empty() {
		return;
	}
	*column += content.chars().count();
	line.spans.push(MdSpan {
		content: content.to_string(),
		kind,
	});
}

/// Remove backtick and asterisk markers from a link label for display.
fn strip_inline_markers(label: &str) -> String {
	label.chars().filter(|c| *c != '`' && *c != '*').collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn link_pattern_compiles() {
		assert!(LINK_RE.is_match("[label](#target)"));
	}

	#[test]
	fn slugify_matches_anchor_form() {
		assert_eq!(slugify("serde.de.Deserialize"), "serdededeserialize");
		assert_eq!(slugify("Trait Implementations"), "trait-implementations");
		assert_eq!(slugify("What's New?"), "whats-new");
	}

	#[test]
	fn headings_populate_the_toc() {
		let view = MarkdownView::new("# Title\n\ntext\n\n## Section One\n");
		assert_eq!(view.toc_slugs(), vec!["title", "section-one"]);
	}

	#[test]
	fn links_are_extracted_with_targets() {
		let view = MarkdownView::new("See [`serde.de`](#serde.de) and [docs](https://example.com).");
		assert_eq!(view.link_targets(), vec!["#serde.de", "https://example.com"]);
	}

	#[test]
	fn goto_anchor_reports_misses() {
		let mut view = MarkdownView::new("# One\n\n## Two\n");
		assert!(view.goto_anchor("two"));
		assert!(!view.goto_anchor("three"));
	}

	#[test]
	fn code_fences_toggle_block_styling() {
		let view = MarkdownView::new("```rust\nfn main() {}\n```\nafter\n");
		// Fence lines are dropped, leaving the code line and the trailing text.
		assert_eq!(view.line_count(), 2);
	}

	#[test]
	fn link_selection_wraps() {
		let mut view = MarkdownView::new("[a](#a) then [b](#b)\n");
		view.select_next_link();
		assert_eq!(view.selected_target(), Some("#a"));
		view.select_next_link();
		assert_eq!(view.selected_target(), Some("#b"));
		view.select_next_link();
		assert_eq!(view.selected_target(), Some("#a"));
		view.select_prev_link();
		assert_eq!(view.selected_target(), Some("#b"));
	}

	#[test]
	fn update_keeps_selection_cleared() {
		let mut view = MarkdownView::new("[a](#a)\n");
		view.select_next_link();
		view.update("[b](#b)\n");
		assert_eq!(view.selected_target(), None);
		assert_eq!(view.link_targets(), vec!["#b"]);
	}
}
