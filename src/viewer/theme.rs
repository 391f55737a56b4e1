//! Color palettes for the dark and light display modes.

use ratatui::style::Color;

/// Centralized color palette used by all viewer regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Screen background.
	pub background: Color,
	/// Default body text.
	pub text: Color,
	/// De-emphasized text (placeholders, footer hints).
	pub muted: Color,
	/// Heading text.
	pub heading: Color,
	/// Inline code and code blocks.
	pub code: Color,
	/// Link text.
	pub link: Color,
	/// Background of the currently selected link.
	pub link_selected: Color,
	/// Unfocused pane borders.
	pub border: Color,
	/// Focused pane border.
	pub border_focused: Color,
	/// Header bar accent.
	pub accent: Color,
}

impl Theme {
	/// Palette for dark terminals (the default).
	pub fn dark() -> Self {
		Self {
			background: Color::Rgb(16, 18, 24),
			text: Color::Rgb(205, 210, 220),
			muted: Color::Rgb(110, 118, 132),
			heading: Color::Rgb(255, 196, 109),
			code: Color::Rgb(152, 221, 170),
			link: Color::Rgb(118, 180, 255),
			link_selected: Color::Rgb(40, 70, 110),
			border: Color::Rgb(60, 66, 80),
			border_focused: Color::Rgb(118, 180, 255),
			accent: Color::Rgb(255, 196, 109),
		}
	}

	/// Palette for light terminals.
	pub fn light() -> Self {
		Self {
			background: Color::Rgb(248, 248, 245),
			text: Color::Rgb(40, 42, 48),
			muted: Color::Rgb(130, 134, 142),
			heading: Color::Rgb(160, 82, 0),
			code: Color::Rgb(22, 110, 60),
			link: Color::Rgb(20, 90, 180),
			link_selected: Color::Rgb(200, 220, 245),
			border: Color::Rgb(190, 192, 198),
			border_focused: Color::Rgb(20, 90, 180),
			accent: Color::Rgb(160, 82, 0),
		}
	}
}
