//! Single-line text input field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::theme::Theme;

/// A single-line editable text field with a placeholder.
#[derive(Debug, Default)]
pub struct InputField {
	value: String,
	/// Cursor position as a char offset into `value`.
	cursor: usize,
	placeholder: String,
	/// Inner area from the last draw, for mouse hit-testing.
	pub area: Rect,
}

impl InputField {
	/// Create an empty field with the given placeholder text.
	pub fn new(placeholder: impl Into<String>) -> Self {
		Self {
			placeholder: placeholder.into(),
			..Self::default()
		}
	}

	/// Current contents of the field.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Handle a key press, returning the submitted text on Enter.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
		match key.code {
			KeyCode::Enter => return Some(self.value.clone()),
			KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.value.clear();
				self.cursor = 0;
			}
			KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
				let at = self.byte_offset(self.cursor);
				self.value.insert(at, c);
				self.cursor += 1;
			}
			KeyCode::Backspace => {
				if self.cursor > 0 {
					self.cursor -= 1;
					let at = self.byte_offset(self.cursor);
					self.value.remove(at);
				}
			}
			KeyCode::Delete => {
				if self.cursor < self.value.chars().count() {
					let at = self.byte_offset(self.cursor);
					self.value.remove(at);
				}
			}
			KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
			KeyCode::Right => {
				if self.cursor < self.value.chars().count() {
					self.cursor += 1;
				}
			}
			KeyCode::Home => self.cursor = 0,
			KeyCode::End => self.cursor = self.value.chars().count(),
			_ => {}
		}
		None
	}

	/// Byte offset of a char index into the buffer.
	fn byte_offset(&self, char_index: usize) -> usize {
		self.value
			.char_indices()
			.nth(char_index)
			.map(|(offset, _)| offset)
			.unwrap_or(self.value.len())
	}

	/// Draw the field, placing the terminal cursor when focused.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
		let border_color = if focused {
			theme.border_focused
		} else {
			theme.border
		};
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(border_color));
		let inner = block.inner(area);
		self.area = inner;

		let paragraph = if self.value.is_empty() {
			Paragraph::new(self.placeholder.as_str()).style(Style::default().fg(theme.muted))
		} else {
			Paragraph::new(self.value.as_str()).style(Style::default().fg(theme.text))
		};
		frame.render_widget(paragraph.block(block), area);

		if focused {
			let x = inner.x + (self.cursor as u16).min(inner.width.saturating_sub(1));
			frame.set_cursor_position(Position::new(x, inner.y));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(field: &mut InputField, code: KeyCode) -> Option<String> {
		field.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	#[test]
	fn typing_and_submitting() {
		let mut field = InputField::new("type here");
		for c in "os.path".chars() {
			press(&mut field, KeyCode::Char(c));
		}
		assert_eq!(field.value(), "os.path");
		assert_eq!(press(&mut field, KeyCode::Enter), Some("os.path".to_string()));
	}

	#[test]
	fn editing_moves_the_cursor() {
		let mut field = InputField::new("");
		for c in "serd".chars() {
			press(&mut field, KeyCode::Char(c));
		}
		press(&mut field, KeyCode::Backspace);
		assert_eq!(field.value(), "ser");
		press(&mut field, KeyCode::Home);
		press(&mut field, KeyCode::Delete);
		assert_eq!(field.value(), "er");
	}

	#[test]
	fn ctrl_u_clears_the_field() {
		let mut field = InputField::new("");
		press(&mut field, KeyCode::Char('x'));
		field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
		assert_eq!(field.value(), "");
	}
}
