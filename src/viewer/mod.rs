//! Terminal user interface.
//!
//! The screen is a fixed vertical stack: a one-line header, the path
//! input field, the Markdown body (with an optional table-of-contents
//! sidebar), and a one-line key hint footer. Input focus moves between
//! the field and the body; every path submission and in-document link
//! activation funnels through the resolver.

/// Single-line path input field.
pub mod input;
/// Markdown display widget.
pub mod markdown;
/// Color palettes.
pub mod theme;

use std::io;
use std::time::Duration;

use crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
	KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
	EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Terminal;

use self::input::InputField;
use self::markdown::{MarkdownView, slugify};
use self::theme::Theme;
use crate::analyzer::DocAnalyzer;
use crate::error::Result;
use crate::render::Renderer;
use crate::resolver::Resolver;
use crate::welcome::welcome_markdown;

/// Which region receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
	Input,
	Viewer,
}

/// The interactive documentation viewer.
pub struct App {
	resolver: Resolver<DocAnalyzer, Renderer>,
	input: InputField,
	view: MarkdownView,
	theme: Theme,
	dark: bool,
	show_toc: bool,
	focus: Focus,
	should_quit: bool,
}

impl App {
	/// Build the app, rendering the welcome page from the workspace's
	/// package list.
	pub fn new(mut resolver: Resolver<DocAnalyzer, Renderer>, dark: bool) -> Self {
		let packages = resolver.graph_mut().installed_packages().unwrap_or_else(|err| {
			log::warn!("couldn't list installed packages: {err}");
			Vec::new()
		});
		let view = MarkdownView::new(&welcome_markdown(&packages));
		Self {
			resolver,
			input: InputField::new("Enter an item path, e.g. serde.de.Deserialize"),
			view,
			theme: if dark { Theme::dark() } else { Theme::light() },
			dark,
			show_toc: true,
			focus: Focus::Input,
			should_quit: false,
		}
	}

	/// Enter the alternate screen and run the event loop until quit.
	pub fn run(&mut self) -> Result<()> {
		enable_raw_mode()?;
		let mut stdout = io::stdout();
		execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
		let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

		let outcome = self.event_loop(&mut terminal);

		// Restore the terminal even when the loop errored.
		disable_raw_mode()?;
		execute!(
			terminal.backend_mut(),
			LeaveAlternateScreen,
			DisableMouseCapture
		)?;
		terminal.show_cursor()?;
		outcome
	}

	fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
		while !self.should_quit {
			terminal.draw(|frame| self.draw(frame))?;
			if !event::poll(Duration::from_millis(250))? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind != KeyEventKind::Release => self.on_key(key),
				Event::Mouse(mouse) => self.on_mouse(mouse),
				_ => {}
			}
		}
		Ok(())
	}

	fn draw(&mut self, frame: &mut Frame) {
		let chunks = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Min(0),
				Constraint::Length(1),
			])
			.split(frame.area());

		frame.render_widget(
			Block::default().style(Style::default().bg(self.theme.background)),
			frame.area(),
		);
		self.draw_header(frame, chunks[0]);
		self.input
			.render(frame, chunks[1], &self.theme, self.focus == Focus::Input);
		self.view.render(
			frame,
			chunks[2],
			&self.theme,
			self.focus == Focus::Viewer,
			self.show_toc,
		);
		self.draw_footer(frame, chunks[3]);
	}

	fn draw_header(&self, frame: &mut Frame, area: Rect) {
		let title = Line::from(vec![
			Span::styled(
				" peekdoc ",
				Style::default()
					.fg(self.theme.background)
					.bg(self.theme.accent)
					.add_modifier(Modifier::BOLD),
			),
			Span::styled(
				" terminal API docs",
				Style::default().fg(self.theme.muted),
			),
		]);
		frame.render_widget(Paragraph::new(title), area);
	}

	fn draw_footer(&self, frame: &mut Frame, area: Rect) {
		let hints = match self.focus {
			Focus::Input => " enter submit · esc viewer",
			Focus::Viewer => " / search · n/p links · enter open · t toc · d theme · q quit",
		};
		frame.render_widget(
			Paragraph::new(hints).style(Style::default().fg(self.theme.muted)),
			area,
		);
	}

	fn on_key(&mut self, key: KeyEvent) {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			self.should_quit = true;
			return;
		}
		match self.focus {
			Focus::Input => match key.code {
				KeyCode::Esc => self.focus = Focus::Viewer,
				_ => {
					if let Some(path) = self.input.handle_key(key) {
						self.on_submit(&path);
					}
				}
			},
			Focus::Viewer => match key.code {
				KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
				KeyCode::Char('/') | KeyCode::Char('i') => self.focus = Focus::Input,
				KeyCode::Char('d') => self.toggle_theme(),
				KeyCode::Char('t') => self.show_toc = !self.show_toc,
				KeyCode::Up | KeyCode::Char('k') => self.view.scroll_up(1),
				KeyCode::Down | KeyCode::Char('j') => self.view.scroll_down(1),
				KeyCode::PageUp => self.view.page_up(),
				KeyCode::PageDown => self.view.page_down(),
				KeyCode::Home | KeyCode::Char('g') => self.view.scroll_home(),
				KeyCode::End | KeyCode::Char('G') => self.view.scroll_end(),
				KeyCode::Char('n') | KeyCode::Tab => self.view.select_next_link(),
				KeyCode::Char('p') | KeyCode::BackTab => self.view.select_prev_link(),
				KeyCode::Enter => {
					if let Some(target) = self.view.selected_target().map(str::to_string) {
						self.on_link_activated(&target);
					}
				}
				_ => {}
			},
		}
	}

	fn on_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::ScrollUp => self.view.scroll_up(3),
			MouseEventKind::ScrollDown => self.view.scroll_down(3),
			MouseEventKind::Down(MouseButton::Left) => {
				let (column, row) = (mouse.column, mouse.row);
				if row >= self.input.area.y
					&& row < self.input.area.y + self.input.area.height.max(1)
				{
					self.focus = Focus::Input;
				} else if let Some(target) = self.view.link_at(column, row).map(str::to_string) {
					self.focus = Focus::Viewer;
					self.on_link_activated(&target);
				} else if self.view.toc_contains(column, row) {
					self.focus = Focus::Viewer;
					self.view.toc_jump(row);
				} else {
					self.focus = Focus::Viewer;
				}
			}
			_ => {}
		}
	}

	fn toggle_theme(&mut self) {
		self.dark = !self.dark;
		self.theme = if self.dark {
			Theme::dark()
		} else {
			Theme::light()
		};
	}

	/// Resolve a submitted path and show its page from the top.
	///
	/// On failure the current document stays on screen.
	fn on_submit(&mut self, path: &str) {
		match self.resolver.resolve(path) {
			Ok(document) => {
				self.view.show(&document.markdown);
				self.focus = Focus::Viewer;
			}
			Err(err) => {
				log::error!("couldn't load {path} as Markdown: {err}");
			}
		}
	}

	/// Handle an activated link.
	///
	/// Anchor targets first try a same-document heading jump; anchors with
	/// no matching heading are treated as object paths and resolved, which
	/// replaces the document while preserving the scroll offset. Anything
	/// else is handed to the operating system.
	fn on_link_activated(&mut self, target: &str) {
		if let Some(anchor) = target.strip_prefix('#') {
			if self.view.goto_anchor(&slugify(anchor)) {
				return;
			}
			match self.resolver.resolve(anchor) {
				Ok(document) => self.view.update(&document.markdown),
				Err(err) => {
					log::error!("couldn't load {anchor} as Markdown: {err}");
				}
			}
			return;
		}
		open_external(target);
	}
}

/// Open a non-anchor link with the platform's URL handler.
fn open_external(target: &str) {
	let result = if cfg!(target_os = "macos") {
		std::process::Command::new("open").arg(target).status()
	} else if cfg!(target_os = "windows") {
		std::process::Command::new("cmd")
			.args(["/C", "start", target])
			.status()
	} else {
		std::process::Command::new("xdg-open").arg(target).status()
	};
	if let Err(err) = result {
		log::warn!("couldn't open {target}: {err}");
	}
}
