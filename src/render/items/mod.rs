//! Template dispatch and shared page-building helpers.

/// Enum page rendering.
pub mod enums;
/// Module page rendering.
pub mod module;
/// Pages for functions, values, aliases, macros, and members.
pub mod others;
/// Struct and union page rendering.
pub mod structs;
/// Trait page rendering.
pub mod traits;

use rustdoc_types::{Crate, Id, Item};

use super::{RenderOptions, Template, template_for};
use crate::analyzer::{DocAnalyzer, Handle};
use crate::error::Result;

/// Shared context threaded through the item templates.
pub struct Ctx<'a> {
	/// Analyzer owning the object collection.
	pub graph: &'a DocAnalyzer,
	/// Parsed rustdoc output for the page's package.
	pub krate: &'a Crate,
	/// Underscore-normalized package name.
	pub package: &'a str,
	/// Active render switches.
	pub options: RenderOptions,
}

impl Ctx<'_> {
	/// Look up an item in the package's rustdoc index.
	pub fn item(&self, id: Id) -> Option<&Item> {
		self.krate.index.get(&id)
	}

	/// Canonical dotted path for an item id, falling back to the rustdoc
	/// path summary for items outside the indexed tree.
	pub fn dotted(&self, id: Id) -> Option<String> {
		if let Some(path) = self.graph.dotted_path(self.package, id) {
			return Some(path.to_string());
		}
		self.krate
			.paths
			.get(&id)
			.map(|summary| summary.path.join("."))
	}

	/// Markdown link to an item when its dotted path is known, otherwise
	/// plain text.
	pub fn link_to(&self, id: Id, text: &str) -> String {
		match self.dotted(id) {
			Some(path) => format!("[{text}](#{path})"),
			None => text.to_string(),
		}
	}
}

/// Render one documented object through its kind's template.
pub fn render_object(ctx: &Ctx, handle: &Handle, item: &Item, level: usize) -> Result<String> {
	match template_for(handle.kind) {
		Template::Module => module::render_module(ctx, handle, item, level),
		Template::Struct => structs::render_struct(ctx, handle, item, level),
		Template::Enum => enums::render_enum(ctx, handle, item, level),
		Template::Trait => traits::render_trait(ctx, handle, item, level),
		Template::Function => others::render_function(handle, item, level),
		Template::Value => others::render_value(handle, item, level),
		Template::Alias => others::render_alias(handle, item, level),
		Template::Macro => others::render_macro(handle, item, level),
		Template::Primitive => others::render_primitive(ctx, handle, item, level),
		Template::Member => others::render_member(handle, item, level),
	}
}

/// Page header: heading with the dotted path, then the kind label.
pub fn page_header(handle: &Handle, level: usize) -> String {
	format!(
		"{} {}\n\n*{}*\n\n",
		"#".repeat(level.max(1)),
		handle.path,
		handle.kind.label()
	)
}

/// Section heading one level below the page heading.
pub fn section(level: usize, title: &str) -> String {
	format!("{} {title}\n\n", "#".repeat((level + 1).min(6)))
}

/// Append the item's documentation block, when present.
pub fn push_docs(out: &mut String, item: &Item) {
	if let Some(docs) = &item.docs
		&& !docs.trim().is_empty()
	{
		out.push_str(docs.trim_end());
		out.push_str("\n\n");
	}
}

/// First non-empty line of an item's documentation.
pub fn brief(item: &Item) -> Option<&str> {
	item.docs
		.as_deref()?
		.lines()
		.map(str::trim)
		.find(|line| !line.is_empty())
}

/// Bullet entry for a member list: linked name plus a one-line brief.
pub fn member_bullet(ctx: &Ctx, item: &Item) -> Option<String> {
	let name = item.name.as_deref()?;
	let linked = ctx.link_to(item.id, &format!("`{name}`"));
	match brief(item) {
		Some(line) => Some(format!("- {linked}: {line}\n")),
		None => Some(format!("- {linked}\n")),
	}
}

/// Fenced Rust code block.
pub fn code_block(code: &str) -> String {
	format!("```rust\n{}\n```\n\n", code.trim_end())
}
