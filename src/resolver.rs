//! Dotted-path resolution: the pipeline from a user-entered path to a
//! rendered Markdown document.
//!
//! Lookup order is fixed: exact match against the object collection first;
//! on a miss, analyze the path's top-level package, connect deferred
//! re-export aliases, and retry once. A second miss is a
//! [`PeekdocError::NotFound`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::analyzer::ObjectGraph;
use crate::error::{PeekdocError, Result};
use crate::render::{RenderMarkdown, RenderOptions};

/// Heading level used for the top of every rendered page.
const TOP_HEADING_LEVEL: usize = 1;

/// Built-in type names that may be entered without a package prefix,
/// mapped to their fully qualified dotted paths.
static BUILTIN_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
	let mut map = HashMap::new();
	for primitive in [
		"bool", "char", "str", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "u8",
		"u16", "u32", "u64", "u128", "usize",
	] {
		map.insert(primitive, &*String::leak(format!("std.primitive.{primitive}")));
	}
	map.insert("String", "std.string.String");
	map.insert("Vec", "std.vec.Vec");
	map.insert("Option", "std.option.Option");
	map.insert("Result", "std.result.Result");
	map.insert("Box", "std.boxed.Box");
	map.insert("Rc", "std.rc.Rc");
	map.insert("Arc", "std.sync.Arc");
	map.insert("Cow", "std.borrow.Cow");
	map.insert("HashMap", "std.collections.HashMap");
	map.insert("HashSet", "std.collections.HashSet");
	map.insert("BTreeMap", "std.collections.BTreeMap");
	map.insert("BTreeSet", "std.collections.BTreeSet");
	map.insert("VecDeque", "std.collections.VecDeque");
	map
});

/// A rendered documentation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	/// The (normalized) dotted path the page was rendered for.
	pub path: String,
	/// Markdown content of the page.
	pub markdown: String,
}

/// Resolves dotted object paths into rendered documents.
///
/// Generic over its two collaborators so tests can observe load behavior
/// without driving rustdoc.
#[derive(Debug)]
pub struct Resolver<G, R> {
	graph: G,
	renderer: R,
	options: RenderOptions,
}

impl<G, R> Resolver<G, R>
where
	G: ObjectGraph,
	R: RenderMarkdown<G>,
{
	/// Create a resolver over an object graph and a renderer.
	///
	/// The default render options suppress submodule listings, matching the
	/// single-page-per-object viewing model.
	pub fn new(graph: G, renderer: R) -> Self {
		Self {
			graph,
			renderer,
			options: RenderOptions::default(),
		}
	}

	/// Override the render options used for every page.
	pub fn with_options(mut self, options: RenderOptions) -> Self {
		self.options = options;
		self
	}

	/// Shared access to the underlying object graph.
	pub fn graph(&self) -> &G {
		&self.graph
	}

	/// Mutable access to the underlying object graph.
	pub fn graph_mut(&mut self) -> &mut G {
		&mut self.graph
	}

	/// Resolve a dotted object path into a rendered Markdown document.
	pub fn resolve(&mut self, path: &str) -> Result<Document> {
		let path = normalize_path(path);
		if path.is_empty() {
			return Err(PeekdocError::NotFound(path));
		}

		let handle = match self.graph.lookup(&path) {
			Some(handle) => handle,
			None => {
				// Miss: analyze the top-level package, connect aliases into
				// already-loaded packages, then retry exactly once.
				let package = path.split('.').next().unwrap_or(&path).to_string();
				self.graph.load(&package)?;
				self.graph.resolve_aliases(true, false);
				self.graph
					.lookup(&path)
					.ok_or_else(|| PeekdocError::NotFound(path.clone()))?
			}
		};

		let markdown = self
			.renderer
			.render(&self.graph, &handle, TOP_HEADING_LEVEL, self.options)?;

		Ok(Document { path, markdown })
	}
}

/// Normalize user input into the canonical dotted form.
///
/// Trims whitespace, accepts `::` separators, and rewrites bare built-in
/// type names to their fully qualified paths.
pub fn normalize_path(input: &str) -> String {
	let trimmed = input.trim().replace("::", ".");
	let trimmed = trimmed.trim_matches('.');
	if !trimmed.contains('.')
		&& let Some(qualified) = BUILTIN_TYPES.get(trimmed)
	{
		return (*qualified).to_string();
	}
	trimmed.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn builtin_names_are_fully_qualified() {
		assert_eq!(normalize_path("str"), "std.primitive.str");
		assert_eq!(normalize_path("String"), "std.string.String");
		assert_eq!(normalize_path("HashMap"), "std.collections.HashMap");
	}

	#[test]
	fn dotted_paths_pass_through() {
		assert_eq!(normalize_path("serde.de.Deserialize"), "serde.de.Deserialize");
		// A dotted path is never rewritten, even if its last segment is a
		// built-in name.
		assert_eq!(normalize_path("mycrate.String"), "mycrate.String");
	}

	#[test]
	fn double_colon_separators_are_accepted() {
		assert_eq!(normalize_path("std::vec::Vec"), "std.vec.Vec");
		assert_eq!(normalize_path("  tokio::spawn "), "tokio.spawn");
	}
}
