//! Resolution pipeline behavior, exercised through fake collaborators so
//! no rustdoc invocation is needed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use peekdoc::analyzer::{Handle, ObjectGraph, ObjectKind};
use peekdoc::error::Result;
use peekdoc::render::{RenderMarkdown, RenderOptions};
use peekdoc::resolver::Resolver;
use pretty_assertions::assert_eq;
use rustdoc_types::Id;

fn handle(path: &str) -> Handle {
	Handle {
		package: path.split('.').next().unwrap_or(path).to_string(),
		id: Id(0),
		kind: ObjectKind::Struct,
		path: path.to_string(),
	}
}

/// Object graph whose contents are scripted per package.
#[derive(Default)]
struct FakeGraph {
	/// Currently visible objects.
	objects: HashMap<String, Handle>,
	/// Objects that become visible when a package is loaded.
	on_load: HashMap<String, Vec<String>>,
	loads: Vec<String>,
	alias_calls: Vec<(bool, bool)>,
}

impl FakeGraph {
	fn with_object(mut self, path: &str) -> Self {
		self.objects.insert(path.to_string(), handle(path));
		self
	}

	fn with_loadable(mut self, package: &str, paths: &[&str]) -> Self {
		self.on_load.insert(
			package.to_string(),
			paths.iter().map(|p| p.to_string()).collect(),
		);
		self
	}
}

impl ObjectGraph for FakeGraph {
	fn lookup(&self, path: &str) -> Option<Handle> {
		self.objects.get(path).cloned()
	}

	fn load(&mut self, package: &str) -> Result<()> {
		self.loads.push(package.to_string());
		if let Some(paths) = self.on_load.remove(package) {
			for path in paths {
				self.objects.insert(path.clone(), handle(&path));
			}
		}
		Ok(())
	}

	fn resolve_aliases(&mut self, external: bool, implicit: bool) {
		self.alias_calls.push((external, implicit));
	}
}

/// Renderer that records every call and echoes the object path.
///
/// Calls are kept behind an `Rc` so tests can inspect them after the
/// renderer has been moved into a resolver.
#[derive(Default)]
struct FakeRenderer {
	calls: Rc<RefCell<Vec<(String, usize, RenderOptions)>>>,
}

impl FakeRenderer {
	fn recording(calls: &Rc<RefCell<Vec<(String, usize, RenderOptions)>>>) -> Self {
		Self {
			calls: Rc::clone(calls),
		}
	}
}

impl RenderMarkdown<FakeGraph> for FakeRenderer {
	fn render(
		&self,
		_graph: &FakeGraph,
		handle: &Handle,
		heading_level: usize,
		options: RenderOptions,
	) -> Result<String> {
		self.calls
			.borrow_mut()
			.push((handle.path.clone(), heading_level, options));
		Ok(format!("# {}\n", handle.path))
	}
}

#[test]
fn collection_hit_renders_without_loading() {
	let graph = FakeGraph::default().with_object("serde.de.Deserialize");
	let mut resolver = Resolver::new(graph, FakeRenderer::default());

	let document = resolver.resolve("serde.de.Deserialize").unwrap();
	assert_eq!(document.path, "serde.de.Deserialize");
	assert_eq!(document.markdown, "# serde.de.Deserialize\n");
	assert!(resolver.graph().loads.is_empty());
}

#[test]
fn collection_miss_loads_the_top_level_package_once() {
	let graph = FakeGraph::default().with_loadable("tokio", &["tokio", "tokio.spawn"]);
	let mut resolver = Resolver::new(graph, FakeRenderer::default());

	let document = resolver.resolve("tokio.spawn").unwrap();
	assert_eq!(document.path, "tokio.spawn");
	assert_eq!(resolver.graph().loads, vec!["tokio".to_string()]);
	// Aliases are connected across already-loaded packages, but glob
	// re-exports stay pending.
	assert_eq!(resolver.graph().alias_calls, vec![(true, false)]);
}

#[test]
fn second_miss_is_not_found_without_a_second_load() {
	let graph = FakeGraph::default().with_loadable("tokio", &["tokio"]);
	let mut resolver = Resolver::new(graph, FakeRenderer::default());

	let err = resolver.resolve("tokio.no_such_thing").unwrap_err();
	assert!(err.is_not_found());
	assert_eq!(resolver.graph().loads, vec!["tokio".to_string()]);
}

#[test]
fn bare_builtin_names_resolve_like_their_qualified_forms() {
	let graph = FakeGraph::default()
		.with_object("std.primitive.str")
		.with_object("std.string.String");
	let mut resolver = Resolver::new(graph, FakeRenderer::default());

	assert_eq!(resolver.resolve("str").unwrap().path, "std.primitive.str");
	assert_eq!(
		resolver.resolve("String").unwrap().path,
		resolver.resolve("std.string.String").unwrap().path
	);
}

#[test]
fn double_colon_input_reaches_the_same_object() {
	let graph = FakeGraph::default().with_object("serde.de.Deserialize");
	let mut resolver = Resolver::new(graph, FakeRenderer::default());

	let document = resolver.resolve("serde::de::Deserialize").unwrap();
	assert_eq!(document.path, "serde.de.Deserialize");
}

#[test]
fn pages_render_at_the_top_heading_level_with_default_options() {
	let calls = Rc::new(RefCell::new(Vec::new()));
	let graph = FakeGraph::default().with_object("regex.Regex");
	let mut resolver = Resolver::new(graph, FakeRenderer::recording(&calls));

	resolver.resolve("regex.Regex").unwrap();

	let recorded = calls.borrow();
	assert_eq!(recorded.len(), 1);
	let (path, level, options) = &recorded[0];
	assert_eq!(path, "regex.Regex");
	assert_eq!(*level, 1);
	// Default options keep trait impls but suppress submodule recursion.
	assert!(options.contains(RenderOptions::SHOW_TRAIT_IMPLS));
	assert!(!options.contains(RenderOptions::SHOW_SUBMODULES));
}

#[test]
fn empty_input_is_not_found() {
	let graph = FakeGraph::default();
	let mut resolver = Resolver::new(graph, FakeRenderer::default());
	assert!(resolver.resolve("   ").unwrap_err().is_not_found());
}
