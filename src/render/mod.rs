//! Rendering of documented objects into Markdown pages.
//!
//! Each object kind maps to one template through [`template_for`]; the
//! templates emit headings whose text is the object's dotted path, so every
//! page carries a stable anchor namespace, and cross-object links of the
//! form `(#dotted.path)`.

/// Per-kind Markdown templates.
pub mod items;
/// Compact signature rendering helpers.
pub mod syntax;

use bitflags::bitflags;

use crate::analyzer::{DocAnalyzer, Handle, ObjectKind};
use crate::error::{PeekdocError, Result};

bitflags! {
	/// Switches that control what a rendered page includes.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct RenderOptions: u32 {
		/// Inline submodule pages below their parent module.
		const SHOW_SUBMODULES = 1 << 0;
		/// List trait implementations on type pages.
		const SHOW_TRAIT_IMPLS = 1 << 1;
	}
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self::SHOW_TRAIT_IMPLS
	}
}

/// Template identifier selected by an object's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
	/// Module page with member listings.
	Module,
	/// Struct or union page.
	Struct,
	/// Enum page.
	Enum,
	/// Trait or trait alias page.
	Trait,
	/// Free function or method page.
	Function,
	/// Constant, static, or associated constant page.
	Value,
	/// Type alias or associated type page.
	Alias,
	/// Declarative or procedural macro page.
	Macro,
	/// Primitive type page.
	Primitive,
	/// Enum variant or field page.
	Member,
}

/// Select the render template for an object kind.
pub fn template_for(kind: ObjectKind) -> Template {
	match kind {
		ObjectKind::Module => Template::Module,
		ObjectKind::Struct | ObjectKind::Union => Template::Struct,
		ObjectKind::Enum => Template::Enum,
		ObjectKind::Trait | ObjectKind::TraitAlias => Template::Trait,
		ObjectKind::Function | ObjectKind::Method => Template::Function,
		ObjectKind::Constant | ObjectKind::Static | ObjectKind::AssocConst => Template::Value,
		ObjectKind::TypeAlias | ObjectKind::AssocType => Template::Alias,
		ObjectKind::Macro | ObjectKind::ProcMacro => Template::Macro,
		ObjectKind::Primitive => Template::Primitive,
		ObjectKind::Variant | ObjectKind::Field => Template::Member,
	}
}

/// The Resolver's seam onto the rendering side.
///
/// Generic over the object graph so tests can pair fake graphs with fake
/// renderers.
pub trait RenderMarkdown<G> {
	/// Render one documented object into a Markdown page.
	fn render(
		&self,
		graph: &G,
		handle: &Handle,
		heading_level: usize,
		options: RenderOptions,
	) -> Result<String>;
}

/// Template-based Markdown renderer over analyzed rustdoc data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
	/// Create a renderer with default configuration.
	pub fn new() -> Self {
		Self
	}
}

impl RenderMarkdown<DocAnalyzer> for Renderer {
	fn render(
		&self,
		graph: &DocAnalyzer,
		handle: &Handle,
		heading_level: usize,
		options: RenderOptions,
	) -> Result<String> {
		let krate = graph.crate_for(&handle.package).ok_or_else(|| {
			PeekdocError::Render(format!("package `{}` is not loaded", handle.package))
		})?;
		let item = graph
			.item(handle)
			.ok_or_else(|| PeekdocError::Render(format!("stale handle for `{}`", handle.path)))?;

		let ctx = items::Ctx {
			graph,
			krate,
			package: &handle.package,
			options,
		};
		items::render_object(&ctx, handle, item, heading_level)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_kind_has_a_template() {
		assert_eq!(template_for(ObjectKind::Module), Template::Module);
		assert_eq!(template_for(ObjectKind::Union), Template::Struct);
		assert_eq!(template_for(ObjectKind::Method), Template::Function);
		assert_eq!(template_for(ObjectKind::Static), Template::Value);
		assert_eq!(template_for(ObjectKind::AssocType), Template::Alias);
		assert_eq!(template_for(ObjectKind::ProcMacro), Template::Macro);
		assert_eq!(template_for(ObjectKind::Field), Template::Member);
	}

	#[test]
	fn default_options_suppress_submodules() {
		let options = RenderOptions::default();
		assert!(!options.contains(RenderOptions::SHOW_SUBMODULES));
		assert!(options.contains(RenderOptions::SHOW_TRAIT_IMPLS));
	}
}
