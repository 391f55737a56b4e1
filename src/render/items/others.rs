//! Pages for functions, values, aliases, macros, primitives, and members.

use rustdoc_types::{Item, ItemEnum, MacroKind, VariantKind};

use super::structs::push_impl_sections;
use super::{Ctx, code_block, page_header, push_docs, section};
use crate::analyzer::Handle;
use crate::error::Result;
use crate::render::syntax::{
	render_bounds, render_function_signature, render_generics, render_type, render_vis,
};

/// Render a free function or method page.
pub fn render_function(handle: &Handle, item: &Item, level: usize) -> Result<String> {
	let mut output = page_header(handle, level);
	if let ItemEnum::Function(function) = &item.inner {
		let name = item.name.as_deref().unwrap_or("?");
		output.push_str(&code_block(&render_function_signature(item, name, function)));
	}
	push_docs(&mut output, item);
	Ok(output)
}

/// Render a constant, static, or associated constant page.
pub fn render_value(handle: &Handle, item: &Item, level: usize) -> Result<String> {
	let mut output = page_header(handle, level);
	let name = item.name.as_deref().unwrap_or("?");
	let vis = render_vis(item);

	match &item.inner {
		ItemEnum::Constant { type_, const_ } => {
			output.push_str(&code_block(&format!(
				"{vis}const {name}: {} = {};",
				render_type(type_),
				const_.expr
			)));
		}
		ItemEnum::Static(inner) => {
			let mutable = if inner.is_mutable { "mut " } else { "" };
			output.push_str(&code_block(&format!(
				"{vis}static {mutable}{name}: {};",
				render_type(&inner.type_)
			)));
		}
		ItemEnum::AssocConst { type_, value } => {
			let assignment = value
				.as_ref()
				.map(|value| format!(" = {value}"))
				.unwrap_or_default();
			output.push_str(&code_block(&format!(
				"const {name}: {}{assignment};",
				render_type(type_)
			)));
		}
		_ => {}
	}

	push_docs(&mut output, item);
	Ok(output)
}

/// Render a type alias or associated type page.
pub fn render_alias(handle: &Handle, item: &Item, level: usize) -> Result<String> {
	let mut output = page_header(handle, level);
	let name = item.name.as_deref().unwrap_or("?");

	match &item.inner {
		ItemEnum::TypeAlias(inner) => {
			output.push_str(&code_block(&format!(
				"{}type {name}{} = {};",
				render_vis(item),
				render_generics(&inner.generics),
				render_type(&inner.type_)
			)));
		}
		ItemEnum::AssocType {
			bounds,
			type_,
			generics,
		} => {
			let bounds = if bounds.is_empty() {
				String::new()
			} else {
				format!(": {}", render_bounds(bounds))
			};
			let assignment = type_
				.as_ref()
				.map(|ty| format!(" = {}", render_type(ty)))
				.unwrap_or_default();
			output.push_str(&code_block(&format!(
				"type {name}{}{bounds}{assignment};",
				render_generics(generics)
			)));
		}
		_ => {}
	}

	push_docs(&mut output, item);
	Ok(output)
}

/// Render a declarative or procedural macro page.
pub fn render_macro(handle: &Handle, item: &Item, level: usize) -> Result<String> {
	let mut output = page_header(handle, level);
	let name = item.name.as_deref().unwrap_or("?");

	match &item.inner {
		ItemEnum::Macro(source) => {
			output.push_str(&code_block(source));
		}
		ItemEnum::ProcMacro(inner) => {
			let usage = match inner.kind {
				MacroKind::Bang => format!("{name}!(..)"),
				MacroKind::Attr => format!("#[{name}]"),
				MacroKind::Derive => format!("#[derive({name})]"),
			};
			output.push_str(&code_block(&usage));
		}
		_ => {}
	}

	push_docs(&mut output, item);
	Ok(output)
}

/// Render a primitive type page.
pub fn render_primitive(ctx: &Ctx, handle: &Handle, item: &Item, level: usize) -> Result<String> {
	let mut output = page_header(handle, level);
	push_docs(&mut output, item);
	if let ItemEnum::Primitive(inner) = &item.inner {
		push_impl_sections(ctx, &mut output, level, &inner.impls);
	}
	Ok(output)
}

/// Render an enum variant or field page, linking back to the container.
pub fn render_member(handle: &Handle, item: &Item, level: usize) -> Result<String> {
	let mut output = page_header(handle, level);

	match &item.inner {
		ItemEnum::StructField(ty) => {
			let name = item.name.as_deref().unwrap_or("?");
			output.push_str(&code_block(&format!(
				"{}{name}: {}",
				render_vis(item),
				render_type(ty)
			)));
		}
		ItemEnum::Variant(variant) => {
			let name = item.name.as_deref().unwrap_or("?");
			let shape = match &variant.kind {
				VariantKind::Plain => name.to_string(),
				VariantKind::Tuple(fields) => format!("{name}(/* {} fields */)", fields.len()),
				VariantKind::Struct { .. } => format!("{name} {{ .. }}"),
			};
			output.push_str(&code_block(&shape));
		}
		_ => {}
	}

	push_docs(&mut output, item);

	if let Some((parent, _)) = handle.path.rsplit_once('.') {
		output.push_str(&section(level, "Defined In"));
		output.push_str(&format!("- [`{parent}`](#{parent})\n\n"));
	}

	Ok(output)
}
