//! Struct and union pages: declaration, fields, and impl listings.

use rustdoc_types::{Id, Item, ItemEnum, StructKind};

use super::{Ctx, brief, code_block, member_bullet, page_header, push_docs, section};
use crate::analyzer::Handle;
use crate::error::Result;
use crate::render::RenderOptions;
use crate::render::syntax::{
	render_function_signature, render_generics, render_type, render_vis,
};

/// Render a struct or union page.
pub fn render_struct(ctx: &Ctx, handle: &Handle, item: &Item, level: usize) -> Result<String> {
	let mut output = page_header(handle, level);

	let name = item.name.as_deref().unwrap_or("?");
	match &item.inner {
		ItemEnum::Struct(inner) => {
			output.push_str(&code_block(&struct_decl(ctx, item, name, inner)));
			push_docs(&mut output, item);
			if let StructKind::Plain { fields, .. } = &inner.kind {
				push_field_section(ctx, &mut output, level, fields);
			}
			push_impl_sections(ctx, &mut output, level, &inner.impls);
		}
		ItemEnum::Union(inner) => {
			let decl = format!(
				"{}union {name}{} {{ /* {} fields */ }}",
				render_vis(item),
				render_generics(&inner.generics),
				inner.fields.len()
			);
			output.push_str(&code_block(&decl));
			push_docs(&mut output, item);
			push_field_section(ctx, &mut output, level, &inner.fields);
			push_impl_sections(ctx, &mut output, level, &inner.impls);
		}
		_ => push_docs(&mut output, item),
	}

	Ok(output)
}

/// Build the struct declaration shown in the page's code block.
fn struct_decl(ctx: &Ctx, item: &Item, name: &str, inner: &rustdoc_types::Struct) -> String {
	let vis = render_vis(item);
	let generics = render_generics(&inner.generics);
	match &inner.kind {
		StructKind::Unit => format!("{vis}struct {name}{generics};"),
		StructKind::Tuple(fields) => {
			let rendered: Vec<String> = fields
				.iter()
				.map(|field| match field {
					Some(id) => match ctx.item(*id) {
						Some(field_item) => match &field_item.inner {
							ItemEnum::StructField(ty) => {
								format!("{}{}", render_vis(field_item), render_type(ty))
							}
							_ => "_".to_string(),
						},
						None => "_".to_string(),
					},
					// Stripped private tuple field.
					None => "_".to_string(),
				})
				.collect();
			format!("{vis}struct {name}{generics}({});", rendered.join(", "))
		}
		StructKind::Plain { fields, .. } => {
			let mut decl = format!("{vis}struct {name}{generics} {{\n");
			for field_id in fields {
				let Some(field_item) = ctx.item(*field_id) else {
					continue;
				};
				if let (Some(field_name), ItemEnum::StructField(ty)) =
					(field_item.name.as_deref(), &field_item.inner)
				{
					decl.push_str(&format!(
						"    {}{field_name}: {},\n",
						render_vis(field_item),
						render_type(ty)
					));
				}
			}
			decl.push('}');
			decl
		}
	}
}

/// Append the "Fields" section when the type has named fields.
fn push_field_section(ctx: &Ctx, output: &mut String, level: usize, fields: &[Id]) {
	let mut bullets = Vec::new();
	for field_id in fields {
		let Some(field_item) = ctx.item(*field_id) else {
			continue;
		};
		if let (Some(name), ItemEnum::StructField(ty)) =
			(field_item.name.as_deref(), &field_item.inner)
		{
			let entry = format!("`{name}: {}`", render_type(ty));
			let linked = ctx.link_to(field_item.id, &entry);
			match brief(field_item) {
				Some(line) => bullets.push(format!("- {linked}: {line}\n")),
				None => bullets.push(format!("- {linked}\n")),
			}
		}
	}
	if bullets.is_empty() {
		return;
	}
	output.push_str(&section(level, "Fields"));
	for bullet in bullets {
		output.push_str(&bullet);
	}
	output.push('\n');
}

/// Append "Implementations" and "Trait Implementations" sections.
pub(super) fn push_impl_sections(ctx: &Ctx, output: &mut String, level: usize, impls: &[Id]) {
	let mut methods = Vec::new();
	let mut assoc = Vec::new();
	let mut trait_impls = Vec::new();

	for impl_id in impls {
		let Some(impl_item) = ctx.item(*impl_id) else {
			continue;
		};
		let ItemEnum::Impl(block) = &impl_item.inner else {
			continue;
		};
		if block.is_synthetic {
			continue;
		}
		match &block.trait_ {
			Some(trait_path) => {
				trait_impls.push(format!(
					"- `impl {} for {}`\n",
					crate::render::syntax::render_path(trait_path),
					render_type(&block.for_)
				));
			}
			None => {
				for member_id in &block.items {
					let Some(member) = ctx.item(*member_id) else {
						continue;
					};
					match &member.inner {
						ItemEnum::Function(function) => {
							let name = member.name.as_deref().unwrap_or("?");
							let signature = render_function_signature(member, name, function);
							let linked = ctx.link_to(member.id, &format!("`{signature}`"));
							methods.push(format!("- {linked}\n"));
						}
						ItemEnum::AssocConst { .. } | ItemEnum::AssocType { .. } => {
							if let Some(bullet) = member_bullet(ctx, member) {
								assoc.push(bullet);
							}
						}
						_ => {}
					}
				}
			}
		}
	}

	if !methods.is_empty() {
		output.push_str(&section(level, "Implementations"));
		for bullet in methods {
			output.push_str(&bullet);
		}
		output.push('\n');
	}
	if !assoc.is_empty() {
		output.push_str(&section(level, "Associated Items"));
		for bullet in assoc {
			output.push_str(&bullet);
		}
		output.push('\n');
	}
	if ctx.options.contains(RenderOptions::SHOW_TRAIT_IMPLS) && !trait_impls.is_empty() {
		output.push_str(&section(level, "Trait Implementations"));
		for bullet in trait_impls {
			output.push_str(&bullet);
		}
		output.push('\n');
	}
}
