//! Enum pages: declaration, variant listing, and impl listings.

use rustdoc_types::{Item, ItemEnum, VariantKind};

use super::structs::push_impl_sections;
use super::{Ctx, brief, code_block, page_header, push_docs, section};
use crate::analyzer::Handle;
use crate::error::Result;
use crate::render::syntax::{render_generics, render_type, render_vis};

/// Render an enum page.
pub fn render_enum(ctx: &Ctx, handle: &Handle, item: &Item, level: usize) -> Result<String> {
	let mut output = page_header(handle, level);

	let ItemEnum::Enum(inner) = &item.inner else {
		push_docs(&mut output, item);
		return Ok(output);
	};

	let name = item.name.as_deref().unwrap_or("?");
	let mut decl = format!(
		"{}enum {name}{} {{\n",
		render_vis(item),
		render_generics(&inner.generics)
	);
	for variant_id in &inner.variants {
		let Some(variant_item) = ctx.item(*variant_id) else {
			continue;
		};
		if let Some(signature) = variant_signature(ctx, variant_item) {
			decl.push_str(&format!("    {signature},\n"));
		}
	}
	if inner.has_stripped_variants {
		decl.push_str("    // some variants omitted\n");
	}
	decl.push('}');

	output.push_str(&code_block(&decl));
	push_docs(&mut output, item);

	let mut bullets = Vec::new();
	for variant_id in &inner.variants {
		let Some(variant_item) = ctx.item(*variant_id) else {
			continue;
		};
		let Some(signature) = variant_signature(ctx, variant_item) else {
			continue;
		};
		let linked = ctx.link_to(variant_item.id, &format!("`{signature}`"));
		match brief(variant_item) {
			Some(line) => bullets.push(format!("- {linked}: {line}\n")),
			None => bullets.push(format!("- {linked}\n")),
		}
	}
	if !bullets.is_empty() {
		output.push_str(&section(level, "Variants"));
		for bullet in bullets {
			output.push_str(&bullet);
		}
		output.push('\n');
	}

	push_impl_sections(ctx, &mut output, level, &inner.impls);

	Ok(output)
}

/// Single-line shape of one variant, e.g. `Some(T)` or `Struct { .. }`.
fn variant_signature(ctx: &Ctx, item: &Item) -> Option<String> {
	let name = item.name.as_deref()?;
	let ItemEnum::Variant(variant) = &item.inner else {
		return None;
	};
	let shape = match &variant.kind {
		VariantKind::Plain => name.to_string(),
		VariantKind::Tuple(fields) => {
			let rendered: Vec<String> = fields
				.iter()
				.map(|field| {
					field
						.and_then(|id| ctx.item(id))
						.and_then(|field_item| match &field_item.inner {
							ItemEnum::StructField(ty) => Some(render_type(ty)),
							_ => None,
						})
						.unwrap_or_else(|| "_".to_string())
				})
				.collect();
			format!("{name}({})", rendered.join(", "))
		}
		VariantKind::Struct { .. } => format!("{name} {{ .. }}"),
	};
	match &variant.discriminant {
		Some(discriminant) => Some(format!("{shape} = {}", discriminant.expr)),
		None => Some(shape),
	}
}
