//! Trait pages: declaration plus required and provided members.

use rustdoc_types::{Item, ItemEnum};

use super::{Ctx, code_block, member_bullet, page_header, push_docs, section};
use crate::analyzer::Handle;
use crate::error::Result;
use crate::render::syntax::{
	render_bounds, render_function_signature, render_generics, render_vis,
};

/// Render a trait or trait alias page.
pub fn render_trait(ctx: &Ctx, handle: &Handle, item: &Item, level: usize) -> Result<String> {
	let mut output = page_header(handle, level);
	let name = item.name.as_deref().unwrap_or("?");

	match &item.inner {
		ItemEnum::Trait(inner) => {
			let mut qualifiers = String::new();
			if inner.is_unsafe {
				qualifiers.push_str("unsafe ");
			}
			if inner.is_auto {
				qualifiers.push_str("auto ");
			}
			let bounds = if inner.bounds.is_empty() {
				String::new()
			} else {
				format!(": {}", render_bounds(&inner.bounds))
			};
			let decl = format!(
				"{}{qualifiers}trait {name}{}{bounds} {{ .. }}",
				render_vis(item),
				render_generics(&inner.generics)
			);
			output.push_str(&code_block(&decl));
			push_docs(&mut output, item);

			let mut required = Vec::new();
			let mut provided = Vec::new();
			let mut assoc = Vec::new();
			for member_id in &inner.items {
				let Some(member) = ctx.item(*member_id) else {
					continue;
				};
				match &member.inner {
					ItemEnum::Function(function) => {
						let member_name = member.name.as_deref().unwrap_or("?");
						let signature = render_function_signature(member, member_name, function);
						let linked = ctx.link_to(member.id, &format!("`{signature}`"));
						if function.has_body {
							provided.push(format!("- {linked}\n"));
						} else {
							required.push(format!("- {linked}\n"));
						}
					}
					ItemEnum::AssocConst { .. } | ItemEnum::AssocType { .. } => {
						if let Some(bullet) = member_bullet(ctx, member) {
							assoc.push(bullet);
						}
					}
					_ => {}
				}
			}

			for (title, bullets) in [
				("Required Methods", required),
				("Provided Methods", provided),
				("Associated Items", assoc),
			] {
				if bullets.is_empty() {
					continue;
				}
				output.push_str(&section(level, title));
				for bullet in bullets {
					output.push_str(&bullet);
				}
				output.push('\n');
			}
		}
		ItemEnum::TraitAlias(inner) => {
			let decl = format!(
				"{}trait {name}{} = {};",
				render_vis(item),
				render_generics(&inner.generics),
				render_bounds(&inner.params)
			);
			output.push_str(&code_block(&decl));
			push_docs(&mut output, item);
		}
		_ => push_docs(&mut output, item),
	}

	Ok(output)
}
