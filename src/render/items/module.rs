//! Module page: documentation plus member listings grouped by kind.

use rustdoc_types::{Item, ItemEnum};

use super::{Ctx, member_bullet, page_header, push_docs, render_object, section};
use crate::analyzer::{Handle, ObjectKind};
use crate::error::Result;
use crate::render::RenderOptions;

/// Render a module and the listing of its members.
///
/// Submodule pages are only inlined when `SHOW_SUBMODULES` is set; by
/// default each submodule appears as a link the viewer can follow.
pub fn render_module(ctx: &Ctx, handle: &Handle, item: &Item, level: usize) -> Result<String> {
	let ItemEnum::Module(module) = &item.inner else {
		return Ok(page_header(handle, level));
	};

	let mut output = page_header(handle, level);
	push_docs(&mut output, item);

	let mut modules = Vec::new();
	let mut structs = Vec::new();
	let mut enums = Vec::new();
	let mut traits = Vec::new();
	let mut functions = Vec::new();
	let mut values = Vec::new();
	let mut aliases = Vec::new();
	let mut macros = Vec::new();
	let mut reexports = Vec::new();
	let mut submodules = Vec::new();

	for child_id in &module.items {
		let Some(child) = ctx.item(*child_id) else {
			continue;
		};
		match &child.inner {
			ItemEnum::Module(_) => {
				if let Some(bullet) = member_bullet(ctx, child) {
					modules.push(bullet);
				}
				submodules.push(child);
			}
			ItemEnum::Struct(_) | ItemEnum::Union(_) => {
				if let Some(bullet) = member_bullet(ctx, child) {
					structs.push(bullet);
				}
			}
			ItemEnum::Enum(_) => {
				if let Some(bullet) = member_bullet(ctx, child) {
					enums.push(bullet);
				}
			}
			ItemEnum::Trait(_) | ItemEnum::TraitAlias(_) => {
				if let Some(bullet) = member_bullet(ctx, child) {
					traits.push(bullet);
				}
			}
			ItemEnum::Function(_) => {
				if let Some(bullet) = member_bullet(ctx, child) {
					functions.push(bullet);
				}
			}
			ItemEnum::Constant { .. } | ItemEnum::Static(_) => {
				if let Some(bullet) = member_bullet(ctx, child) {
					values.push(bullet);
				}
			}
			ItemEnum::TypeAlias(_) => {
				if let Some(bullet) = member_bullet(ctx, child) {
					aliases.push(bullet);
				}
			}
			ItemEnum::Macro(_) | ItemEnum::ProcMacro(_) => {
				if let Some(bullet) = member_bullet(ctx, child) {
					macros.push(bullet);
				}
			}
			ItemEnum::Use(use_item) => {
				let dotted = use_item.source.replace("::", ".");
				let target = match dotted
					.strip_prefix("crate.")
					.or_else(|| dotted.strip_prefix("self."))
				{
					Some(rest) => format!("{}.{rest}", handle.package),
					None => dotted.clone(),
				};
				reexports.push(format!("- [`{}`](#{target})\n", use_item.name));
			}
			_ => {}
		}
	}

	let sections: [(&str, &Vec<String>); 9] = [
		("Modules", &modules),
		("Structs", &structs),
		("Enums", &enums),
		("Traits", &traits),
		("Functions", &functions),
		("Constants", &values),
		("Type Aliases", &aliases),
		("Macros", &macros),
		("Re-exports", &reexports),
	];

	for (title, bullets) in sections {
		if bullets.is_empty() {
			continue;
		}
		output.push_str(&section(level, title));
		for bullet in bullets {
			output.push_str(bullet);
		}
		output.push('\n');
	}

	if ctx.options.contains(RenderOptions::SHOW_SUBMODULES) {
		for child in submodules {
			let Some(path) = ctx.dotted(child.id) else {
				continue;
			};
			let child_handle = Handle {
				package: handle.package.clone(),
				id: child.id,
				kind: ObjectKind::Module,
				path,
			};
			output.push_str(&render_object(ctx, &child_handle, child, level + 1)?);
		}
	}

	Ok(output)
}
