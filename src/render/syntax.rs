//! Compact signature rendering for rustdoc types.
//!
//! These helpers produce single-line, display-oriented signatures for the
//! Markdown templates. They deliberately elide where clauses and bound
//! details that would not fit a documentation page.

use rustdoc_types::{
	Function, GenericArg, GenericArgs, GenericBound, GenericParamDefKind, Generics, Item,
	TraitBoundModifier, Type, Visibility,
};

/// Render an item's visibility as a signature prefix.
pub fn render_vis(item: &Item) -> &'static str {
	match &item.visibility {
		Visibility::Public => "pub ",
		Visibility::Crate => "pub(crate) ",
		Visibility::Restricted { .. } => "pub(restricted) ",
		Visibility::Default => "",
	}
}

/// Render a generics parameter list, e.g. `<'a, T, const N: usize>`.
pub fn render_generics(generics: &Generics) -> String {
	let params: Vec<String> = generics
		.params
		.iter()
		.filter_map(|param| match &param.kind {
			GenericParamDefKind::Lifetime { .. } => Some(param.name.clone()),
			GenericParamDefKind::Type { is_synthetic, .. } => {
				if *is_synthetic {
					None
				} else {
					Some(param.name.clone())
				}
			}
			GenericParamDefKind::Const { type_, .. } => {
				Some(format!("const {}: {}", param.name, render_type(type_)))
			}
		})
		.collect();

	if params.is_empty() {
		String::new()
	} else {
		format!("<{}>", params.join(", "))
	}
}

/// Render a type for display.
pub fn render_type(ty: &Type) -> String {
	match ty {
		Type::ResolvedPath(path) => render_path(path),
		Type::DynTrait(dyn_trait) => {
			let mut parts: Vec<String> = dyn_trait
				.traits
				.iter()
				.map(|poly| render_path(&poly.trait_))
				.collect();
			if let Some(lifetime) = &dyn_trait.lifetime {
				parts.push(lifetime.clone());
			}
			format!("dyn {}", parts.join(" + "))
		}
		Type::Generic(name) => name.clone(),
		Type::Primitive(name) => name.clone(),
		Type::FunctionPointer(pointer) => {
			let inputs: Vec<String> = pointer
				.sig
				.inputs
				.iter()
				.map(|(_, input)| render_type(input))
				.collect();
			let output = pointer
				.sig
				.output
				.as_ref()
				.map(|output| format!(" -> {}", render_type(output)))
				.unwrap_or_default();
			format!("fn({}){}", inputs.join(", "), output)
		}
		Type::Tuple(types) => {
			let inner: Vec<String> = types.iter().map(render_type).collect();
			format!("({})", inner.join(", "))
		}
		Type::Slice(inner) => format!("[{}]", render_type(inner)),
		Type::Array { type_, len } => format!("[{}; {len}]", render_type(type_)),
		Type::ImplTrait(bounds) => format!("impl {}", render_bounds(bounds)),
		Type::Infer => "_".to_string(),
		Type::RawPointer { is_mutable, type_ } => {
			let qualifier = if *is_mutable { "mut" } else { "const" };
			format!("*{qualifier} {}", render_type(type_))
		}
		Type::BorrowedRef {
			lifetime,
			is_mutable,
			type_,
		} => {
			let lifetime = lifetime
				.as_ref()
				.map(|lifetime| format!("{lifetime} "))
				.unwrap_or_default();
			let mutable = if *is_mutable { "mut " } else { "" };
			format!("&{lifetime}{mutable}{}", render_type(type_))
		}
		Type::QualifiedPath {
			name,
			self_type,
			trait_,
			..
		} => match trait_ {
			Some(trait_path) => format!(
				"<{} as {}>::{name}",
				render_type(self_type),
				render_path(trait_path)
			),
			None => format!("{}::{name}", render_type(self_type)),
		},
		_ => "_".to_string(),
	}
}

/// Render a resolved path with its generic arguments, using the short name.
pub fn render_path(path: &rustdoc_types::Path) -> String {
	let name = short_name(&path.path);
	match path.args.as_deref() {
		Some(args) => format!("{name}{}", render_generic_args(args)),
		None => name.to_string(),
	}
}

/// Last segment of a `::`-separated path.
pub fn short_name(path: &str) -> &str {
	path.rsplit("::").next().unwrap_or(path)
}

/// Render generic arguments attached to a path.
fn render_generic_args(args: &GenericArgs) -> String {
	match args {
		GenericArgs::AngleBracketed { args, .. } => {
			if args.is_empty() {
				return String::new();
			}
			let rendered: Vec<String> = args
				.iter()
				.map(|arg| match arg {
					GenericArg::Lifetime(lifetime) => lifetime.clone(),
					GenericArg::Type(ty) => render_type(ty),
					GenericArg::Const(constant) => constant.expr.clone(),
					GenericArg::Infer => "_".to_string(),
				})
				.collect();
			format!("<{}>", rendered.join(", "))
		}
		GenericArgs::Parenthesized { inputs, output } => {
			let inputs: Vec<String> = inputs.iter().map(render_type).collect();
			let output = output
				.as_ref()
				.map(|output| format!(" -> {}", render_type(output)))
				.unwrap_or_default();
			format!("({}){}", inputs.join(", "), output)
		}
		_ => String::new(),
	}
}

/// Render a `+`-joined bound list.
pub fn render_bounds(bounds: &[GenericBound]) -> String {
	let rendered: Vec<String> = bounds
		.iter()
		.filter_map(|bound| match bound {
			GenericBound::TraitBound {
				trait_, modifier, ..
			} => {
				let prefix = match modifier {
					TraitBoundModifier::Maybe => "?",
					_ => "",
				};
				Some(format!("{prefix}{}", render_path(trait_)))
			}
			GenericBound::Outlives(lifetime) => Some(lifetime.clone()),
			_ => None,
		})
		.collect();
	rendered.join(" + ")
}

/// Render a function or method signature on a single line.
pub fn render_function_signature(item: &Item, name: &str, function: &Function) -> String {
	// const, async, and unsafe in declaration order.
	let mut prefixes = Vec::new();
	if function.header.is_const {
		prefixes.push("const ");
	}
	if function.header.is_async {
		prefixes.push("async ");
	}
	if function.header.is_unsafe {
		prefixes.push("unsafe ");
	}

	let inputs: Vec<String> = function
		.sig
		.inputs
		.iter()
		.map(|(param, ty)| render_parameter(param, ty))
		.collect();

	let output = function
		.sig
		.output
		.as_ref()
		.map(|output| format!(" -> {}", render_type(output)))
		.unwrap_or_default();

	format!(
		"{}{}fn {name}{}({}){}",
		render_vis(item),
		prefixes.concat(),
		render_generics(&function.generics),
		inputs.join(", "),
		output
	)
}

/// Render one function parameter, collapsing receiver forms to `self`.
fn render_parameter(param: &str, ty: &Type) -> String {
	if param == "self" {
		return match ty {
			Type::Generic(name) if name == "Self" => "self".to_string(),
			Type::BorrowedRef {
				lifetime,
				is_mutable,
				type_,
			} => {
				if matches!(type_.as_ref(), Type::Generic(name) if name == "Self") {
					let lifetime = lifetime
						.as_ref()
						.map(|lifetime| format!("{lifetime} "))
						.unwrap_or_default();
					let mutable = if *is_mutable { "mut " } else { "" };
					format!("&{lifetime}{mutable}self")
				} else {
					format!("self: {}", render_type(ty))
				}
			}
			_ => format!("self: {}", render_type(ty)),
		};
	}
	format!("{param}: {}", render_type(ty))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn primitive_and_compound_types() {
		assert_eq!(render_type(&Type::Primitive("u8".to_string())), "u8");
		assert_eq!(
			render_type(&Type::Slice(Box::new(Type::Primitive("u8".to_string())))),
			"[u8]"
		);
		assert_eq!(
			render_type(&Type::Tuple(vec![
				Type::Primitive("u8".to_string()),
				Type::Generic("T".to_string()),
			])),
			"(u8, T)"
		);
	}

	#[test]
	fn references_and_pointers() {
		assert_eq!(
			render_type(&Type::BorrowedRef {
				lifetime: Some("'a".to_string()),
				is_mutable: true,
				type_: Box::new(Type::Primitive("str".to_string())),
			}),
			"&'a mut str"
		);
		assert_eq!(
			render_type(&Type::RawPointer {
				is_mutable: false,
				type_: Box::new(Type::Primitive("u8".to_string())),
			}),
			"*const u8"
		);
	}

	#[test]
	fn short_name_takes_last_segment() {
		assert_eq!(short_name("std::vec::Vec"), "Vec");
		assert_eq!(short_name("Vec"), "Vec");
	}
}
